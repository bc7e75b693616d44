//! Product catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::gate::RequestGate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Available,
    LowStock,
    OutOfStock,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

/// # Errors
/// Classified by the gate.
pub async fn list(gate: &RequestGate) -> Result<Vec<Product>, GateError> {
    gate.get("/products").await
}

/// # Errors
/// Classified by the gate.
pub async fn create(gate: &RequestGate, product: &NewProduct) -> Result<Product, GateError> {
    gate.post("/products", product).await
}

/// # Errors
/// Classified by the gate.
pub async fn update(gate: &RequestGate, id: u64, patch: &ProductPatch) -> Result<Product, GateError> {
    gate.patch(&format!("/products/{id}"), patch).await
}

/// # Errors
/// Classified by the gate.
pub async fn delete(gate: &RequestGate, id: u64) -> Result<(), GateError> {
    gate.delete(&format!("/products/{id}")).await
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
