//! Order endpoints.
//!
//! Orders use camelCase wire keys and full-document `PUT` updates, matching
//! the backend's contract.

use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::gate::RequestGate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: u64,
    pub user_name: String,
    pub order_date: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Creation payload (id is server-assigned).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: u64,
    pub user_name: String,
    pub order_date: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// # Errors
/// Classified by the gate.
pub async fn list(gate: &RequestGate) -> Result<Vec<Order>, GateError> {
    gate.get("/orders").await
}

/// # Errors
/// Classified by the gate.
pub async fn create(gate: &RequestGate, order: &NewOrder) -> Result<Order, GateError> {
    gate.post("/orders", order).await
}

/// # Errors
/// Classified by the gate.
pub async fn update(gate: &RequestGate, id: &str, order: &Order) -> Result<Order, GateError> {
    gate.put(&format!("/orders/{id}"), order).await
}

/// # Errors
/// Classified by the gate.
pub async fn delete(gate: &RequestGate, id: &str) -> Result<(), GateError> {
    gate.delete(&format!("/orders/{id}")).await
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
