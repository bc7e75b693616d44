use super::*;

// =============================================================================
// defaults; from_env is exercised without setting vars to avoid mutating
// shared process env in parallel tests.
// =============================================================================

#[test]
fn default_points_at_local_backend() {
    let config = GateConfig::default();
    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn default_paths() {
    let config = GateConfig::default();
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.landing_path, "/");
    assert_eq!(config.app_title, "Admin Console");
}

#[test]
fn from_env_without_vars_equals_default() {
    // None of the keys are set in the test environment.
    let config = GateConfig::from_env();
    let default = GateConfig::default();
    assert_eq!(config.login_path, default.login_path);
    assert_eq!(config.landing_path, default.landing_path);
}
