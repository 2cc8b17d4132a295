//! Deal Request Fixtures

use serde::Deserialize;

use crate::requests::DealRequest;

/// Wrapper for deal requests in YAML
#[derive(Debug, Deserialize)]
pub struct RequestsFixture {
    /// Requests in submission order
    pub requests: Vec<DealRequest>,
}
