//! Deal Requests
//!
//! Customer-submitted deal inquiries. Requests are read-only reference data.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A customer request for a new deal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRequest {
    /// Request identifier
    pub id: u32,

    /// Date the request was submitted
    pub date: Date,

    /// Customer username
    pub username: String,

    /// Customer email
    pub email: String,

    /// Customer contact number
    pub contact: String,

    /// Requested category, free-form (e.g. "Dining")
    pub category: String,

    /// Customer notes
    #[serde(default)]
    pub notes: String,
}

impl DealRequest {
    /// Fields covered by free-text search, in match order.
    pub fn search_fields(&self) -> [&str; 5] {
        [
            &self.username,
            &self.email,
            &self.contact,
            &self.category,
            &self.notes,
        ]
    }
}
