//! Dealdesk
//!
//! Dealdesk is the query and scheduling core of a merchant deals dashboard: typed deal, coupon
//! and request records, a catalog query engine (filtering, pagination and date-range presets),
//! per-screen view configurations and an in-memory catalog store seeded from YAML fixtures.

pub mod catalog;
pub mod coupons;
pub mod dates;
pub mod deals;
pub mod fixtures;
pub mod parsing;
pub mod prelude;
pub mod query;
pub mod render;
pub mod requests;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
