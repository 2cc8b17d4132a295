//! Catalog Query Engine
//!
//! Pure filtering and pagination over in-memory records. Filters are conjunctive, keep the
//! input order and never fail: no match is simply an empty result.

pub mod coupons;
pub mod deals;
pub mod pagination;
pub mod requests;
pub mod search;

pub use coupons::{CouponFilter, filter_coupons};
pub use deals::{DEAL_OF_THE_DAY_SENTINEL, DealFilter, StatusFilter, filter_deals, filter_deals_on};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, clamp_page, paginate, total_pages};
pub use requests::{RequestFilter, filter_requests, filter_requests_on};
pub use search::SearchText;
