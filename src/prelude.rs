//! Dealdesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, CatalogStats},
    coupons::{Coupon, CouponError, CouponStatus, CouponWindow, generate_coupons},
    dates::{DateBounds, DateRange, DateRangePreset, compute_date_range_bounds},
    deals::{Deal, DealCategory, DealKey, DealPricing, DealStatus, NewDeal, PromoType},
    fixtures::{Fixture, FixtureError},
    parsing::{ParseError, parse_selector},
    query::{
        CouponFilter, DealFilter, Page, RequestFilter, SearchText, StatusFilter, filter_coupons,
        filter_deals, filter_requests, paginate,
    },
    render::RenderError,
    requests::DealRequest,
    view::{CouponsView, DealsView, RequestsView, ViewConfig, ViewError},
};
