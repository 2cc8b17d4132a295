//! Coupon Filtering

use serde::{Deserialize, Serialize};

use crate::{
    coupons::{Coupon, CouponStatus},
    dates::DateBounds,
    query::search::SearchText,
};

/// Filters for a deal's coupon list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponFilter {
    /// Redemption status selection
    pub status: Option<CouponStatus>,

    /// Customer name search
    pub customer: SearchText,

    /// Purchase date range; only applied when both ends are set
    pub purchased: DateBounds,
}

impl CouponFilter {
    /// Returns true if no predicate is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the coupon passes every active predicate.
    pub fn matches(&self, coupon: &Coupon) -> bool {
        self.status.is_none_or(|status| coupon.status() == status)
            && self.customer.matches_any([coupon.customer()])
            && self.purchased.contains(coupon.purchased())
    }
}

/// Filter coupons, keeping the input order.
pub fn filter_coupons<'c>(
    coupons: impl IntoIterator<Item = &'c Coupon>,
    filter: &CouponFilter,
) -> Vec<&'c Coupon> {
    coupons
        .into_iter()
        .filter(|coupon| filter.matches(coupon))
        .collect()
}
