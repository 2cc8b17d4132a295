//! Coupon List View

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    coupons::{Coupon, CouponStatus},
    dates::DateBounds,
    query::{CouponFilter, Page, SearchText, filter_coupons},
    view::{Paging, ViewConfig},
};

/// Filter and paging state of a deal's coupon list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponsView {
    filter: CouponFilter,
    paging: Paging,
}

impl ViewConfig for CouponsView {}

impl CouponsView {
    /// A view with the given filter, on the first page.
    #[must_use]
    pub fn with_filter(filter: CouponFilter) -> Self {
        Self {
            filter,
            paging: Paging::default(),
        }
    }

    /// Active filters
    pub fn filter(&self) -> &CouponFilter {
        &self.filter
    }

    /// Paging state
    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Sets the status selection.
    pub fn set_status(&mut self, status: Option<CouponStatus>) {
        self.filter.status = status;
        self.paging.first_page();
    }

    /// Sets the customer name search.
    pub fn set_customer(&mut self, customer: impl Into<SearchText>) {
        self.filter.customer = customer.into();
        self.paging.first_page();
    }

    /// Sets the purchase date range.
    pub fn set_purchased(&mut self, purchased: DateBounds) {
        self.filter.purchased = purchased;
        self.paging.first_page();
    }

    /// Sets the page size.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.paging.page_size = page_size;
        self.paging.first_page();
    }

    /// Moves to a 1-based page. Out of range pages are clamped when queried.
    pub fn set_page(&mut self, page: usize) {
        self.paging.page = page;
    }

    /// Clears every filter and returns to the first page.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Filter and paginate `coupons`.
    pub fn query<'c>(&self, coupons: impl IntoIterator<Item = &'c Coupon>) -> Page<&'c Coupon> {
        let matched = filter_coupons(coupons, &self.filter);
        let page = self.paging.apply(&matched);

        debug!(
            matched = page.total_count(),
            page = page.page(),
            "queried coupons"
        );

        page
    }
}
