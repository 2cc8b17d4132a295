//! Deals Screen View

use std::num::NonZeroUsize;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    dates::{DateRange, today},
    deals::{Deal, DealCategory, PromoType},
    query::{DealFilter, Page, SearchText, StatusFilter, filter_deals_on},
    view::{Paging, ViewConfig},
};

/// Filter and paging state of the deals catalog screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealsView {
    filter: DealFilter,
    paging: Paging,
}

impl ViewConfig for DealsView {}

impl DealsView {
    /// A view with the given filter, on the first page.
    #[must_use]
    pub fn with_filter(filter: DealFilter) -> Self {
        Self {
            filter,
            paging: Paging::default(),
        }
    }

    /// Active filters
    pub fn filter(&self) -> &DealFilter {
        &self.filter
    }

    /// Paging state
    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: impl Into<SearchText>) {
        self.filter.search = search.into();
        self.paging.first_page();
    }

    /// Sets the category selection.
    pub fn set_category(&mut self, category: Option<DealCategory>) {
        self.filter.category = category;
        self.paging.first_page();
    }

    /// Sets the promotion type selection.
    pub fn set_promo_type(&mut self, promo_type: Option<PromoType>) {
        self.filter.promo_type = promo_type;
        self.paging.first_page();
    }

    /// Sets the status selection.
    pub fn set_status(&mut self, status: Option<StatusFilter>) {
        self.filter.status = status;
        self.paging.first_page();
    }

    /// Restricts the view to deals scheduled as deal of the day.
    pub fn set_deal_of_day_only(&mut self, only: bool) {
        self.filter.deal_of_day_only = only;
        self.paging.first_page();
    }

    /// Sets the deal of the day date range.
    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.filter.date_range = date_range;
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

    /// Filter and paginate `deals` with date presets anchored at today.
    pub fn query<'d, 'a: 'd>(
        &self,
        deals: impl IntoIterator<Item = &'d Deal<'a>>,
    ) -> Page<&'d Deal<'a>> {
        self.query_on(deals, today())
    }

    /// Filter and paginate `deals` with date presets anchored at `today`.
    pub fn query_on<'d, 'a: 'd>(
        &self,
        deals: impl IntoIterator<Item = &'d Deal<'a>>,
        today: Date,
    ) -> Page<&'d Deal<'a>> {
        let matched = filter_deals_on(deals, &self.filter, today);
        let page = self.paging.apply(&matched);

        debug!(
            matched = page.total_count(),
            page = page.page(),
            total_pages = page.total_pages(),
            "queried deals"
        );

        page
    }
}
