//! Deal Request Log View

use std::num::NonZeroUsize;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    dates::{DateRange, today},
    query::{Page, RequestFilter, SearchText, filter_requests_on},
    requests::DealRequest,
    view::{Paging, ViewConfig},
};

/// Filter and paging state of the requested deals screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestsView {
    filter: RequestFilter,
    paging: Paging,
}

impl ViewConfig for RequestsView {}

impl RequestsView {
    /// A view with the given filter, on the first page.
    #[must_use]
    pub fn with_filter(filter: RequestFilter) -> Self {
        Self {
            filter,
            paging: Paging::default(),
        }
    }

    /// Active filters
    pub fn filter(&self) -> &RequestFilter {
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
    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.paging.first_page();
    }

    /// Sets the submission date range.
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

    /// Filter and paginate `requests` with date presets anchored at today.
    pub fn query<'r>(
        &self,
        requests: impl IntoIterator<Item = &'r DealRequest>,
    ) -> Page<&'r DealRequest> {
        self.query_on(requests, today())
    }

    /// Filter and paginate `requests` with date presets anchored at `today`.
    pub fn query_on<'r>(
        &self,
        requests: impl IntoIterator<Item = &'r DealRequest>,
        today: Date,
    ) -> Page<&'r DealRequest> {
        let matched = filter_requests_on(requests, &self.filter, today);
        let page = self.paging.apply(&matched);

        debug!(
            matched = page.total_count(),
            page = page.page(),
            "queried deal requests"
        );

        page
    }
}
