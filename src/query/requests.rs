//! Deal Request Filtering

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    dates::{DateBounds, DateRange},
    query::search::SearchText,
    requests::DealRequest,
};

/// Filters for the deal request log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestFilter {
    /// Free-text search over username, email, contact, category and notes
    pub search: SearchText,

    /// Exact category, as submitted (e.g. "Dining")
    pub category: Option<String>,

    /// Submission date range
    pub date_range: DateRange,
}

impl RequestFilter {
    /// Returns true if no predicate is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the request passes every active predicate, with date presets anchored
    /// at `today`.
    pub fn matches(&self, request: &DealRequest, today: Date) -> bool {
        self.matches_within(request, &self.date_range.bounds(today))
    }

    fn matches_within(&self, request: &DealRequest, bounds: &DateBounds) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| request.category == category)
            && bounds.contains(request.date)
            && self.search.matches_any(request.search_fields())
    }
}

/// Filter requests, anchoring date presets at today's date.
pub fn filter_requests<'r>(
    requests: impl IntoIterator<Item = &'r DealRequest>,
    filter: &RequestFilter,
) -> Vec<&'r DealRequest> {
    filter_requests_on(requests, filter, crate::dates::today())
}

/// Filter requests, anchoring date presets at `today`.
///
/// The result keeps the input order.
pub fn filter_requests_on<'r>(
    requests: impl IntoIterator<Item = &'r DealRequest>,
    filter: &RequestFilter,
    today: Date,
) -> Vec<&'r DealRequest> {
    let bounds = filter.date_range.bounds(today);

    requests
        .into_iter()
        .filter(|request| filter.matches_within(request, &bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::{dates::DateRangePreset, test_support::request};

    use super::*;

    const TODAY: Date = date(2025, 12, 28);

    fn ids(requests: &[&DealRequest]) -> Vec<u32> {
        requests.iter().map(|request| request.id).collect()
    }

    #[test]
    fn last_seven_days_includes_boundary() {
        let requests = vec![
            request(1, "Dining", date(2025, 12, 21)),
            request(2, "Dining", date(2025, 12, 20)),
            request(3, "Cafe", date(2025, 12, 28)),
        ];
        let filter = RequestFilter {
            date_range: DateRange::preset(DateRangePreset::Last7Days),
            ..RequestFilter::default()
        };

        assert_eq!(ids(&filter_requests_on(&requests, &filter, TODAY)), [1, 3]);
    }

    #[test]
    fn this_year_starts_january_first() {
        let requests = vec![
            request(1, "Bar", date(2024, 12, 31)),
            request(2, "Bar", date(2025, 1, 1)),
        ];
        let filter = RequestFilter {
            date_range: DateRange::preset(DateRangePreset::ThisYear),
            ..RequestFilter::default()
        };

        assert_eq!(ids(&filter_requests_on(&requests, &filter, TODAY)), [2]);
    }

    #[test]
    fn category_match_is_exact() {
        let requests = vec![
            request(1, "Dining", date(2025, 12, 1)),
            request(2, "dining", date(2025, 12, 1)),
            request(3, "Cafe", date(2025, 12, 1)),
        ];
        let filter = RequestFilter {
            category: Some("Dining".to_string()),
            ..RequestFilter::default()
        };

        assert_eq!(ids(&filter_requests_on(&requests, &filter, TODAY)), [1]);
    }

    #[test]
    fn search_covers_contact_fields_and_notes() {
        let mut with_notes = request(1, "Cafe", date(2025, 12, 1));
        with_notes.notes = "Looking for a vegan brunch".to_string();

        let requests = vec![with_notes, request(2, "Bar", date(2025, 12, 1))];

        let by_notes = RequestFilter {
            search: SearchText::new("VEGAN"),
            ..RequestFilter::default()
        };
        let by_email = RequestFilter {
            search: SearchText::new("user2@"),
            ..RequestFilter::default()
        };
        let by_contact = RequestFilter {
            search: SearchText::new("900002"),
            ..RequestFilter::default()
        };

        assert_eq!(ids(&filter_requests_on(&requests, &by_notes, TODAY)), [1]);
        assert_eq!(ids(&filter_requests_on(&requests, &by_email, TODAY)), [2]);
        assert_eq!(ids(&filter_requests_on(&requests, &by_contact, TODAY)), [2]);
    }

    #[test]
    fn all_preset_keeps_history() {
        let requests = vec![
            request(1, "Bar", date(2019, 6, 1)),
            request(2, "Bar", date(2025, 12, 27)),
        ];

        let result = filter_requests_on(&requests, &RequestFilter::default(), TODAY);

        assert_eq!(ids(&result), [1, 2]);
    }
}
