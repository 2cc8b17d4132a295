//! Deal Filtering

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    dates::{DateBounds, DateRange},
    deals::{Deal, DealCategory, DealStatus, PromoType},
    parsing::ParseError,
    query::search::SearchText,
};

/// Status selector value meaning "scheduled as deal of the day".
pub const DEAL_OF_THE_DAY_SENTINEL: &str = "dealoftheday";

/// Status dropdown selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// Deals with exactly this status
    Status(DealStatus),

    /// Deals with a deal of the day date, whatever their status
    DealOfTheDay,
}

impl StatusFilter {
    /// Returns true if the deal passes this status selection.
    pub fn matches(self, deal: &Deal<'_>) -> bool {
        match self {
            Self::Status(status) => deal.status() == status,
            Self::DealOfTheDay => deal.is_deal_of_day(),
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Status(status) => Display::fmt(status, f),
            Self::DealOfTheDay => f.write_str(DEAL_OF_THE_DAY_SENTINEL),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(DEAL_OF_THE_DAY_SENTINEL) {
            return Ok(Self::DealOfTheDay);
        }

        s.parse().map(Self::Status)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl From<DealStatus> for StatusFilter {
    fn from(status: DealStatus) -> Self {
        Self::Status(status)
    }
}

/// Filters for the deals catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealFilter {
    /// Free-text search over title, category and promotion type
    pub search: SearchText,

    /// Category selection
    pub category: Option<DealCategory>,

    /// Promotion type selection
    pub promo_type: Option<PromoType>,

    /// Status selection
    pub status: Option<StatusFilter>,

    /// Only deals scheduled as deal of the day
    pub deal_of_day_only: bool,

    /// Deal of the day date range
    pub date_range: DateRange,
}

impl DealFilter {
    /// Returns true if no predicate is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the deal passes every active predicate, with date presets anchored
    /// at `today`.
    pub fn matches(&self, deal: &Deal<'_>, today: Date) -> bool {
        self.matches_within(deal, &self.date_range.bounds(today))
    }

    /// Predicates run in a fixed order and stop at the first failure.
    fn matches_within(&self, deal: &Deal<'_>, bounds: &DateBounds) -> bool {
        (!self.deal_of_day_only || deal.is_deal_of_day())
            && self.status.is_none_or(|status| status.matches(deal))
            && self
                .category
                .is_none_or(|category| deal.category() == category)
            && self
                .promo_type
                .is_none_or(|promo_type| deal.promo_type() == promo_type)
            && self.search.matches_any([
                deal.title(),
                deal.category().as_str(),
                deal.promo_type().as_str(),
            ])
            && (!bounds.is_bounded() || deal.deal_of_day().is_some_and(|day| bounds.contains(day)))
    }
}

/// Filter deals, anchoring date presets at today's date.
pub fn filter_deals<'d, 'a: 'd>(
    deals: impl IntoIterator<Item = &'d Deal<'a>>,
    filter: &DealFilter,
) -> Vec<&'d Deal<'a>> {
    filter_deals_on(deals, filter, crate::dates::today())
}

/// Filter deals, anchoring date presets at `today`.
///
/// The result keeps the input order.
pub fn filter_deals_on<'d, 'a: 'd>(
    deals: impl IntoIterator<Item = &'d Deal<'a>>,
    filter: &DealFilter,
    today: Date,
) -> Vec<&'d Deal<'a>> {
    let bounds = filter.date_range.bounds(today);

    deals
        .into_iter()
        .filter(|deal| filter.matches_within(deal, &bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::{
        dates::DateRangePreset,
        test_support::{deal, titled_deal},
    };

    use super::*;

    const TODAY: Date = date(2025, 12, 28);

    fn ids<'d>(deals: &[&'d Deal<'_>]) -> Vec<&'d str> {
        deals.iter().map(|deal| deal.id()).collect()
    }

    fn sample() -> Vec<Deal<'static>> {
        vec![
            deal("d1", DealStatus::Active, DealCategory::Bar),
            deal("d2", DealStatus::Draft, DealCategory::Cafe),
            deal("d3", DealStatus::Active, DealCategory::Dining),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let deals = sample();

        let result = filter_deals_on(&deals, &DealFilter::default(), TODAY);

        assert_eq!(ids(&result), ["d1", "d2", "d3"]);
    }

    #[test]
    fn status_filter_is_case_insensitive_and_stable() -> Result<(), ParseError> {
        let deals = sample();
        let filter = DealFilter {
            status: Some("active".parse()?),
            ..DealFilter::default()
        };

        let result = filter_deals_on(&deals, &filter, TODAY);

        assert_eq!(ids(&result), ["d1", "d3"]);

        Ok(())
    }

    #[test]
    fn deal_of_the_day_sentinel_ignores_status() -> Result<(), ParseError> {
        let deals = vec![
            deal("d1", DealStatus::Active, DealCategory::Bar),
            deal("d2", DealStatus::Expired, DealCategory::Cafe)
                .with_deal_of_day(Some(date(2025, 12, 30))),
            deal("d3", DealStatus::Draft, DealCategory::Dining)
                .with_deal_of_day(Some(date(2026, 1, 2))),
        ];
        let filter = DealFilter {
            status: Some("DealOfTheDay".parse()?),
            ..DealFilter::default()
        };

        let result = filter_deals_on(&deals, &filter, TODAY);

        assert_eq!(ids(&result), ["d2", "d3"]);

        Ok(())
    }

    #[test]
    fn deal_of_day_only_flag_requires_schedule() {
        let deals = vec![
            deal("d1", DealStatus::Active, DealCategory::Bar)
                .with_deal_of_day(Some(date(2025, 12, 29))),
            deal("d2", DealStatus::Active, DealCategory::Bar),
        ];
        let filter = DealFilter {
            deal_of_day_only: true,
            ..DealFilter::default()
        };

        assert_eq!(ids(&filter_deals_on(&deals, &filter, TODAY)), ["d1"]);
    }

    #[test]
    fn category_and_promo_type_are_conjunctive() {
        let deals = vec![
            titled_deal("d1", "Pints", DealCategory::Bar, PromoType::Bogo),
            titled_deal("d2", "Cocktails", DealCategory::Bar, PromoType::Flash),
            titled_deal("d3", "Brunch", DealCategory::Dining, PromoType::Bogo),
        ];
        let filter = DealFilter {
            category: Some(DealCategory::Bar),
            promo_type: Some(PromoType::Bogo),
            ..DealFilter::default()
        };

        assert_eq!(ids(&filter_deals_on(&deals, &filter, TODAY)), ["d1"]);
    }

    #[test]
    fn search_covers_title_category_and_promo_type() {
        let deals = vec![
            titled_deal("d1", "Happy Hour", DealCategory::Bar, PromoType::Discount),
            titled_deal("d2", "Two for One", DealCategory::Cafe, PromoType::Bogo),
            titled_deal("d3", "Set Menu", DealCategory::Dining, PromoType::Bundle),
        ];

        let by_title = DealFilter {
            search: SearchText::new("HAPPY"),
            ..DealFilter::default()
        };
        let by_category = DealFilter {
            search: SearchText::new("caf"),
            ..DealFilter::default()
        };
        let by_promo = DealFilter {
            search: SearchText::new("bund"),
            ..DealFilter::default()
        };

        assert_eq!(ids(&filter_deals_on(&deals, &by_title, TODAY)), ["d1"]);
        assert_eq!(ids(&filter_deals_on(&deals, &by_category, TODAY)), ["d2"]);
        assert_eq!(ids(&filter_deals_on(&deals, &by_promo, TODAY)), ["d3"]);
    }

    #[test]
    fn date_range_selects_scheduled_days() {
        let deals = vec![
            deal("d1", DealStatus::Active, DealCategory::Bar)
                .with_deal_of_day(Some(date(2025, 12, 28))),
            deal("d2", DealStatus::Active, DealCategory::Bar)
                .with_deal_of_day(Some(date(2026, 1, 4))),
            deal("d3", DealStatus::Active, DealCategory::Bar)
                .with_deal_of_day(Some(date(2026, 1, 5))),
            deal("d4", DealStatus::Active, DealCategory::Bar),
        ];
        let filter = DealFilter {
            date_range: DateRange::preset(DateRangePreset::Next7Days),
            ..DealFilter::default()
        };

        assert_eq!(ids(&filter_deals_on(&deals, &filter, TODAY)), ["d1", "d2"]);
    }

    #[test]
    fn open_custom_range_does_not_filter() {
        let deals = sample();
        let filter = DealFilter {
            date_range: DateRange::custom(date(2025, 12, 1), None),
            ..DealFilter::default()
        };

        assert_eq!(filter_deals_on(&deals, &filter, TODAY).len(), 3);
    }

    #[test]
    fn every_result_satisfies_the_filter() {
        let deals = vec![
            titled_deal("d1", "Latte Deal", DealCategory::Cafe, PromoType::Discount),
            titled_deal("d2", "Latte Bundle", DealCategory::Cafe, PromoType::Bundle),
            titled_deal("d3", "Wine Night", DealCategory::Bar, PromoType::Discount),
        ];
        let filter = DealFilter {
            search: SearchText::new("latte"),
            promo_type: Some(PromoType::Discount),
            ..DealFilter::default()
        };

        let result = filter_deals_on(&deals, &filter, TODAY);

        assert!(!result.is_empty());
        assert!(result.iter().all(|deal| filter.matches(deal, TODAY)));
        assert!(
            result
                .iter()
                .all(|found| deals.iter().any(|deal| std::ptr::eq(deal, *found)))
        );
    }

    #[test]
    fn status_filter_serializes_as_name() -> Result<(), serde_norway::Error> {
        let yaml = serde_norway::to_string(&StatusFilter::DealOfTheDay)?;
        assert_eq!(yaml.trim(), "dealoftheday");

        let parsed: StatusFilter = serde_norway::from_str("Expired")?;
        assert_eq!(parsed, StatusFilter::Status(DealStatus::Expired));

        Ok(())
    }

    #[test]
    fn default_filter_is_empty() {
        assert!(DealFilter::default().is_empty());
        assert!(
            !DealFilter {
                deal_of_day_only: true,
                ..DealFilter::default()
            }
            .is_empty()
        );
    }
}
