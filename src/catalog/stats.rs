//! Catalog Statistics

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::{Catalog, CatalogError},
    deals::DealStatus,
};

/// Dashboard totals over every deal in the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats<'a> {
    /// Deals with status `Active`
    pub active: usize,

    /// Deals with status `Draft`
    pub draft: usize,

    /// Deals with status `Expired`
    pub expired: usize,

    /// Deals with status `Deactivated`
    pub deactivated: usize,

    /// Deals with a deal of the day date
    pub scheduled: usize,

    /// Coupons sold across all deals
    pub sold: u64,

    /// Revenue across all deals; `None` for an empty catalog
    pub revenue: Option<Money<'a, Currency>>,
}

impl<'a> Catalog<'a> {
    /// Totals for the dashboard header.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Money`] if revenue cannot be summed.
    pub fn stats(&self) -> Result<CatalogStats<'a>, CatalogError> {
        let mut stats = CatalogStats {
            active: 0,
            draft: 0,
            expired: 0,
            deactivated: 0,
            scheduled: 0,
            sold: 0,
            revenue: None,
        };

        for deal in self.deals() {
            match deal.status() {
                DealStatus::Active => stats.active += 1,
                DealStatus::Draft => stats.draft += 1,
                DealStatus::Expired => stats.expired += 1,
                DealStatus::Deactivated => stats.deactivated += 1,
            }

            if deal.is_deal_of_day() {
                stats.scheduled += 1;
            }

            stats.sold += u64::from(deal.sold());

            stats.revenue = Some(match stats.revenue {
                Some(total) => total.add(deal.revenue())?,
                None => deal.revenue(),
            });
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::{
        deals::{Deal, DealCategory, NewDeal, PromoType},
        test_support::deal,
    };

    use super::*;

    fn priced(id: &str, status: DealStatus, sold: u32, revenue_minor: i64) -> Deal<'static> {
        Deal::new(NewDeal {
            id: id.to_string(),
            title: id.to_string(),
            category: DealCategory::Bar,
            promo_type: PromoType::Discount,
            status,
            revenue: Money::from_minor(revenue_minor, GBP),
            created: date(2025, 1, 1),
            expires: date(2025, 6, 1),
        })
        .with_sold(sold)
    }

    #[test]
    fn stats_count_statuses_and_totals() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.insert_deal(priced("a", DealStatus::Active, 10, 5_000))?;
        catalog.insert_deal(priced("b", DealStatus::Active, 3, 1_250))?;
        catalog.insert_deal(
            priced("c", DealStatus::Expired, 7, 700).with_deal_of_day(Some(date(2025, 3, 1))),
        )?;
        catalog.insert_deal(deal("d", DealStatus::Draft, DealCategory::Cafe))?;

        let stats = catalog.stats()?;

        assert_eq!(stats.active, 2);
        assert_eq!(stats.draft, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.deactivated, 0);
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.sold, 20);
        assert_eq!(stats.revenue, Some(Money::from_minor(6_950, GBP)));

        Ok(())
    }

    #[test]
    fn empty_catalog_has_no_revenue() -> TestResult {
        let stats = Catalog::new().stats()?;

        assert_eq!(stats.revenue, None);
        assert_eq!(stats.sold, 0);

        Ok(())
    }

    #[test]
    fn stats_follow_deactivation() -> TestResult {
        let mut catalog = Catalog::new();
        catalog.insert_deal(priced("a", DealStatus::Active, 1, 100))?;

        catalog.deactivate("a")?;
        let stats = catalog.stats()?;

        assert_eq!(stats.active, 0);
        assert_eq!(stats.deactivated, 1);

        Ok(())
    }
}
