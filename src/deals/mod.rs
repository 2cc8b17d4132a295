//! Deals

use decimal_percentage::Percentage;
use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

use crate::coupons::{Coupon, CouponError, CouponStatus};

mod kinds;

pub use kinds::{DealCategory, DealStatus, PromoType};

new_key_type! {
    /// Deal Key
    pub struct DealKey;
}

/// Optional pricing details shown on the deal card
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DealPricing<'a> {
    /// Price before the promotion
    pub original_price: Option<Money<'a, Currency>>,

    /// Price the customer pays
    pub deal_price: Option<Money<'a, Currency>>,

    /// Advertised discount
    pub discount: Option<Percentage>,
}

impl<'a> DealPricing<'a> {
    /// The price a customer pays for the deal.
    ///
    /// An explicit deal price wins; otherwise the discount is applied to the original price,
    /// rounded to the nearest minor unit.
    #[must_use]
    pub fn effective_price(&self) -> Option<Money<'a, Currency>> {
        if let Some(price) = self.deal_price {
            return Some(price);
        }

        let original = self.original_price?;
        let Some(discount) = self.discount else {
            return Some(original);
        };

        // `Percentage` is a fraction, so multiplying by one yields the fraction as a `Decimal`.
        let fraction = discount * Decimal::ONE;
        let discount_minor = fraction
            .checked_mul(Decimal::from(original.to_minor_units()))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()?;

        Some(Money::from_minor(
            original.to_minor_units().saturating_sub(discount_minor),
            original.currency(),
        ))
    }
}

/// Required fields for a new deal
#[derive(Debug, Clone)]
pub struct NewDeal<'a> {
    /// Unique deal identifier
    pub id: String,

    /// Deal title
    pub title: String,

    /// Venue category
    pub category: DealCategory,

    /// Promotion mechanic
    pub promo_type: PromoType,

    /// Initial lifecycle status
    pub status: DealStatus,

    /// Revenue taken so far
    pub revenue: Money<'a, Currency>,

    /// Date the deal was created
    pub created: Date,

    /// Date the deal expires
    pub expires: Date,
}

/// A merchant promotional deal
#[derive(Debug, Clone, PartialEq)]
pub struct Deal<'a> {
    id: String,
    title: String,
    description: String,
    category: DealCategory,
    promo_type: PromoType,
    status: DealStatus,
    sold: u32,
    revenue: Money<'a, Currency>,
    deal_of_day: Option<Date>,
    created: Date,
    expires: Date,
    pricing: DealPricing<'a>,
    total_coupons: Option<u32>,
    coupons: Vec<Coupon>,
}

impl<'a> Deal<'a> {
    /// Creates a deal with no sales, no pricing details and no coupons.
    #[must_use]
    pub fn new(deal: NewDeal<'a>) -> Self {
        Self {
            id: deal.id,
            title: deal.title,
            description: String::new(),
            category: deal.category,
            promo_type: deal.promo_type,
            status: deal.status,
            sold: 0,
            revenue: deal.revenue,
            deal_of_day: None,
            created: deal.created,
            expires: deal.expires,
            pricing: DealPricing::default(),
            total_coupons: None,
            coupons: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the number of coupons sold.
    #[must_use]
    pub fn with_sold(mut self, sold: u32) -> Self {
        self.sold = sold;
        self
    }

    /// Sets the pricing details.
    #[must_use]
    pub fn with_pricing(mut self, pricing: DealPricing<'a>) -> Self {
        self.pricing = pricing;
        self
    }

    /// Sets the total number of coupons issued for the deal.
    #[must_use]
    pub fn with_total_coupons(mut self, total: u32) -> Self {
        self.total_coupons = Some(total);
        self
    }

    /// Sets the deal of the day date.
    #[must_use]
    pub fn with_deal_of_day(mut self, date: Option<Date>) -> Self {
        self.deal_of_day = date;
        self
    }

    /// Attaches the coupons sold for this deal.
    ///
    /// # Errors
    ///
    /// Returns [`CouponError::DuplicateCode`] if two coupons share a code.
    pub fn with_coupons(mut self, coupons: Vec<Coupon>) -> Result<Self, CouponError> {
        let mut codes: Vec<&str> = coupons.iter().map(Coupon::code).collect();
        codes.sort_unstable();

        if let Some(pair) = codes.windows(2).find(|pair| pair.first() == pair.get(1)) {
            let code = pair.first().copied().unwrap_or_default();

            return Err(CouponError::DuplicateCode(code.to_string()));
        }

        self.coupons = coupons;

        Ok(self)
    }

    /// Unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Venue category
    pub fn category(&self) -> DealCategory {
        self.category
    }

    /// Promotion mechanic
    pub fn promo_type(&self) -> PromoType {
        self.promo_type
    }

    /// Lifecycle status
    pub fn status(&self) -> DealStatus {
        self.status
    }

    /// Number of coupons sold
    pub fn sold(&self) -> u32 {
        self.sold
    }

    /// Revenue taken so far
    pub fn revenue(&self) -> Money<'a, Currency> {
        self.revenue
    }

    /// Scheduled deal of the day date, if any
    pub fn deal_of_day(&self) -> Option<Date> {
        self.deal_of_day
    }

    /// Returns true if the deal has a deal of the day date.
    pub fn is_deal_of_day(&self) -> bool {
        self.deal_of_day.is_some()
    }

    /// Creation date
    pub fn created(&self) -> Date {
        self.created
    }

    /// Expiry date
    pub fn expires(&self) -> Date {
        self.expires
    }

    /// Pricing details
    pub fn pricing(&self) -> &DealPricing<'a> {
        &self.pricing
    }

    /// Total number of coupons issued, if capped
    pub fn total_coupons(&self) -> Option<u32> {
        self.total_coupons
    }

    /// Coupons sold for this deal
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Number of redeemed coupons
    pub fn redeemed_coupons(&self) -> usize {
        self.coupons
            .iter()
            .filter(|coupon| coupon.status() == CouponStatus::Redeemed)
            .count()
    }

    /// Coupons still available: `total - redeemed - sold`, floored at zero.
    ///
    /// Returns `None` when the deal has no coupon cap.
    pub fn available_coupons(&self) -> Option<u32> {
        let redeemed = u32::try_from(self.redeemed_coupons()).unwrap_or(u32::MAX);

        self.total_coupons
            .map(|total| total.saturating_sub(redeemed).saturating_sub(self.sold))
    }

    pub(crate) fn schedule(&mut self, date: Date) {
        self.deal_of_day = Some(date);
    }

    pub(crate) fn deactivate(&mut self) {
        self.status = DealStatus::Deactivated;
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::test_support::deal;

    use super::*;

    #[test]
    fn new_deal_has_no_sales_or_schedule() {
        let deal = deal("d1", DealStatus::Draft, DealCategory::Cafe);

        assert_eq!(deal.sold(), 0);
        assert!(!deal.is_deal_of_day());
        assert!(deal.coupons().is_empty());
        assert_eq!(deal.available_coupons(), None);
    }

    #[test]
    fn effective_price_prefers_explicit_deal_price() {
        let pricing = DealPricing {
            original_price: Some(Money::from_minor(800, GBP)),
            deal_price: Some(Money::from_minor(500, GBP)),
            discount: Some(Percentage::from(0.5)),
        };

        assert_eq!(pricing.effective_price(), Some(Money::from_minor(500, GBP)));
    }

    #[test]
    fn effective_price_applies_discount_to_original() {
        let pricing = DealPricing {
            original_price: Some(Money::from_minor(1000, GBP)),
            deal_price: None,
            discount: Some(Percentage::from(0.15)),
        };

        assert_eq!(pricing.effective_price(), Some(Money::from_minor(850, GBP)));
    }

    #[test]
    fn effective_price_without_prices_is_none() {
        assert_eq!(DealPricing::default().effective_price(), None);
    }

    #[test]
    fn available_coupons_subtracts_redeemed_and_sold() -> TestResult {
        let coupons = vec![
            Coupon::redeemed("A-1", "Ana", date(2025, 1, 1), date(2025, 1, 2))?,
            Coupon::pending("A-2", "Ben", date(2025, 1, 1)),
        ];

        let deal = deal("d1", DealStatus::Active, DealCategory::Bar)
            .with_sold(2)
            .with_total_coupons(10)
            .with_coupons(coupons)?;

        assert_eq!(deal.redeemed_coupons(), 1);
        assert_eq!(deal.available_coupons(), Some(7));

        Ok(())
    }

    #[test]
    fn available_coupons_saturates_at_zero() {
        let deal = deal("d1", DealStatus::Active, DealCategory::Bar)
            .with_sold(12)
            .with_total_coupons(10);

        assert_eq!(deal.available_coupons(), Some(0));
    }

    #[test]
    fn duplicate_coupon_codes_are_rejected() {
        let coupons = vec![
            Coupon::pending("A-1", "Ana", date(2025, 1, 1)),
            Coupon::pending("A-1", "Ben", date(2025, 1, 3)),
        ];

        let result = deal("d1", DealStatus::Active, DealCategory::Bar).with_coupons(coupons);

        assert!(matches!(result, Err(CouponError::DuplicateCode(code)) if code == "A-1"));
    }

    #[test]
    fn deactivate_is_terminal_status() {
        let mut deal = deal("d1", DealStatus::Active, DealCategory::Bar);

        deal.deactivate();

        assert_eq!(deal.status(), DealStatus::Deactivated);
        assert!(deal.status().is_terminal());
    }
}
