//! Deal Fixtures

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    coupons::{CouponWindow, generate_coupons},
    deals::{Deal, DealCategory, DealPricing, DealStatus, NewDeal, PromoType},
    fixtures::{
        FixtureError,
        prices::{parse_percentage, parse_price},
    },
};

/// Wrapper for deals in YAML
#[derive(Debug, Deserialize)]
pub struct DealsFixture {
    /// Date the seed data describes; generated coupons are never dated after it
    #[serde(default)]
    pub seeded_on: Option<Date>,

    /// Deals in display order
    pub deals: Vec<DealFixture>,
}

/// Optional pricing block of a deal fixture
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PricingFixture {
    /// Price before the deal (e.g., "20.00 GBP")
    pub original_price: Option<String>,

    /// Explicit deal price (e.g., "15.00 GBP")
    pub deal_price: Option<String>,

    /// Discount off the original price (e.g., "25%")
    pub discount: Option<String>,
}

/// Deal from YAML
#[derive(Debug, Deserialize)]
pub struct DealFixture {
    /// Unique deal id
    pub id: String,

    /// Deal title
    pub title: String,

    /// Optional free text description
    #[serde(default)]
    pub description: String,

    /// Venue category
    pub category: DealCategory,

    /// Promotion mechanism
    pub promo_type: PromoType,

    /// Lifecycle status
    pub status: DealStatus,

    /// Coupons sold so far
    #[serde(default)]
    pub sold: u32,

    /// Revenue (e.g., "1250.00 GBP")
    pub revenue: String,

    /// Creation date
    pub created: Date,

    /// Expiry date
    pub expires: Date,

    /// Scheduled deal of the day date
    #[serde(default)]
    pub deal_of_day: Option<Date>,

    /// Coupon allocation
    #[serde(default)]
    pub total_coupons: Option<u32>,

    /// Pricing details
    #[serde(default)]
    pub pricing: PricingFixture,
}

impl DealFixture {
    /// Convert the fixture into a deal, generating its coupons from `sold`.
    ///
    /// # Errors
    ///
    /// Returns an error if a price or percentage is malformed, if prices use different
    /// currencies, or if coupon generation fails.
    pub fn try_into_deal(self) -> Result<Deal<'static>, FixtureError> {
        self.try_into_deal_as_of(None)
    }

    /// Like [`Self::try_into_deal`], but coupon purchase and redeem dates stop at
    /// `seeded_on` when it falls before the deal expires.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_into_deal`].
    pub fn try_into_deal_as_of(
        self,
        seeded_on: Option<Date>,
    ) -> Result<Deal<'static>, FixtureError> {
        let revenue = parse_price(&self.revenue)?;
        let pricing = self.pricing.try_into_pricing(revenue.currency())?;
        let until = seeded_on.map_or(self.expires, |seeded_on| seeded_on.min(self.expires));
        let coupons = generate_coupons(
            &self.id,
            self.sold,
            CouponWindow::new(self.created, until),
        )?;

        let mut deal = Deal::new(NewDeal {
            id: self.id,
            title: self.title,
            category: self.category,
            promo_type: self.promo_type,
            status: self.status,
            revenue,
            created: self.created,
            expires: self.expires,
        })
        .with_description(self.description)
        .with_sold(self.sold)
        .with_pricing(pricing)
        .with_deal_of_day(self.deal_of_day)
        .with_coupons(coupons)?;

        if let Some(total) = self.total_coupons {
            deal = deal.with_total_coupons(total);
        }

        Ok(deal)
    }
}

impl PricingFixture {
    fn try_into_pricing(
        self,
        currency: &'static Currency,
    ) -> Result<DealPricing<'static>, FixtureError> {
        let original_price = self
            .original_price
            .as_deref()
            .map(|price| parse_in_currency(price, currency))
            .transpose()?;

        let deal_price = self
            .deal_price
            .as_deref()
            .map(|price| parse_in_currency(price, currency))
            .transpose()?;

        let discount = self.discount.as_deref().map(parse_percentage).transpose()?;

        Ok(DealPricing {
            original_price,
            deal_price,
            discount,
        })
    }
}

fn parse_in_currency(
    price: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, FixtureError> {
    let money = parse_price(price)?;

    if money.currency() != currency {
        return Err(FixtureError::CurrencyMismatch(
            currency.iso_alpha_code.to_string(),
            money.currency().iso_alpha_code.to_string(),
        ));
    }

    Ok(money)
}
