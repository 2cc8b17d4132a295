//! Coupons
//!
//! A coupon is one purchase of a deal by a customer. Pending coupons have no redeem date;
//! redeemed coupons always carry one, never earlier than the purchase date.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::ParseError;

mod generator;

pub use generator::{CouponWindow, generate_coupons};

/// Errors raised when building coupons
#[derive(Debug, Error)]
pub enum CouponError {
    /// A redeemed coupon was given no redeem date.
    #[error("redeemed coupon {0} has no redeem date")]
    MissingRedeemDate(String),

    /// A pending coupon was given a redeem date.
    #[error("pending coupon {0} cannot have a redeem date")]
    UnexpectedRedeemDate(String),

    /// The redeem date precedes the purchase date.
    #[error("coupon {code} redeemed on {redeemed} before purchase on {purchased}")]
    RedeemedBeforePurchase {
        /// Coupon code
        code: String,

        /// Purchase date
        purchased: Date,

        /// Redeem date
        redeemed: Date,
    },

    /// Two coupons of the same deal share a code.
    #[error("duplicate coupon code: {0}")]
    DuplicateCode(String),

    /// Date arithmetic overflowed while generating coupons.
    #[error("coupon date out of range: {0}")]
    Date(#[from] jiff::Error),
}

/// Redemption status of a coupon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CouponStatus {
    /// Used by the customer
    Redeemed,

    /// Bought but not yet used
    Pending,
}

impl CouponStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 2] = [Self::Redeemed, Self::Pending];

    /// Capitalised display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Redeemed => "Redeemed",
            Self::Pending => "Pending",
        }
    }
}

impl Display for CouponStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for CouponStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("coupon status", s))
    }
}

impl TryFrom<String> for CouponStatus {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A coupon bought by a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    code: String,
    status: CouponStatus,
    customer: String,
    purchased: Date,
    redeemed: Option<Date>,
}

impl Coupon {
    /// Creates a coupon, checking the redeem date against the status.
    ///
    /// # Errors
    ///
    /// - [`CouponError::MissingRedeemDate`]: status is `Redeemed` without a redeem date.
    /// - [`CouponError::UnexpectedRedeemDate`]: status is `Pending` with a redeem date.
    /// - [`CouponError::RedeemedBeforePurchase`]: the redeem date precedes the purchase date.
    pub fn new(
        code: impl Into<String>,
        status: CouponStatus,
        customer: impl Into<String>,
        purchased: Date,
        redeemed: Option<Date>,
    ) -> Result<Self, CouponError> {
        let code = code.into();

        match (status, redeemed) {
            (CouponStatus::Redeemed, None) => return Err(CouponError::MissingRedeemDate(code)),
            (CouponStatus::Pending, Some(_)) => {
                return Err(CouponError::UnexpectedRedeemDate(code));
            }
            (CouponStatus::Redeemed, Some(redeemed)) if redeemed < purchased => {
                return Err(CouponError::RedeemedBeforePurchase {
                    code,
                    purchased,
                    redeemed,
                });
            }
            _ => {}
        }

        Ok(Self {
            code,
            status,
            customer: customer.into(),
            purchased,
            redeemed,
        })
    }

    /// Creates a pending coupon.
    pub fn pending(code: impl Into<String>, customer: impl Into<String>, purchased: Date) -> Self {
        Self {
            code: code.into(),
            status: CouponStatus::Pending,
            customer: customer.into(),
            purchased,
            redeemed: None,
        }
    }

    /// Creates a redeemed coupon.
    ///
    /// # Errors
    ///
    /// Returns [`CouponError::RedeemedBeforePurchase`] if `redeemed` precedes `purchased`.
    pub fn redeemed(
        code: impl Into<String>,
        customer: impl Into<String>,
        purchased: Date,
        redeemed: Date,
    ) -> Result<Self, CouponError> {
        Self::new(
            code,
            CouponStatus::Redeemed,
            customer,
            purchased,
            Some(redeemed),
        )
    }

    /// Coupon code, unique within its deal
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Redemption status
    pub fn status(&self) -> CouponStatus {
        self.status
    }

    /// Customer who bought the coupon
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Purchase date
    pub fn purchased(&self) -> Date {
        self.purchased
    }

    /// Redeem date, present iff the coupon is redeemed
    pub fn redeemed_on(&self) -> Option<Date> {
        self.redeemed
    }
}
