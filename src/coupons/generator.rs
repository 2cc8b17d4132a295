//! Coupon Generation
//!
//! Seed data only carries a deal's `sold` count, so coupons are synthesised once when the
//! catalog is loaded. Generation is seeded from the deal id: the same deal always produces
//! the same coupons.

use std::hash::{Hash, Hasher};

use jiff::{ToSpan, civil::Date};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rustc_hash::FxHasher;

use crate::coupons::{Coupon, CouponError};

const CUSTOMERS: [&str; 12] = [
    "Amelia Hart",
    "Ben Okafor",
    "Chloe Nguyen",
    "Dev Patel",
    "Elena Rossi",
    "Finn Murphy",
    "Grace Kim",
    "Hugo Laurent",
    "Isla Campbell",
    "Jonas Berg",
    "Kofi Mensah",
    "Lena Schmidt",
];

const REDEEM_PROBABILITY: f64 = 0.6;

const MAX_REDEEM_DELAY_DAYS: i32 = 14;

const MAX_PREFIX_LEN: usize = 6;

/// Inclusive range of dates coupons can be purchased or redeemed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponWindow {
    /// First possible purchase date
    pub from: Date,

    /// Last possible purchase or redeem date
    pub until: Date,
}

impl CouponWindow {
    /// Creates a window, collapsing it to a single day if `until` precedes `from`.
    #[must_use]
    pub fn new(from: Date, until: Date) -> Self {
        Self {
            from,
            until: until.max(from),
        }
    }
}

/// Generate `sold` coupons for a deal.
///
/// Codes are `<PREFIX>-<NNNN>`, where the prefix is derived from the deal id, so codes are
/// unique within the deal.
///
/// # Errors
///
/// Returns [`CouponError::Date`] if date arithmetic leaves the supported range.
pub fn generate_coupons(
    deal_id: &str,
    sold: u32,
    window: CouponWindow,
) -> Result<Vec<Coupon>, CouponError> {
    let mut rng = StdRng::seed_from_u64(seed_for(deal_id));
    let prefix = code_prefix(deal_id);
    let span_days = window.from.until(window.until)?.get_days().max(0);

    (1..=sold)
        .map(|number| {
            let code = format!("{prefix}-{number:04}");
            let customer = CUSTOMERS
                .get(rng.gen_range(0..CUSTOMERS.len()))
                .copied()
                .unwrap_or("Guest");

            let purchased = window.from.checked_add(rng.gen_range(0..=span_days).days())?;

            if rng.gen_bool(REDEEM_PROBABILITY) {
                let delay = rng.gen_range(0..=MAX_REDEEM_DELAY_DAYS);
                let redeemed = purchased
                    .checked_add(delay.days())?
                    .min(window.until)
                    .max(purchased);

                Coupon::redeemed(code, customer, purchased, redeemed)
            } else {
                Ok(Coupon::pending(code, customer, purchased))
            }
        })
        .collect()
}

fn seed_for(deal_id: &str) -> u64 {
    let mut hasher = FxHasher::default();
    deal_id.hash(&mut hasher);
    hasher.finish()
}

fn code_prefix(deal_id: &str) -> String {
    let prefix: String = deal_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_PREFIX_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if prefix.is_empty() {
        "CPN".to_string()
    } else {
        prefix
    }
}
