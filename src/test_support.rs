//! Shared helpers for unit tests.

use jiff::civil::{Date, date};
use rusty_money::{Money, iso::GBP};

use crate::{
    coupons::Coupon,
    deals::{Deal, DealCategory, DealStatus, NewDeal, PromoType},
    requests::DealRequest,
};

/// A discount deal created on 2025-12-01 and expiring on 2026-01-31.
pub(crate) fn deal(id: &str, status: DealStatus, category: DealCategory) -> Deal<'static> {
    Deal::new(NewDeal {
        id: id.to_string(),
        title: format!("Deal {id}"),
        category,
        promo_type: PromoType::Discount,
        status,
        revenue: Money::from_minor(0, GBP),
        created: date(2025, 12, 1),
        expires: date(2026, 1, 31),
    })
}

/// A deal with an explicit title and promotion type.
pub(crate) fn titled_deal(
    id: &str,
    title: &str,
    category: DealCategory,
    promo_type: PromoType,
) -> Deal<'static> {
    Deal::new(NewDeal {
        id: id.to_string(),
        title: title.to_string(),
        category,
        promo_type,
        status: DealStatus::Active,
        revenue: Money::from_minor(0, GBP),
        created: date(2025, 12, 1),
        expires: date(2026, 1, 31),
    })
}

/// A pending coupon bought by `customer` on `purchased`.
pub(crate) fn coupon(code: &str, customer: &str, purchased: Date) -> Coupon {
    Coupon::pending(code, customer, purchased)
}

/// A deal request with the given category and submission date.
pub(crate) fn request(id: u32, category: &str, submitted: Date) -> DealRequest {
    DealRequest {
        id,
        date: submitted,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        contact: format!("+44 7700 900{id:03}"),
        category: category.to_string(),
        notes: String::new(),
    }
}
