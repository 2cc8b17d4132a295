//! Table Rendering
//!
//! Terminal tables for each dashboard screen, followed by a page footer.

use std::{io, ops::Range};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    catalog::CatalogStats,
    coupons::{Coupon, CouponStatus},
    deals::{Deal, DealPricing, DealStatus},
    query::Page,
    requests::DealRequest,
};

/// Errors that can occur when writing a table.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Cell colours applied after the table is built: `(row, column, colour)`.
type ColorOps = SmallVec<[(usize, usize, Color); 16]>;

/// Writes a page of deals.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_deals(mut out: impl io::Write, page: &Page<&Deal<'_>>) -> Result<(), RenderError> {
    if page.items().is_empty() {
        writeln!(out, "No deals match the current filters.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    let mut color_ops: ColorOps = smallvec![];

    builder.push_record([
        "Id",
        "Title",
        "Category",
        "Promo",
        "Status",
        "Sold",
        "Revenue",
        "Price",
        "Deal of the Day",
    ]);

    for (idx, deal) in page.items().iter().enumerate() {
        builder.push_record([
            deal.id().to_string(),
            deal.title().to_string(),
            deal.category().to_string(),
            deal.promo_type().to_string(),
            deal.status().to_string(),
            deal.sold().to_string(),
            deal.revenue().to_string(),
            price_cell(deal.pricing()),
            deal.deal_of_day().map(|date| date.to_string()).unwrap_or_default(),
        ]);

        // header is row 0
        color_ops.push((idx + 1, 4, status_color(deal.status())));
    }

    write_table(&mut out, builder, 5..8, color_ops)?;
    write_footer(&mut out, page, "deals")
}

/// Writes a page of a deal's coupons, headed by the deal's coupon summary.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_coupons(
    mut out: impl io::Write,
    deal: &Deal<'_>,
    page: &Page<&Coupon>,
) -> Result<(), RenderError> {
    let available = deal
        .available_coupons()
        .map_or_else(|| "unlimited".to_string(), |count| count.to_string());

    writeln!(
        out,
        "{} ({}): {} sold, {} redeemed, {available} available",
        deal.title(),
        deal.id(),
        deal.sold(),
        deal.redeemed_coupons(),
    )?;

    if page.items().is_empty() {
        writeln!(out, "No coupons match the current filters.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    let mut color_ops: ColorOps = smallvec![];

    builder.push_record(["Code", "Customer", "Status", "Purchased", "Redeemed"]);

    for (idx, coupon) in page.items().iter().enumerate() {
        builder.push_record([
            coupon.code().to_string(),
            coupon.customer().to_string(),
            coupon.status().to_string(),
            coupon.purchased().to_string(),
            coupon
                .redeemed_on()
                .map(|date| date.to_string())
                .unwrap_or_default(),
        ]);

        let color = match coupon.status() {
            CouponStatus::Redeemed => Color::FG_GREEN,
            CouponStatus::Pending => Color::FG_YELLOW,
        };

        color_ops.push((idx + 1, 2, color));
    }

    write_table(&mut out, builder, 0..0, color_ops)?;
    write_footer(&mut out, page, "coupons")
}

/// Writes a page of deal requests.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_requests(
    mut out: impl io::Write,
    page: &Page<&DealRequest>,
) -> Result<(), RenderError> {
    if page.items().is_empty() {
        writeln!(out, "No deal requests match the current filters.")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record([
        "#", "Date", "Username", "Email", "Contact", "Category", "Notes",
    ]);

    for request in page.items() {
        builder.push_record([
            request.id.to_string(),
            request.date.to_string(),
            request.username.clone(),
            request.email.clone(),
            request.contact.clone(),
            request.category.clone(),
            request.notes.clone(),
        ]);
    }

    write_table(&mut out, builder, 0..1, smallvec![])?;
    write_footer(&mut out, page, "requests")
}

/// Writes the dashboard totals.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_stats(mut out: impl io::Write, stats: &CatalogStats<'_>) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Metric", "Value"]);

    let rows = [
        ("Active", stats.active.to_string()),
        ("Draft", stats.draft.to_string()),
        ("Expired", stats.expired.to_string()),
        ("Deactivated", stats.deactivated.to_string()),
        ("Deal of the Day", stats.scheduled.to_string()),
        ("Coupons sold", stats.sold.to_string()),
        (
            "Revenue",
            stats
                .revenue
                .map(|revenue| revenue.to_string())
                .unwrap_or_default(),
        ),
    ];

    for (metric, value) in rows {
        builder.push_record([metric.to_string(), value]);
    }

    write_table(&mut out, builder, 1..2, smallvec![])
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    right_aligned: Range<usize>,
    color_ops: ColorOps,
) -> Result<(), RenderError> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    if !right_aligned.is_empty() {
        table.modify(Columns::new(right_aligned), Alignment::right());
    }

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    writeln!(out, "{table}")?;

    Ok(())
}

fn write_footer<T>(out: &mut impl io::Write, page: &Page<T>, noun: &str) -> Result<(), RenderError> {
    if let Some((first, last)) = page.item_range() {
        writeln!(
            out,
            "Showing {first}-{last} of {} {noun} (page {} of {})",
            page.total_count(),
            page.page(),
            page.total_pages(),
        )?;
    }

    Ok(())
}

fn price_cell(pricing: &DealPricing<'_>) -> String {
    let Some(price) = pricing.effective_price() else {
        return String::new();
    };

    match (pricing.original_price, pricing.discount) {
        (Some(original), Some(discount)) if original != price => {
            format!("{price} (-{}%)", percent_points(discount))
        }
        (Some(original), None) if original != price => format!("{price} (was {original})"),
        _ => price.to_string(),
    }
}

/// Converts a fractional percentage to percent points for display.
fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED)
        .round_dp(2)
        .normalize()
}

fn status_color(status: DealStatus) -> Color {
    match status {
        DealStatus::Active => Color::FG_GREEN,
        DealStatus::Draft => Color::FG_YELLOW,
        DealStatus::Expired => color_dark_grey(),
        DealStatus::Deactivated => Color::FG_RED,
    }
}

/// ANSI dark grey foreground.
fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}
