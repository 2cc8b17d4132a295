use std::io;

use clap::Args;
use dealdesk::{catalog::Catalog, parsing::parse_selector, render::write_deals, view::DealsView};
use jiff::civil::Date;

use crate::cli::{CliError, PagingArgs, RangeArgs, ViewFileArgs};

#[derive(Debug, Args)]
pub(crate) struct DealsArgs {
    /// Free-text search over title, category and promotion type
    #[arg(short, long)]
    search: Option<String>,

    /// Category (bar, dining, cafe or all)
    #[arg(long)]
    category: Option<String>,

    /// Promotion type (discount, bogo, bundle, flash or all)
    #[arg(long)]
    promo: Option<String>,

    /// Status (active, draft, expired, deactivated, dealoftheday or all)
    #[arg(long)]
    status: Option<String>,

    /// Only deals scheduled as deal of the day
    #[arg(long)]
    deal_of_day_only: bool,

    #[command(flatten)]
    range: RangeArgs,

    #[command(flatten)]
    paging: PagingArgs,

    #[command(flatten)]
    view: ViewFileArgs,
}

pub(crate) fn run(
    args: DealsArgs,
    catalog: &Catalog<'_>,
    today: Date,
    out: impl io::Write,
) -> Result<(), CliError> {
    let mut view: DealsView = args.view.load()?;

    if let Some(search) = args.search {
        view.set_search(search);
    }

    if let Some(category) = &args.category {
        view.set_category(parse_selector(category)?);
    }

    if let Some(promo) = &args.promo {
        view.set_promo_type(parse_selector(promo)?);
    }

    if let Some(status) = &args.status {
        view.set_status(parse_selector(status)?);
    }

    if args.deal_of_day_only {
        view.set_deal_of_day_only(true);
    }

    if let Some(range) = args.range.date_range() {
        view.set_date_range(range);
    }

    if let Some(page_size) = args.paging.page_size {
        view.set_page_size(page_size);
    }

    if let Some(page) = args.paging.page {
        view.set_page(page);
    }

    args.view.save(&view)?;

    write_deals(out, &view.query_on(catalog.deals(), today))?;

    Ok(())
}
