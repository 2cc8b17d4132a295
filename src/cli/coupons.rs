use std::io;

use clap::Args;
use dealdesk::{
    catalog::{Catalog, CatalogError},
    dates::DateBounds,
    parsing::parse_selector,
    render::write_coupons,
    view::CouponsView,
};
use jiff::civil::Date;

use crate::cli::{CliError, PagingArgs, ViewFileArgs};

#[derive(Debug, Args)]
pub(crate) struct CouponsArgs {
    /// Deal id
    deal: String,

    /// Coupon status (redeemed, pending or all)
    #[arg(long)]
    status: Option<String>,

    /// Customer name search
    #[arg(long)]
    customer: Option<String>,

    /// Earliest purchase date (YYYY-MM-DD); needs `--to`
    #[arg(long)]
    from: Option<Date>,

    /// Latest purchase date (YYYY-MM-DD); needs `--from`
    #[arg(long)]
    to: Option<Date>,

    #[command(flatten)]
    paging: PagingArgs,

    #[command(flatten)]
    view: ViewFileArgs,
}

pub(crate) fn run(
    args: CouponsArgs,
    catalog: &Catalog<'_>,
    out: impl io::Write,
) -> Result<(), CliError> {
    let deal = catalog
        .deal(&args.deal)
        .ok_or_else(|| CatalogError::NotFound(args.deal.clone()))?;

    let mut view: CouponsView = args.view.load()?;

    if let Some(status) = &args.status {
        view.set_status(parse_selector(status)?);
    }

    if let Some(customer) = args.customer {
        view.set_customer(customer);
    }

    if args.from.is_some() || args.to.is_some() {
        view.set_purchased(DateBounds {
            start: args.from,
            end: args.to,
        });
    }

    if let Some(page_size) = args.paging.page_size {
        view.set_page_size(page_size);
    }

    if let Some(page) = args.paging.page {
        view.set_page(page);
    }

    args.view.save(&view)?;

    write_coupons(out, deal, &view.query(deal.coupons()))?;

    Ok(())
}
