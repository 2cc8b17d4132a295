use std::io;

use clap::Args;
use dealdesk::{
    catalog::Catalog, parsing::ALL_SELECTOR, render::write_requests, view::RequestsView,
};
use jiff::civil::Date;

use crate::cli::{CliError, PagingArgs, RangeArgs, ViewFileArgs};

#[derive(Debug, Args)]
pub(crate) struct RequestsArgs {
    /// Free-text search over username, email, contact, category and notes
    #[arg(short, long)]
    search: Option<String>,

    /// Requested category, matched exactly (or all)
    #[arg(long)]
    category: Option<String>,

    #[command(flatten)]
    range: RangeArgs,

    #[command(flatten)]
    paging: PagingArgs,

    #[command(flatten)]
    view: ViewFileArgs,
}

pub(crate) fn run(
    args: RequestsArgs,
    catalog: &Catalog<'_>,
    today: Date,
    out: impl io::Write,
) -> Result<(), CliError> {
    let mut view: RequestsView = args.view.load()?;

    if let Some(search) = args.search {
        view.set_search(search);
    }

    if let Some(category) = args.category {
        let selected = !(category.is_empty() || category.eq_ignore_ascii_case(ALL_SELECTOR));

        view.set_category(selected.then_some(category));
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

    write_requests(out, &view.query_on(catalog.requests(), today))?;

    Ok(())
}
