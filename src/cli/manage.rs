use std::{io, num::NonZeroUsize};

use clap::Args;
use dealdesk::{
    catalog::Catalog,
    deals::Deal,
    query::{Page, paginate},
    render::write_deals,
};
use jiff::civil::Date;

use crate::cli::CliError;

#[derive(Debug, Args)]
pub(crate) struct ScheduleArgs {
    /// Deal of the day date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<Date>,

    /// Deal ids to schedule
    #[arg(long = "deal", num_args = 1..)]
    deals: Vec<String>,
}

#[derive(Debug, Args)]
pub(crate) struct DeactivateArgs {
    /// Deal id
    deal: String,
}

pub(crate) fn schedule(
    args: &ScheduleArgs,
    catalog: &mut Catalog<'_>,
    out: impl io::Write,
) -> Result<(), CliError> {
    catalog.assign_deal_of_day(&args.deals, args.date)?;

    let scheduled: Vec<&Deal<'_>> = catalog
        .deals()
        .filter(|deal| args.deals.iter().any(|id| id == deal.id()))
        .collect();

    write_deals(out, &single_page(&scheduled))?;

    Ok(())
}

pub(crate) fn deactivate(
    args: &DeactivateArgs,
    catalog: &mut Catalog<'_>,
    out: impl io::Write,
) -> Result<(), CliError> {
    let deal = catalog.deactivate(&args.deal)?;

    write_deals(out, &single_page(&[deal]))?;

    Ok(())
}

fn single_page<'d, 'a>(deals: &[&'d Deal<'a>]) -> Page<&'d Deal<'a>> {
    let page_size = NonZeroUsize::new(deals.len()).unwrap_or(NonZeroUsize::MIN);

    paginate(deals, 1, page_size)
}
