//! Command Line Interface

use std::{io, num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use dealdesk::{
    catalog::{Catalog, CatalogError},
    dates::{self, DateRange, DateRangePreset},
    fixtures::{DEFAULT_FIXTURES_DIR, Fixture, FixtureError},
    parsing::ParseError,
    render::RenderError,
    view::{ViewConfig, ViewError},
};
use jiff::civil::Date;
use thiserror::Error;

use crate::logging::LoggingConfig;

mod coupons;
mod deals;
mod manage;
mod requests;

/// Errors reported by CLI commands
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Fixture set could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Catalog rejected the operation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A selector value was not recognised.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// View file could not be read or written.
    #[error(transparent)]
    View(#[from] ViewError),

    /// Output could not be written.
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Parser)]
#[command(name = "dealdesk", about = "Merchant deals dashboard", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding `deals/` and `requests/` fixture files
    #[arg(long, global = true, env = "DEALDESK_FIXTURES", default_value = DEFAULT_FIXTURES_DIR)]
    fixtures: PathBuf,

    /// Fixture set name
    #[arg(long, global = true, env = "DEALDESK_SET", default_value = "demo")]
    set: String,

    /// Anchor date for relative date ranges; defaults to the system date
    #[arg(long, global = true, env = "DEALDESK_TODAY")]
    today: Option<Date>,

    /// Logging output settings.
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List deals
    Deals(deals::DealsArgs),

    /// List a deal's coupons
    Coupons(coupons::CouponsArgs),

    /// List customer deal requests
    Requests(requests::RequestsArgs),

    /// Schedule deals as deal of the day
    Schedule(manage::ScheduleArgs),

    /// Deactivate a deal
    Deactivate(manage::DeactivateArgs),

    /// Show dashboard totals
    Stats,
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) fn run(self) -> Result<(), CliError> {
        let mut catalog = Fixture::from_set_in(&self.fixtures, &self.set)?.into_catalog();
        let today = self.today.unwrap_or_else(dates::today);
        let out = io::stdout().lock();

        match self.command {
            Commands::Deals(args) => deals::run(args, &catalog, today, out),
            Commands::Coupons(args) => coupons::run(args, &catalog, out),
            Commands::Requests(args) => requests::run(args, &catalog, today, out),
            Commands::Schedule(args) => manage::schedule(&args, &mut catalog, out),
            Commands::Deactivate(args) => manage::deactivate(&args, &mut catalog, out),
            Commands::Stats => stats(&catalog, out),
        }
    }
}

fn stats(catalog: &Catalog<'_>, out: impl io::Write) -> Result<(), CliError> {
    dealdesk::render::write_stats(out, &catalog.stats()?)?;

    Ok(())
}

/// Date range flags shared by list commands
#[derive(Debug, Args)]
struct RangeArgs {
    /// Date range preset (all, today, next7days, nextmonth, last7days, last30days, last3months,
    /// thisyear, custom)
    #[arg(long)]
    range: Option<DateRangePreset>,

    /// Custom range start (YYYY-MM-DD)
    #[arg(long)]
    start: Option<Date>,

    /// Custom range end (YYYY-MM-DD)
    #[arg(long)]
    end: Option<Date>,
}

impl RangeArgs {
    /// The selected range, if any flag was given. Explicit dates without a preset select
    /// a custom range.
    fn date_range(&self) -> Option<DateRange> {
        let custom = DateRange {
            preset: DateRangePreset::Custom,
            start: self.start,
            end: self.end,
        };

        match self.range {
            Some(DateRangePreset::Custom) => Some(custom),
            Some(preset) => Some(DateRange::preset(preset)),
            None if self.start.is_some() || self.end.is_some() => Some(custom),
            None => None,
        }
    }
}

/// Paging flags shared by list commands
#[derive(Debug, Args)]
struct PagingArgs {
    /// 1-based page number
    #[arg(long)]
    page: Option<usize>,

    /// Items per page
    #[arg(long)]
    page_size: Option<NonZeroUsize>,
}

/// Saved view flags shared by list commands
#[derive(Debug, Args)]
struct ViewFileArgs {
    /// Start from a saved YAML view configuration
    #[arg(long)]
    view: Option<PathBuf>,

    /// Save the resulting view configuration to a YAML file
    #[arg(long)]
    save_view: Option<PathBuf>,
}

impl ViewFileArgs {
    fn load<V: ViewConfig + Default>(&self) -> Result<V, ViewError> {
        self.view
            .as_ref()
            .map_or_else(|| Ok(V::default()), |path| V::load(path))
    }

    fn save<V: ViewConfig>(&self, view: &V) -> Result<(), ViewError> {
        if let Some(path) = &self.save_view {
            view.save(path)?;
        }

        Ok(())
    }
}
