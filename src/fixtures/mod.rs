//! Fixtures
//!
//! Seed data for the dashboard lives in YAML files under a base directory:
//! `deals/<set>.yml` and `requests/<set>.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{Catalog, CatalogError},
    coupons::CouponError,
    fixtures::{deals::DealsFixture, requests::RequestsFixture},
};

pub mod deals;
pub mod prices;
pub mod requests;

/// Default fixture directory, relative to the working directory
pub const DEFAULT_FIXTURES_DIR: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices of a deal
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Coupon data violates a coupon invariant
    #[error(transparent)]
    Coupon(#[from] CouponError),

    /// Deal could not be added to the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog built from the loaded files
    catalog: Catalog<'static>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path(DEFAULT_FIXTURES_DIR)
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::new(),
        }
    }

    /// Load deals from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a deal is malformed, or if
    /// the deal clashes with one already loaded.
    pub fn load_deals(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("deals").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: DealsFixture = serde_norway::from_str(&contents)?;
        let count = fixture.deals.len();

        for deal_fixture in fixture.deals {
            self.catalog
                .insert_deal(deal_fixture.try_into_deal_as_of(fixture.seeded_on)?)?;
        }

        info!(path = %file_path.display(), count, "loaded deals");

        Ok(self)
    }

    /// Load deal requests from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_requests(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("requests").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: RequestsFixture = serde_norway::from_str(&contents)?;
        let count = fixture.requests.len();

        for request in fixture.requests {
            self.catalog.push_request(request);
        }

        info!(path = %file_path.display(), count, "loaded deal requests");

        Ok(self)
    }

    /// Load a complete fixture set (deals and requests with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in(DEFAULT_FIXTURES_DIR, name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_deals(name)?.load_requests(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    pub fn catalog(&self) -> &Catalog<'static> {
        &self.catalog
    }

    /// Get the loaded catalog for mutation
    pub fn catalog_mut(&mut self) -> &mut Catalog<'static> {
        &mut self.catalog
    }

    /// Take ownership of the loaded catalog
    pub fn into_catalog(self) -> Catalog<'static> {
        self.catalog
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, kind: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(kind);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    const DEALS: &str = r#"
deals:
  - id: brunch
    title: Bottomless Brunch
    category: dining
    promo_type: bundle
    status: Active
    sold: 4
    revenue: "120.00 GBP"
    created: 2025-11-01
    expires: 2026-01-31
  - id: espresso
    title: Espresso Flash Sale
    category: cafe
    promo_type: flash
    status: Expired
    sold: 2
    revenue: "5.00 GBP"
    created: 2025-10-01
    expires: 2025-10-31
"#;

    const REQUESTS: &str = r#"
requests:
  - id: 1
    date: 2025-12-01
    username: ana
    email: ana@example.com
    contact: "+44 7700 900001"
    category: Dining
    notes: Vegan options please
  - id: 2
    date: 2025-12-03
    username: ben
    email: ben@example.com
    contact: "+44 7700 900002"
    category: Bar
"#;

    #[test]
    fn loads_a_complete_set() -> TestResult {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path(), "deals", "test", DEALS)?;
        write_fixture(dir.path(), "requests", "test", REQUESTS)?;

        let fixture = Fixture::from_set_in(dir.path(), "test")?;
        let catalog = fixture.catalog();

        assert_eq!(
            catalog.deals().map(|deal| deal.id()).collect::<Vec<_>>(),
            ["brunch", "espresso"]
        );
        assert_eq!(catalog.coupons("brunch")?.len(), 4);
        assert_eq!(catalog.requests().len(), 2);
        assert_eq!(
            catalog.requests().first().map(|r| r.date),
            Some(date(2025, 12, 1))
        );
        assert_eq!(
            catalog.requests().get(1).map(|r| r.notes.as_str()),
            Some("")
        );

        Ok(())
    }

    #[test]
    fn loading_is_deterministic() -> TestResult {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path(), "deals", "test", DEALS)?;

        let mut first = Fixture::with_base_path(dir.path());
        first.load_deals("test")?;

        let mut second = Fixture::with_base_path(dir.path());
        second.load_deals("test")?;

        assert_eq!(
            first.catalog().coupons("brunch")?,
            second.catalog().coupons("brunch")?
        );

        Ok(())
    }

    #[test]
    fn duplicate_deal_ids_are_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path(), "deals", "test", DEALS)?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_deals("test")?;

        assert!(matches!(
            fixture.load_deals("test"),
            Err(FixtureError::Catalog(CatalogError::DuplicateDeal(id))) if id == "brunch"
        ));

        Ok(())
    }

    #[test]
    fn mixed_currency_sets_are_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        write_fixture(
            dir.path(),
            "deals",
            "test",
            &DEALS.replace("\"5.00 GBP\"", "\"5.00 EUR\""),
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        assert!(matches!(
            fixture.load_deals("test"),
            Err(FixtureError::Catalog(CatalogError::CurrencyMismatch { .. }))
        ));

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        assert!(matches!(
            Fixture::from_set_in(dir.path(), "nope"),
            Err(FixtureError::Io(_))
        ));

        Ok(())
    }
}
