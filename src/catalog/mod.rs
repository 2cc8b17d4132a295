//! Catalog
//!
//! The in-memory record store behind the dashboard. Deals keep their insertion order; the only
//! mutations are scheduling a deal of the day and deactivating a deal.

use jiff::civil::Date;
use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::{MoneyError, iso::Currency};
use slotmap::SlotMap;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    coupons::Coupon,
    deals::{Deal, DealKey},
    requests::DealRequest,
};

mod stats;

pub use stats::CatalogStats;

/// Errors raised by catalog operations
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A required argument was empty or missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No deal has the given id.
    #[error("deal not found: {0}")]
    NotFound(String),

    /// A deal with the given id already exists.
    #[error("duplicate deal id: {0}")]
    DuplicateDeal(String),

    /// The deal was already deactivated.
    #[error("deal already deactivated: {0}")]
    AlreadyDeactivated(String),

    /// Deactivated deals cannot be scheduled.
    #[error("deal is deactivated and cannot be scheduled: {0}")]
    Deactivated(String),

    /// All deals in a catalog must share a currency.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Catalog currency
        expected: &'static str,

        /// Currency of the rejected deal
        found: &'static str,
    },

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Deals and deal requests
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    deals: SlotMap<DealKey, Deal<'a>>,
    order: Vec<DealKey>,
    deal_keys: FxHashMap<String, DealKey>,
    requests: Vec<DealRequest>,
    currency: Option<&'a Currency>,
}

impl<'a> Catalog<'a> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a deal at the end of the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateDeal`]: a deal with the same id exists.
    /// - [`CatalogError::CurrencyMismatch`]: the deal's revenue is in a different currency.
    pub fn insert_deal(&mut self, deal: Deal<'a>) -> Result<DealKey, CatalogError> {
        if self.deal_keys.contains_key(deal.id()) {
            return Err(CatalogError::DuplicateDeal(deal.id().to_string()));
        }

        let currency = deal.revenue().currency();

        match self.currency {
            Some(expected) if expected != currency => {
                return Err(CatalogError::CurrencyMismatch {
                    expected: expected.iso_alpha_code,
                    found: currency.iso_alpha_code,
                });
            }
            Some(_) => {}
            None => self.currency = Some(currency),
        }

        let id = deal.id().to_string();
        let key = self.deals.insert(deal);

        self.order.push(key);
        self.deal_keys.insert(id, key);

        Ok(key)
    }

    /// Adds a deal request at the end of the request log.
    pub fn push_request(&mut self, request: DealRequest) {
        self.requests.push(request);
    }

    /// Look up a deal by id.
    pub fn deal(&self, id: &str) -> Option<&Deal<'a>> {
        self.deal_keys
            .get(id)
            .and_then(|key| self.deals.get(*key))
    }

    /// Look up a deal by key.
    pub fn deal_by_key(&self, key: DealKey) -> Option<&Deal<'a>> {
        self.deals.get(key)
    }

    /// Deals in insertion order.
    pub fn deals(&self) -> impl Iterator<Item = &Deal<'a>> + '_ {
        self.order.iter().filter_map(|key| self.deals.get(*key))
    }

    /// Number of deals.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the catalog has no deals.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Deal requests in submission order.
    pub fn requests(&self) -> &[DealRequest] {
        &self.requests
    }

    /// Currency shared by every deal, once one has been added.
    pub fn currency(&self) -> Option<&'a Currency> {
        self.currency
    }

    /// Coupons sold for a deal.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no deal has the given id.
    pub fn coupons(&self, id: &str) -> Result<&[Coupon], CatalogError> {
        self.deal(id)
            .map(Deal::coupons)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Schedule every selected deal as deal of the day on `date`.
    ///
    /// Nothing is changed unless every selected deal can be scheduled. Repeated ids are
    /// scheduled once. Returns the number of distinct deals scheduled.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`]: no deals selected or no date given.
    /// - [`CatalogError::NotFound`]: a selected id is unknown.
    /// - [`CatalogError::Deactivated`]: a selected deal is deactivated.
    pub fn assign_deal_of_day<S: AsRef<str>>(
        &mut self,
        ids: &[S],
        date: Option<Date>,
    ) -> Result<usize, CatalogError> {
        if ids.is_empty() {
            warn!("deal of the day rejected: no deals selected");
            return Err(CatalogError::InvalidArgument("no deals selected"));
        }

        let Some(date) = date else {
            warn!("deal of the day rejected: no date selected");
            return Err(CatalogError::InvalidArgument("no date selected"));
        };

        let mut keys = ids
            .iter()
            .map(|id| self.schedulable_key(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = FxHashSet::default();
        keys.retain(|key| seen.insert(*key));

        for key in &keys {
            if let Some(deal) = self.deals.get_mut(*key) {
                deal.schedule(date);
            }
        }

        info!(%date, deals = keys.len(), "scheduled deal of the day");

        Ok(keys.len())
    }

    /// Deactivate a deal. Deactivation is permanent.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: no deal has the given id.
    /// - [`CatalogError::AlreadyDeactivated`]: the deal was deactivated before.
    pub fn deactivate(&mut self, id: &str) -> Result<&Deal<'a>, CatalogError> {
        let key = *self
            .deal_keys
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let deal = self
            .deals
            .get_mut(key)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        if deal.status().is_terminal() {
            warn!(deal = id, "deactivation rejected: already deactivated");
            return Err(CatalogError::AlreadyDeactivated(id.to_string()));
        }

        deal.deactivate();

        info!(deal = id, "deactivated deal");

        Ok(&*deal)
    }

    fn schedulable_key(&self, id: &str) -> Result<DealKey, CatalogError> {
        let key = *self
            .deal_keys
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        match self.deals.get(key) {
            Some(deal) if deal.status().is_terminal() => {
                Err(CatalogError::Deactivated(id.to_string()))
            }
            Some(_) => Ok(key),
            None => Err(CatalogError::NotFound(id.to_string())),
        }
    }
}
