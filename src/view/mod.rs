//! View Configurations
//!
//! Each dashboard screen owns one serializable value holding its filters and paging state.
//! Changing any filter sends the view back to the first page; `clear` restores the defaults.

use std::{fs, io, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::query::{DEFAULT_PAGE_SIZE, Page, clamp_page, paginate, total_pages};

mod coupons;
mod deals;
mod requests;

pub use coupons::CouponsView;
pub use deals::DealsView;
pub use requests::RequestsView;

/// Errors raised when saving or loading a view configuration
#[derive(Debug, Error)]
pub enum ViewError {
    /// IO error reading or writing the file
    #[error("failed to access view file: {0}")]
    Io(#[from] io::Error),

    /// YAML (de)serialization error
    #[error("invalid view configuration: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// YAML persistence for view configurations
pub trait ViewConfig: Serialize + DeserializeOwned {
    /// Serialize the view to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Yaml`] if serialization fails.
    fn to_yaml(&self) -> Result<String, ViewError> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Parse a view from YAML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Yaml`] if the YAML is invalid.
    fn from_yaml(yaml: &str) -> Result<Self, ViewError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load a view from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn load(path: impl AsRef<Path>) -> Result<Self, ViewError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Save the view to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot be serialized or written.
    fn save(&self, path: impl AsRef<Path>) -> Result<(), ViewError> {
        fs::write(path, self.to_yaml()?)?;

        Ok(())
    }
}

/// Current page and page size of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    /// 1-based page number
    pub page: usize,

    /// Items per page
    pub page_size: NonZeroUsize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paging {
    pub(crate) fn first_page(&mut self) {
        self.page = 1;
    }

    /// Slice out the current page, clamping the page number to the pages available.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Page<T> {
        let pages = total_pages(items.len(), self.page_size);

        paginate(items, clamp_page(self.page, pages), self.page_size)
    }
}
