//! Deal Kinds
//!
//! Category, promotion type and lifecycle status of a deal.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::parsing::ParseError;

/// Venue category of a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DealCategory {
    /// Bars and pubs
    Bar,

    /// Restaurants
    Dining,

    /// Cafes and coffee shops
    Cafe,
}

impl DealCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Bar, Self::Dining, Self::Cafe];

    /// Lowercase name used in filters and search.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Dining => "dining",
            Self::Cafe => "cafe",
        }
    }
}

/// Promotion mechanic of a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PromoType {
    /// Percentage or amount off
    Discount,

    /// Buy one, get one
    Bogo,

    /// Several items for a fixed price
    Bundle,

    /// Short-lived flash sale
    Flash,
}

impl PromoType {
    /// All promotion types, in display order.
    pub const ALL: [Self; 4] = [Self::Discount, Self::Bogo, Self::Bundle, Self::Flash];

    /// Lowercase name used in filters and search.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::Bogo => "bogo",
            Self::Bundle => "bundle",
            Self::Flash => "flash",
        }
    }
}

/// Lifecycle status of a deal.
///
/// `Deactivated` is terminal: once a deal is deactivated it never changes status again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DealStatus {
    /// Live and purchasable
    Active,

    /// Not yet published
    Draft,

    /// Past its expiry date
    Expired,

    /// Withdrawn by the merchant
    Deactivated,
}

impl DealStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Draft, Self::Expired, Self::Deactivated];

    /// Capitalised display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Expired => "Expired",
            Self::Deactivated => "Deactivated",
        }
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deactivated)
    }
}

macro_rules! impl_named {
    ($ty:ty, $kind:literal) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseError::unknown($kind, s))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

impl_named!(DealCategory, "deal category");
impl_named!(PromoType, "promotion type");
impl_named!(DealStatus, "deal status");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() -> Result<(), ParseError> {
        assert_eq!("BAR".parse::<DealCategory>()?, DealCategory::Bar);
        assert_eq!("Bogo".parse::<PromoType>()?, PromoType::Bogo);
        assert_eq!("active".parse::<DealStatus>()?, DealStatus::Active);
        assert_eq!("DEACTIVATED".parse::<DealStatus>()?, DealStatus::Deactivated);

        Ok(())
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(DealCategory::Dining.to_string(), "dining");
        assert_eq!(PromoType::Flash.to_string(), "flash");
        assert_eq!(DealStatus::Expired.to_string(), "Expired");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(matches!(
            "archived".parse::<DealStatus>(),
            Err(ParseError::Unknown { kind: "deal status", .. })
        ));
    }

    #[test]
    fn only_deactivated_is_terminal() {
        let terminal: Vec<DealStatus> = DealStatus::ALL
            .into_iter()
            .filter(|status| status.is_terminal())
            .collect();

        assert_eq!(terminal, vec![DealStatus::Deactivated]);
    }

    #[test]
    fn yaml_round_trips_through_names() -> Result<(), serde_norway::Error> {
        let status: DealStatus = serde_norway::from_str("active")?;
        assert_eq!(status, DealStatus::Active);

        let yaml = serde_norway::to_string(&PromoType::Bundle)?;
        assert_eq!(yaml.trim(), "bundle");

        Ok(())
    }
}
