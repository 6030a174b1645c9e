use std::fmt;

use super::money::{Cents, format_cents};

// Band thresholds, in cents.
const SEVERE_DEBT: Cents = -250_000_000; // -2,500,000.00
const MODERATE_DEBT: Cents = -25_000_000; // -250,000.00
const HIGH_ASSETS: Cents = 125_000_000; // 1,250,000.00
const MODERATE_ASSETS: Cents = 5_000_000; // 50,000.00

/// Discrete creditworthiness tier, 1 (best) to 5 (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl Rating {
    pub fn as_u8(&self) -> u8 {
        match self {
            Rating::Tier1 => 1,
            Rating::Tier2 => 2,
            Rating::Tier3 => 3,
            Rating::Tier4 => 4,
            Rating::Tier5 => 5,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rating::Tier1),
            2 => Some(Rating::Tier2),
            3 => Some(Rating::Tier3),
            4 => Some(Rating::Tier4),
            5 => Some(Rating::Tier5),
            _ => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Classify a customer's debts (sum of negative balances, always <= 0) and
/// assets (sum of positive balances, always >= 0) into a rating tier.
///
/// The band table is sparse: combinations no row covers have no defined
/// tier and come back as [`RatingError::Unclassified`] instead of some
/// default.
// TODO: tiers are still undecided for severe debt with assets under
// 50,000.00, for moderate debt with assets outside 50,000.00..=1,250,000.00,
// and for mild debt with assets of 50,000.00 or more.
pub fn classify(debts: Cents, assets: Cents) -> Result<Rating, RatingError> {
    if debts < SEVERE_DEBT {
        if assets > HIGH_ASSETS {
            return Ok(Rating::Tier1);
        }
        if assets >= MODERATE_ASSETS {
            return Ok(Rating::Tier2);
        }
    } else if debts <= MODERATE_DEBT {
        if (MODERATE_ASSETS..=HIGH_ASSETS).contains(&assets) {
            return Ok(Rating::Tier3);
        }
    } else if assets < MODERATE_ASSETS {
        return if debts.abs() <= assets {
            Ok(Rating::Tier4)
        } else {
            Ok(Rating::Tier5)
        };
    }

    Err(RatingError::Unclassified { debts, assets })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// No rating band covers this combination of debts and assets.
    Unclassified { debts: Cents, assets: Cents },
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingError::Unclassified { debts, assets } => write!(
                f,
                "no rating band covers debts of {} and assets of {}",
                format_cents(*debts),
                format_cents(*assets)
            ),
        }
    }
}

impl std::error::Error for RatingError {}
