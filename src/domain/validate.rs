use chrono::{DateTime, Utc};
use thiserror::Error;

use super::money::{Cents, format_cents};

/// Largest balance an account may hold, in cents (999,999,999.99).
/// The lower bound is the negation.
pub const BALANCE_LIMIT: Cents = 99_999_999_999;

/// Largest amount a single deposit or withdrawal may move, in cents (25,000.00).
pub const TRANSACTION_LIMIT: Cents = 2_500_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id must be a positive integer, got {0}")]
    IdNotPositive(i64),

    #[error("balance of {} is outside the permitted range of -999999999.99 to 999999999.99", display_cents(.0))]
    BalanceOutOfRange(Cents),

    #[error("transaction amount of {} must be between 0.00 and 25000.00", display_cents(.0))]
    TransactionOutOfRange(Cents),

    #[error("creation time {0} is in the future")]
    CreatedInFuture(DateTime<Utc>),
}

fn display_cents(cents: &Cents) -> String {
    format_cents(*cents)
}

/// Check that an identifier carries an assigned, positive value.
/// 0 is reserved for entities that have not been given an identity yet
/// and is never accepted here.
pub fn validate_id(id: i64) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::IdNotPositive(id));
    }
    Ok(())
}

/// Check that a balance lies within the permitted range, bounds included.
pub fn validate_balance(balance: Cents) -> Result<(), ValidationError> {
    if !(-BALANCE_LIMIT..=BALANCE_LIMIT).contains(&balance) {
        return Err(ValidationError::BalanceOutOfRange(balance));
    }
    Ok(())
}

/// Check that a creation time is not in the future. Both sides are
/// truncated to whole milliseconds before comparing, so an exact "now"
/// always passes.
pub fn validate_created(created: DateTime<Utc>) -> Result<(), ValidationError> {
    if created.timestamp_millis() > Utc::now().timestamp_millis() {
        return Err(ValidationError::CreatedInFuture(created));
    }
    Ok(())
}

/// Check that a single deposit or withdrawal amount is within limits,
/// bounds included.
pub fn validate_transaction(amount: Cents) -> Result<(), ValidationError> {
    if !(0..=TRANSACTION_LIMIT).contains(&amount) {
        return Err(ValidationError::TransactionOutOfRange(amount));
    }
    Ok(())
}
