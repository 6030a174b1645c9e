use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Cents, Customer, RatingError};

/// Point-in-time snapshot of a customer's financial standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerReport {
    pub customer_id: i64,
    pub as_of: DateTime<Utc>,
    pub debts: Cents,
    pub assets: Cents,
    pub total_balance: Cents,
    /// Rating tier, 1 (best) to 5 (worst).
    pub rating: u8,
    pub accounts: Vec<AccountBalance>,
}

/// Balance entry for a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_id: i64,
    pub balance: Cents,
    /// Whole calendar days the account had been open as of the report.
    pub days_open: i64,
}

/// Build a report for a customer as of the given instant.
/// Fails if the customer's debts/assets combination has no defined rating
/// tier; an unratable customer must surface, not default.
pub fn build_customer_report(
    customer: &Customer,
    as_of: DateTime<Utc>,
) -> Result<CustomerReport, RatingError> {
    let rating = customer.rating()?;
    let accounts = customer
        .accounts()
        .iter()
        .map(|account| AccountBalance {
            account_id: account.id(),
            balance: account.balance(),
            days_open: (as_of.date_naive() - account.created().date_naive()).num_days(),
        })
        .collect();

    Ok(CustomerReport {
        customer_id: customer.id(),
        as_of,
        debts: customer.debts(),
        assets: customer.assets(),
        total_balance: customer.total_balance(),
        rating: rating.as_u8(),
        accounts,
    })
}
