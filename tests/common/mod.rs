// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use credito::domain::{Account, Customer};

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Helper to build an identified account opened a number of days in the past
pub fn account_opened_days_ago(id: i64, balance: i64, days_ago: i64) -> Result<Account> {
    Ok(Account::restore(
        id,
        balance,
        Utc::now() - Duration::days(days_ago),
    )?)
}

/// Test fixture: customers assembled from plain balance lists
pub struct SampleCustomers;

impl SampleCustomers {
    /// Unidentified customer holding one freshly opened account per balance
    pub fn with_balances(balances: &[i64]) -> Result<Customer> {
        let accounts = balances
            .iter()
            .map(|balance| Account::new(*balance))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Customer::new(accounts))
    }

    /// Identified customer holding one account per balance, each opened
    /// 30 days ago with ids assigned in order
    pub fn identified(customer_id: i64, balances: &[i64]) -> Result<Customer> {
        let accounts = balances
            .iter()
            .enumerate()
            .map(|(i, balance)| account_opened_days_ago(i as i64 + 1, *balance, 30))
            .collect::<Result<Vec<_>>>()?;
        Ok(Customer::restore(customer_id, accounts)?)
    }
}
