use chrono::{DateTime, Utc};

use super::money::Cents;
use super::validate::{
    ValidationError, validate_balance, validate_created, validate_id, validate_transaction,
};

/// A single balance-holding bank account.
///
/// Fields are private and every write path runs through the validators in
/// [`super::validate`], so an account can never hold an out-of-range
/// balance or a future creation time. A rejected mutation leaves the
/// account exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// 0 until the account has been assigned a persistent identity.
    id: i64,
    balance: Cents,
    created: DateTime<Utc>,
}

impl Account {
    /// Open a new account with the given starting balance. The id stays 0
    /// until one is assigned and the creation time is now.
    pub fn new(initial_balance: Cents) -> Result<Self, ValidationError> {
        validate_balance(initial_balance)?;
        Ok(Self {
            id: 0,
            balance: initial_balance,
            created: Utc::now(),
        })
    }

    /// Rebuild an account from previously stored fields. Each field is
    /// validated independently; any failure means no account is produced.
    pub fn restore(
        id: i64,
        balance: Cents,
        created: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_id(id)?;
        validate_balance(balance)?;
        validate_created(created)?;
        Ok(Self {
            id,
            balance,
            created,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Assign a persistent identity. Only positive ids are accepted, so an
    /// account cannot go back to the unassigned state.
    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        validate_id(id)?;
        self.id = id;
        Ok(())
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Cents) -> Result<(), ValidationError> {
        validate_balance(balance)?;
        self.balance = balance;
        Ok(())
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) -> Result<(), ValidationError> {
        validate_created(created)?;
        self.created = created;
        Ok(())
    }

    /// Take money out of the account. The amount must be within the
    /// per-transaction limit and the resulting balance within its own
    /// bounds; either failure leaves the balance untouched.
    pub fn withdraw(&mut self, amount: Cents) -> Result<(), ValidationError> {
        validate_transaction(amount)?;
        self.set_balance(self.balance - amount)
    }

    /// Put money into the account. Same limits as [`Account::withdraw`].
    pub fn deposit(&mut self, amount: Cents) -> Result<(), ValidationError> {
        validate_transaction(amount)?;
        self.set_balance(self.balance + amount)
    }

    /// Whole calendar days between the creation date and today,
    /// ignoring time-of-day. 0 for an account created earlier today.
    pub fn days_since_creation(&self) -> i64 {
        (Utc::now().date_naive() - self.created.date_naive()).num_days()
    }
}
