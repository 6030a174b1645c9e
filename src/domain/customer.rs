use super::account::Account;
use super::money::Cents;
use super::rating::{Rating, RatingError, classify};
use super::validate::{ValidationError, validate_id};

/// A customer owning an ordered collection of accounts.
///
/// The financial figures (debts, assets, total balance, rating) are derived
/// from the account balances on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// 0 until the customer has been assigned a persistent identity.
    id: i64,
    accounts: Vec<Account>,
}

impl Customer {
    /// A customer that has not been assigned an identity yet. An empty
    /// account list is legal.
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { id: 0, accounts }
    }

    /// Rebuild a customer from previously stored fields. The id must be
    /// positive; the accounts are assumed to be individually valid already.
    pub fn restore(id: i64, accounts: Vec<Account>) -> Result<Self, ValidationError> {
        validate_id(id)?;
        Ok(Self { id, accounts })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Assign a persistent identity. Only positive ids are accepted, so a
    /// customer cannot go back to the unassigned state.
    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        validate_id(id)?;
        self.id = id;
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut Vec<Account> {
        &mut self.accounts
    }

    /// Replace the whole account list. Each account guards its own
    /// invariants, so no deep re-validation happens here.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Sum of all strictly negative balances. Always 0 or less.
    pub fn debts(&self) -> Cents {
        self.accounts
            .iter()
            .map(Account::balance)
            .filter(|balance| *balance < 0)
            .sum()
    }

    /// Sum of all strictly positive balances. Always 0 or more.
    pub fn assets(&self) -> Cents {
        self.accounts
            .iter()
            .map(Account::balance)
            .filter(|balance| *balance > 0)
            .sum()
    }

    /// Sum of every balance, equal to debts + assets.
    pub fn total_balance(&self) -> Cents {
        self.accounts.iter().map(Account::balance).sum()
    }

    /// Creditworthiness tier derived from the debts and assets bands.
    /// Combinations outside the defined bands come back as an error.
    pub fn rating(&self) -> Result<Rating, RatingError> {
        classify(self.debts(), self.assets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_with_balances(balances: &[Cents]) -> Customer {
        let accounts = balances
            .iter()
            .map(|balance| Account::new(*balance).unwrap())
            .collect();
        Customer::new(accounts)
    }

    #[test]
    fn test_new_customer_starts_unassigned() {
        let customer = Customer::new(Vec::new());
        assert_eq!(customer.id(), 0);
        assert!(customer.accounts().is_empty());
    }

    #[test]
    fn test_restore_validates_id() {
        assert!(Customer::restore(42, Vec::new()).is_ok());
        assert!(matches!(
            Customer::restore(0, Vec::new()),
            Err(ValidationError::IdNotPositive(0))
        ));
        assert!(matches!(
            Customer::restore(-1, Vec::new()),
            Err(ValidationError::IdNotPositive(-1))
        ));
    }

    #[test]
    fn test_set_id_rejects_unassigning() {
        let mut customer = Customer::new(Vec::new());
        customer.set_id(7).unwrap();
        assert_eq!(customer.id(), 7);

        assert!(customer.set_id(0).is_err());
        assert_eq!(customer.id(), 7);
    }

    #[test]
    fn test_aggregates_split_by_balance_sign() {
        // balances: 50.40, 12.00, -100.55, -24.80, 0.00
        let customer = customer_with_balances(&[5_040, 1_200, -10_055, -2_480, 0]);

        assert_eq!(customer.debts(), -12_535);
        assert_eq!(customer.assets(), 6_240);
        assert_eq!(customer.total_balance(), -6_295);
        assert_eq!(
            customer.total_balance(),
            customer.debts() + customer.assets()
        );
    }

    #[test]
    fn test_aggregates_of_empty_customer_are_zero() {
        let customer = Customer::new(Vec::new());
        assert_eq!(customer.debts(), 0);
        assert_eq!(customer.assets(), 0);
        assert_eq!(customer.total_balance(), 0);
    }

    #[test]
    fn test_rating_uses_both_aggregates() {
        let customer = customer_with_balances(&[-250_000_100, 125_000_100]);
        assert_eq!(customer.rating(), Ok(Rating::Tier1));

        let customer = customer_with_balances(&[-10]);
        assert_eq!(customer.rating(), Ok(Rating::Tier5));

        let customer = customer_with_balances(&[-260_000_000, 4_999_900]);
        assert_eq!(
            customer.rating(),
            Err(RatingError::Unclassified {
                debts: -260_000_000,
                assets: 4_999_900,
            })
        );
    }

    #[test]
    fn test_account_mutations_flow_into_aggregates() {
        let mut customer = customer_with_balances(&[10_000, -5_000]);
        assert_eq!(customer.total_balance(), 5_000);

        customer.accounts_mut()[0].deposit(2_000).unwrap();
        assert_eq!(customer.assets(), 12_000);
        assert_eq!(customer.total_balance(), 7_000);

        customer.set_accounts(Vec::new());
        assert_eq!(customer.total_balance(), 0);
    }
}
