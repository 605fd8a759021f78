use crate::account::{Account, AccountId};
use crate::error::BankError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

pub const FIRST_ACCOUNT_ID: AccountId = 1001;

/// Append-only list of accounts. Identifiers come from `next_id` and are
/// never handed out twice.
#[derive(Debug)]
pub struct AccountStore {
    accounts: Vec<Account>,
    next_id: AccountId,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    account: AccountId,
    name: &'a str,
    balance: String,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_id: FIRST_ACCOUNT_ID,
        }
    }

    /// A zero initial balance is fine, a negative one creates nothing.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<&Account, BankError> {
        if initial_balance < Decimal::ZERO {
            return Err(BankError::InvalidAmount(initial_balance));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.accounts.push(Account::new(id, name.into(), initial_balance));

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn find(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn find_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn write_summary<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(["account", "name", "balance"])?;

        for account in &self.accounts {
            wtr.serialize(SummaryRow {
                account: account.id,
                name: &account.name,
                balance: format!("{:.2}", account.balance().round_dp(2)),
            })?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
