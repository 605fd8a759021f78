use crate::error::BankError;
use rust_decimal::Decimal;

pub type AccountId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    balance: Decimal,
}

impl Account {
    pub(crate) fn new(id: AccountId, name: String, balance: Decimal) -> Self {
        Self { id, name, balance }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::AmountOutOfRange(amount.to_string()))?;
        Ok(self.balance)
    }

    /// Returns the new balance. Withdrawing the whole balance is allowed.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(BankError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(self.balance)
    }
}
