use rust_decimal::Decimal;
use thiserror::Error;

/// Recoverable failures reported back to the user. None of them end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Invalid amount {0}.")]
    InvalidAmount(Decimal),

    #[error("Amount {0} is out of range.")]
    AmountOutOfRange(String),

    #[error("Insufficient funds!")]
    InsufficientFunds,

    #[error("No account selected, create or switch to an account.")]
    NoAccountSelected,

    #[error("No accounts available, create one first.")]
    NoAccounts,

    #[error("Account {0} not found.")]
    AccountNotFound(i64),

    #[error("Invalid input {0:?}, enter a number.")]
    MalformedInput(String),

    #[error("Invalid choice {0}, try again.")]
    InvalidMenuChoice(i64),
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input stream closed")]
    EndOfInput,
}
