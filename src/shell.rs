use crate::account::{Account, AccountId};
use crate::error::{BankError, ShellError};
use crate::input::{parse_amount, parse_integer, read_line};
use crate::store::AccountStore;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "
1. Create Account
2. Deposit Money
3. Withdraw Money
4. Check Balance
5. Switch Account
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Deposit,
    Withdraw,
    CheckBalance,
    Switch,
    Exit,
}

impl TryFrom<i64> for Command {
    type Error = BankError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        use Command::*;

        let command = match choice {
            1 => Create,
            2 => Deposit,
            3 => Withdraw,
            4 => CheckBalance,
            5 => Switch,
            6 => Exit,
            _ => return Err(BankError::InvalidMenuChoice(choice)),
        };

        Ok(command)
    }
}

/// What a successful command did, before it is rendered for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { id: AccountId },
    Deposited { balance: Decimal },
    Withdrew { balance: Decimal },
    Balance { balance: Decimal },
    Switched { id: AccountId, name: String },
    Exit,
}

/// Menu loop over one input and one output stream. The current account is
/// kept as an identifier and looked up in the store on every use.
pub struct Shell<R, W> {
    store: AccountStore,
    current: Option<AccountId>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            store: AccountStore::new(),
            current: None,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (AccountStore, W) {
        (self.store, self.output)
    }

    /// Runs until the exit command or the end of input. Only I/O failures on
    /// the streams themselves are returned.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Simple Bank System")?;

        loop {
            match self.step() {
                Ok(Outcome::Exit) => break,
                Ok(outcome) => self.report(&outcome)?,
                Err(ShellError::Bank(e)) => {
                    debug!(error = ?e, "command rejected");
                    writeln!(self.output, "{e}")?;
                }
                Err(ShellError::EndOfInput) => {
                    debug!("input closed, leaving");
                    writeln!(self.output)?;
                    break;
                }
                Err(ShellError::Io(e)) => return Err(e),
            }
        }

        writeln!(
            self.output,
            "Thank you for using Simple Bank System, have a great day!"
        )?;
        self.output.flush()
    }

    /// Prints the menu, reads one choice and executes it.
    pub fn step(&mut self) -> Result<Outcome, ShellError> {
        writeln!(self.output, "{MENU}")?;
        let choice = parse_integer(&self.prompt("Enter your choice: ")?)?;

        self.execute(Command::try_from(choice)?)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, ShellError> {
        match command {
            Command::Create => self.create(),
            Command::Deposit => self.deposit(),
            Command::Withdraw => self.withdraw(),
            Command::CheckBalance => self.check_balance(),
            Command::Switch => self.switch(),
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    fn create(&mut self) -> Result<Outcome, ShellError> {
        let name = self.prompt("Enter account holder name: ")?;
        let initial_balance = parse_amount(&self.prompt("Enter initial deposit: ")?)?;

        let id = self.store.create_account(name, initial_balance)?.id;
        self.current = Some(id);
        info!(id, %initial_balance, accounts = self.store.len(), "account created");

        Ok(Outcome::Created { id })
    }

    fn deposit(&mut self) -> Result<Outcome, ShellError> {
        let id = self.selected()?;
        let amount = parse_amount(&self.prompt("Enter amount to deposit: ")?)?;

        let balance = self.account_mut(id)?.deposit(amount)?;
        info!(id, %amount, %balance, "deposit");

        Ok(Outcome::Deposited { balance })
    }

    fn withdraw(&mut self) -> Result<Outcome, ShellError> {
        let id = self.selected()?;
        let amount = parse_amount(&self.prompt("Enter amount to withdraw: ")?)?;

        let balance = self.account_mut(id)?.withdraw(amount)?;
        info!(id, %amount, %balance, "withdrawal");

        Ok(Outcome::Withdrew { balance })
    }

    fn check_balance(&mut self) -> Result<Outcome, ShellError> {
        let id = self.selected()?;
        let balance = self
            .store
            .find(id)
            .map(Account::balance)
            .ok_or(BankError::NoAccountSelected)?;

        Ok(Outcome::Balance { balance })
    }

    fn switch(&mut self) -> Result<Outcome, ShellError> {
        if self.store.is_empty() {
            return Err(BankError::NoAccounts.into());
        }

        writeln!(self.output, "Available Accounts:")?;
        for account in self.store.accounts() {
            writeln!(self.output, "- {} (Account #: {})", account.name, account.id)?;
        }

        let wanted = parse_integer(&self.prompt("Enter account number to switch to: ")?)?;
        let account = AccountId::try_from(wanted)
            .ok()
            .and_then(|id| self.store.find(id))
            .ok_or(BankError::AccountNotFound(wanted))?;

        let (id, name) = (account.id, account.name.clone());
        self.current = Some(id);
        info!(id, "switched account");

        Ok(Outcome::Switched { id, name })
    }

    fn selected(&self) -> Result<AccountId, BankError> {
        self.current
            .filter(|id| self.store.find(*id).is_some())
            .ok_or(BankError::NoAccountSelected)
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, BankError> {
        self.store.find_mut(id).ok_or(BankError::NoAccountSelected)
    }

    fn prompt(&mut self, text: &str) -> Result<String, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        read_line(&mut self.input)
    }

    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Created { id } => {
                writeln!(self.output, "Your account has been created!")?;
                writeln!(self.output, "Account Number: {id}")
            }
            Outcome::Deposited { balance } => writeln!(
                self.output,
                "Deposit successful! New balance: {}",
                money(*balance)
            ),
            Outcome::Withdrew { balance } => writeln!(
                self.output,
                "Withdrawal successful! New balance: {}",
                money(*balance)
            ),
            Outcome::Balance { balance } => {
                writeln!(self.output, "Current balance: {}", money(*balance))
            }
            Outcome::Switched { name, .. } => {
                writeln!(self.output, "Successfully switched to account: {name}")
            }
            Outcome::Exit => Ok(()),
        }
    }
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
