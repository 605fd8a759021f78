use crate::error::{BankError, ShellError};
use rust_decimal::Decimal;
use std::io::BufRead;
use std::str::FromStr;

/// Reads one line with the line terminator removed. Anything else on the line,
/// including surrounding spaces, is kept.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String, ShellError> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(ShellError::EndOfInput);
    }

    let len = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(len);
    Ok(line)
}

/// Accepts plain and scientific notation. Text that is a number but does not
/// fit a `Decimal` is out of range rather than malformed.
pub fn parse_amount(line: &str) -> Result<Decimal, BankError> {
    let trimmed = line.trim();

    if let Ok(amount) = Decimal::from_str(trimmed) {
        return Ok(amount);
    }

    if let Ok(amount) = Decimal::from_scientific(trimmed) {
        return Ok(amount);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            Err(BankError::AmountOutOfRange(trimmed.to_string()))
        }
        _ => Err(BankError::MalformedInput(trimmed.to_string())),
    }
}

pub fn parse_integer(line: &str) -> Result<i64, BankError> {
    let trimmed = line.trim();

    trimmed
        .parse()
        .map_err(|_| BankError::MalformedInput(trimmed.to_string()))
}
