use itertools::Itertools;

use crate::error::{Error, Result};

/// Splits every argument on whitespace and reads each token as an `i32`.
///
/// Tokens are an optional sign followed by ASCII digits. Values must not
/// repeat.
pub fn parse_arguments<I, S>(args: I) -> Result<Vec<i32>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg.trim().is_empty() {
            return Err(Error::InvalidNumber {
                token: arg.to_owned(),
            });
        }
        for token in arg.split_whitespace() {
            values.push(parse_number(token)?);
        }
    }
    if let Some(value) = values.iter().duplicates().next() {
        return Err(Error::Duplicate { value: *value });
    }
    Ok(values)
}

fn parse_number(token: &str) -> Result<i32> {
    let digits = token.strip_prefix(&['-', '+'][..]).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidNumber {
            token: token.to_owned(),
        });
    }
    token.parse::<i32>().map_err(|_| Error::OutOfRange {
        token: token.to_owned(),
    })
}
