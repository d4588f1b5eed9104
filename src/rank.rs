use itertools::Itertools;

use crate::error::{Error, Result};

/// Dense 0-based ranks of `values`, in input order.
///
/// Fails on the first repeated value, since ranks are only a bijection onto
/// `0..len` when every value is distinct.
pub fn ranks(values: &[i32]) -> Result<Vec<usize>> {
    let sorted = values.iter().copied().sorted_unstable().collect::<Vec<_>>();
    if let Some((&value, _)) = sorted.iter().tuple_windows().find(|(a, b)| a == b) {
        return Err(Error::Duplicate { value });
    }
    Ok(values
        .iter()
        .map(|v| sorted.partition_point(|s| s < v))
        .collect())
}
