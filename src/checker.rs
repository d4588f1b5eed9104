use std::io::BufRead;

use crate::error::{Error, Result};
use crate::moves::Move;
use crate::stack::Stack;
use crate::state::State;

/// Reads one instruction per line until end of input.
pub fn parse_moves(reader: impl BufRead) -> Result<Vec<Move>> {
    reader
        .lines()
        .map(|line| {
            line.map_err(|e| Error::Read(e.to_string()))
                .and_then(|line| line.parse::<Move>())
        })
        .collect()
}

/// Replays `moves` on `values` and tells whether A ends sorted with B empty.
pub fn check(values: &[i32], moves: impl IntoIterator<Item = Move>) -> Result<bool> {
    let mut state = State::new(Stack::from_values(values)?).recording(false);
    for m in moves {
        state.apply(m);
    }
    Ok(state.is_solved())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines() {
        let input = b"sa\npb\nrrr\n" as &[u8];
        assert_eq!(
            parse_moves(input),
            Ok(vec![Move::SwapA, Move::PushB, Move::RevRotateBoth])
        );
        assert_eq!(parse_moves(b"" as &[u8]), Ok(vec![]));
    }

    #[test]
    fn rejects_garbage_line() {
        let input = b"sa\nsaa\n" as &[u8];
        assert_eq!(
            parse_moves(input),
            Err(Error::InvalidMove { line: "saa".into() })
        );
    }

    #[test]
    fn verdicts() {
        assert_eq!(check(&[2, 1, 3], [Move::SwapA]), Ok(true));
        assert_eq!(check(&[2, 1, 3], [Move::SwapA; 0]), Ok(false));
        assert_eq!(check(&[1, 2, 3], [Move::PushB]), Ok(false));
        assert_eq!(check(&[], [Move::SwapA; 0]), Ok(true));
        assert_eq!(
            check(&[1, 1], [Move::SwapA; 0]),
            Err(Error::Duplicate { value: 1 })
        );
    }
}
