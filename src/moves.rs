use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Copy)]
pub enum Move {
    RotateA,
    RotateB,
    RotateBoth,
    RevRotateA,
    RevRotateB,
    RevRotateBoth,
    PushA,
    PushB,
    SwapA,
    SwapB,
    SwapBoth,
}

impl Move {
    pub const ALL: [Move; 11] = [
        Move::SwapA,
        Move::SwapB,
        Move::SwapBoth,
        Move::PushA,
        Move::PushB,
        Move::RotateA,
        Move::RotateB,
        Move::RotateBoth,
        Move::RevRotateA,
        Move::RevRotateB,
        Move::RevRotateBoth,
    ];

    pub fn mnemonic(self) -> &'static str {
        use Move::*;
        match self {
            PushA => "pa",
            PushB => "pb",
            SwapA => "sa",
            SwapB => "sb",
            SwapBoth => "ss",
            RotateA => "ra",
            RotateB => "rb",
            RotateBoth => "rr",
            RevRotateA => "rra",
            RevRotateB => "rrb",
            RevRotateBoth => "rrr",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.mnemonic() == s)
            .ok_or_else(|| Error::InvalidMove { line: s.to_owned() })
    }
}
