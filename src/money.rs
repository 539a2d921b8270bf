// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

pub type AmountValue = i64;

// Whole units of the marketplace's single display currency; plain numbers
// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(AmountValue);

impl Amount {
    pub fn new(value: AmountValue) -> Self {
        Amount(value)
    }

    pub fn value(&self) -> AmountValue {
        self.0
    }
}

// Saturates at the numeric bounds rather than wrapping.
impl Add<AmountValue> for Amount {
    type Output = Amount;

    fn add(self, raise: AmountValue) -> Amount {
        Amount(self.0.saturating_add(raise))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
