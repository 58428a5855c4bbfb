use std::fmt::{Display, Formatter};

use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Amount of money in pence. Negative values are allowed (overpaid balances).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Fromln, AsRefln)]
pub struct Pence(i64);

impl Pence {
    pub const ZERO: Pence = Pence(0);

    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into())
    }

    pub fn checked_add(self, rhs: Pence) -> error_stack::Result<Pence, KernelError> {
        self.0
            .checked_add(rhs.0)
            .map(Pence)
            .ok_or_else(|| out_of_range(self, "+", rhs))
    }

    pub fn checked_sub(self, rhs: Pence) -> error_stack::Result<Pence, KernelError> {
        self.0
            .checked_sub(rhs.0)
            .map(Pence)
            .ok_or_else(|| out_of_range(self, "-", rhs))
    }
}

fn out_of_range(lhs: Pence, op: &str, rhs: Pence) -> error_stack::Report<KernelError> {
    KernelError::ValueValidation.with_reason(format!("{lhs} {op} {rhs} is out of range"))
}

/// Renders as pounds, e.g. `£5.00` or `-£2.50`.
impl Display for Pence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}£{}.{:02}", abs / 100, abs % 100)
    }
}
