use destructure::Destructure;
use time::Duration;
use vodca::References;

use crate::entity::Pence;
use crate::KernelError;

pub const DEFAULT_LOAN_DAYS: i64 = 14;
pub const DEFAULT_FINE_LIMIT: i64 = 5000;
pub const DEFAULT_LATE_FEE: i64 = 1000;
pub const DEFAULT_NEW_RELEASE_LATE_FEE: i64 = 1500;

/// Ten years.
pub const MAX_LOAN_DAYS: i64 = 3650;

/// Loan period and fee schedule a store rents under.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct RentalTerms {
    loan_days: i64,
    /// Customers owing more than this cannot rent.
    fine_limit: Pence,
    late_fee: Pence,
    /// Charged instead of `late_fee` when the video came out in the year it is returned.
    new_release_late_fee: Pence,
}

impl RentalTerms {
    /// `loan_days` must lie in `0..=MAX_LOAN_DAYS`; amounts must not be negative.
    pub fn new(
        loan_days: i64,
        fine_limit: Pence,
        late_fee: Pence,
        new_release_late_fee: Pence,
    ) -> error_stack::Result<Self, KernelError> {
        if !(0..=MAX_LOAN_DAYS).contains(&loan_days) {
            return Err(KernelError::ValueValidation.with_reason(format!(
                "Loan period of {loan_days} days is outside 0..={MAX_LOAN_DAYS}"
            )));
        }
        if [fine_limit, late_fee, new_release_late_fee]
            .iter()
            .any(|amount| amount < &Pence::ZERO)
        {
            return Err(KernelError::ValueValidation.with_reason("Fees cannot be negative"));
        }
        Ok(Self {
            loan_days,
            fine_limit,
            late_fee,
            new_release_late_fee,
        })
    }

    pub fn loan_period(&self) -> Duration {
        Duration::days(self.loan_days)
    }
}

impl Default for RentalTerms {
    fn default() -> Self {
        Self {
            loan_days: DEFAULT_LOAN_DAYS,
            fine_limit: Pence::new(DEFAULT_FINE_LIMIT),
            late_fee: Pence::new(DEFAULT_LATE_FEE),
            new_release_late_fee: Pence::new(DEFAULT_NEW_RELEASE_LATE_FEE),
        }
    }
}
