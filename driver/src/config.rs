use error_stack::{Report, ResultExt};
use kernel::prelude::entity::{Pence, RentalTerms};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub static LOAN_DAYS: &str = "BLOCKBUSTER_LOAN_DAYS";
pub static FINE_LIMIT: &str = "BLOCKBUSTER_FINE_LIMIT";
pub static LATE_FEE: &str = "BLOCKBUSTER_LATE_FEE";
pub static NEW_RELEASE_LATE_FEE: &str = "BLOCKBUSTER_NEW_RELEASE_LATE_FEE";

/// Rental terms from the environment (or `.env`). Unset keys keep their defaults.
pub fn load_rental_terms() -> error_stack::Result<RentalTerms, KernelError> {
    terms_from(env)
}

fn terms_from<F>(lookup: F) -> error_stack::Result<RentalTerms, KernelError>
where
    F: Fn(&str) -> error_stack::Result<Option<String>, KernelError>,
{
    let defaults = RentalTerms::default();
    let loan_days = amount(&lookup, LOAN_DAYS, *defaults.loan_days())?;
    let fine_limit = amount(&lookup, FINE_LIMIT, (*defaults.fine_limit()).into())?;
    let late_fee = amount(&lookup, LATE_FEE, (*defaults.late_fee()).into())?;
    let new_release_late_fee = amount(
        &lookup,
        NEW_RELEASE_LATE_FEE,
        (*defaults.new_release_late_fee()).into(),
    )?;

    let terms = RentalTerms::new(
        loan_days,
        Pence::new(fine_limit),
        Pence::new(late_fee),
        Pence::new(new_release_late_fee),
    )
    .change_context(KernelError::Internal)?;
    tracing::debug!(?terms, "Rental terms loaded");
    Ok(terms)
}

fn amount<F>(lookup: &F, key: &str, default: i64) -> error_stack::Result<i64, KernelError>
where
    F: Fn(&str) -> error_stack::Result<Option<String>, KernelError>,
{
    let Some(raw) = lookup(key)? else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<i64>()
        .convert_error()
        .attach_printable_lazy(|| format!("{key}={raw} is not an integer"))?;
    if value < 0 {
        return Err(Report::new(KernelError::Internal)
            .attach_printable(format!("{key}={value} must not be negative")));
    }
    Ok(value)
}
