mod birth;
mod id;
mod name;

pub use self::{birth::*, id::*, name::*};
use crate::entity::{parse_date, Pence};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use time::Date;
use vodca::References;

pub const MINIMUM_AGE: i32 = 13;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Customer {
    id: CustomerId,
    first_name: FirstName,
    last_name: LastName,
    date_of_birth: DateOfBirth,
    outstanding_fine: Pence,
}

impl Customer {
    /// `date_of_birth` is `dd/mm/yyyy`. Customers must be at least [`MINIMUM_AGE`] at `today`.
    pub fn new(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: &str,
        today: Date,
    ) -> error_stack::Result<Self, KernelError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty()
            || last_name.trim().is_empty()
            || date_of_birth.trim().is_empty()
        {
            return Err(KernelError::ValueValidation.with_reason("Cannot leave it empty"));
        }

        let date_of_birth = DateOfBirth::new(parse_date(date_of_birth)?);
        if date_of_birth.age_at(today) < MINIMUM_AGE {
            return Err(KernelError::ValueValidation.with_reason("You have to be 13+"));
        }

        Ok(Self {
            id,
            first_name: FirstName::new(first_name),
            last_name: LastName::new(last_name),
            date_of_birth,
            outstanding_fine: Pence::ZERO,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.as_ref(), self.last_name.as_ref())
    }

    pub fn age(&self, today: Date) -> i32 {
        self.date_of_birth.age_at(today)
    }

    pub fn charge_fine(&mut self, amount: Pence) -> error_stack::Result<(), KernelError> {
        let balance = self.outstanding_fine.checked_add(amount)?;
        self.substitute(|customer| *customer.outstanding_fine = balance);
        Ok(())
    }

    /// No floor: paying more than is owed leaves a negative balance.
    pub fn pay_off_fine(&mut self, amount: Pence) -> error_stack::Result<(), KernelError> {
        let balance = self.outstanding_fine.checked_sub(amount)?;
        self.substitute(|customer| *customer.outstanding_fine = balance);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{Customer, CustomerId, Pence};
    use crate::KernelError;

    fn customer(first: &str, last: &str, birth: &str) -> error_stack::Result<Customer, KernelError> {
        Customer::new(
            CustomerId::new(Uuid::new_v4()),
            first,
            last,
            birth,
            date!(2024 - 10 - 01),
        )
    }

    #[test]
    fn full_name() -> error_stack::Result<(), KernelError> {
        assert_eq!(customer("John", "Smith", "24/01/1980")?.full_name(), "John Smith");
        assert_eq!(customer("Gem", "Lo", "05/05/2003")?.full_name(), "Gem Lo");
        Ok(())
    }

    #[test]
    fn age_counts_birthday_in_current_year() -> error_stack::Result<(), KernelError> {
        let mike = customer("Mike", "Lane", "24/01/1981")?;
        assert_eq!(mike.age(date!(2024 - 10 - 01)), 43);
        assert_eq!(mike.age(date!(2025 - 01 - 23)), 43);
        assert_eq!(mike.age(date!(2025 - 01 - 24)), 44);

        let lola = customer("Lola", "Los", "15/11/1996")?;
        assert_eq!(lola.age(date!(2024 - 10 - 01)), 27);
        Ok(())
    }

    #[test]
    fn reject_empty_fields() {
        for (first, last, birth) in [
            ("", "Smith", "24/01/1980"),
            ("John", "", "24/01/1980"),
            ("John", "Smith", ""),
            ("   ", "Smith", "24/01/1980"),
            ("John", "\t", "24/01/1980"),
            ("John", "Smith", "  "),
        ] {
            let report = customer(first, last, birth).unwrap_err();
            assert_eq!(report.current_context(), &KernelError::ValueValidation);
        }
    }

    #[test]
    fn reject_malformed_birth_date() {
        let report = customer("John", "Smith", "1980").unwrap_err();
        assert_eq!(report.current_context(), &KernelError::TypeValidation);
    }

    #[test]
    fn reject_under_thirteen() {
        for birth in ["01/01/2017", "02/10/2011", "01/10/2024", "01/01/2030"] {
            let report = customer("Maggie", "Holt", birth).unwrap_err();
            assert_eq!(report.current_context(), &KernelError::ValueValidation, "{birth}");
        }
        // Thirteenth birthday is today.
        assert!(customer("Maggie", "Holt", "01/10/2011").is_ok());
    }

    #[test]
    fn new_customer_owes_nothing() -> error_stack::Result<(), KernelError> {
        let john = customer("John", "Smith", "24/01/1980")?;
        assert_eq!(john.outstanding_fine(), &Pence::ZERO);
        Ok(())
    }

    #[test]
    fn pay_off_fine() -> error_stack::Result<(), KernelError> {
        let mut lola = customer("Lola", "Los", "15/11/1996")?;
        lola.charge_fine(Pence::new(6000))?;
        lola.pay_off_fine(Pence::new(4000))?;
        assert_eq!(lola.outstanding_fine(), &Pence::new(2000));
        lola.pay_off_fine(Pence::new(2000))?;
        assert_eq!(lola.outstanding_fine(), &Pence::ZERO);
        Ok(())
    }

    #[test]
    fn overpaying_goes_negative() -> error_stack::Result<(), KernelError> {
        let mut lola = customer("Lola", "Los", "15/11/1996")?;
        lola.charge_fine(Pence::new(1000))?;
        lola.pay_off_fine(Pence::new(1500))?;
        assert_eq!(lola.outstanding_fine(), &Pence::new(-500));
        Ok(())
    }

    #[test]
    fn balance_overflow_leaves_fine_untouched() -> error_stack::Result<(), KernelError> {
        let mut lola = customer("Lola", "Los", "15/11/1996")?;
        lola.pay_off_fine(Pence::new(1))?;
        lola.pay_off_fine(Pence::new(i64::MAX))?;
        assert_eq!(lola.outstanding_fine(), &Pence::new(i64::MIN));

        let report = lola.pay_off_fine(Pence::new(1)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::ValueValidation);
        assert_eq!(lola.outstanding_fine(), &Pence::new(i64::MIN));

        lola.charge_fine(Pence::new(i64::MAX))?;
        lola.charge_fine(Pence::new(i64::MAX))?;
        let report = lola.charge_fine(Pence::new(2)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::ValueValidation);
        assert_eq!(lola.outstanding_fine(), &Pence::new(i64::MAX - 1));
        Ok(())
    }
}
