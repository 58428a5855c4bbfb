use error_stack::Report;
use kernel::prelude::entity::{format_date, Customer, DestructCustomer};
use kernel::KernelError;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    /// `dd/mm/yyyy`
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: String,
    pub age: i32,
    pub outstanding_fine: i64,
}

impl CustomerDto {
    pub fn from_entity(customer: Customer, today: Date) -> Result<Self, Report<KernelError>> {
        let name = customer.full_name();
        let age = customer.age(today);
        let DestructCustomer {
            id,
            date_of_birth,
            outstanding_fine,
            ..
        } = customer.into_destruct();
        Ok(Self {
            id: id.into(),
            name,
            date_of_birth: format_date(date_of_birth.into())?,
            age,
            outstanding_fine: outstanding_fine.into(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayOffFineDto {
    pub amount: i64,
}
