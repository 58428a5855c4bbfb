use kernel::interface::clock::{Clock, DependOnClock};
use kernel::prelude::entity::{Customer, CustomerId, Pence};
use kernel::KernelError;
use uuid::Uuid;

use crate::transfer::{CreateCustomerDto, CustomerDto, PayOffFineDto};

pub trait CustomerService: 'static + Sync + Send + DependOnClock {
    #[tracing::instrument(skip(self))]
    fn register_customer(
        &self,
        dto: CreateCustomerDto,
    ) -> error_stack::Result<Customer, KernelError> {
        let id = CustomerId::new(Uuid::new_v4());
        Customer::new(
            id,
            dto.first_name,
            dto.last_name,
            &dto.date_of_birth,
            self.clock().today(),
        )
    }

    fn describe_customer(&self, customer: &Customer) -> error_stack::Result<CustomerDto, KernelError> {
        CustomerDto::from_entity(customer.clone(), self.clock().today())
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id().as_ref()))]
    fn pay_off_fine(
        &self,
        customer: &mut Customer,
        dto: PayOffFineDto,
    ) -> error_stack::Result<CustomerDto, KernelError> {
        customer.pay_off_fine(Pence::new(dto.amount))?;
        if customer.outstanding_fine() < &Pence::ZERO {
            tracing::info!(balance = %customer.outstanding_fine(), "Customer is in credit");
        }
        self.describe_customer(customer)
    }
}

impl<T> CustomerService for T where T: DependOnClock {}
