use kernel::interface::clock::{Clock, DependOnClock};
use kernel::prelude::entity::{format_date, Customer, Rental, Store};
use kernel::KernelError;

use crate::transfer::{CreateRentalDto, ReturnDto, ReturnRentalDto};

pub trait RentalService: 'static + Sync + Send + DependOnClock {
    #[tracing::instrument(skip(self, store, customer), fields(customer_id = %customer.id().as_ref()))]
    fn rent_video(
        &self,
        store: &mut Store,
        customer: &Customer,
        dto: CreateRentalDto,
    ) -> error_stack::Result<Rental, KernelError> {
        let rental = store.rent_video(&dto.title, customer, self.clock().now())?;
        tracing::info!(due = %rental.due_date().as_ref(), "Rental issued");
        Ok(rental)
    }

    #[tracing::instrument(skip(self, store, rental, customer), fields(title = %rental.video_title()))]
    fn return_video(
        &self,
        store: &mut Store,
        rental: &Rental,
        customer: &mut Customer,
        dto: ReturnRentalDto,
    ) -> error_stack::Result<ReturnDto, KernelError> {
        let fine = store.return_video(rental, customer, &dto.return_date)?;
        Ok(ReturnDto {
            fine: fine.into(),
            outstanding_fine: (*customer.outstanding_fine()).into(),
        })
    }

    /// Returns the rental dated by the clock.
    fn return_video_today(
        &self,
        store: &mut Store,
        rental: &Rental,
        customer: &mut Customer,
    ) -> error_stack::Result<ReturnDto, KernelError> {
        let return_date = format_date(self.clock().today())?;
        self.return_video(store, rental, customer, ReturnRentalDto { return_date })
    }
}

impl<T> RentalService for T where T: DependOnClock {}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use crate::service::test_support::TestModule;
    use crate::service::{CustomerService, RentalService, StoreService};
    use crate::transfer::{
        CreateCustomerDto, CreateRentalDto, CreateStoreDto, CreateVideoDto, RentalDto,
        ReturnRentalDto,
    };
    use kernel::prelude::entity::{Customer, Store};
    use kernel::KernelError;

    fn setup(module: &TestModule) -> error_stack::Result<(Store, Customer), KernelError> {
        let store = module.open_store(CreateStoreDto {
            vending_machine: false,
            videos: vec![
                CreateVideoDto {
                    title: "The Matrix".to_string(),
                    year: 1999,
                    runtime: 150,
                    dvd: false,
                },
                CreateVideoDto {
                    title: "Paramount".to_string(),
                    year: 2024,
                    runtime: 150,
                    dvd: false,
                },
            ],
        })?;
        let john = module.register_customer(CreateCustomerDto {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: "24/01/1980".to_string(),
        })?;
        Ok((store, john))
    }

    fn rent(title: &str) -> CreateRentalDto {
        CreateRentalDto {
            title: title.to_string(),
        }
    }

    #[test]
    fn rental_is_due_in_two_weeks() -> error_stack::Result<(), KernelError> {
        let module = TestModule::at(datetime!(2024-09-01 10:00 UTC));
        let (mut store, john) = setup(&module)?;

        let rental = module.rent_video(&mut store, &john, rent("The Matrix"))?;
        let dto = RentalDto::try_from(rental)?;
        assert_eq!(dto.title, "The Matrix");
        assert_eq!(dto.customer_id, *john.id().as_ref());
        assert_eq!(dto.due_date, "15/09/2024");
        assert!(!store.is_available("The Matrix")?);
        Ok(())
    }

    #[test]
    fn return_early_and_late() -> error_stack::Result<(), KernelError> {
        let module = TestModule::at(datetime!(2024-09-01 10:00 UTC));
        let (mut store, mut john) = setup(&module)?;
        let matrix = module.rent_video(&mut store, &john, rent("The Matrix"))?;
        let paramount = module.rent_video(&mut store, &john, rent("Paramount"))?;

        let early = module.return_video(
            &mut store,
            &matrix,
            &mut john,
            ReturnRentalDto {
                return_date: "10/09/2024".to_string(),
            },
        )?;
        assert_eq!(early.fine, 0);
        assert_eq!(early.outstanding_fine, 0);

        let late = module.return_video(
            &mut store,
            &paramount,
            &mut john,
            ReturnRentalDto {
                return_date: "16/11/2024".to_string(),
            },
        )?;
        assert_eq!(late.fine, 1500);
        assert_eq!(late.outstanding_fine, 1500);
        Ok(())
    }

    #[test]
    fn return_today_uses_clock() -> error_stack::Result<(), KernelError> {
        let module = TestModule::at(datetime!(2024-09-01 10:00 UTC));
        let (mut store, mut john) = setup(&module)?;
        let rental = module.rent_video(&mut store, &john, rent("The Matrix"))?;

        let later = TestModule::at(datetime!(2024-10-20 18:00 UTC));
        let returned = later.return_video_today(&mut store, &rental, &mut john)?;
        assert_eq!(returned.fine, 1000);
        assert!(store.is_available("The Matrix")?);
        Ok(())
    }

    #[test]
    fn unknown_title() -> error_stack::Result<(), KernelError> {
        let module = TestModule::at(datetime!(2024-09-01 10:00 UTC));
        let (mut store, john) = setup(&module)?;
        let report = module
            .rent_video(&mut store, &john, rent("Batman"))
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::ValueValidation);
        Ok(())
    }

    #[test]
    fn rental_dto_serializes() -> error_stack::Result<(), KernelError> {
        let module = TestModule::at(datetime!(2024-09-01 10:00 UTC));
        let (mut store, john) = setup(&module)?;
        let rental = module.rent_video(&mut store, &john, rent("The Matrix"))?;

        let json = serde_json::to_value(RentalDto::try_from(rental)?).unwrap();
        assert_eq!(json["title"], "The Matrix");
        assert_eq!(json["due_date"], "15/09/2024");
        Ok(())
    }
}
