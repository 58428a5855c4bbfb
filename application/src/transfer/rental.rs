use error_stack::Report;
use kernel::prelude::entity::{format_date, DestructRental, Rental};
use kernel::KernelError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRentalDto {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnRentalDto {
    /// `dd/mm/yyyy`
    pub return_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RentalDto {
    pub title: String,
    pub customer_id: Uuid,
    pub due_date: String,
}

impl TryFrom<Rental> for RentalDto {
    type Error = Report<KernelError>;

    fn try_from(value: Rental) -> Result<Self, Self::Error> {
        let DestructRental {
            video_title,
            customer_id,
            due_date,
        } = value.into_destruct();
        Ok(Self {
            title: video_title.into(),
            customer_id: customer_id.into(),
            due_date: format_date(OffsetDateTime::from(due_date).date())?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnDto {
    pub fine: i64,
    pub outstanding_fine: i64,
}
