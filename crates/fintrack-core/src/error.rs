use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Custom period requires start_date and end_date")]
    MissingCustomPeriod,

    #[error("Start date must be before end date")]
    InvalidCustomPeriod,
}
