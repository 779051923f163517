use crate::locale::Notice;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("`{0}` email has invalid format")]
    InvalidEmail(String),
    #[error("`{0}` is not an integral number of days")]
    NonIntegralDays(String),
    #[error("{0} days before notification is outside of the allowed 1..=30 range")]
    DaysOutOfRange(i64),
    #[error("`{0}` is not a valid notification type")]
    UnknownNotificationType(String),
    #[error("`{0}` is not a valid delivery status")]
    UnknownDeliveryStatus(String),
    #[error("Holiday date is longer than {max} graphemes")]
    HolidayDateTooLong { max: usize },
    #[error("Holiday name is longer than {max} graphemes")]
    HolidayNameTooLong { max: usize },
}

impl ValidationError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::MalformedRequest(_) => Notice::MalformedRequest,
            Self::InvalidEmail(_) => Notice::InvalidEmail,
            Self::NonIntegralDays(_) | Self::DaysOutOfRange(_) => {
                Notice::InvalidDaysBeforeNotification
            }
            Self::UnknownNotificationType(_) => Notice::InvalidNotificationType,
            Self::UnknownDeliveryStatus(_) => Notice::InvalidDeliveryStatus,
            Self::HolidayDateTooLong { .. } => Notice::InvalidHolidayDate,
            Self::HolidayNameTooLong { .. } => Notice::InvalidHolidayName,
        }
    }
}
