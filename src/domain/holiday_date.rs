use super::ValidationError;
use unicode_segmentation::UnicodeSegmentation;

/// Date of the holiday a reminder concerns, exactly as the sender supplied it.
///
/// The value is not interpreted. Only its length is bounded by the ledger column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayDate(String);

impl HolidayDate {
    pub const MAX_GRAPHEMES: usize = 10;

    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.graphemes(true).count() > Self::MAX_GRAPHEMES {
            return Err(ValidationError::HolidayDateTooLong {
                max: Self::MAX_GRAPHEMES,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for HolidayDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
