use super::ValidationError;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Display name of a holiday at the time a reminder was sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HolidayName(String);

impl HolidayName {
    pub const MAX_GRAPHEMES: usize = 255;

    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.graphemes(true).count() > Self::MAX_GRAPHEMES {
            return Err(ValidationError::HolidayNameTooLong {
                max: Self::MAX_GRAPHEMES,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for HolidayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
