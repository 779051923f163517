use super::ValidationError;
use serde::Serialize;
use serde_json::Number;
use sqlx::{
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
    Decode, Sqlite, Type,
};

/// How many days ahead of a matching holiday a reminder fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DaysBeforeNotification(u8);

impl DaysBeforeNotification {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;

    pub fn parse(days: i64) -> Result<Self, ValidationError> {
        match u8::try_from(days) {
            Ok(d) if (Self::MIN..=Self::MAX).contains(&d) => Ok(Self(d)),
            _ => Err(ValidationError::DaysOutOfRange(days)),
        }
    }

    /// Accepts any JSON number with no fractional part, so `14.0` is as good as `14`.
    pub fn parse_number(number: &Number) -> Result<Self, ValidationError> {
        if let Some(days) = number.as_i64() {
            return Self::parse(days);
        }
        if number.as_u64().is_some() {
            return Err(ValidationError::DaysOutOfRange(i64::MAX));
        }

        match number.as_f64() {
            Some(days) if days.is_finite() && days.fract() == 0.0 => Self::parse(days as i64),
            _ => Err(ValidationError::NonIntegralDays(number.to_string())),
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for DaysBeforeNotification {
    fn default() -> Self {
        Self(7)
    }
}

impl From<DaysBeforeNotification> for i64 {
    fn from(days: DaysBeforeNotification) -> Self {
        i64::from(days.0)
    }
}

impl Type<Sqlite> for DaysBeforeNotification {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <i64 as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for DaysBeforeNotification {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let days = i64::decode(value)?;
        Self::parse(days).map_err(|e| e.into())
    }
}
