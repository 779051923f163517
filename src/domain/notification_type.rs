use super::ValidationError;
use serde::Serialize;
use sqlx::{
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
    Decode, Sqlite, Type,
};

/// Holiday category that triggers a reminder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    #[default]
    All,
    National,
    State,
    Municipal,
    Judiciary,
}

impl NotificationType {
    pub const ALL_VARIANTS: [NotificationType; 5] = [
        NotificationType::All,
        NotificationType::National,
        NotificationType::State,
        NotificationType::Municipal,
        NotificationType::Judiciary,
    ];

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "all" => Ok(NotificationType::All),
            "national" => Ok(NotificationType::National),
            "state" => Ok(NotificationType::State),
            "municipal" => Ok(NotificationType::Municipal),
            "judiciary" => Ok(NotificationType::Judiciary),
            other => Err(ValidationError::UnknownNotificationType(other.into())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::All => "all",
            NotificationType::National => "national",
            NotificationType::State => "state",
            NotificationType::Municipal => "municipal",
            NotificationType::Judiciary => "judiciary",
        }
    }
}

impl Type<Sqlite> for NotificationType {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for NotificationType {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let notification_type = <&str as Decode<'r, Sqlite>>::decode(value)?;
        Self::parse(notification_type).map_err(|e| e.into())
    }
}
