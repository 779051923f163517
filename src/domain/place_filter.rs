use serde::Serialize;
use sqlx::{
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
    Decode, Sqlite, Type,
};

/// A list of state codes or city names a subscriber wants reminders for.
///
/// An empty list means "no filter". It is persisted as `NULL` so that an omitted
/// field and an explicitly empty one end up stored the same way. A non-empty list is
/// persisted as JSON array text and read back in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlaceFilter(Vec<String>);

impl PlaceFilter {
    pub fn new(places: Vec<String>) -> Self {
        Self(places)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_column(&self) -> Result<Option<String>, serde_json::Error> {
        if self.0.is_empty() {
            return Ok(None);
        }
        serde_json::to_string(&self.0).map(Some)
    }

    pub fn from_column(column: Option<&str>) -> Result<Self, serde_json::Error> {
        match column {
            Some(json) => serde_json::from_str(json).map(Self),
            None => Ok(Self::default()),
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl AsRef<[String]> for PlaceFilter {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for PlaceFilter {
    fn from(places: Vec<String>) -> Self {
        Self(places)
    }
}

impl Type<Sqlite> for PlaceFilter {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for PlaceFilter {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let json = <&str as Decode<'r, Sqlite>>::decode(value)?;
        Self::from_column(Some(json)).map_err(|e| e.into())
    }
}
