use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Classification reported by the holiday API in its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HolidayType {
    Gazetted,
    Restricted,
    Optional,
    Other(String),
}

impl HolidayType {
    pub fn as_str(&self) -> &str {
        match self {
            HolidayType::Gazetted => "Gazetted Holiday",
            HolidayType::Restricted => "Restricted Holiday",
            HolidayType::Optional => "Optional Holiday",
            HolidayType::Other(value) => value,
        }
    }
}

impl FromStr for HolidayType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Gazetted Holiday" => HolidayType::Gazetted,
            "Restricted Holiday" => HolidayType::Restricted,
            "Optional Holiday" => HolidayType::Optional,
            other => HolidayType::Other(other.to_string()),
        })
    }
}

impl From<String> for HolidayType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<HolidayType> for String {
    fn from(value: HolidayType) -> Self {
        value.as_str().to_string()
    }
}

impl Default for HolidayType {
    fn default() -> Self {
        HolidayType::Other(String::new())
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the yearly holiday calendar.
///
/// `day` is the weekday name exactly as the API reports it; it is trusted over
/// the weekday derived from `date`. A null or missing `name`, `type` or `day`
/// decodes as empty so the record is filtered out instead of failing the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: HolidayType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Holiday {
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        kind: HolidayType,
        day: impl Into<String>,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
            day: day.into(),
        }
    }

    pub fn is_gazetted(&self) -> bool {
        self.kind == HolidayType::Gazetted
    }
}
