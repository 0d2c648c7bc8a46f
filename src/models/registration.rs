use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender choice offered by the registration form, sent as its numeric code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
            Gender::Other => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            3 => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn all() -> [Gender; 3] {
        [Gender::Male, Gender::Female, Gender::Other]
    }
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> Self {
        gender.code()
    }
}

impl TryFrom<u8> for Gender {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Gender::from_code(code).ok_or_else(|| format!("unknown gender code {code}"))
    }
}

/// Request body accepted by both registration endpoints.
///
/// `email` and `password` are only present for email registration; the OAuth
/// continuation body leaves them out entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    #[serde(with = "iso_midnight")]
    pub date_of_birth: NaiveDate,
    pub first_name: String,
    pub gender: Gender,
    pub privacy: bool,
    pub terms_conditions: bool,
    pub referrer_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Pages of the host application reachable from the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Login,
    Register,
    Onboarding,
}

impl AppPage {
    /// Value persisted under the current page key.
    pub fn index(self) -> u8 {
        match self {
            AppPage::Login => 0,
            AppPage::Register => 1,
            AppPage::Onboarding => 2,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            AppPage::Login => "/login",
            AppPage::Register => "/register",
            AppPage::Onboarding => "/onboarding",
        }
    }
}

/// Dates of birth travel as an ISO-8601 timestamp at UTC midnight, which is
/// what the backend parses for `Date` fields.
mod iso_midnight {
    use chrono::{NaiveDate, NaiveDateTime, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        let stamp = date
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        serializer.serialize_str(&stamp)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(&raw) {
            return Ok(stamp.naive_utc().date());
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(stamp.date());
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}
