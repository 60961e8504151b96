use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::quantity::power::Kilowatts;

/// Static site descriptor, loaded once from the fixture.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,

    #[serde(rename = "type")]
    pub kind: SiteKind,

    #[serde(rename = "capacity_kw")]
    pub capacity: Kilowatts,

    pub owner: String,
    pub district: String,

    #[serde(rename = "installation_date")]
    pub installed_on: NaiveDate,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Solar,
    Wind,
    Hybrid,

    /// Anything the fixture reports that we do not model; carried as-is.
    #[serde(untagged)]
    Other(String),
}

impl Display for SiteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar => write!(f, "solar"),
            Self::Wind => write!(f, "wind"),
            Self::Hybrid => write!(f, "hybrid"),
            Self::Other(kind) => write!(f, "{kind}"),
        }
    }
}
