use chrono::{DateTime, Local};

use crate::quantity::{percent::Percent, power::Kilowatts};

/// One telemetry sample.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    derive_more::Constructor,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Point {
    #[serde(rename = "timestamp")]
    pub time: DateTime<Local>,

    #[serde(rename = "power_kw")]
    pub power: Kilowatts,

    #[serde(rename = "battery_pct")]
    pub battery: Percent,
}
