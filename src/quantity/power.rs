use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::quantity::energy::KilowattHours;

/// Instantaneous power output.
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Kilowatts(pub f64);

impl Kilowatts {
    pub const ZERO: Self = Self(0.0);

    /// Round to the 10-watt resolution the telemetry feed reports.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kW", self.0)
    }
}

impl Mul<TimeDelta> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        KilowattHours(self.0 * hours)
    }
}
