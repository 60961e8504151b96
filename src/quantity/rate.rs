use std::fmt::{Debug, Display, Formatter};

/// Energy tariff per kilowatt-hour.
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::FromStr,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct KilowattHourRate(pub f64);

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
