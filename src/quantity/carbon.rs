use std::fmt::{Debug, Display, Formatter};

/// Avoided-emissions mass.
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Kilograms(pub f64);

impl Kilograms {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Kilograms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg", self.0)
    }
}

impl Debug for Kilograms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kg", self.0)
    }
}

/// Kilograms of CO₂ per kilowatt-hour of grid energy displaced.
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
pub struct EmissionFactor(pub f64);

impl Display for EmissionFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kg/kWh", self.0)
    }
}

impl Debug for EmissionFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kg/kWh", self.0)
    }
}
