use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{
    carbon::{EmissionFactor, Kilograms},
    money::Money,
    rate::KilowattHourRate,
};

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
pub struct KilowattHours(pub f64);

impl KilowattHours {
    pub const ZERO: Self = Self(0.0);
}

impl Default for KilowattHours {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kWh", self.0)
    }
}

impl Mul<EmissionFactor> for KilowattHours {
    type Output = Kilograms;

    fn mul(self, rhs: EmissionFactor) -> Self::Output {
        Kilograms(self.0 * rhs.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Money;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Money(self.0 * rhs.0)
    }
}
