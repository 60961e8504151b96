use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
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
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    /// Round to whole paise.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
