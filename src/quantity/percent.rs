use std::fmt::{Debug, Display, Formatter};

/// Battery state of charge as a whole-percent reading.
#[derive(
    Copy,
    Clone,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::From,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Percent(pub u8);

impl Percent {
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
