use chrono::TimeDelta;

use crate::quantity::{
    carbon::{EmissionFactor, Kilograms},
    energy::KilowattHours,
    power::Kilowatts,
};

/// National grid average, used when no per-kind factor applies.
pub const DEFAULT_GRID_FACTOR: EmissionFactor = EmissionFactor(0.82);

/// Energy produced at constant power over the interval.
///
/// Non-finite power yields zero so downstream sums stay well-defined.
pub fn energy(power: Kilowatts, interval: TimeDelta) -> KilowattHours {
    if !power.0.is_finite() {
        return KilowattHours::ZERO;
    }
    power * interval
}

/// Emissions displaced by the given generation, rounded to grams.
///
/// Non-finite energy yields zero, same as [`energy`].
pub fn avoided(energy: KilowattHours, factor: EmissionFactor) -> Kilograms {
    if !energy.0.is_finite() {
        return Kilograms::ZERO;
    }
    let kilograms = energy * factor;
    Kilograms((kilograms.0 * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::simulator::SAMPLE_INTERVAL;

    #[test]
    fn energy_over_an_hour() {
        assert_eq!(energy(Kilowatts(10.0), TimeDelta::minutes(60)), KilowattHours(10.0));
    }

    #[test]
    fn energy_over_a_sample_interval() {
        assert_abs_diff_eq!(
            energy(Kilowatts(10.0), SAMPLE_INTERVAL).0,
            0.8333,
            epsilon = 1e-4
        );
    }

    #[test]
    fn non_finite_power_yields_zero() {
        assert_eq!(energy(Kilowatts(f64::NAN), TimeDelta::minutes(60)), KilowattHours::ZERO);
        assert_eq!(
            energy(Kilowatts(f64::INFINITY), TimeDelta::minutes(60)),
            KilowattHours::ZERO
        );
    }

    #[test]
    fn avoided_at_the_grid_factor() {
        assert_abs_diff_eq!(
            avoided(KilowattHours(10.0), DEFAULT_GRID_FACTOR).0,
            8.2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn avoided_rounds_to_grams() {
        assert_eq!(
            avoided(KilowattHours(1.23456), EmissionFactor(1.0)),
            Kilograms(1.235)
        );
    }

    #[test]
    fn non_finite_energy_yields_zero() {
        assert_eq!(avoided(KilowattHours(f64::INFINITY), DEFAULT_GRID_FACTOR), Kilograms::ZERO);
        assert_eq!(avoided(KilowattHours(f64::NAN), DEFAULT_GRID_FACTOR), Kilograms::ZERO);
    }
}
