use chrono::{DateTime, Local, NaiveTime, TimeZone};

use crate::{
    carbon,
    quantity::{
        carbon::{EmissionFactor, Kilograms},
        energy::KilowattHours,
    },
    simulator::SAMPLE_INTERVAL,
    telemetry::Series,
};

/// Midnight of the reference instant's calendar day, in local time.
pub fn start_of_day(now: DateTime<Local>) -> DateTime<Local> {
    Local
        .from_local_datetime(&now.date_naive().and_time(NaiveTime::MIN))
        .earliest()
        .unwrap_or(now)
}

/// Energy generated today, assuming uniform sampling at [`SAMPLE_INTERVAL`].
///
/// The interval constant is shared with the simulator; irregular spacing would
/// make this an over- or under-count.
pub fn energy_today(series: &Series, now: DateTime<Local>) -> KilowattHours {
    series
        .since(start_of_day(now))
        .map(|point| carbon::energy(point.power, SAMPLE_INTERVAL))
        .sum()
}

pub fn co2_today(series: &Series, now: DateTime<Local>, factor: EmissionFactor) -> Kilograms {
    carbon::avoided(energy_today(series, now), factor)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::TimeDelta;

    use super::*;
    use crate::{
        quantity::{percent::Percent, power::Kilowatts},
        telemetry::Point,
    };

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 11, 3, 12, 0, 0).unwrap()
    }

    fn series_around_midnight() -> Series {
        let midnight = start_of_day(noon());
        [-10, -5, 0, 5]
            .into_iter()
            .map(|minutes| {
                Point::new(midnight + TimeDelta::minutes(minutes), Kilowatts(12.0), Percent(50))
            })
            .collect()
    }

    #[test]
    fn yesterday_is_excluded() {
        // Two of the four points precede midnight; the boundary point stays.
        let energy = energy_today(&series_around_midnight(), noon());
        assert_abs_diff_eq!(energy.0, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_series_yields_zero() {
        assert_eq!(energy_today(&Series::default(), noon()), KilowattHours::ZERO);
    }

    #[test]
    fn co2_follows_the_energy() {
        let co2 = co2_today(&series_around_midnight(), noon(), EmissionFactor(0.82));
        assert_abs_diff_eq!(co2.0, 1.64, epsilon = 1e-9);
    }
}
