use chrono::{DateTime, Local, TimeDelta};
use rand::Rng;

use crate::{
    fleet::Site,
    quantity::{percent::Percent, power::Kilowatts},
    telemetry::{Dataset, Point, Series},
};

/// Spacing between consecutive samples, independent of the wall-clock tick cadence.
pub const SAMPLE_INTERVAL: TimeDelta = TimeDelta::minutes(5);

const POWER_FLOOR: Kilowatts = Kilowatts(0.2);

/// Advance every site's series by exactly one synthetic sample.
///
/// Pure: the caller owns scheduling and keeps the returned dataset as the new
/// current state. Sites absent from the input dataset are seeded in place.
pub fn tick<R: Rng>(
    sites: &[Site],
    dataset: &Dataset,
    now: DateTime<Local>,
    rng: &mut R,
) -> Dataset {
    let mut next = Dataset::default();
    for site in sites {
        let series = dataset.series(&site.id).cloned().unwrap_or_default();
        let prev = series.latest().copied().unwrap_or_else(|| seed_point(site, now, rng));
        let point = next_point(site, &prev, rng);
        next.insert(site.id.clone(), series.extended(point));
    }
    next
}

/// Synthetic predecessor for a site with no history, one interval in the past.
fn seed_point<R: Rng>(site: &Site, now: DateTime<Local>, rng: &mut R) -> Point {
    let power = clamp(uniform(rng, 0.3, site.capacity.0), POWER_FLOOR.0, site.capacity.0);
    Point::new(now - SAMPLE_INTERVAL, Kilowatts(power), round_percent(uniform(rng, 40.0, 90.0)))
}

fn next_point<R: Rng>(site: &Site, prev: &Point, rng: &mut R) -> Point {
    let variance = site.capacity.0 * 0.2;
    let power = clamp(
        prev.power.0 + uniform(rng, -variance, variance),
        POWER_FLOOR.0,
        site.capacity.0,
    );

    // Asymmetric drift: the fleet trends slowly towards discharge.
    let battery = clamp(prev.battery.as_f64() + uniform(rng, -1.5, 1.0), 20.0, 100.0);

    Point::new(
        prev.time + SAMPLE_INTERVAL,
        Kilowatts(power).rounded(),
        round_percent(battery),
    )
}

fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.r#gen::<f64>()
}

/// The upper bound is applied last: crossed bounds resolve to the upper one,
/// so a capacity below the floor yields the capacity.
fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    upper.min(lower.max(value))
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(value: f64) -> Percent {
    Percent(value.round() as u8)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::fleet::SiteKind;

    fn site(capacity: f64) -> Site {
        Site {
            id: "s-test-01".to_string(),
            name: "Test Array".to_string(),
            lat: 13.0,
            lon: 77.5,
            kind: SiteKind::Solar,
            capacity: Kilowatts(capacity),
            owner: "Test Co-op".to_string(),
            district: "Tumakuru".to_string(),
            installed_on: chrono::NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap()
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn tick_appends_one_point_per_site() {
        let sites = [site(100.0)];
        let mut rng = seeded();
        let mut dataset = Dataset::default();
        for expected_len in 1..=5 {
            dataset = tick(&sites, &dataset, fixed_now(), &mut rng);
            assert_eq!(dataset.series("s-test-01").unwrap().len(), expected_len);
        }
    }

    #[test]
    fn tick_bounds_the_window() {
        let sites = [site(100.0)];
        let mut rng = seeded();
        let seed: Series = (0..60)
            .map(|i| {
                Point::new(
                    fixed_now() + TimeDelta::minutes(i * 5),
                    Kilowatts(50.0),
                    Percent(50),
                )
            })
            .collect();
        let mut dataset = Dataset::default();
        dataset.insert("s-test-01".to_string(), seed);

        let next = tick(&sites, &dataset, fixed_now(), &mut rng);
        assert_eq!(next.series("s-test-01").unwrap().len(), 49);

        let again = tick(&sites, &next, fixed_now(), &mut rng);
        assert_eq!(again.series("s-test-01").unwrap().len(), 49);
    }

    #[test]
    fn next_sample_is_one_interval_later() {
        let sites = [site(100.0)];
        let mut rng = seeded();
        let last = fixed_now() + TimeDelta::minutes(35);
        let seed: Series = [Point::new(last, Kilowatts(50.0), Percent(50))].into_iter().collect();
        let mut dataset = Dataset::default();
        dataset.insert("s-test-01".to_string(), seed);

        // Wall clock far ahead of the series must not matter.
        let next = tick(&sites, &dataset, fixed_now() + TimeDelta::hours(6), &mut rng);
        let latest = *next.series("s-test-01").unwrap().latest().unwrap();
        assert_eq!(latest.time, last + SAMPLE_INTERVAL);
    }

    #[test]
    fn cold_start_lands_on_now() {
        let sites = [site(100.0)];
        let mut rng = seeded();
        let next = tick(&sites, &Dataset::default(), fixed_now(), &mut rng);
        let latest = *next.series("s-test-01").unwrap().latest().unwrap();
        assert_eq!(latest.time, fixed_now());
    }

    #[test]
    fn power_and_battery_stay_clamped() {
        let capacity = 10.0;
        let sites = [site(capacity)];
        let mut rng = seeded();
        let mut dataset = Dataset::default();
        for _ in 0..200 {
            dataset = tick(&sites, &dataset, fixed_now(), &mut rng);
            let latest = *dataset.series("s-test-01").unwrap().latest().unwrap();
            assert!(latest.power.0 >= POWER_FLOOR.0);
            assert!(latest.power.0 <= capacity);
            assert!(latest.battery.0 >= 20);
            assert!(latest.battery.0 <= 100);
        }
    }

    #[test]
    fn out_of_range_history_is_pulled_back() {
        let sites = [site(10.0)];
        let mut rng = seeded();
        let seed: Series =
            [Point::new(fixed_now(), Kilowatts(500.0), Percent(5))].into_iter().collect();
        let mut dataset = Dataset::default();
        dataset.insert("s-test-01".to_string(), seed);
        let next = tick(&sites, &dataset, fixed_now(), &mut rng);
        let latest = *next.series("s-test-01").unwrap().latest().unwrap();
        assert!(latest.power.0 <= 10.0);
        assert!(latest.battery.0 >= 20);
    }

    #[test]
    fn degenerate_capacity_resolves_to_the_capacity() {
        let sites = [site(0.1)];
        let mut rng = seeded();
        let next = tick(&sites, &Dataset::default(), fixed_now(), &mut rng);
        let latest = *next.series("s-test-01").unwrap().latest().unwrap();
        approx::assert_abs_diff_eq!(latest.power.0, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn every_listed_site_is_present() {
        let mut cold = site(50.0);
        cold.id = "s-test-02".to_string();
        let sites = [site(100.0), cold];
        let mut rng = seeded();
        let mut dataset = Dataset::default();
        let seed: Series =
            [Point::new(fixed_now(), Kilowatts(50.0), Percent(50))].into_iter().collect();
        dataset.insert("s-test-01".to_string(), seed);

        let next = tick(&sites, &dataset, fixed_now(), &mut rng);
        assert_eq!(next.series("s-test-01").unwrap().len(), 2);
        assert_eq!(next.series("s-test-02").unwrap().len(), 1);
    }

    #[test]
    fn input_dataset_is_untouched() {
        let sites = [site(100.0)];
        let mut rng = seeded();
        let mut dataset = Dataset::default();
        let seed: Series =
            [Point::new(fixed_now(), Kilowatts(50.0), Percent(50))].into_iter().collect();
        dataset.insert("s-test-01".to_string(), seed);

        let before = dataset.clone();
        let _ = tick(&sites, &dataset, fixed_now(), &mut rng);
        assert_eq!(dataset, before);
    }

    #[test]
    fn same_seed_same_run() {
        let sites = [site(100.0)];
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut dataset = Dataset::default();
            for _ in 0..10 {
                dataset = tick(&sites, &dataset, fixed_now(), &mut rng);
            }
            dataset
        };
        assert_eq!(run(7), run(7));
    }
}
