use std::cmp::Ordering;

use chrono::{DateTime, Local};
use itertools::Itertools;

use crate::{
    carbon,
    fleet::{CarbonFactors, Site},
    quantity::{carbon::Kilograms, energy::KilowattHours, power::Kilowatts},
    statistics::daily,
    telemetry::Dataset,
};

/// Fleet-wide aggregates over the latest samples and today's window.
#[derive(Clone, Debug)]
pub struct FleetSnapshot {
    pub live_power: Kilowatts,
    pub energy_today: KilowattHours,
    pub co2_today: Kilograms,

    /// Mean of the latest state-of-charge readings; missing series count as zero.
    pub mean_battery_pct: f64,

    /// Site with the highest live output.
    pub featured_site_id: Option<String>,
}

impl FleetSnapshot {
    pub fn collect(
        sites: &[Site],
        dataset: &Dataset,
        factors: &CarbonFactors,
        now: DateTime<Local>,
    ) -> Self {
        let latest = |site: &Site| {
            dataset.series(&site.id).and_then(|series| series.latest().copied())
        };

        let live_power = sites
            .iter()
            .map(|site| latest(site).map_or(Kilowatts::ZERO, |point| point.power))
            .sum();

        let energy_today: KilowattHours = sites
            .iter()
            .filter_map(|site| dataset.series(&site.id))
            .map(|series| daily::energy_today(series, now))
            .sum();

        let mean_battery_pct = if sites.is_empty() {
            0.0
        } else {
            let total: f64 = sites
                .iter()
                .map(|site| latest(site).map_or(0.0, |point| point.battery.as_f64()))
                .sum();
            total / sites.len() as f64
        };

        let featured_site_id = sites
            .iter()
            .sorted_by(|lhs, rhs| {
                let lhs_power = latest(lhs).map_or(0.0, |point| point.power.0);
                let rhs_power = latest(rhs).map_or(0.0, |point| point.power.0);
                rhs_power.partial_cmp(&lhs_power).unwrap_or(Ordering::Equal)
            })
            .next()
            .map(|site| site.id.clone());

        Self {
            live_power,
            energy_today,
            co2_today: carbon::avoided(energy_today, factors.grid_average),
            mean_battery_pct,
            featured_site_id,
        }
    }
}
