use chrono::{DateTime, Local};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    carbon,
    finance::Roi,
    fleet::{CarbonFactors, DistrictMetrics, Site},
    planner::Deployment,
    quantity::{energy::KilowattHours, money::Money, percent::Percent},
    simulator::SAMPLE_INTERVAL,
    statistics::{daily, fleet::FleetSnapshot},
    telemetry::{Dataset, Point, Series},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn battery_cell(battery: Percent) -> Cell {
    Cell::new(battery).set_alignment(CellAlignment::Right).fg(if battery.0 >= 60 {
        Color::Green
    } else if battery.0 >= 30 {
        Color::DarkYellow
    } else {
        Color::Red
    })
}

fn payback_cell(payback_years: Option<f64>) -> Cell {
    match payback_years {
        Some(years) => Cell::new(format!("{years:.2} yrs")).fg(Color::Green),
        None => Cell::new("n/a").fg(Color::Red),
    }
}

pub fn build_fleet_table(
    sites: &[Site],
    dataset: &Dataset,
    factors: &CarbonFactors,
    now: DateTime<Local>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Site", "Kind", "District", "Power", "Battery", "Today", "CO₂ today"]);
    for site in sites {
        let latest = dataset.series(&site.id).and_then(Series::latest);
        let (power, battery) = match latest {
            Some(point) => {
                (Cell::new(point.power).set_alignment(CellAlignment::Right), battery_cell(point.battery))
            }
            None => (Cell::new("—").add_attribute(Attribute::Dim), Cell::new("—").add_attribute(Attribute::Dim)),
        };
        let energy = dataset
            .series(&site.id)
            .map_or(KilowattHours::ZERO, |series| daily::energy_today(series, now));
        let co2 = carbon::avoided(energy, factors.for_kind(&site.kind));
        table.add_row(vec![
            Cell::new(&site.name),
            Cell::new(site.kind.to_string().to_uppercase()),
            Cell::new(&site.district),
            power,
            battery,
            Cell::new(energy).set_alignment(CellAlignment::Right),
            Cell::new(co2).set_alignment(CellAlignment::Right).fg(Color::Green),
        ]);
    }
    table
}

pub fn build_snapshot_table(snapshot: &FleetSnapshot) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Fleet", "Value"]);
    table.add_row(vec![Cell::new("Live generation"), Cell::new(snapshot.live_power)]);
    table.add_row(vec![Cell::new("Energy today"), Cell::new(snapshot.energy_today)]);
    table.add_row(vec![
        Cell::new("CO₂ avoided today"),
        Cell::new(snapshot.co2_today).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Mean battery"),
        Cell::new(format!("{:.0}%", snapshot.mean_battery_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Featured site"),
        Cell::new(snapshot.featured_site_id.as_deref().unwrap_or("—")),
    ]);
    table
}

/// Recent readings with the carbon math spelled out per sample.
pub fn build_ledger_table(points: &[Point], factors: &CarbonFactors, site: &Site) -> Table {
    let factor = factors.for_kind(&site.kind);
    let mut table = new_table();
    table.set_header(vec!["Time", "Power", "Energy", "CO₂ avoided"]);
    for point in points.iter().rev() {
        let energy = carbon::energy(point.power, SAMPLE_INTERVAL);
        table.add_row(vec![
            Cell::new(point.time.format("%H:%M")),
            Cell::new(point.power).set_alignment(CellAlignment::Right),
            Cell::new(energy).set_alignment(CellAlignment::Right),
            Cell::new(carbon::avoided(energy, factor))
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
        ]);
    }
    table
}

pub fn build_district_table(districts: &[DistrictMetrics]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "District",
        "Installed (MW)",
        "CO₂ reduced (t)",
        "Policy score",
        "Renewable index",
    ]);
    for district in districts {
        table.add_row(vec![
            Cell::new(&district.district),
            Cell::new(format!("{:.1}", district.installed_capacity_mw))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", district.co2_reduced_tons))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", district.policy_score)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", district.renewable_index))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_deployment_table(deployment: &Deployment) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "District",
        "Capacity",
        "Subsidy",
        "Annual energy",
        "CO₂ avoided",
        "Payback",
    ]);
    table.add_row(vec![
        Cell::new(&deployment.district),
        Cell::new(format!("{:.1} kW", deployment.capacity.0)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0}%", deployment.subsidy_pct)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0} kWh", deployment.annual_energy.0))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1} kg", deployment.co2_avoided.0))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
        payback_cell(deployment.roi.payback_years),
    ]);
    table
}

pub fn build_roi_table(roi: &Roi) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Net CAPEX"), Cell::new(roi.net_capex)]);
    table.add_row(vec![Cell::new("Annual saving"), Cell::new(roi.annual_saving)]);
    table.add_row(vec![Cell::new("Annual opex"), Cell::new(roi.annual_opex)]);
    table.add_row(vec![
        Cell::new("Net annual benefit"),
        Cell::new(roi.net_annual_benefit).fg(if roi.net_annual_benefit > Money::ZERO {
            Color::Green
        } else {
            Color::Red
        }),
    ]);
    table.add_row(vec![Cell::new("Payback"), payback_cell(roi.payback_years)]);
    table
}

/// Single-site headline stats, the terminal cousin of the dashboard hero card.
pub fn build_live_stats_table(
    site: &Site,
    series: &Series,
    factors: &CarbonFactors,
    now: DateTime<Local>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new(&site.name).add_attribute(Attribute::Bold), Cell::new("")]);
    match series.latest() {
        Some(point) => {
            table.add_row(vec![Cell::new("Live generation"), Cell::new(point.power)]);
            table.add_row(vec![Cell::new("Battery reserve"), battery_cell(point.battery)]);
            table.add_row(vec![
                Cell::new("CO₂ avoided today"),
                Cell::new(daily::co2_today(series, now, factors.for_kind(&site.kind)))
                    .fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("Updated"),
                Cell::new(point.time.format("%H:%M:%S")).add_attribute(Attribute::Dim),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Awaiting telemetry signal").add_attribute(Attribute::Dim),
                Cell::new(""),
            ]);
        }
    }
    table
}
