mod api;
mod carbon;
mod cli;
mod finance;
mod fleet;
mod planner;
mod prelude;
mod quantity;
mod simulator;
mod statistics;
mod tables;
mod telemetry;

use std::time::Duration;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    api::assistant::Assistant,
    cli::{Args, AskArgs, Command, PlanArgs, ReportArgs, SiteArgs, WatchArgs},
    planner::Deployment,
    prelude::*,
    statistics::fleet::FleetSnapshot,
    telemetry::Dataset,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Watch(args) => watch(&args).await,
        Command::Site(args) => site(&args),
        Command::Report(args) => report(&args),
        Command::Plan(args) => plan(&args),
        Command::Ask(args) => ask(&args).await,
    }
}

async fn watch(args: &WatchArgs) -> Result {
    if args.ticks == Some(0) {
        return Ok(());
    }
    let fixtures = args.fixtures.load()?;
    let mut rng = args.simulation.rng();
    let mut dataset =
        if args.cold_start { Dataset::default() } else { fixtures.telemetry.clone() };
    let mut ticks_left = args.ticks;
    let mut interval =
        tokio::time::interval(Duration::from_secs(args.refresh_seconds.max(1)));

    loop {
        interval.tick().await;
        let now = Local::now();
        dataset = simulator::tick(&fixtures.sites, &dataset, now, &mut rng);
        let snapshot =
            FleetSnapshot::collect(&fixtures.sites, &dataset, &fixtures.carbon, now);
        println!("{}", tables::build_fleet_table(&fixtures.sites, &dataset, &fixtures.carbon, now));
        info!(
            live_power = %snapshot.live_power,
            co2_today = %snapshot.co2_today,
            featured = snapshot.featured_site_id.as_deref().unwrap_or("—"),
            "tick",
        );

        if let Some(left) = &mut ticks_left {
            *left = left.saturating_sub(1);
            if *left == 0 {
                break;
            }
        }
    }
    Ok(())
}

fn site(args: &SiteArgs) -> Result {
    let fixtures = args.fixtures.load()?;
    let site = fixtures
        .sites
        .iter()
        .find(|site| site.id == args.id)
        .with_context(|| format!("no site `{}` in the fixture", args.id))?;
    let mut rng = args.simulation.rng();
    let now = Local::now();

    let mut dataset = Dataset::default();
    dataset.insert(
        site.id.clone(),
        fixtures.telemetry.series(&site.id).cloned().unwrap_or_default(),
    );
    for _ in 0..args.ticks {
        dataset = simulator::tick(std::slice::from_ref(site), &dataset, now, &mut rng);
    }
    let series = dataset.series(&site.id).cloned().unwrap_or_default();
    info!(
        district = %site.district,
        kind = %site.kind,
        installed_on = %site.installed_on,
        n_points = series.len(),
        "site",
    );

    println!("{}", tables::build_live_stats_table(site, &series, &fixtures.carbon, now));
    println!("{}", tables::build_ledger_table(series.recent(args.ledger), &fixtures.carbon, site));
    Ok(())
}

fn report(args: &ReportArgs) -> Result {
    let fixtures = args.fixtures.load()?;
    let now = Local::now();
    let snapshot =
        FleetSnapshot::collect(&fixtures.sites, &fixtures.telemetry, &fixtures.carbon, now);
    println!("{}", tables::build_district_table(&fixtures.districts));
    println!("{}", tables::build_snapshot_table(&snapshot));
    Ok(())
}

fn plan(args: &PlanArgs) -> Result {
    let fixtures = args.fixtures.load()?;
    let district = match &args.district {
        Some(district) => {
            ensure!(
                fixtures.districts.iter().any(|metrics| metrics.district == *district),
                "unknown district `{district}`",
            );
            district.clone()
        }
        None => fixtures
            .districts
            .first()
            .map(|metrics| metrics.district.clone())
            .context("the districts fixture is empty")?,
    };

    let deployment = Deployment::model(
        &district,
        args.capacity,
        args.subsidy_pct,
        args.tariff,
        args.opex_pct,
        &fixtures.carbon,
    );
    println!("{}", tables::build_deployment_table(&deployment));
    println!("{}", tables::build_roi_table(&deployment.roi));
    Ok(())
}

async fn ask(args: &AskArgs) -> Result {
    let assistant = Assistant::try_new(args.api_key.clone())?;
    let text = assistant.generate(&args.prompt).await?;
    if text.is_empty() {
        warn!("the assistant returned no text");
    } else {
        println!("{text}");
    }
    Ok(())
}
