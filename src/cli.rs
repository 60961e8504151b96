use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    fleet::Fixtures,
    prelude::*,
    quantity::{power::Kilowatts, rate::KilowattHourRate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the live fleet view: one simulator tick per refresh.
    #[clap(name = "watch")]
    Watch(WatchArgs),

    /// One-shot site detail: live stats and the recent carbon ledger.
    #[clap(name = "site")]
    Site(SiteArgs),

    /// District metrics and the fleet snapshot from the seed telemetry.
    #[clap(name = "report")]
    Report(ReportArgs),

    /// Model a deployment scenario and its payback.
    #[clap(name = "plan")]
    Plan(PlanArgs),

    /// Ask the generative assistant for rollout guidance.
    #[clap(name = "ask")]
    Ask(AskArgs),
}

#[derive(Parser)]
pub struct FixtureArgs {
    #[clap(long = "sites", env = "SITES_PATH", default_value = "fixtures/sites.json")]
    pub sites: PathBuf,

    #[clap(long = "telemetry", env = "TELEMETRY_PATH", default_value = "fixtures/telemetry.json")]
    pub telemetry: PathBuf,

    #[clap(long = "districts", env = "DISTRICTS_PATH", default_value = "fixtures/districts.json")]
    pub districts: PathBuf,

    #[clap(
        long = "carbon-factors",
        env = "CARBON_FACTORS_PATH",
        default_value = "fixtures/carbon_factors.json"
    )]
    pub carbon_factors: PathBuf,
}

impl FixtureArgs {
    pub fn load(&self) -> Result<Fixtures> {
        Fixtures::load(&self.sites, &self.telemetry, &self.districts, &self.carbon_factors)
    }
}

#[derive(Copy, Clone, Parser)]
pub struct SimulationArgs {
    /// Seed for the telemetry random walk, for reproducible runs.
    #[clap(long, env = "SIMULATION_SEED")]
    pub seed: Option<u64>,
}

impl SimulationArgs {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    pub fixtures: FixtureArgs,

    #[clap(flatten)]
    pub simulation: SimulationArgs,

    /// Wall-clock refresh cadence in seconds.
    #[clap(long, default_value = "4", env = "REFRESH_SECONDS")]
    pub refresh_seconds: u64,

    /// Stop after this many ticks instead of running until interrupted.
    #[clap(long)]
    pub ticks: Option<u64>,

    /// Start from an empty dataset instead of the telemetry seed.
    #[clap(long)]
    pub cold_start: bool,
}

#[derive(Parser)]
pub struct SiteArgs {
    /// Site identifier from the sites fixture.
    pub id: String,

    #[clap(flatten)]
    pub fixtures: FixtureArgs,

    #[clap(flatten)]
    pub simulation: SimulationArgs,

    /// Advance the series this many samples before rendering.
    #[clap(long, default_value = "1")]
    pub ticks: u64,

    /// Number of readings in the carbon ledger.
    #[clap(long, default_value = "8")]
    pub ledger: usize,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub fixtures: FixtureArgs,
}

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(flatten)]
    pub fixtures: FixtureArgs,

    /// Target district; defaults to the first one in the fixture.
    #[clap(long)]
    pub district: Option<String>,

    /// Installed capacity of the modelled deployment.
    #[clap(long = "capacity-kw", default_value = "5")]
    pub capacity: Kilowatts,

    /// Capital subsidy, per cent of CAPEX.
    #[clap(long = "subsidy-pct", default_value = "0")]
    pub subsidy_pct: f64,

    #[clap(long, default_value = "0.07")]
    pub tariff: KilowattHourRate,

    /// Annual opex as a share of net CAPEX.
    #[clap(long = "opex-pct", default_value = "0.02")]
    pub opex_pct: f64,
}

#[derive(Parser)]
pub struct AskArgs {
    /// Prompt forwarded verbatim to the assistant.
    pub prompt: String,

    #[clap(long = "api-key", env = "GENERATIVE_AI_API_KEY", default_value = "")]
    pub api_key: String,
}
