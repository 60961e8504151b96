use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    fleet::{CarbonFactors, DistrictMetrics, Site},
    prelude::*,
    telemetry::Dataset,
};

/// Static inputs loaded once at start-up.
pub struct Fixtures {
    pub sites: Vec<Site>,
    pub telemetry: Dataset,
    pub districts: Vec<DistrictMetrics>,
    pub carbon: CarbonFactors,
}

impl Fixtures {
    #[instrument(skip_all)]
    pub fn load(
        sites: &Path,
        telemetry: &Path,
        districts: &Path,
        carbon_factors: &Path,
    ) -> Result<Self> {
        let this = Self {
            sites: read_json(sites)?,
            telemetry: read_json(telemetry)?,
            districts: read_json(districts)?,
            carbon: read_json(carbon_factors)?,
        };
        info!(
            n_sites = this.sites.len(),
            n_seeded = this.telemetry.n_sites(),
            n_districts = this.districts.len(),
            "loaded fixtures",
        );
        Ok(this)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))
}
