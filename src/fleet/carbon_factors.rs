use crate::{carbon::DEFAULT_GRID_FACTOR, fleet::SiteKind, quantity::carbon::EmissionFactor};

/// Grid emission factor with per-generation-type overrides.
#[derive(Copy, Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct CarbonFactors {
    #[serde(rename = "india_avg_grid_factor", default = "default_grid_average")]
    pub grid_average: EmissionFactor,

    #[serde(rename = "solar_factor")]
    pub solar: EmissionFactor,

    #[serde(rename = "wind_factor")]
    pub wind: EmissionFactor,
}

const fn default_grid_average() -> EmissionFactor {
    DEFAULT_GRID_FACTOR
}

impl CarbonFactors {
    /// Kinds without an override fall back to the grid average.
    pub const fn for_kind(&self, kind: &SiteKind) -> EmissionFactor {
        match kind {
            SiteKind::Solar => self.solar,
            SiteKind::Wind => self.wind,
            SiteKind::Hybrid | SiteKind::Other(_) => self.grid_average,
        }
    }
}
