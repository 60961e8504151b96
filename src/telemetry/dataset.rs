use std::collections::BTreeMap;

use crate::telemetry::Series;

/// Telemetry keyed by site identifier. May be sparse on a cold start.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Dataset(BTreeMap<String, Series>);

impl Dataset {
    pub fn series(&self, site_id: &str) -> Option<&Series> {
        self.0.get(site_id)
    }

    pub fn insert(&mut self, site_id: String, series: Series) {
        self.0.insert(site_id, series);
    }

    pub fn n_sites(&self) -> usize {
        self.0.len()
    }
}
