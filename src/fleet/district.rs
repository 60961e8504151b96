/// Aggregated district indicators from the policy fixture.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct DistrictMetrics {
    pub district: String,
    pub installed_capacity_mw: f64,
    pub co2_reduced_tons: f64,
    pub policy_score: f64,
    pub renewable_index: f64,
}
