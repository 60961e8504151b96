mod carbon_factors;
mod district;
mod fixtures;
mod site;

pub use self::{
    carbon_factors::CarbonFactors,
    district::DistrictMetrics,
    fixtures::Fixtures,
    site::{Site, SiteKind},
};
