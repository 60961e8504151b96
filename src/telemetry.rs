mod dataset;
mod point;
mod series;

pub use self::{dataset::Dataset, point::Point, series::Series};
