use chrono::{DateTime, Local};

use crate::telemetry::Point;

/// Retained points per site, not counting the sample appended on a tick.
pub const WINDOW: usize = 48;

/// Time-ordered samples for one site, bounded by the trailing window.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Series(Vec<Point>);

impl Series {
    pub fn latest(&self) -> Option<&Point> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Copy with the window trimmed from the front and the new sample appended.
    #[must_use]
    pub fn extended(&self, next: Point) -> Self {
        let skip = self.0.len().saturating_sub(WINDOW);
        let mut points = self.0[skip..].to_vec();
        points.push(next);
        Self(points)
    }

    /// Points not before the given instant.
    pub fn since(&self, start: DateTime<Local>) -> impl Iterator<Item = &Point> {
        self.0.iter().filter(move |point| point.time >= start)
    }

    /// The trailing `count` points, oldest first.
    pub fn recent(&self, count: usize) -> &[Point] {
        &self.0[self.0.len().saturating_sub(count)..]
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<T: IntoIterator<Item = Point>>(iterator: T) -> Self {
        Self(iterator.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;
    use crate::quantity::{percent::Percent, power::Kilowatts};

    fn point_at(minutes: i64) -> Point {
        let base = Local.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap();
        Point::new(base + TimeDelta::minutes(minutes), Kilowatts(1.0), Percent(50))
    }

    #[test]
    fn extended_appends() {
        let series: Series = (0..3).map(|i| point_at(i * 5)).collect();
        let extended = series.extended(point_at(15));
        assert_eq!(extended.len(), 4);
        assert_eq!(extended.latest(), Some(&point_at(15)));
    }

    #[test]
    fn extended_trims_to_window() {
        let series: Series = (0..60).map(|i| point_at(i * 5)).collect();
        let extended = series.extended(point_at(300));
        assert_eq!(extended.len(), WINDOW + 1);
        assert_eq!(extended.points()[0], point_at((60 - 48) * 5));
    }

    #[test]
    fn since_keeps_the_boundary_point() {
        let series: Series = (0..4).map(|i| point_at(i * 5)).collect();
        let kept: Vec<_> = series.since(point_at(5).time).collect();
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0], &point_at(5));
    }

    #[test]
    fn recent_handles_short_series() {
        let series: Series = (0..3).map(|i| point_at(i * 5)).collect();
        assert_eq!(series.recent(8).len(), 3);
        assert_eq!(series.recent(2), &[point_at(5), point_at(10)]);
    }
}
