//! Delimited text ingestion
//!
//! Parses comma-separated text into ordered (x, y) observations for
//! the regression engine.

use crate::types::Point;

/// Parse CSV text into observations
///
/// The first line is a header and is skipped. Each remaining line is
/// split on commas; a line is kept only when its first two fields both
/// parse as finite numbers. Malformed lines are dropped silently, in
/// input order, and an empty result is not an error here (the
/// regression caller reports insufficient data).
pub fn parse_observations(text: &str) -> Vec<Point> {
    text.trim()
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut fields = line.split(',');
            let x = fields.next()?.trim().parse::<f64>().ok()?;
            let y = fields.next()?.trim().parse::<f64>().ok()?;
            (x.is_finite() && y.is_finite()).then_some(Point::new(x, y))
        })
        .collect()
}
