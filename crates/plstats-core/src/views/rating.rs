// Rating trend: one bar per match, rating rounded to one decimal.

use serde::Serialize;

use crate::dataset::MatchRating;

/// Bar colour shared by every rating chart.
pub const RATING_COLOR: &str = "#5A9B1A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    /// Full match name; the bar's label.
    pub match_name: String,
    /// Abbreviated label for narrow axes.
    pub match_short: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingTrend {
    pub points: Vec<RatingPoint>,
    pub color: &'static str,
}

impl RatingTrend {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest rounded rating, or `None` with no history.
    pub fn max_rating(&self) -> Option<f64> {
        self.points.iter().map(|p| p.rating).reduce(f64::max)
    }
}

/// Round half-up (away from zero) to one decimal place.
///
/// Ratings arrive as decimal text, so `7.85` is stored fractionally below
/// 7.85. The nudge is a few ULPs of the scaled value: enough to absorb the
/// parse error, too small to move a genuine `7.84999...` over the midpoint.
pub fn round_one_decimal(value: f64) -> f64 {
    const ULPS: f64 = 4.0;
    let scaled = value.abs() * 10.0;
    let nudge = scaled * f64::EPSILON * ULPS;
    let rounded = (scaled + 0.5 + nudge).floor() / 10.0;
    if rounded == 0.0 {
        0.0
    } else if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}

pub fn derive(matches: &[MatchRating]) -> RatingTrend {
    RatingTrend {
        points: matches
            .iter()
            .map(|m| RatingPoint {
                match_name: m.match_name.clone(),
                match_short: m.match_short.clone(),
                rating: round_one_decimal(m.rating),
            })
            .collect(),
        color: RATING_COLOR,
    }
}
