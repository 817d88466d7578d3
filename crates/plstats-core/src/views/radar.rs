// Defensive radar: six fixed axes, closed polygon.

use serde::Serialize;

use crate::dataset::PlayerProfile;

/// Axis order shared by the radar and the proportion tree.
pub const DEFENSIVE_AXES: [&str; 6] = [
    "Wins",
    "Losses",
    "Tackles",
    "Offsides",
    "Fouls",
    "Interceptions",
];

pub const RADAR_COLOR: &str = "#303F1C";

/// The six defensive metrics in `DEFENSIVE_AXES` order.
pub fn defensive_metrics(profile: &PlayerProfile) -> [u32; 6] {
    [
        profile.wins,
        profile.losses,
        profile.tackles,
        profile.offsides,
        profile.fouls,
        profile.interceptions,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub axis: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefensiveRadar {
    /// Seven points: the six axes followed by the first axis again.
    pub points: Vec<RadarPoint>,
    pub color: &'static str,
    pub filled: bool,
}

impl DefensiveRadar {
    /// The six distinct axes, without the closing point.
    pub fn axes(&self) -> &[RadarPoint] {
        &self.points[..self.points.len().saturating_sub(1)]
    }

    pub fn max_value(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }

    #[cfg(test)]
    fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

pub fn derive(profile: &PlayerProfile) -> DefensiveRadar {
    let mut points: Vec<RadarPoint> = DEFENSIVE_AXES
        .iter()
        .zip(defensive_metrics(profile))
        .map(|(&axis, value)| RadarPoint { axis, value })
        .collect();
    points.push(points[0]);

    DefensiveRadar {
        points,
        color: RADAR_COLOR,
        filled: true,
    }
}
