// Shot breakdown: grouped bars per match under a fixed three-category legend.
//
// The legend (order and colours) never depends on the data, so every player's
// chart reads the same way.

use serde::Serialize;

use crate::dataset::MatchRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotCategory {
    Goals,
    ShotsOffTarget,
    ShotsOnTargetBlocked,
}

impl ShotCategory {
    /// Legend order.
    pub const ALL: [ShotCategory; 3] = [
        ShotCategory::Goals,
        ShotCategory::ShotsOffTarget,
        ShotCategory::ShotsOnTargetBlocked,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShotCategory::Goals => "goals",
            ShotCategory::ShotsOffTarget => "shots off target",
            ShotCategory::ShotsOnTargetBlocked => "shots on target blocked",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ShotCategory::Goals => "#5A9B1A",
            ShotCategory::ShotsOffTarget => "#D43830",
            ShotCategory::ShotsOnTargetBlocked => "#FF8F00",
        }
    }

    fn slot(self) -> usize {
        match self {
            ShotCategory::Goals => 0,
            ShotCategory::ShotsOffTarget => 1,
            ShotCategory::ShotsOnTargetBlocked => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: ShotCategory,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotMatch {
    /// Full match name, shown on hover.
    pub match_name: String,
    /// Abbreviated label, shown as the axis tick.
    pub match_short: String,
    /// Counts in legend order.
    pub counts: [u32; 3],
}

impl ShotMatch {
    pub fn count(&self, category: ShotCategory) -> u32 {
        self.counts[category.slot()]
    }

    pub fn hover_text(&self, category: ShotCategory) -> String {
        format!(
            "Match={}\nShot type={}\nNumber of shots={}",
            self.match_name,
            category.label(),
            self.count(category)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotBreakdown {
    pub legend: Vec<LegendEntry>,
    pub matches: Vec<ShotMatch>,
    /// Category-axis positions, one per match.
    pub tick_values: Vec<usize>,
    /// Abbreviated labels aligned with `tick_values`.
    pub tick_labels: Vec<String>,
}

impl ShotBreakdown {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// One category's counts across all matches, in match order.
    pub fn series(&self, category: ShotCategory) -> Vec<u32> {
        self.matches.iter().map(|m| m.count(category)).collect()
    }

    pub fn max_count(&self) -> u32 {
        self.matches
            .iter()
            .flat_map(|m| m.counts)
            .max()
            .unwrap_or(0)
    }
}

pub fn legend() -> Vec<LegendEntry> {
    ShotCategory::ALL
        .iter()
        .map(|&category| LegendEntry {
            category,
            label: category.label(),
            color: category.color(),
        })
        .collect()
}

pub fn derive(matches: &[MatchRating]) -> ShotBreakdown {
    let matches: Vec<ShotMatch> = matches
        .iter()
        .map(|m| ShotMatch {
            match_name: m.match_name.clone(),
            match_short: m.match_short.clone(),
            counts: [m.goals, m.shots_off_target, m.shots_on_target_blocked],
        })
        .collect();

    ShotBreakdown {
        legend: legend(),
        tick_values: (0..matches.len()).collect(),
        tick_labels: matches.iter().map(|m| m.match_short.clone()).collect(),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::match_row;

    fn shots(name: &str, short: &str, counts: [u32; 3]) -> MatchRating {
        let mut m = match_row("A", name, 7.0);
        m.match_short = short.into();
        m.goals = counts[0];
        m.shots_off_target = counts[1];
        m.shots_on_target_blocked = counts[2];
        m
    }

    #[test]
    fn legend_is_fixed() {
        let legend = legend();
        let labels: Vec<&str> = legend.iter().map(|l| l.label).collect();
        let colors: Vec<&str> = legend.iter().map(|l| l.color).collect();
        assert_eq!(labels, vec!["goals", "shots off target", "shots on target blocked"]);
        assert_eq!(colors, vec!["#5A9B1A", "#D43830", "#FF8F00"]);
    }

    #[test]
    fn legend_does_not_depend_on_data() {
        let with_data = derive(&[shots("M1", "m1", [3, 0, 0])]);
        let without = derive(&[]);
        assert_eq!(with_data.legend, without.legend);
    }

    #[test]
    fn preserves_order_and_labels() {
        let breakdown = derive(&[
            shots("Norwich vs Liverpool", "NOR-LIV", [1, 2, 1]),
            shots("Liverpool vs Burnley", "LIV-BUR", [0, 3, 0]),
            shots("Chelsea vs Liverpool", "CHE-LIV", [1, 1, 2]),
        ]);
        assert_eq!(breakdown.tick_values, vec![0, 1, 2]);
        assert_eq!(breakdown.tick_labels, vec!["NOR-LIV", "LIV-BUR", "CHE-LIV"]);
        assert_eq!(breakdown.series(ShotCategory::Goals), vec![1, 0, 1]);
        assert_eq!(breakdown.series(ShotCategory::ShotsOffTarget), vec![2, 3, 1]);
        assert_eq!(breakdown.series(ShotCategory::ShotsOnTargetBlocked), vec![1, 0, 2]);
        assert_eq!(breakdown.max_count(), 3);
    }

    #[test]
    fn hover_uses_full_match_name() {
        let breakdown = derive(&[shots("Norwich vs Liverpool", "NOR-LIV", [1, 2, 1])]);
        let hover = breakdown.matches[0].hover_text(ShotCategory::ShotsOffTarget);
        assert!(hover.contains("Match=Norwich vs Liverpool"));
        assert!(hover.contains("Shot type=shots off target"));
        assert!(hover.contains("Number of shots=2"));
    }

    #[test]
    fn single_match_has_tick_zero() {
        let breakdown = derive(&[shots("M1", "m1", [0, 0, 0])]);
        assert_eq!(breakdown.tick_values, vec![0]);
        assert_eq!(breakdown.matches.len(), 1);
        assert_eq!(breakdown.max_count(), 0);
    }

    #[test]
    fn empty_history_is_well_formed() {
        let breakdown = derive(&[]);
        assert!(breakdown.is_empty());
        assert!(breakdown.tick_values.is_empty());
        assert!(breakdown.tick_labels.is_empty());
        assert_eq!(breakdown.legend.len(), 3);
        assert_eq!(breakdown.max_count(), 0);
    }
}
