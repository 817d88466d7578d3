// Home/away goal split: a two-slice proportion.

use serde::Serialize;

use crate::dataset::PlayerProfile;

pub const TITLE: &str = "Goals Home-Away";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeAwaySplit {
    pub title: &'static str,
    /// Always `[home, away]`.
    pub slices: [Slice; 2],
}

impl HomeAwaySplit {
    pub fn home(&self) -> &Slice {
        &self.slices[0]
    }

    pub fn away(&self) -> &Slice {
        &self.slices[1]
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| u64::from(s.value)).sum()
    }

    /// Fraction of the total held by slice `idx`; `None` when nothing was
    /// scored (both slices are zero).
    pub fn share(&self, idx: usize) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.slices
            .get(idx)
            .map(|s| f64::from(s.value) / total as f64)
    }
}

pub fn derive(profile: &PlayerProfile) -> HomeAwaySplit {
    HomeAwaySplit {
        title: TITLE,
        slices: [
            Slice {
                label: "Goals Home",
                value: profile.goals_home,
                color: "#1D5B2C",
            },
            Slice {
                label: "Goals Away",
                value: profile.goals_away,
                color: "#5A9B1A",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::profile;

    #[test]
    fn split_uses_home_and_away_goals() {
        let mut p = profile("A");
        p.goals_home = 14;
        p.goals_away = 9;
        let split = derive(&p);
        assert_eq!(split.home().label, "Goals Home");
        assert_eq!(split.home().value, 14);
        assert_eq!(split.away().label, "Goals Away");
        assert_eq!(split.away().value, 9);
        assert_eq!(split.total(), 23);
        let home_share = split.share(0).unwrap();
        assert!((home_share - 14.0 / 23.0).abs() < 1e-12);
    }

    #[test]
    fn zero_goals_is_two_zero_slices() {
        let mut p = profile("A");
        p.goals_home = 0;
        p.goals_away = 0;
        let split = derive(&p);
        assert_eq!(split.slices.len(), 2);
        assert_eq!(split.total(), 0);
        assert_eq!(split.share(0), None);
        assert_eq!(split.share(1), None);
    }

    #[test]
    fn share_out_of_range_is_none() {
        let split = derive(&profile("A"));
        assert_eq!(split.share(2), None);
    }

    #[test]
    fn derive_is_pure() {
        let p = profile("A");
        assert_eq!(derive(&p), derive(&p));
    }
}
