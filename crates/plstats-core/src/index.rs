// Entity index: player-keyed lookups over both datasets.
//
// Built once at startup and shared read-only afterwards. Profiles are keyed
// one-to-one by player name; match ratings are grouped per player in file
// order, which is also chronological order.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dataset::{DatasetError, Lined, MatchRating, PlayerProfile};

/// The requested player has no profile row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no such player: {0}")]
pub struct EntityNotFound(pub String);

#[derive(Debug, Clone)]
pub struct EntityIndex {
    profiles: HashMap<String, PlayerProfile>,
    matches: HashMap<String, Vec<MatchRating>>,
    /// Player names sorted ascending; the picker's option list.
    names: Vec<String>,
    orphan_matches: usize,
}

impl EntityIndex {
    /// Build from already-coerced rows. Rows without source lines (tests,
    /// programmatic construction) are numbered by position.
    pub fn build(
        profiles: Vec<PlayerProfile>,
        matches: Vec<MatchRating>,
    ) -> Result<Self, DatasetError> {
        let number = |i: usize| i as u64 + 2;
        Self::from_lined(
            profiles.into_iter().enumerate().map(|(i, p)| (number(i), p)).collect(),
            matches.into_iter().enumerate().map(|(i, m)| (number(i), m)).collect(),
            "<profiles>",
        )
    }

    pub(crate) fn from_lined(
        profiles: Lined<PlayerProfile>,
        matches: Lined<MatchRating>,
        profiles_path: &str,
    ) -> Result<Self, DatasetError> {
        let mut by_name: HashMap<String, (u64, PlayerProfile)> =
            HashMap::with_capacity(profiles.len());
        for (line, profile) in profiles {
            if let Some((first_line, _)) = by_name.get(&profile.name) {
                return Err(DatasetError::DuplicateKey {
                    path: profiles_path.to_string(),
                    key: profile.name,
                    first_line: *first_line,
                    second_line: line,
                });
            }
            by_name.insert(profile.name.clone(), (line, profile));
        }

        let mut grouped: HashMap<String, Vec<MatchRating>> = HashMap::new();
        let mut orphan_matches = 0;
        for (line, rating) in matches {
            if !by_name.contains_key(&rating.player) {
                debug!(
                    "match row on line {} references unknown player '{}'",
                    line, rating.player
                );
                orphan_matches += 1;
                continue;
            }
            let history = grouped.entry(rating.player.clone()).or_default();
            if history.iter().any(|m| m.match_id == rating.match_id) {
                warn!(
                    "duplicate match '{}' for '{}' on line {}, keeping the first",
                    rating.match_id, rating.player, line
                );
                continue;
            }
            history.push(rating);
        }

        let mut profiles: HashMap<String, PlayerProfile> = by_name
            .into_iter()
            .map(|(name, (_, profile))| (name, profile))
            .collect();

        // The club usually lives on the rating rows; fill it in when the
        // profile export does not carry it.
        for (name, profile) in profiles.iter_mut() {
            if profile.team.is_none() {
                profile.team = grouped
                    .get(name)
                    .and_then(|history| history.iter().find_map(|m| m.team.clone()));
            }
        }

        let mut names: Vec<String> = profiles.keys().cloned().collect();
        names.sort();

        Ok(EntityIndex {
            profiles,
            matches: grouped,
            names,
            orphan_matches,
        })
    }

    /// Exactly one profile per known player; unknown keys are an error, never
    /// a zeroed profile.
    pub fn lookup_profile(&self, key: &str) -> Result<&PlayerProfile, EntityNotFound> {
        self.profiles
            .get(key)
            .ok_or_else(|| EntityNotFound(key.to_string()))
    }

    /// Match history in file order. Empty for unknown players and for players
    /// with no recorded matches.
    pub fn lookup_matches(&self, key: &str) -> &[MatchRating] {
        self.matches.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    pub fn player_names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Total match rows attached to known players.
    pub fn match_count(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }

    /// Match rows dropped because their player has no profile.
    pub fn orphan_matches(&self) -> usize {
        self.orphan_matches
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
