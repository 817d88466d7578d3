// View-model derivers: one pure function per dashboard panel.
//
// Each deriver borrows rows from the entity index and builds a fresh,
// render-ready structure. `get_view_models` runs all of them for one player.

pub mod grid;
pub mod home_away;
pub mod radar;
pub mod rating;
pub mod shots;
pub mod tree;

use serde::Serialize;

use crate::dataset::{MatchRating, PlayerProfile};
use crate::index::{EntityIndex, EntityNotFound};

use grid::StatGrid;
use home_away::HomeAwaySplit;
use radar::DefensiveRadar;
use rating::RatingTrend;
use shots::ShotBreakdown;
use tree::ProportionTree;

/// Name, age and club shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerHeader {
    pub name: String,
    pub age: String,
    pub age_caption: &'static str,
    /// Club identifier; the render side resolves it to a crest image.
    pub team: Option<String>,
}

pub fn derive_header(profile: &PlayerProfile) -> PlayerHeader {
    PlayerHeader {
        name: profile.name.clone(),
        age: profile.age.to_string(),
        age_caption: "Years",
        team: profile.team.clone(),
    }
}

/// Every panel for one player, derived from the same key in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerViews {
    pub key: String,
    /// Stamped by the selection controller; zero for ad-hoc queries.
    pub generation: u64,
    pub header: PlayerHeader,
    pub rating: RatingTrend,
    pub shots: ShotBreakdown,
    pub home_away: HomeAwaySplit,
    pub radar: DefensiveRadar,
    pub tree: ProportionTree,
    pub grid: StatGrid,
}

pub(crate) fn derive_all(profile: &PlayerProfile, matches: &[MatchRating]) -> PlayerViews {
    PlayerViews {
        key: profile.name.clone(),
        generation: 0,
        header: derive_header(profile),
        rating: rating::derive(matches),
        shots: shots::derive(matches),
        home_away: home_away::derive(profile),
        radar: radar::derive(profile),
        tree: tree::derive(profile),
        grid: grid::derive(profile),
    }
}

/// Derive every panel for `key`. Unknown players are an error; players with
/// no match history get empty rating and shot panels.
pub fn get_view_models(index: &EntityIndex, key: &str) -> Result<PlayerViews, EntityNotFound> {
    let profile = index.lookup_profile(key)?;
    Ok(derive_all(profile, index.lookup_matches(key)))
}
