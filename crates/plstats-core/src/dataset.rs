// Dataset loading and numeric coercion.
//
// Reads the two season CSV exports: a per-player profile table
// (`data_final.csv`, one row per player) and a per-match rating table
// (`rating.csv`, one row per player per match). Every numeric cell is coerced
// once here so the rest of the crate works with typed fields only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::index::EntityIndex;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Season aggregates for one player (dataset A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerProfile {
    pub name: String,
    pub age: u32,
    /// Club identifier, also used as the crest asset name.
    pub team: Option<String>,
    pub goals: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub blocked_shots: u32,
    pub passes: u32,
    pub tackles: u32,
    pub offsides: u32,
    pub fouls: u32,
    pub interceptions: u32,
    pub wins: u32,
    pub losses: u32,
    pub red_cards: u32,
    pub yellow_cards: u32,
    pub goals_home: u32,
    pub goals_away: u32,
}

/// One player's rating and shot split for a single match (dataset B).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRating {
    pub player: String,
    pub team: Option<String>,
    pub match_id: String,
    pub match_name: String,
    pub match_short: String,
    pub rating: f64,
    pub goals: u32,
    pub shots_off_target: u32,
    pub shots_on_target_blocked: u32,
}

/// Rows that survived coercion plus the ones that did not.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub rows: Vec<T>,
    pub rejected: Vec<CoercionError>,
}

/// Locations of the two source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataPaths {
    pub profiles: String,
    pub ratings: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column `{column}`")]
    Schema { path: String, column: &'static str },

    #[error("{path}: player `{key}` appears on line {first_line} and again on line {second_line}")]
    DuplicateKey {
        path: String,
        key: String,
        first_line: u64,
        second_line: u64,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

/// A row whose cells could not be turned into the typed schema. The row is
/// dropped; loading continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: column `{column}` value {value:?} {reason}")]
pub struct CoercionError {
    pub line: u64,
    pub column: String,
    pub value: String,
    pub reason: &'static str,
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

pub const PROFILE_COLUMNS: &[&str] = &[
    "full_name",
    "age",
    "goals",
    "Shots",
    "Shots On Target",
    "Blocked Shots",
    "Passes",
    "Tackles",
    "Offsides",
    "Fouls",
    "Interceptions",
    "Wins",
    "Losses",
    "Red Cards",
    "Yellow Cards",
    "goals_home",
    "goals_away",
];

pub const MATCH_COLUMNS: &[&str] = &[
    "player",
    "match name",
    "match short",
    "rating",
    "goals",
    "shots off target",
    "shots on target blocked",
];

/// Return the first required column absent from `headers`.
fn missing_column(headers: &csv::StringRecord, required: &[&'static str]) -> Option<&'static str> {
    required
        .iter()
        .copied()
        .find(|col| !headers.iter().any(|h| h.trim() == *col))
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Profile row exactly as exported. Numeric cells stay text until coercion so
/// a bad cell can be reported by column name. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawProfile {
    full_name: String,
    age: String,
    #[serde(default)]
    team: Option<String>,
    goals: String,
    #[serde(rename = "Shots")]
    shots: String,
    #[serde(rename = "Shots On Target")]
    shots_on_target: String,
    #[serde(rename = "Blocked Shots")]
    blocked_shots: String,
    #[serde(rename = "Passes")]
    passes: String,
    #[serde(rename = "Tackles")]
    tackles: String,
    #[serde(rename = "Offsides")]
    offsides: String,
    #[serde(rename = "Fouls")]
    fouls: String,
    #[serde(rename = "Interceptions")]
    interceptions: String,
    #[serde(rename = "Wins")]
    wins: String,
    #[serde(rename = "Losses")]
    losses: String,
    #[serde(rename = "Red Cards")]
    red_cards: String,
    #[serde(rename = "Yellow Cards")]
    yellow_cards: String,
    goals_home: String,
    goals_away: String,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    player: String,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    match_id: Option<String>,
    #[serde(rename = "match name")]
    match_name: String,
    #[serde(rename = "match short")]
    match_short: String,
    rating: String,
    goals: String,
    #[serde(rename = "shots off target")]
    shots_off_target: String,
    #[serde(rename = "shots on target blocked")]
    shots_on_target_blocked: String,
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Per-row coercion context: remembers the source line for error reports.
struct Cells {
    line: u64,
}

impl Cells {
    fn error(&self, column: &str, value: &str, reason: &'static str) -> CoercionError {
        CoercionError {
            line: self.line,
            column: column.to_string(),
            value: value.to_string(),
            reason,
        }
    }

    /// Parse a counter. Integral decimals (`12.0`) are accepted because
    /// spreadsheet exports often widen integer columns to floats.
    fn count(&self, column: &str, raw: &str) -> Result<u32, CoercionError> {
        let text = raw.trim();
        if let Ok(n) = text.parse::<u32>() {
            return Ok(n);
        }
        let value: f64 = text
            .parse()
            .map_err(|_| self.error(column, raw, "is not a number"))?;
        if !value.is_finite() {
            return Err(self.error(column, raw, "is not finite"));
        }
        if value < 0.0 {
            return Err(self.error(column, raw, "is negative"));
        }
        if value.fract() != 0.0 {
            return Err(self.error(column, raw, "is not a whole number"));
        }
        if value > f64::from(u32::MAX) {
            return Err(self.error(column, raw, "is out of range"));
        }
        Ok(value as u32)
    }

    fn real(&self, column: &str, raw: &str) -> Result<f64, CoercionError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| self.error(column, raw, "is not a number"))?;
        if !value.is_finite() {
            return Err(self.error(column, raw, "is not finite"));
        }
        Ok(value)
    }

    fn key(&self, column: &str, raw: &str) -> Result<String, CoercionError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(self.error(column, raw, "is empty"));
        }
        Ok(key.to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RawProfile {
    fn coerce(self, cells: &Cells) -> Result<PlayerProfile, CoercionError> {
        Ok(PlayerProfile {
            name: cells.key("full_name", &self.full_name)?,
            age: cells.count("age", &self.age)?,
            team: non_empty(self.team),
            goals: cells.count("goals", &self.goals)?,
            shots: cells.count("Shots", &self.shots)?,
            shots_on_target: cells.count("Shots On Target", &self.shots_on_target)?,
            blocked_shots: cells.count("Blocked Shots", &self.blocked_shots)?,
            passes: cells.count("Passes", &self.passes)?,
            tackles: cells.count("Tackles", &self.tackles)?,
            offsides: cells.count("Offsides", &self.offsides)?,
            fouls: cells.count("Fouls", &self.fouls)?,
            interceptions: cells.count("Interceptions", &self.interceptions)?,
            wins: cells.count("Wins", &self.wins)?,
            losses: cells.count("Losses", &self.losses)?,
            red_cards: cells.count("Red Cards", &self.red_cards)?,
            yellow_cards: cells.count("Yellow Cards", &self.yellow_cards)?,
            goals_home: cells.count("goals_home", &self.goals_home)?,
            goals_away: cells.count("goals_away", &self.goals_away)?,
        })
    }
}

impl RawMatch {
    fn coerce(self, cells: &Cells) -> Result<MatchRating, CoercionError> {
        let match_name = self.match_name.trim().to_string();
        let match_id = non_empty(self.match_id).unwrap_or_else(|| match_name.clone());
        Ok(MatchRating {
            player: cells.key("player", &self.player)?,
            team: non_empty(self.team),
            match_id,
            match_name,
            match_short: self.match_short.trim().to_string(),
            rating: cells.real("rating", &self.rating)?,
            goals: cells.count("goals", &self.goals)?,
            shots_off_target: cells.count("shots off target", &self.shots_off_target)?,
            shots_on_target_blocked: cells
                .count("shots on target blocked", &self.shots_on_target_blocked)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (enable testing without temp files)
// ---------------------------------------------------------------------------

/// Rows paired with the 1-based source line they came from. The line is what
/// duplicate-key errors report.
pub(crate) type Lined<T> = Vec<(u64, T)>;

/// Read every record, coercing each into `T`.
///
/// When `key_column` is set, its trimmed value must be unique across the
/// whole file. The check runs before coercion, so a row dropped for a bad
/// cell still claims its key.
fn load_rows<R, Raw, T>(
    rdr: R,
    path: &str,
    required: &[&'static str],
    key_column: Option<&'static str>,
    coerce: impl Fn(Raw, &Cells) -> Result<T, CoercionError>,
) -> Result<(Lined<T>, Vec<CoercionError>), DatasetError>
where
    R: Read,
    Raw: serde::de::DeserializeOwned,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(rdr);
    let headers = reader
        .headers()
        .map_err(|e| DatasetError::Csv {
            path: path.to_string(),
            source: e,
        })?
        .clone();

    if let Some(column) = missing_column(&headers, required) {
        return Err(DatasetError::Schema {
            path: path.to_string(),
            column,
        });
    }

    let key_index = key_column.and_then(|col| headers.iter().position(|h| h.trim() == col));
    let mut seen_keys: HashMap<String, u64> = HashMap::new();

    let mut rows = Vec::new();
    let mut rejected = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping unreadable row in {}: {}", path, e);
                let line = e.position().map_or(0, |p| p.line());
                rejected.push(CoercionError {
                    line,
                    column: String::new(),
                    value: String::new(),
                    reason: "could not be read as a CSV record",
                });
                continue;
            }
        };
        let cells = Cells {
            line: record.position().map_or(0, |p| p.line()),
        };
        if let Some(key) = key_index
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|k| !k.is_empty())
        {
            if let Some(&first_line) = seen_keys.get(key) {
                return Err(DatasetError::DuplicateKey {
                    path: path.to_string(),
                    key: key.to_string(),
                    first_line,
                    second_line: cells.line,
                });
            }
            seen_keys.insert(key.to_string(), cells.line);
        }
        let raw: Raw = match record.deserialize(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed row in {} (line {}): {}", path, cells.line, e);
                rejected.push(cells.error("", "", "does not match the header layout"));
                continue;
            }
        };
        match coerce(raw, &cells) {
            Ok(row) => rows.push((cells.line, row)),
            Err(e) => {
                warn!("skipping row in {}: {}", path, e);
                rejected.push(e);
            }
        }
    }
    Ok((rows, rejected))
}

pub(crate) fn load_profiles_from_reader<R: Read>(
    rdr: R,
    path: &str,
) -> Result<(Lined<PlayerProfile>, Vec<CoercionError>), DatasetError> {
    load_rows(rdr, path, PROFILE_COLUMNS, Some("full_name"), RawProfile::coerce)
}

pub(crate) fn load_matches_from_reader<R: Read>(
    rdr: R,
    path: &str,
) -> Result<(Lined<MatchRating>, Vec<CoercionError>), DatasetError> {
    load_rows(rdr, path, MATCH_COLUMNS, None, RawMatch::coerce)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, DatasetError> {
    std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the per-player profile table.
pub fn load_profiles(path: &Path) -> Result<Loaded<PlayerProfile>, DatasetError> {
    let (rows, rejected) = load_profiles_from_reader(open(path)?, &path.display().to_string())?;
    Ok(Loaded {
        rows: rows.into_iter().map(|(_, row)| row).collect(),
        rejected,
    })
}

/// Load the per-match rating table, in file order.
pub fn load_matches(path: &Path) -> Result<Loaded<MatchRating>, DatasetError> {
    let (rows, rejected) = load_matches_from_reader(open(path)?, &path.display().to_string())?;
    Ok(Loaded {
        rows: rows.into_iter().map(|(_, row)| row).collect(),
        rejected,
    })
}

/// Load both tables and build the entity index. Fails on schema problems,
/// duplicate players, or an empty profile table.
pub fn load_index(paths: &DataPaths) -> Result<EntityIndex, DatasetError> {
    let profiles_path = PathBuf::from(&paths.profiles);
    let ratings_path = PathBuf::from(&paths.ratings);

    let (profiles, rejected_profiles) =
        load_profiles_from_reader(open(&profiles_path)?, &paths.profiles)?;
    let (matches, rejected_matches) =
        load_matches_from_reader(open(&ratings_path)?, &paths.ratings)?;

    if profiles.is_empty() {
        return Err(DatasetError::Validation(format!(
            "{} produced zero valid player rows",
            paths.profiles
        )));
    }

    info!(
        "Loaded {} profiles ({} rejected) and {} match ratings ({} rejected)",
        profiles.len(),
        rejected_profiles.len(),
        matches.len(),
        rejected_matches.len()
    );

    EntityIndex::from_lined(profiles, matches, &paths.profiles)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_HEADER: &str = "full_name,age,team,goals,Shots,Shots On Target,Blocked Shots,Passes,Tackles,Offsides,Fouls,Interceptions,Wins,Losses,Red Cards,Yellow Cards,goals_home,goals_away";

    fn profiles(body: &str) -> (Lined<PlayerProfile>, Vec<CoercionError>) {
        let csv_data = format!("{PROFILE_HEADER}\n{body}");
        load_profiles_from_reader(csv_data.as_bytes(), "test.csv").unwrap()
    }

    // -- Profiles --

    #[test]
    fn profile_row_parsed() {
        let (rows, rejected) = profiles(
            "Mohamed Salah,29,Liverpool,23,139,55,29,1315,17,19,21,8,24,5,0,0,14,9",
        );
        assert!(rejected.is_empty());
        assert_eq!(rows.len(), 1);
        let (line, p) = &rows[0];
        assert_eq!(*line, 2);
        assert_eq!(p.name, "Mohamed Salah");
        assert_eq!(p.age, 29);
        assert_eq!(p.team.as_deref(), Some("Liverpool"));
        assert_eq!(p.goals, 23);
        assert_eq!(p.shots, 139);
        assert_eq!(p.shots_on_target, 55);
        assert_eq!(p.blocked_shots, 29);
        assert_eq!(p.passes, 1315);
        assert_eq!(p.tackles, 17);
        assert_eq!(p.offsides, 19);
        assert_eq!(p.fouls, 21);
        assert_eq!(p.interceptions, 8);
        assert_eq!(p.wins, 24);
        assert_eq!(p.losses, 5);
        assert_eq!(p.red_cards, 0);
        assert_eq!(p.yellow_cards, 0);
        assert_eq!(p.goals_home, 14);
        assert_eq!(p.goals_away, 9);
    }

    #[test]
    fn integral_floats_accepted() {
        let (rows, rejected) = profiles(
            "Test Player,25.0,,1.0,2,3,4,5.0,6,7,8,9,10,11,0,1,1,0",
        );
        assert!(rejected.is_empty());
        assert_eq!(rows[0].1.age, 25);
        assert_eq!(rows[0].1.passes, 5);
        assert!(rows[0].1.team.is_none());
    }

    #[test]
    fn names_and_team_trimmed() {
        let (rows, _) = profiles(
            "  Son Heung-Min  , 29 , Tottenham ,17,84,43,20,903,24,9,9,7,18,11,0,1,8,9",
        );
        assert_eq!(rows[0].1.name, "Son Heung-Min");
        assert_eq!(rows[0].1.team.as_deref(), Some("Tottenham"));
        assert_eq!(rows[0].1.age, 29);
    }

    #[test]
    fn fractional_counter_rejected() {
        let (rows, rejected) = profiles(
            "Bad Row,25,X,1.5,2,3,4,5,6,7,8,9,10,11,0,1,1,0\n\
             Good Row,25,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.name, "Good Row");
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].column, "goals");
        assert_eq!(rejected[0].line, 2);
        assert_eq!(rejected[0].reason, "is not a whole number");
    }

    #[test]
    fn negative_counter_rejected() {
        let (rows, rejected) = profiles("Bad Row,25,X,1,2,3,4,5,-6,7,8,9,10,11,0,1,1,0");
        assert!(rows.is_empty());
        assert_eq!(rejected[0].column, "Tackles");
        assert_eq!(rejected[0].reason, "is negative");
    }

    #[test]
    fn non_numeric_counter_rejected() {
        let (rows, rejected) = profiles("Bad Row,25,X,1,2,3,4,lots,6,7,8,9,10,11,0,1,1,0");
        assert!(rows.is_empty());
        assert_eq!(rejected[0].column, "Passes");
        assert_eq!(rejected[0].value, "lots");
    }

    #[test]
    fn nan_counter_rejected() {
        let (rows, rejected) = profiles("Bad Row,25,X,NaN,2,3,4,5,6,7,8,9,10,11,0,1,1,0");
        assert!(rows.is_empty());
        assert_eq!(rejected[0].reason, "is not finite");
    }

    #[test]
    fn empty_name_rejected() {
        let (rows, rejected) = profiles("   ,25,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0");
        assert!(rows.is_empty());
        assert_eq!(rejected[0].column, "full_name");
    }

    #[test]
    fn short_record_rejected_not_fatal() {
        let (rows, rejected) = profiles(
            "Short Row,25,X,1,2\n\
             Good Row,25,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn duplicate_key_is_fatal_even_when_first_copy_is_malformed() {
        let csv_data = format!(
            "{PROFILE_HEADER}\n\
             Mohamed Salah,29,Liverpool,lots,139,55,29,1315,17,19,21,8,24,5,0,0,14,9\n\
             Mohamed Salah,29,Liverpool,22,130,50,20,1300,17,19,21,8,24,5,0,0,13,9"
        );
        let err = load_profiles_from_reader(csv_data.as_bytes(), "t.csv").unwrap_err();
        match err {
            DatasetError::DuplicateKey {
                key,
                first_line,
                second_line,
                ..
            } => {
                assert_eq!(key, "Mohamed Salah");
                assert_eq!(first_line, 2);
                assert_eq!(second_line, 3);
            }
            other => panic!("expected DuplicateKey, got: {other}"),
        }
    }

    #[test]
    fn duplicate_key_compared_after_trimming() {
        let csv_data = format!(
            "{PROFILE_HEADER}\n\
             Harry Kane,28,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0\n\
             \x20 Harry Kane ,28,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0"
        );
        let err = load_profiles_from_reader(csv_data.as_bytes(), "t.csv").unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateKey { .. }), "unexpected: {err}");
    }

    #[test]
    fn repeated_match_players_are_not_duplicates() {
        let csv_data = "player,match name,match short,rating,goals,shots off target,shots on target blocked\n\
                        Harry Kane,A vs B,A-B,7.1,1,0,0\n\
                        Harry Kane,B vs C,B-C,6.4,0,1,0";
        let (rows, rejected) = load_matches_from_reader(csv_data.as_bytes(), "r.csv").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rejected.is_empty());
    }

    #[test]
    fn extra_columns_ignored() {
        let csv_data = format!(
            "{PROFILE_HEADER},position,nationality\n\
             Test,25,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0,FW,EG"
        );
        let (rows, rejected) = load_profiles_from_reader(csv_data.as_bytes(), "t.csv").unwrap();
        assert!(rejected.is_empty());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn missing_profile_column_is_schema_error() {
        let csv_data = "full_name,age,goals\nA,1,2";
        let err = load_profiles_from_reader(csv_data.as_bytes(), "data_final.csv").unwrap_err();
        match err {
            DatasetError::Schema { path, column } => {
                assert_eq!(path, "data_final.csv");
                assert_eq!(column, "Shots");
            }
            other => panic!("expected Schema, got: {other}"),
        }
    }

    #[test]
    fn header_whitespace_tolerated() {
        let header = PROFILE_HEADER.replace(",Shots,", ", Shots ,");
        let csv_data = format!("{header}\nTest,25,X,1,2,3,4,5,6,7,8,9,10,11,0,1,1,0");
        let (rows, _) = load_profiles_from_reader(csv_data.as_bytes(), "t.csv").unwrap();
        assert_eq!(rows[0].1.shots, 2);
    }

    #[test]
    fn empty_profile_csv_returns_no_rows() {
        let (rows, rejected) = profiles("");
        assert!(rows.is_empty());
        assert!(rejected.is_empty());
    }

    // -- Matches --

    const MATCH_HEADER: &str =
        "player,team,match name,match short,rating,goals,shots off target,shots on target blocked";

    #[test]
    fn match_rows_keep_file_order() {
        let csv_data = format!(
            "{MATCH_HEADER}\n\
             Mohamed Salah,Liverpool,Norwich vs Liverpool,NOR-LIV,8.1,1,2,1\n\
             Mohamed Salah,Liverpool,Liverpool vs Burnley,LIV-BUR,7.3,0,3,0\n\
             Mohamed Salah,Liverpool,Chelsea vs Liverpool,CHE-LIV,7.849,1,1,2"
        );
        let (rows, rejected) = load_matches_from_reader(csv_data.as_bytes(), "r.csv").unwrap();
        assert!(rejected.is_empty());
        let shorts: Vec<&str> = rows.iter().map(|(_, m)| m.match_short.as_str()).collect();
        assert_eq!(shorts, vec!["NOR-LIV", "LIV-BUR", "CHE-LIV"]);
        assert!((rows[2].1.rating - 7.849).abs() < f64::EPSILON);
        assert_eq!(rows[0].1.match_id, "Norwich vs Liverpool");
        assert_eq!(rows[1].1.shots_off_target, 3);
    }

    #[test]
    fn explicit_match_id_used() {
        let csv_data = "player,match_id,match name,match short,rating,goals,shots off target,shots on target blocked\n\
                        A,m-17,Norwich vs Liverpool,NOR-LIV,8.1,1,2,1";
        let (rows, _) = load_matches_from_reader(csv_data.as_bytes(), "r.csv").unwrap();
        assert_eq!(rows[0].1.match_id, "m-17");
        assert!(rows[0].1.team.is_none());
    }

    #[test]
    fn malformed_rating_row_skipped() {
        let csv_data = format!(
            "{MATCH_HEADER}\n\
             A,X,M1,M1,7.0,0,0,0\n\
             A,X,M2,M2,n/a,0,0,0\n\
             A,X,M3,M3,inf,0,0,0\n\
             A,X,M4,M4,6.5,0,0,0"
        );
        let (rows, rejected) = load_matches_from_reader(csv_data.as_bytes(), "r.csv").unwrap();
        let names: Vec<&str> = rows.iter().map(|(_, m)| m.match_name.as_str()).collect();
        assert_eq!(names, vec!["M1", "M4"]);
        assert_eq!(rejected.len(), 2);
        assert!(rejected.iter().all(|e| e.column == "rating"));
    }

    #[test]
    fn missing_match_column_is_schema_error() {
        let csv_data = "player,match name,rating\nA,M1,7.0";
        let err = load_matches_from_reader(csv_data.as_bytes(), "rating.csv").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Schema { column: "match short", .. }
        ));
    }

    #[test]
    fn coercion_error_message_names_column() {
        let err = CoercionError {
            line: 4,
            column: "Passes".into(),
            value: "lots".into(),
            reason: "is not a number",
        };
        assert_eq!(err.to_string(), "line 4: column `Passes` value \"lots\" is not a number");
    }

    #[test]
    fn load_profiles_missing_file_is_io_error() {
        let err = load_profiles(Path::new("/nonexistent/data_final.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
