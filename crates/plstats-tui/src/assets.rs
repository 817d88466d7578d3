// Club crest lookup. The core only knows team identifiers; images live in
// the configured assets directory as `<team>.png`.

use std::path::{Path, PathBuf};

pub fn crest_path(dir: &Path, team: &str) -> PathBuf {
    dir.join(format!("{team}.png"))
}

/// What the header can say about a player's crest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crest {
    Found(PathBuf),
    Missing(PathBuf),
    /// The player has no team on record.
    Unknown,
}

pub fn resolve_crest(dir: &Path, team: Option<&str>) -> Crest {
    match team {
        Some(team) => {
            let path = crest_path(dir, team);
            if path.is_file() {
                Crest::Found(path)
            } else {
                Crest::Missing(path)
            }
        }
        None => Crest::Unknown,
    }
}
