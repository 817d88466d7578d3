// Stat grid: twelve season totals in a fixed 4-row x 3-column layout.

use serde::Serialize;

use crate::dataset::PlayerProfile;

pub const GRID_ROWS: usize = 4;
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatGrid {
    /// Row-major, always `GRID_ROWS * GRID_COLUMNS` cells.
    pub cells: Vec<StatCell>,
}

impl StatGrid {
    pub fn cell(&self, row: usize, column: usize) -> Option<&StatCell> {
        if row >= GRID_ROWS || column >= GRID_COLUMNS {
            return None;
        }
        self.cells.get(row * GRID_COLUMNS + column)
    }

    #[cfg(test)]
    fn value_of(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value.as_str())
    }
}

/// Format an integer with comma thousands separators (`1234567` ->
/// `1,234,567`).
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn derive(profile: &PlayerProfile) -> StatGrid {
    let entries: [(&'static str, String); GRID_ROWS * GRID_COLUMNS] = [
        ("Goals", profile.goals.to_string()),
        ("Shots", profile.shots.to_string()),
        ("Shots on target", profile.shots_on_target.to_string()),
        ("Blocked shots", profile.blocked_shots.to_string()),
        ("Passes", group_digits(u64::from(profile.passes))),
        ("Tackles", profile.tackles.to_string()),
        ("Offsides", profile.offsides.to_string()),
        ("Fouls", profile.fouls.to_string()),
        ("Interceptions", profile.interceptions.to_string()),
        ("Wins", profile.wins.to_string()),
        ("Red cards", profile.red_cards.to_string()),
        ("Yellow cards", profile.yellow_cards.to_string()),
    ];

    StatGrid {
        cells: entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| StatCell {
                label,
                value,
                row: i / GRID_COLUMNS,
                column: i % GRID_COLUMNS,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::profile;

    #[test]
    fn group_digits_examples() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(7), "7");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(12345), "12,345");
        assert_eq!(group_digits(123456), "123,456");
        assert_eq!(group_digits(1234567), "1,234,567");
        assert_eq!(group_digits(u64::from(u32::MAX)), "4,294,967,295");
    }

    #[test]
    fn twelve_cells_in_fixed_order() {
        let grid = derive(&profile("A"));
        let labels: Vec<&str> = grid.cells.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                "Goals",
                "Shots",
                "Shots on target",
                "Blocked shots",
                "Passes",
                "Tackles",
                "Offsides",
                "Fouls",
                "Interceptions",
                "Wins",
                "Red cards",
                "Yellow cards",
            ]
        );
    }

    #[test]
    fn slots_are_row_major() {
        let grid = derive(&profile("A"));
        assert_eq!(grid.cell(0, 0).unwrap().label, "Goals");
        assert_eq!(grid.cell(0, 2).unwrap().label, "Shots on target");
        assert_eq!(grid.cell(1, 1).unwrap().label, "Passes");
        assert_eq!(grid.cell(3, 2).unwrap().label, "Yellow cards");
        assert!(grid.cell(4, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
        for cell in &grid.cells {
            assert_eq!(grid.cell(cell.row, cell.column), Some(cell));
        }
    }

    #[test]
    fn passes_grouped_others_plain() {
        let mut p = profile("A");
        p.passes = 1234567;
        p.shots = 1500;
        let grid = derive(&p);
        assert_eq!(grid.value_of("Passes"), Some("1,234,567"));
        assert_eq!(grid.value_of("Shots"), Some("1500"));
    }

    #[test]
    fn zero_passes() {
        let mut p = profile("A");
        p.passes = 0;
        assert_eq!(derive(&p).value_of("Passes"), Some("0"));
    }

    #[test]
    fn derive_is_pure() {
        let p = profile("A");
        assert_eq!(derive(&p), derive(&p));
    }
}
