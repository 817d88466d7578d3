// Proportion tree: a flat treemap of the six defensive metrics.
//
// Every leaf hangs off an implicit root (parent ""). Zero-valued leaves stay
// in the hierarchy so the panel always lists all six metrics.

use serde::Serialize;

use crate::dataset::PlayerProfile;
use crate::views::radar::{defensive_metrics, DEFENSIVE_AXES};

/// Leaf colours, cycled in axis order.
pub const TREE_COLORS: [&str; 3] = ["#1D5B2C", "#5A9B1A", "green"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLeaf {
    pub name: &'static str,
    pub parent: String,
    pub value: u32,
    /// Hover text with the exact count.
    pub hover: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProportionTree {
    pub leaves: Vec<TreeLeaf>,
}

impl ProportionTree {
    pub fn total(&self) -> u64 {
        self.leaves.iter().map(|l| u64::from(l.value)).sum()
    }

    pub fn is_zero_sum(&self) -> bool {
        self.total() == 0
    }
}

pub fn derive(profile: &PlayerProfile) -> ProportionTree {
    let leaves = DEFENSIVE_AXES
        .iter()
        .zip(defensive_metrics(profile))
        .enumerate()
        .map(|(i, (&name, value))| TreeLeaf {
            name,
            parent: String::new(),
            value,
            hover: format!("Count={value}"),
            color: TREE_COLORS[i % TREE_COLORS.len()],
        })
        .collect();
    ProportionTree { leaves }
}
