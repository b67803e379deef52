pub mod blocks;
pub mod extract;
pub mod tree;

use std::collections::{BTreeMap, BTreeSet};

use tree::{ConflictingRegions, LocationTree};

/// State name → regions offered for it, sorted.
///
/// States are ordered by name, not by where they appear in the form, so the
/// JSON and seed row order stay stable when the form is reshuffled.
pub type StateRegionMap = BTreeMap<String, BTreeSet<String>>;

/// Region name → centres offered for it, in first-seen order.
pub type RegionCentreMap = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub state_regions: StateRegionMap,
    pub region_centres: RegionCentreMap,
    pub tree: LocationTree,
    pub missing: Vec<String>,
    pub conflicts: ConflictingRegions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub states: usize,
    pub regions: usize,
    pub centres: usize,
    pub missing: usize,
    pub conflicts: usize,
}

impl Extraction {
    pub fn summary(&self) -> Summary {
        let regions = self.tree.values().map(|s| s.regions.len()).sum();
        let centres = self
            .tree
            .values()
            .flat_map(|s| s.regions.values())
            .map(Vec::len)
            .sum();
        Summary {
            states: self.tree.len(),
            regions,
            centres,
            missing: self.missing.len(),
            conflicts: self.conflicts.len(),
        }
    }
}

/// Two independent scans over the same text, then the join.
pub fn extract_locations(source: &str) -> Extraction {
    let state_regions = extract::regions::extract(source);
    let region_centres = extract::centres::extract(source);
    let built = tree::build(&state_regions, &region_centres);

    Extraction {
        state_regions,
        region_centres,
        tree: built.tree,
        missing: built.missing,
        conflicts: built.conflicts,
    }
}

// ── Tests ──
