use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{RegionCentreMap, StateRegionMap};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateEntry {
    pub regions: BTreeMap<String, Vec<String>>,
}

pub type LocationTree = BTreeMap<String, StateEntry>;

/// Region name → every state that lists it, for regions with two or more owners.
pub type ConflictingRegions = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBuild {
    pub tree: LocationTree,
    /// Regions with centres but no owning state, sorted.
    pub missing: Vec<String>,
    pub conflicts: ConflictingRegions,
}

/// Join state→regions with region→centres.
///
/// Every declared region appears under its state, with an empty list when no
/// centre block matches it. A region claimed by several states is listed under
/// each of them and reported in `conflicts`.
pub fn build(state_regions: &StateRegionMap, region_centres: &RegionCentreMap) -> TreeBuild {
    let mut claims: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (state, regions) in state_regions {
        for region in regions {
            claims.entry(region).or_default().insert(state);
        }
    }

    let mut tree = LocationTree::new();
    for (state, regions) in state_regions {
        let entry = tree.entry(state.clone()).or_default();
        for region in regions {
            let centres: BTreeSet<&String> = region_centres
                .get(region)
                .map(|c| c.iter().collect())
                .unwrap_or_default();
            entry
                .regions
                .insert(region.clone(), centres.into_iter().cloned().collect());
        }
    }

    let missing = region_centres
        .keys()
        .filter(|region| !claims.contains_key(region.as_str()))
        .cloned()
        .collect();

    let conflicts = claims
        .into_iter()
        .filter(|(_, states)| states.len() > 1)
        .map(|(region, states)| {
            (
                region.to_string(),
                states.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

    TreeBuild {
        tree,
        missing,
        conflicts,
    }
}
