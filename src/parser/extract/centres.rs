use tracing::debug;

use crate::parser::blocks::{guard_blocks, option_values, REGION_GUARD_RE};
use crate::parser::RegionCentreMap;

/// Collect the centres offered under each `if (region === "...")` block.
///
/// Centres keep first-seen order here; sorting happens when the tree is built.
pub fn extract(source: &str) -> RegionCentreMap {
    let mut map = RegionCentreMap::new();

    for block in guard_blocks(source, &REGION_GUARD_RE) {
        let mut centres: Vec<String> = Vec::new();
        for value in option_values(block.body) {
            if !centres.iter().any(|c| c == value) {
                centres.push(value.to_string());
            }
        }
        if centres.is_empty() {
            continue;
        }
        debug!("region {:?}: {} centres", block.key, centres.len());
        map.insert(block.key.to_string(), centres);
    }

    map
}
