use std::collections::BTreeSet;

use tracing::debug;

use crate::parser::blocks::{guard_blocks, option_values, STATE_GUARD_RE};
use crate::parser::StateRegionMap;

/// Collect the regions offered under each `if (state === "...")` block.
///
/// States whose block offers no options are left out. A later block for the
/// same state replaces an earlier one.
pub fn extract(source: &str) -> StateRegionMap {
    let mut map = StateRegionMap::new();

    for block in guard_blocks(source, &STATE_GUARD_RE) {
        let regions: BTreeSet<String> = option_values(block.body)
            .into_iter()
            .map(str::to_string)
            .collect();
        if regions.is_empty() {
            continue;
        }
        debug!("state {:?}: {} regions", block.key, regions.len());
        map.insert(block.key.to_string(), regions);
    }

    map
}
