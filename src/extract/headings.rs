use super::{element_name, NodeRef};
use std::collections::BTreeMap;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Counts heading elements by level
///
/// Every `h1`..`h6` element in the tree is counted, nested or hidden ones
/// included. Levels that never occur have no entry in the map.
pub fn extract_headings(root: NodeRef<'_>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    count_headings(root, &mut counts);
    counts
}

fn count_headings(node: NodeRef<'_>, counts: &mut BTreeMap<String, usize>) {
    if let Some(name) = element_name(&node) {
        if HEADING_TAGS.contains(&name) {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    for child in node.children() {
        count_headings(child, counts);
    }
}
