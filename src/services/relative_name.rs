//! Relative hierarchical names within the item tree.

use crate::ports::Item;

/// Names of `item` and its ancestors in root-to-leaf order, excluding the
/// parentless tree root.
pub fn name_chain(item: &dyn Item) -> Vec<String> {
    let mut chain = Vec::new();
    let mut node = Some(item);
    while let Some(current) = node {
        if current.parent().is_some() {
            chain.push(current.name().to_string());
        }
        node = current.parent();
    }
    chain.reverse();
    chain
}

/// Path of `item` relative to the container whose full hierarchical name is
/// `base`, as unencoded segments in root-to-leaf order.
///
/// With no `base`, or a `base` that is not a proper ancestor of `item`, the
/// result is the item's full name chain.
pub fn relative_segments(item: &dyn Item, base: Option<&str>) -> Vec<String> {
    let chain = name_chain(item);
    let Some(base) = base.filter(|b| !b.is_empty()) else {
        return chain;
    };
    let base_segments: Vec<&str> = base.split('/').collect();
    let under_base = chain.len() > base_segments.len()
        && chain.iter().zip(&base_segments).all(|(seg, base_seg)| seg == *base_seg);
    if under_base { chain[base_segments.len()..].to_vec() } else { chain }
}
