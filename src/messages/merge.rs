//! CMS translation table -> nested message tree.

use super::table::TranslationTable;
use super::tree::{
    MessageTree,
    Messages,
    upsert_path,
};

/// Separator that turns namespace and key segments into nesting.
pub const PATH_SEPARATOR: char = '.';

/// Merge a translation table into a message tree.
///
/// Each namespace is split on `.` and walked (groups are created, leaves on the way are
/// replaced). Below it:
/// - a dotted key is placed with [`upsert_path`]
/// - a plain key is assigned only if the slot is empty or holds text, so a group built
///   by an earlier dotted key is never clobbered by a plain key of the same name
///
/// Entries are applied in table order.
#[must_use]
pub fn merge_translations(table: &TranslationTable) -> Messages {
    let mut messages = Messages::new();

    for ns in table.namespaces() {
        let target = ns
            .namespace()
            .split(PATH_SEPARATOR)
            .fold(&mut messages, |node, segment| node.node_mut(segment));

        for (key, value) in ns.entries() {
            let segments: Vec<&str> = key.split(PATH_SEPARATOR).collect();
            if segments.len() > 1 {
                upsert_path(target, &segments, value.clone());
            } else if matches!(target.child(key), None | Some(MessageTree::Leaf(_))) {
                target.insert(key.as_str(), MessageTree::Leaf(value.clone()));
            } else {
                tracing::debug!(
                    namespace = %ns.namespace(),
                    key = %key,
                    "Plain key shadowed by nested group; entry dropped"
                );
            }
        }
    }

    tracing::debug!(entries = table.len(), "Merged translations");
    messages
}
