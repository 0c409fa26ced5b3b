//! Node construction and id generation.
//!
//! Ids combine the wall clock with a process-wide atomic sequence, so two nodes
//! created in the same millisecond never collide. The factory has no other side
//! effects; insertion into a flow is the mutator's job.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{Node, NodeKind, Position};
use crate::registry;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub(crate) fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Fresh node id, e.g. `cache-1724400000000-7`.
pub fn next_node_id(kind: NodeKind) -> String {
    format!("{}-{}-{}", kind, unix_millis(), next_sequence())
}

/// Id for a duplicated node, derived from the original so the lineage stays
/// visible in exports.
pub fn duplicate_id(original: &str) -> String {
    format!("{}-copy-{}", original, next_sequence())
}

/// Deterministic edge id for a source/target pair; reconnecting the same pair
/// produces the same id.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("edge-{}-{}", source, target)
}

/// Build a node of `kind` at `position` with that kind's default config.
/// Does not insert into any flow.
pub fn create_node(kind: NodeKind, position: Position) -> Node {
    Node {
        id: next_node_id(kind),
        kind,
        position,
        config: registry::default_config(kind),
        selected: false,
    }
}
