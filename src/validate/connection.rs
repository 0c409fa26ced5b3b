//! Kind-level connection rules.
//!
//! The legal pipeline topology is a static adjacency table: `input` only
//! originates edges, `output` only terminates them, and the middle kinds
//! (endpoint, transform, auth, ratelimit, cache, mock, validator) connect
//! freely to one another and to `output`. Cycles among middle kinds are not
//! forbidden here; the structural diagnostics report them separately.
//! Node-level self-loops are checked by the mutator, which knows the ids.

use crate::error::FlowError;
use crate::model::NodeKind;

/// May a `source`-kind node connect to a `target`-kind node?
pub fn is_valid_connection(source: NodeKind, target: NodeKind) -> bool {
    match (source, target) {
        // Terminal nodes have no outgoing edges.
        (NodeKind::Output, _) => false,
        // Entry nodes have no incoming edges.
        (_, NodeKind::Input) => false,
        _ => true,
    }
}

/// Same rule, reported as an error carrying the offending kind pair so the
/// caller can present a specific message.
pub fn check_connection(source: NodeKind, target: NodeKind) -> Result<(), FlowError> {
    if is_valid_connection(source, target) {
        Ok(())
    } else {
        Err(FlowError::InvalidConnection {
            source_kind: source,
            target_kind: target,
        })
    }
}
