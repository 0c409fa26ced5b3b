//! Versioned snapshot history, capped to the most recent entries per flow.
//!
//! Storage is an injected capability behind a get/set-by-key contract, so the
//! core has no implicit global state and tests run against an in-memory fake.
//! Snapshot persistence is fire-and-forget relative to in-memory mutation: a
//! failed write surfaces as a non-fatal [`PersistenceWarning`], and corrupt
//! storage reads are treated as "no history".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::{self, FlowDocument};
use crate::error::{PersistenceWarning, StoreError};
use crate::factory;
use crate::model::Flow;

/// Snapshots retained per flow; oldest evicted first.
pub const HISTORY_LIMIT: usize = 10;

/// Injected storage capability. Implementations may be in-memory,
/// browser-local or durable; the history only needs get/set by key.
pub trait SnapshotStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// An immutable serialized copy of a flow at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
    /// Unix milliseconds at record time.
    pub recorded_at: u64,
    pub document: FlowDocument,
}

pub struct SnapshotHistory<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> SnapshotHistory<S> {
    pub fn new(store: S) -> Self {
        SnapshotHistory { store }
    }

    fn key(flow_id: &str) -> String {
        format!("{}-history", flow_id)
    }

    /// Serialize `flow` and append it to the flow's history, evicting the
    /// oldest entry past [`HISTORY_LIMIT`]. A storage failure is reported as
    /// a warning; the caller's in-memory state is already applied and stays.
    pub fn record_snapshot(
        &mut self,
        flow_id: &str,
        flow: &Flow,
    ) -> Result<(), PersistenceWarning> {
        let mut snapshots = self.load(flow_id);
        snapshots.push(FlowSnapshot {
            recorded_at: factory::unix_millis() as u64,
            document: document::to_document(flow),
        });
        if snapshots.len() > HISTORY_LIMIT {
            let excess = snapshots.len() - HISTORY_LIMIT;
            snapshots.drain(..excess);
        }

        let payload = serde_json::to_string(&snapshots).map_err(|e| PersistenceWarning {
            flow_id: flow_id.to_string(),
            reason: e.to_string(),
        })?;
        self.store
            .set(&Self::key(flow_id), payload)
            .map_err(|e| PersistenceWarning {
                flow_id: flow_id.to_string(),
                reason: e.to_string(),
            })
    }

    /// Snapshots for a flow, most recently recorded first, at most
    /// [`HISTORY_LIMIT`] entries. Missing or corrupt storage yields an empty
    /// list, never an error.
    pub fn list_snapshots(&self, flow_id: &str) -> Vec<FlowSnapshot> {
        let mut snapshots = self.load(flow_id);
        snapshots.reverse();
        snapshots.truncate(HISTORY_LIMIT);
        snapshots
    }

    fn load(&self, flow_id: &str) -> Vec<FlowSnapshot> {
        match self.store.get(&Self::key(flow_id)) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        }
    }
}
