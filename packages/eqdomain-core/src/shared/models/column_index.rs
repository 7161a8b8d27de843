//! Column → node membership index
//!
//! Inverts the node → columns relation so trimmers can test signature blocks
//! against the column a node must stay consistent with.

use crate::errors::{DomainError, Result};
use crate::features::id_set::ImmutableIdSet;
use crate::shared::models::equivalence_class::NodeIndex;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Column id → ids of the nodes that occur in that column
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    columns: BTreeMap<u32, ImmutableIdSet>,
}

impl ColumnIndex {
    /// Build from a node index
    pub fn from_nodes(nodes: &NodeIndex) -> Self {
        let mut members: FxHashMap<u32, Vec<u32>> = FxHashMap::default();

        // Nodes are visited in ascending id order, so every member list
        // is built sorted.
        for node in nodes.nodes() {
            for column in node.columns() {
                members.entry(column).or_default().push(node.id());
            }
        }

        let columns = members
            .into_iter()
            .map(|(column, ids)| (column, ImmutableIdSet::from_sorted_unchecked(ids)))
            .collect();

        Self { columns }
    }

    /// Node ids of a column; unknown columns are a fatal lookup error
    pub fn get(&self, column: u32) -> Result<&ImmutableIdSet> {
        self.columns
            .get(&column)
            .ok_or(DomainError::UnknownColumn(column))
    }

    /// `(column, nodes)` in ascending column order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ImmutableIdSet)> {
        self.columns.iter().map(|(column, nodes)| (*column, nodes))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
