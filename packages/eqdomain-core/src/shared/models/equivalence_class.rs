//! Equivalence classes and the read-only node index
//!
//! An equivalence class groups the terms that occur in exactly the same set of
//! columns. Classes are produced by an external compression step; here they
//! are read-only nodes identified by a `u32` id.

use crate::errors::{DomainError, Result};
use crate::features::id_set::{IdSet, ImmutableIdSet};
use serde::{Deserialize, Serialize};

/// One equivalence class (a node of every graph built by this crate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EquivalenceClassRecord")]
pub struct EquivalenceClass {
    id: u32,
    terms: ImmutableIdSet,
    columns: ImmutableIdSet,
    /// Occurrence count per column, parallel to `columns`
    column_frequencies: Vec<u32>,
    term_count: u32,
}

impl EquivalenceClass {
    /// Create a class from its terms and `(column, frequency)` pairs.
    ///
    /// Columns must be strictly ascending; the term count defaults to the
    /// number of terms.
    pub fn new(id: u32, terms: ImmutableIdSet, columns: Vec<(u32, u32)>) -> Result<Self> {
        let term_count = terms.len() as u32;
        let (column_ids, column_frequencies): (Vec<u32>, Vec<u32>) = columns.into_iter().unzip();
        Ok(Self {
            id,
            terms,
            columns: ImmutableIdSet::from_sorted(column_ids)?,
            column_frequencies,
            term_count,
        })
    }

    /// Override the term count (classes may be shipped without term lists)
    pub fn with_term_count(mut self, term_count: u32) -> Self {
        self.term_count = term_count;
        self
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn terms(&self) -> &ImmutableIdSet {
        &self.terms
    }

    #[inline]
    pub fn columns(&self) -> &ImmutableIdSet {
        &self.columns
    }

    #[inline]
    pub fn term_count(&self) -> u32 {
        self.term_count
    }

    /// Frequency of the class in a column (0 if it does not occur there)
    pub fn column_frequency(&self, column: u32) -> u32 {
        self.columns
            .index_of(column)
            .map(|idx| self.column_frequencies[idx])
            .unwrap_or(0)
    }

    /// `(column, frequency)` pairs in ascending column order
    pub fn column_entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.columns
            .iter()
            .zip(self.column_frequencies.iter().copied())
    }
}

/// Wire shape of an equivalence class, validated on conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EquivalenceClassRecord {
    id: u32,
    terms: ImmutableIdSet,
    columns: ImmutableIdSet,
    column_frequencies: Vec<u32>,
    term_count: u32,
}

impl TryFrom<EquivalenceClassRecord> for EquivalenceClass {
    type Error = DomainError;

    fn try_from(record: EquivalenceClassRecord) -> Result<Self> {
        if record.columns.len() != record.column_frequencies.len() {
            return Err(DomainError::invalid_input(format!(
                "class {}: {} columns but {} frequencies",
                record.id,
                record.columns.len(),
                record.column_frequencies.len()
            )));
        }
        Ok(Self {
            id: record.id,
            terms: record.terms,
            columns: record.columns,
            column_frequencies: record.column_frequencies,
            term_count: record.term_count,
        })
    }
}

/// Read-only id-keyed lookup over equivalence classes
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    /// Classes sorted by id, parallel to `ids`
    nodes: Vec<EquivalenceClass>,
    ids: ImmutableIdSet,
}

impl NodeIndex {
    /// Build an index. Two classes with the same id are a fatal error.
    pub fn new(mut nodes: Vec<EquivalenceClass>) -> Result<Self> {
        nodes.sort_unstable_by_key(|node| node.id());
        let ids = ImmutableIdSet::from_sorted(nodes.iter().map(|node| node.id()).collect())?;
        Ok(Self { nodes, ids })
    }

    /// Class for an id; unknown ids are a fatal lookup error
    pub fn get(&self, id: u32) -> Result<&EquivalenceClass> {
        self.ids
            .index_of(id)
            .map(|idx| &self.nodes[idx])
            .ok_or(DomainError::UnknownNode(id))
    }

    /// The node id universe
    #[inline]
    pub fn ids(&self) -> &ImmutableIdSet {
        &self.ids
    }

    /// Classes in ascending id order
    #[inline]
    pub fn nodes(&self) -> &[EquivalenceClass] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of term counts over a set of node ids
    pub fn term_count_of(&self, ids: &dyn IdSet) -> Result<u64> {
        ids.ids()
            .map(|id| self.get(id).map(|node| node.term_count() as u64))
            .sum()
    }
}
