//! Trimming context

use crate::features::id_set::ImmutableIdSet;
use crate::shared::models::NodeIndex;

/// What a trimmer may consult besides the signature itself
#[derive(Debug, Clone, Copy)]
pub struct TrimContext<'a> {
    /// Read-only node source (term counts, columns)
    pub nodes: &'a NodeIndex,
    /// Nodes of the column the target must stay consistent with
    pub column: Option<&'a ImmutableIdSet>,
}

impl<'a> TrimContext<'a> {
    pub fn new(nodes: &'a NodeIndex) -> Self {
        Self {
            nodes,
            column: None,
        }
    }

    pub fn with_column(mut self, column: &'a ImmutableIdSet) -> Self {
        self.column = Some(column);
        self
    }
}
