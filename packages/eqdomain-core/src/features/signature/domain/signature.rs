//! Signatures: ranked blocks of candidate nodes for one target node

use crate::features::id_set::{IdSet, ImmutableIdSet};
use serde::{Deserialize, Serialize};

/// One tier of a signature
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureBlock(ImmutableIdSet);

impl SignatureBlock {
    pub fn new(members: ImmutableIdSet) -> Self {
        Self(members)
    }

    #[inline]
    pub fn members(&self) -> &ImmutableIdSet {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_members(self) -> ImmutableIdSet {
        self.0
    }
}

impl From<ImmutableIdSet> for SignatureBlock {
    fn from(members: ImmutableIdSet) -> Self {
        Self(members)
    }
}

/// Ordered blocks for a target node, most similar first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    node: u32,
    blocks: Vec<SignatureBlock>,
}

impl Signature {
    pub fn new(node: u32, blocks: Vec<SignatureBlock>) -> Self {
        Self { node, blocks }
    }

    /// Signature without blocks
    pub fn empty(node: u32) -> Self {
        Self::new(node, Vec::new())
    }

    /// Target node
    #[inline]
    pub fn node(&self) -> u32 {
        self.node
    }

    #[inline]
    pub fn blocks(&self) -> &[SignatureBlock] {
        &self.blocks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// First `count` blocks (all of them if `count` exceeds the length)
    pub fn prefix(&self, count: usize) -> Signature {
        let count = count.min(self.blocks.len());
        Self::new(self.node, self.blocks[..count].to_vec())
    }

    /// Blocks at the given positions, in signature order; out of range
    /// positions are ignored
    pub fn select(&self, positions: impl IntoIterator<Item = usize>) -> Signature {
        let mut positions: Vec<usize> = positions
            .into_iter()
            .filter(|&p| p < self.blocks.len())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        Self::new(
            self.node,
            positions.into_iter().map(|p| self.blocks[p].clone()).collect(),
        )
    }

    /// Union of all block members
    pub fn members(&self) -> ImmutableIdSet {
        ImmutableIdSet::union_all(self.blocks.iter().map(SignatureBlock::members))
    }
}
