//! Signature trimming strategies
//!
//! | Trimmer                  | Keeps                                          |
//! |--------------------------|------------------------------------------------|
//! | [`ConservativeTrimmer`]  | first block                                    |
//! | [`LiberalTrimmer`]       | prefix up to the block with the largest score  |
//! | [`CentristTrimmer`]      | positive-score blocks before the max-drop cut  |
//! | [`NonTrimmingTrimmer`]   | everything                                     |
//! | [`ColumnSupportTrimmer`] | prefix whose members share a column with the   |
//! |                          | target                                         |

use crate::errors::{DomainError, Result};
use crate::features::id_set::{IdSet, ImmutableIdSet};
use crate::features::prune::{CandidateSetFinder, MaxDropFinder};
use crate::features::signature::domain::{Signature, SignatureTrimmer, TrimContext};
use crate::features::signature::infrastructure::score::{BlockScore, Precision, TermCount};

// ============================================================================
// Conservative
// ============================================================================

/// Keeps only the most similar block
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeTrimmer;

impl SignatureTrimmer for ConservativeTrimmer {
    fn trim(&self, signature: &Signature, _context: &TrimContext<'_>) -> Result<Signature> {
        Ok(signature.prefix(1))
    }

    fn name(&self) -> &'static str {
        "conservative"
    }
}

// ============================================================================
// Liberal
// ============================================================================

/// Keeps every block up to and including the highest-scoring one
pub struct LiberalTrimmer {
    score: Box<dyn BlockScore>,
}

impl LiberalTrimmer {
    /// Scores blocks by total member term count
    pub fn new() -> Self {
        Self::with_score(Box::new(TermCount))
    }

    pub fn with_score(score: Box<dyn BlockScore>) -> Self {
        Self { score }
    }
}

impl Default for LiberalTrimmer {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureTrimmer for LiberalTrimmer {
    fn trim(&self, signature: &Signature, context: &TrimContext<'_>) -> Result<Signature> {
        let mut best: Option<(f64, usize)> = None;
        for (position, block) in signature.blocks().iter().enumerate() {
            let score = self.score.score(block, context)?;
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, position));
            }
        }
        Ok(match best {
            Some((_, position)) => signature.prefix(position + 1),
            None => Signature::empty(signature.node()),
        })
    }

    fn name(&self) -> &'static str {
        "liberal"
    }
}

// ============================================================================
// Centrist
// ============================================================================

/// Ranks blocks by score and keeps the ones above the max-drop knee.
///
/// 1. Score every block (precision against the context column by default)
/// 2. Sort descending; equal scores keep signature order
/// 3. Cut with the max-drop finder
/// 4. Keep positive-score blocks before the cut, in signature order
pub struct CentristTrimmer {
    finder: MaxDropFinder,
    score: Box<dyn BlockScore>,
}

impl CentristTrimmer {
    pub fn new(finder: MaxDropFinder) -> Self {
        Self::with_score(finder, Box::new(Precision))
    }

    pub fn with_score(finder: MaxDropFinder, score: Box<dyn BlockScore>) -> Self {
        Self { finder, score }
    }

    pub fn finder(&self) -> &MaxDropFinder {
        &self.finder
    }
}

impl SignatureTrimmer for CentristTrimmer {
    fn trim(&self, signature: &Signature, context: &TrimContext<'_>) -> Result<Signature> {
        if context.column.is_none() {
            return Err(DomainError::MissingContext(format!(
                "centrist trimming of node {} requires a column",
                signature.node()
            )));
        }

        let mut ranked: Vec<(usize, f64)> = signature
            .blocks()
            .iter()
            .enumerate()
            .map(|(position, block)| Ok((position, self.score.score(block, context)?)))
            .collect::<Result<_>>()?;
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let cut = self.finder.prune_index(&ranked);
        let kept = ranked[..cut]
            .iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(position, _)| *position);
        Ok(signature.select(kept))
    }

    fn name(&self) -> &'static str {
        "centrist"
    }
}

// ============================================================================
// Non-trimming
// ============================================================================

/// Identity
#[derive(Debug, Clone, Copy, Default)]
pub struct NonTrimmingTrimmer;

impl SignatureTrimmer for NonTrimmingTrimmer {
    fn trim(&self, signature: &Signature, _context: &TrimContext<'_>) -> Result<Signature> {
        Ok(signature.clone())
    }

    fn name(&self) -> &'static str {
        "non-trimming"
    }
}

// ============================================================================
// Column support
// ============================================================================

/// Keeps the longest prefix whose members all share at least one column
/// with the target node.
///
/// The running intersection starts at the target's columns and is narrowed
/// by every member of every kept block. The first block that would empty it
/// ends the prefix, but at least `min_blocks` blocks are kept.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSupportTrimmer {
    min_blocks: usize,
}

impl ColumnSupportTrimmer {
    pub fn new(min_blocks: usize) -> Self {
        Self { min_blocks }
    }

    pub fn min_blocks(&self) -> usize {
        self.min_blocks
    }
}

impl Default for ColumnSupportTrimmer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SignatureTrimmer for ColumnSupportTrimmer {
    fn trim(&self, signature: &Signature, context: &TrimContext<'_>) -> Result<Signature> {
        let mut support: ImmutableIdSet = context.nodes.get(signature.node())?.columns().clone();
        let mut kept = 0;

        'blocks: for block in signature.blocks() {
            let mut narrowed = support.clone();
            for member in block.members().iter() {
                narrowed = narrowed.intersect(context.nodes.get(member)?.columns());
                if narrowed.is_empty() {
                    break 'blocks;
                }
            }
            support = narrowed;
            kept += 1;
        }

        Ok(signature.prefix(kept.max(self.min_blocks)))
    }

    fn name(&self) -> &'static str {
        "column-support"
    }
}
