//! Block scoring functions
//!
//! - [`Precision`]: share of a block's members that lie in the context
//!   column, `|block ∩ column| / |block|`
//! - [`TermCount`]: total term count of a block's members

use crate::errors::{DomainError, Result};
use crate::features::id_set::sorted_overlap;
use crate::features::signature::domain::{SignatureBlock, TrimContext};

/// Scores one signature block
pub trait BlockScore: Send + Sync {
    fn score(&self, block: &SignatureBlock, context: &TrimContext<'_>) -> Result<f64>;

    fn name(&self) -> &'static str;
}

/// Overlap with the context column, normalized by block size
#[derive(Debug, Clone, Copy, Default)]
pub struct Precision;

impl BlockScore for Precision {
    fn score(&self, block: &SignatureBlock, context: &TrimContext<'_>) -> Result<f64> {
        let column = context.column.ok_or_else(|| {
            DomainError::MissingContext("precision score requires a column".to_string())
        })?;
        if block.is_empty() {
            return Ok(0.0);
        }
        let overlap = sorted_overlap(block.members().as_slice(), column.as_slice());
        Ok(overlap as f64 / block.len() as f64)
    }

    fn name(&self) -> &'static str {
        "precision"
    }
}

/// Sum of member term counts
#[derive(Debug, Clone, Copy, Default)]
pub struct TermCount;

impl BlockScore for TermCount {
    fn score(&self, block: &SignatureBlock, context: &TrimContext<'_>) -> Result<f64> {
        Ok(context.nodes.term_count_of(block.members())? as f64)
    }

    fn name(&self) -> &'static str {
        "term-count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::id_set::ImmutableIdSet;
    use crate::shared::models::{EquivalenceClass, NodeIndex};

    fn index() -> NodeIndex {
        let class = |id: u32, terms: Vec<u32>| {
            EquivalenceClass::new(id, ImmutableIdSet::from_sorted(terms).unwrap(), vec![(1, 1)])
                .unwrap()
        };
        NodeIndex::new(vec![class(1, vec![1]), class(2, vec![2, 3]), class(3, vec![4, 5, 6])])
            .unwrap()
    }

    fn block(ids: &[u32]) -> SignatureBlock {
        SignatureBlock::new(ImmutableIdSet::from_sorted(ids.to_vec()).unwrap())
    }

    #[test]
    fn test_precision() {
        let nodes = index();
        let column = ImmutableIdSet::from_sorted(vec![1, 3]).unwrap();
        let context = TrimContext::new(&nodes).with_column(&column);

        assert_eq!(Precision.score(&block(&[1, 2, 3]), &context).unwrap(), 2.0 / 3.0);
        assert_eq!(Precision.score(&block(&[2]), &context).unwrap(), 0.0);
        assert_eq!(Precision.score(&block(&[]), &context).unwrap(), 0.0);
    }

    #[test]
    fn test_precision_needs_column() {
        let nodes = index();
        let result = Precision.score(&block(&[1]), &TrimContext::new(&nodes));
        assert!(matches!(result, Err(DomainError::MissingContext(_))));
    }

    #[test]
    fn test_term_count() {
        let nodes = index();
        let context = TrimContext::new(&nodes);
        assert_eq!(TermCount.score(&block(&[2, 3]), &context).unwrap(), 5.0);
        assert!(matches!(
            TermCount.score(&block(&[9]), &context),
            Err(DomainError::UnknownNode(9))
        ));
    }
}
