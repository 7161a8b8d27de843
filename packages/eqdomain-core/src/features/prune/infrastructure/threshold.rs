//! Fixed-threshold finder: keeps the leading run of scores that satisfy a
//! threshold.

use crate::config::Threshold;
use crate::features::prune::domain::{CandidateSetFinder, Scored};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdFinder {
    threshold: Threshold,
}

impl ThresholdFinder {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }
}

impl CandidateSetFinder for ThresholdFinder {
    fn prune_index<T: Scored>(&self, elements: &[T]) -> usize {
        elements
            .iter()
            .position(|element| !self.threshold.is_satisfied_by_f64(element.score()))
            .unwrap_or(elements.len())
    }

    fn name(&self) -> &'static str {
        "threshold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_only() {
        let finder = ThresholdFinder::new(Threshold::parse("GEQ0.5").unwrap());
        assert_eq!(finder.prune_index(&[0.9, 0.5, 0.4, 0.6]), 2);
        assert_eq!(finder.prune_index(&[0.9, 0.8]), 2);
        assert_eq!(finder.prune_index(&[0.1]), 0);
        assert_eq!(finder.prune_index::<f64>(&[]), 0);
    }

    #[test]
    fn test_nan_stops() {
        let finder = ThresholdFinder::new(Threshold::parse("GT0").unwrap());
        assert_eq!(finder.prune_index(&[0.3, f64::NAN, 0.2]), 1);
    }
}
