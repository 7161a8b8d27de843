//! Trimmer resolution
//!
//! The policy identifier is resolved once, before any signature is
//! processed. The result bundles the strategy with the non-empty rule.

use crate::config::{MaxDropConfig, TrimmerConfig, ValidatedConfig};
use crate::errors::Result;
use crate::features::prune::MaxDropFinder;
use crate::features::signature::domain::{Signature, SignatureTrimmer, TrimContext, TrimmerPolicy};
use crate::features::signature::infrastructure::trimmers::{
    CentristTrimmer, ColumnSupportTrimmer, ConservativeTrimmer, LiberalTrimmer,
    NonTrimmingTrimmer,
};
use tracing::info;

/// Builds trimmers from policies
pub struct TrimmerFactory;

impl TrimmerFactory {
    /// Strategy for `policy`; a centrist embedded threshold replaces the
    /// max-drop gap threshold
    pub fn create(policy: &TrimmerPolicy, max_drop: &MaxDropConfig) -> Box<dyn SignatureTrimmer> {
        match policy {
            TrimmerPolicy::Conservative => Box::new(ConservativeTrimmer),
            TrimmerPolicy::Liberal => Box::new(LiberalTrimmer::new()),
            TrimmerPolicy::Centrist { threshold } => {
                let mut finder = MaxDropFinder::from_config(max_drop);
                if let Some(threshold) = threshold {
                    finder = finder.with_gap_threshold(*threshold);
                }
                Box::new(CentristTrimmer::new(finder))
            }
            TrimmerPolicy::NonTrimming => Box::new(NonTrimmingTrimmer),
            TrimmerPolicy::ColumnSupport { min_blocks } => {
                Box::new(ColumnSupportTrimmer::new(*min_blocks))
            }
        }
    }

    /// Resolve a trimmer and its non-empty rule
    pub fn resolve(trimmer: &TrimmerConfig, max_drop: &MaxDropConfig) -> ResolvedTrimmer {
        let resolved = ResolvedTrimmer {
            trimmer: Self::create(&trimmer.policy, max_drop),
            policy: trimmer.policy.clone(),
            require_non_empty: trimmer.require_non_empty,
        };
        info!(
            policy = %resolved.policy,
            trimmer = resolved.trimmer.name(),
            require_non_empty = resolved.require_non_empty,
            "signature trimmer resolved"
        );
        resolved
    }

    pub fn from_config(config: &ValidatedConfig) -> ResolvedTrimmer {
        Self::resolve(&config.trimmer(), &config.max_drop())
    }
}

/// A resolved strategy plus the non-empty rule
pub struct ResolvedTrimmer {
    trimmer: Box<dyn SignatureTrimmer>,
    policy: TrimmerPolicy,
    require_non_empty: bool,
}

impl ResolvedTrimmer {
    pub fn policy(&self) -> &TrimmerPolicy {
        &self.policy
    }

    pub fn name(&self) -> &'static str {
        self.trimmer.name()
    }

    pub fn require_non_empty(&self) -> bool {
        self.require_non_empty
    }

    /// Trim a signature; `None` when the result is empty and empty results
    /// are not allowed
    pub fn apply(
        &self,
        signature: &Signature,
        context: &TrimContext<'_>,
    ) -> Result<Option<Signature>> {
        let trimmed = self.trimmer.trim(signature, context)?;
        if trimmed.is_empty() && self.require_non_empty {
            return Ok(None);
        }
        Ok(Some(trimmed))
    }
}

impl std::fmt::Debug for ResolvedTrimmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedTrimmer")
            .field("policy", &self.policy)
            .field("trimmer", &self.trimmer.name())
            .field("require_non_empty", &self.require_non_empty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiscoveryConfig, Preset, Threshold};
    use crate::features::id_set::ImmutableIdSet;
    use crate::features::signature::domain::SignatureBlock;
    use crate::shared::models::{EquivalenceClass, NodeIndex};

    fn nodes() -> NodeIndex {
        NodeIndex::new(
            (1..=4)
                .map(|id| {
                    EquivalenceClass::new(id, ImmutableIdSet::singleton(id), vec![(1, 1)]).unwrap()
                })
                .collect(),
        )
        .unwrap()
    }

    fn signature() -> Signature {
        Signature::new(
            1,
            vec![
                SignatureBlock::new(ImmutableIdSet::singleton(2)),
                SignatureBlock::new(ImmutableIdSet::from_sorted(vec![3, 4]).unwrap()),
            ],
        )
    }

    #[test]
    fn test_presets_resolve() {
        let names: Vec<&str> = [Preset::Strict, Preset::Balanced, Preset::Lenient]
            .into_iter()
            .map(|preset| {
                let config = DiscoveryConfig::preset(preset).build().unwrap();
                TrimmerFactory::from_config(&config).name()
            })
            .collect();
        assert_eq!(names, vec!["conservative", "centrist", "liberal"]);
    }

    #[test]
    fn test_every_policy_has_a_trimmer() {
        let max_drop = MaxDropConfig::default();
        for text in ["CONSERVATIVE", "LIBERAL", "CENTRIST:GT0.3", "NONE", "COLUMN-SUPPORT:2"] {
            let policy = TrimmerPolicy::parse(text).unwrap();
            let trimmer = TrimmerFactory::create(&policy, &max_drop);
            assert!(!trimmer.name().is_empty());
        }
    }

    #[test]
    fn test_embedded_threshold_replaces_gap_threshold() {
        let nodes = nodes();
        // precision 1.0 and 0.5: gap 0.5, final gap 0.5
        let column = ImmutableIdSet::from_sorted(vec![2, 3]).unwrap();
        let context = TrimContext::new(&nodes).with_column(&column);

        let loose = TrimmerConfig::default().policy(TrimmerPolicy::Centrist { threshold: None });
        let kept = TrimmerFactory::resolve(&loose, &MaxDropConfig::default())
            .apply(&signature(), &context)
            .unwrap()
            .unwrap();
        assert_eq!(kept.len(), 1);

        let strict = TrimmerConfig::default().policy(TrimmerPolicy::Centrist {
            threshold: Some(Threshold::parse("GT0.9").unwrap()),
        });
        let kept = TrimmerFactory::resolve(&strict, &MaxDropConfig::default())
            .apply(&signature(), &context)
            .unwrap()
            .unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_require_non_empty() {
        let nodes = nodes();
        let column = ImmutableIdSet::singleton(9);
        let context = TrimContext::new(&nodes).with_column(&column);
        let centrist = TrimmerConfig::default();

        let dropped = TrimmerFactory::resolve(&centrist, &MaxDropConfig::default())
            .apply(&signature(), &context)
            .unwrap();
        assert!(dropped.is_none());

        let allowed = centrist.require_non_empty(false);
        let allowed = TrimmerFactory::resolve(&allowed, &MaxDropConfig::default())
            .apply(&signature(), &context)
            .unwrap();
        assert_eq!(allowed.map(|s| s.len()), Some(0));
    }
}
