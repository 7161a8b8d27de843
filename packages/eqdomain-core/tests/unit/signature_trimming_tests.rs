// Signature Trimming Tests - Pruning, Policies, Parallel Runner
//
// Test Categories:
// 1. Max-Drop Pruner
// 2. Policy Resolution from Configuration
// 3. Trimmer Behavior per Policy
// 4. Parallel Runner

use eqdomain_core::config::{DiscoveryConfig, MaxDropConfig, Preset, TrimmerConfig};
use eqdomain_core::features::id_set::{IdSet, ImmutableIdSet};
use eqdomain_core::features::prune::{CandidateSetFinder, MaxDropFinder, ThresholdFinder};
use eqdomain_core::features::signature::{
    Signature, SignatureBlock, SignatureCollector, SignatureTrimRunner, TrimContext, TrimJob,
    TrimStats, TrimmerFactory, TrimmerPolicy,
};
use eqdomain_core::shared::models::{ColumnIndex, EquivalenceClass, NodeIndex};
use eqdomain_core::shared::worker_pool::WorkerPool;
use eqdomain_core::{DomainError, Threshold};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================
// Test Helpers
// ============================================================

/// Nodes 1..=8, node `i` carries `i` terms.
/// Column 100 holds nodes 1..=4, column 200 holds nodes 5..=8.
fn node_index() -> NodeIndex {
    let nodes = (1..=8u32)
        .map(|id| {
            let column = if id <= 4 { 100 } else { 200 };
            let terms = ImmutableIdSet::from_sorted((0..id).map(|t| id * 10 + t).collect()).unwrap();
            EquivalenceClass::new(id, terms, vec![(column, 1)]).unwrap()
        })
        .collect();
    NodeIndex::new(nodes).unwrap()
}

fn signature(node: u32, blocks: &[&[u32]]) -> Signature {
    Signature::new(
        node,
        blocks
            .iter()
            .map(|ids| SignatureBlock::new(ImmutableIdSet::from_sorted(ids.to_vec()).unwrap()))
            .collect(),
    )
}

fn block_ids(signature: &Signature) -> Vec<Vec<u32>> {
    signature
        .blocks()
        .iter()
        .map(|block| block.members().to_sorted_vec())
        .collect()
}

// ============================================================
// 1. Max-Drop Pruner
// ============================================================

#[test]
fn test_max_drop_reference_lists() {
    let finder = MaxDropFinder::default();
    assert_eq!(finder.prune_index(&[0.9, 0.85, 0.3, 0.25, 0.1]), 2);

    let flat = finder.with_full_signature_constraint(true);
    assert_eq!(flat.prune_index(&[0.5, 0.49, 0.48]), 3);

    let empty: [f64; 0] = [];
    assert_eq!(finder.prune_index(&empty), 0);
}

#[test]
fn test_max_drop_from_presets() {
    let scores = [0.8, 0.75, 0.7];
    // strict: gaps must exceed 0.1 and the final drop is ignored
    let strict = MaxDropFinder::from_config(&MaxDropConfig::from_preset(Preset::Strict));
    assert_eq!(strict.prune_index(&scores), 3);
    // lenient: the final drop to zero is the knee
    let lenient = MaxDropFinder::from_config(&MaxDropConfig::from_preset(Preset::Lenient));
    assert_eq!(lenient.prune_index(&scores), 3);
    assert_eq!(lenient.prune_index(&[0.8, 0.1, 0.05]), 1);
}

#[test]
fn test_threshold_finder_prefix() {
    let finder = ThresholdFinder::new(Threshold::parse("GT0.3").unwrap());
    assert_eq!(finder.prune_index(&[0.9, 0.4, 0.3, 0.8]), 2);
}

proptest! {
    #[test]
    fn prop_max_drop_cut_in_bounds(
        mut scores in prop::collection::vec(0.0f64..1.0, 0..20),
        full in any::<bool>(),
        ignore_last in any::<bool>(),
    ) {
        scores.sort_by(|a, b| b.total_cmp(a));
        let finder = MaxDropFinder::default()
            .with_full_signature_constraint(full)
            .with_ignore_last_drop(ignore_last);
        let cut = finder.prune_index(&scores);

        prop_assert!(cut <= scores.len());
        if !scores.is_empty() {
            prop_assert!(cut >= 1);
        }
    }

    #[test]
    fn prop_max_drop_cut_is_largest_gap(
        mut scores in prop::collection::vec(0.01f64..1.0, 1..20),
    ) {
        scores.sort_by(|a, b| b.total_cmp(a));
        let cut = MaxDropFinder::default().prune_index(&scores);

        let gap_at = |cut: usize| {
            let next = scores.get(cut).copied().unwrap_or(0.0);
            scores[cut - 1] - next
        };
        for other in 1..=scores.len() {
            prop_assert!(gap_at(other) <= gap_at(cut));
        }
    }
}

// ============================================================
// 2. Policy Resolution from Configuration
// ============================================================

#[test]
fn test_yaml_policy_resolves_once() {
    let yaml = r#"
version: 1
preset: balanced
overrides:
  trimmer:
    policy: "centrist:geq0.4"
"#;
    let config = DiscoveryConfig::from_yaml_str(yaml).unwrap();
    let trimmer = TrimmerFactory::from_config(&config);

    assert_eq!(trimmer.name(), "centrist");
    assert_eq!(trimmer.policy().to_string(), "CENTRIST:GEQ0.4");
    assert!(trimmer.require_non_empty());
}

#[test]
fn test_unknown_policy_fails_before_work() {
    let yaml = r#"
version: 1
preset: balanced
overrides:
  trimmer:
    policy: "moderate"
"#;
    assert!(DiscoveryConfig::from_yaml_str(yaml).is_err());
}

// ============================================================
// 3. Trimmer Behavior per Policy
// ============================================================

#[test]
fn test_centrist_context_overlapping_first_block_only() {
    let nodes = node_index();
    let columns = ColumnIndex::from_nodes(&nodes);
    let context = TrimContext::new(&nodes).with_column(columns.get(100).unwrap());
    let sig = signature(1, &[&[2, 3], &[5, 6], &[7, 8]]);

    let trimmer = TrimmerFactory::resolve(&TrimmerConfig::default(), &MaxDropConfig::default());
    let trimmed = trimmer.apply(&sig, &context).unwrap().unwrap();

    assert_eq!(block_ids(&trimmed), vec![vec![2, 3]]);
}

#[test]
fn test_each_policy_on_one_signature() {
    let nodes = node_index();
    let columns = ColumnIndex::from_nodes(&nodes);
    let context = TrimContext::new(&nodes).with_column(columns.get(100).unwrap());
    // term sums: 2, 3+5=8, 7
    let sig = signature(1, &[&[2], &[3, 5], &[7]]);

    let cases: [(&str, Vec<Vec<u32>>); 5] = [
        ("CONSERVATIVE", vec![vec![2]]),
        ("LIBERAL", vec![vec![2], vec![3, 5]]),
        ("CENTRIST", vec![vec![2]]),
        ("NON-TRIMMING", vec![vec![2], vec![3, 5], vec![7]]),
        // node 5 is outside column 100
        ("COLUMN-SUPPORT", vec![vec![2]]),
    ];

    for (policy, expected) in cases {
        let config = TrimmerConfig::default().policy(TrimmerPolicy::parse(policy).unwrap());
        let trimmer = TrimmerFactory::resolve(&config, &MaxDropConfig::default());
        let trimmed = trimmer.apply(&sig, &context).unwrap().unwrap();
        assert_eq!(block_ids(&trimmed), expected, "policy {}", policy);
    }
}

#[test]
fn test_centrist_without_column_is_an_error() {
    let nodes = node_index();
    let trimmer = TrimmerFactory::resolve(&TrimmerConfig::default(), &MaxDropConfig::default());
    let result = trimmer.apply(&signature(1, &[&[2]]), &TrimContext::new(&nodes));
    assert!(matches!(result, Err(DomainError::MissingContext(_))));
}

// ============================================================
// 4. Parallel Runner
// ============================================================

#[test]
fn test_runner_from_config() {
    let config = DiscoveryConfig::preset(Preset::Balanced)
        .parallel(|c| c.num_workers(4))
        .build()
        .unwrap();
    let runner = SignatureTrimRunner::from_config(&config);

    let nodes = node_index();
    let columns = ColumnIndex::from_nodes(&nodes);
    let jobs = vec![
        TrimJob::new(signature(1, &[&[2, 3], &[5]])).in_column(100),
        TrimJob::new(signature(5, &[&[6, 7], &[8]])).in_column(200),
        TrimJob::new(signature(6, &[&[1, 2]])).in_column(200),
    ];
    let collector = SignatureCollector::new();
    let stats = runner.run(jobs, &nodes, Some(&columns), &collector).unwrap();

    assert_eq!(
        stats,
        TrimStats {
            processed: 3,
            emitted: 2,
            dropped_empty: 1,
        }
    );
    let trimmed: Vec<(u32, Vec<Vec<u32>>)> = collector
        .into_signatures()
        .iter()
        .map(|s| (s.node(), block_ids(s)))
        .collect();
    assert_eq!(
        trimmed,
        vec![(1, vec![vec![2, 3]]), (5, vec![vec![6, 7], vec![8]])]
    );
}

#[test]
fn test_runner_worker_counts_agree() {
    let nodes = node_index();
    let jobs: Vec<TrimJob> = (1..=8u32)
        .map(|node| TrimJob::new(signature(node, &[&[1], &[2, 3], &[4, 5, 6], &[8]])))
        .collect();
    let config = TrimmerConfig::default().policy(TrimmerPolicy::Liberal);

    let mut results = Vec::new();
    for workers in [1, 3, 8] {
        let runner = SignatureTrimRunner::new(
            TrimmerFactory::resolve(&config, &MaxDropConfig::default()),
            WorkerPool::new(workers),
        );
        let collector = SignatureCollector::new();
        runner.run(jobs.clone(), &nodes, None, &collector).unwrap();
        results.push(collector.into_signatures());
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
    assert_eq!(results[0].len(), 8);
}
