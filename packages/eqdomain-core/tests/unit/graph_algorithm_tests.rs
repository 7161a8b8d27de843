// Graph Algorithm Tests - Representations, Components, Cliques, Similarity
//
// Test Categories:
// 1. Strongly Connected Components (fixed cases + petgraph oracle)
// 2. Reversal and Traversal
// 3. Maximal Cliques (fixed cases + brute-force maximality check)
// 4. Component Trackers (directed, undirected)
// 5. Similarity Graph into Component Trackers

use eqdomain_core::features::components::{
    strongly_connected_components, CliqueCollector, ComponentSet, DirectedConnectedComponents,
    MaximalCliqueFinder, UndirectedConnectedComponents,
};
use eqdomain_core::features::graph::{
    finish_order, DenseGraph, EdgeCollector, EdgeSink, Graph, SparseGraph,
};
use eqdomain_core::features::id_set::{HashIdSet, IdSet, ImmutableIdSet};
use eqdomain_core::features::similarity::{SimilarityGraphBuilder, SimilarityNode};
use eqdomain_core::{DomainError, Fraction, Threshold};
use petgraph::graphmap::DiGraphMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================
// Test Helpers
// ============================================================

fn universe(n: u32) -> ImmutableIdSet {
    ImmutableIdSet::from_sorted((0..n).collect()).unwrap()
}

fn dense(n: u32, edges: &[(u32, u32)]) -> DenseGraph {
    let mut graph = DenseGraph::new(universe(n));
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

fn undirected(nodes: &[u32], edges: &[(u32, u32)]) -> SparseGraph {
    let both: Vec<(u32, u32)> = edges.iter().flat_map(|&(u, v)| [(u, v), (v, u)]).collect();
    SparseGraph::from_edges(nodes.to_vec(), both)
}

fn groups(components: &ComponentSet) -> Vec<Vec<u32>> {
    let mut groups: Vec<Vec<u32>> = components.members().map(|m| m.to_sorted_vec()).collect();
    groups.sort();
    groups
}

/// SCCs computed by petgraph, normalized
fn oracle_scc(n: u32, edges: &[(u32, u32)]) -> Vec<Vec<u32>> {
    let mut graph = DiGraphMap::<u32, ()>::new();
    for node in 0..n {
        graph.add_node(node);
    }
    for &(u, v) in edges {
        graph.add_edge(u, v, ());
    }
    let mut groups: Vec<Vec<u32>> = petgraph::algo::tarjan_scc(&graph)
        .into_iter()
        .map(|mut group| {
            group.sort_unstable();
            group
        })
        .collect();
    groups.sort();
    groups
}

struct Item {
    id: u32,
    elements: ImmutableIdSet,
}

impl SimilarityNode for Item {
    fn id(&self) -> u32 {
        self.id
    }

    fn elements(&self) -> &ImmutableIdSet {
        &self.elements
    }
}

// ============================================================
// 1. Strongly Connected Components
// ============================================================

#[test]
fn test_scc_two_cycle_with_tail() {
    let mut graph = DenseGraph::new(ImmutableIdSet::from_sorted(vec![1, 2, 3]).unwrap());
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 1).unwrap();
    graph.add_edge(2, 3).unwrap();

    let components = strongly_connected_components(&graph).unwrap();
    assert_eq!(groups(&components), vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_scc_dense_and_sparse_agree() {
    let edges = [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (6, 6)];
    let from_dense = strongly_connected_components(&dense(8, &edges)).unwrap();
    let from_sparse =
        strongly_connected_components(&SparseGraph::from_edges(0..8, edges)).unwrap();

    assert_eq!(groups(&from_dense), groups(&from_sparse));
    assert_eq!(
        groups(&from_dense),
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6], vec![7]]
    );
}

#[test]
fn test_scc_long_cycle() {
    // the lazy reversal scans the universe per query, so keep n moderate
    let n = 5_000u32;
    let edges: Vec<(u32, u32)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    let graph = SparseGraph::from_edges(0..n, edges);
    let components = strongly_connected_components(&graph).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components.largest().map(|(_, m)| m.len()), Some(n as usize));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_scc_matches_petgraph(
        n in 1u32..24,
        raw in prop::collection::vec((0u32..24, 0u32..24), 0..72),
    ) {
        let edges: Vec<(u32, u32)> = raw.into_iter().map(|(u, v)| (u % n, v % n)).collect();
        let components = strongly_connected_components(&dense(n, &edges)).unwrap();
        prop_assert_eq!(groups(&components), oracle_scc(n, &edges));
        prop_assert_eq!(components.node_count(), n as usize);
    }
}

// ============================================================
// 2. Reversal and Traversal
// ============================================================

#[test]
fn test_reverse_flips_edges_and_unwraps() {
    let graph = dense(3, &[(0, 1), (1, 2)]);
    let reversed = graph.reverse();
    assert!(reversed.has_edge(1, 0));
    assert!(!reversed.has_edge(0, 1));
    assert_eq!(reversed.adjacent(2).unwrap().collect::<Vec<_>>(), vec![1]);

    let back = reversed.reverse();
    assert!(!back.is_wrapper());
    assert!(back.has_edge(0, 1));
}

#[test]
fn test_finish_order_is_post_order() {
    let graph = dense(4, &[(0, 1), (1, 2), (0, 3)]);
    let order = finish_order(&graph).unwrap();
    assert_eq!(order, vec![2, 1, 3, 0]);
}

#[test]
fn test_unknown_node_adjacency() {
    let graph = dense(3, &[]);
    assert!(matches!(graph.adjacent(7), Err(DomainError::UnknownNode(7))));
    assert!(!graph.has_edge(7, 0));
}

// ============================================================
// 3. Maximal Cliques
// ============================================================

#[test]
fn test_cliques_from_node() {
    let graph = undirected(&[], &[(1, 2), (2, 3), (1, 3), (1, 4)]);
    let mut collector = CliqueCollector::new();
    MaximalCliqueFinder::new(&graph)
        .find_from(1, graph.nodes(), &HashIdSet::new(), &mut collector.sink())
        .unwrap();

    let cliques: Vec<Vec<u32>> = collector
        .into_sorted()
        .into_iter()
        .map(|c| c.to_sorted_vec())
        .collect();
    assert_eq!(cliques, vec![vec![1, 2, 3], vec![1, 4]]);
}

#[test]
fn test_cliques_streamed_one_at_a_time() {
    let graph = undirected(&[], &[(1, 2), (3, 4), (5, 6)]);
    let mut calls = 0;
    MaximalCliqueFinder::new(&graph)
        .find_all(&mut |clique: ImmutableIdSet| {
            assert_eq!(clique.len(), 2);
            calls += 1;
        })
        .unwrap();
    assert_eq!(calls, 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_find_all_emits_distinct_maximal_cliques(
        raw in prop::collection::vec((0u32..8, 0u32..8), 0..20),
    ) {
        let edges: Vec<(u32, u32)> = raw.into_iter().filter(|(u, v)| u != v).collect();
        let graph = undirected(&(0..8).collect::<Vec<_>>(), &edges);

        let mut collector = CliqueCollector::new();
        MaximalCliqueFinder::new(&graph).find_all(&mut collector.sink()).unwrap();
        let cliques = collector.into_sorted();

        for clique in &cliques {
            let members = clique.to_sorted_vec();
            // every pair adjacent
            for (i, &u) in members.iter().enumerate() {
                for &v in &members[i + 1..] {
                    prop_assert!(graph.has_edge(u, v));
                }
            }
            // no outside node extends it
            for w in graph.nodes().iter().filter(|w| !clique.contains(*w)) {
                prop_assert!(!members.iter().all(|&u| graph.has_edge(u, w)));
            }
        }
        let mut unique = cliques.clone();
        unique.dedup();
        prop_assert_eq!(unique.len(), cliques.len());

        // every node belongs to at least one maximal clique
        let covered = ImmutableIdSet::union_all(cliques.iter());
        prop_assert_eq!(covered.len(), graph.node_count());
    }
}

// ============================================================
// 4. Component Trackers
// ============================================================

#[test]
fn test_undirected_incremental_merge() {
    let nodes = ImmutableIdSet::from_sorted(vec![1, 2, 3, 4]).unwrap();
    let tracker = UndirectedConnectedComponents::new(nodes);
    tracker.edge(1, 2).unwrap();
    tracker.edge(3, 4).unwrap();
    tracker.edge(2, 3).unwrap();
    assert_eq!(groups(&tracker.components()), vec![vec![1, 2, 3, 4]]);

    tracker.edge(1, 2).unwrap();
    assert_eq!(tracker.component_count(), 1);
}

#[test]
fn test_directed_tracker_matches_scc() {
    let edges = [(0, 1), (1, 0), (1, 2), (3, 4), (4, 3)];
    let tracker = DirectedConnectedComponents::new(universe(6));
    for &(u, v) in &edges {
        tracker.edge(u, v).unwrap();
    }
    let expected = strongly_connected_components(&dense(6, &edges)).unwrap();
    assert_eq!(groups(&tracker.components().unwrap()), groups(&expected));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_undirected_matches_symmetric_scc(
        n in 1u32..30,
        raw in prop::collection::vec((0u32..30, 0u32..30), 0..40),
    ) {
        let edges: Vec<(u32, u32)> = raw.into_iter().map(|(u, v)| (u % n, v % n)).collect();

        let tracker = UndirectedConnectedComponents::new(universe(n));
        let mut symmetric = DenseGraph::new(universe(n));
        for &(u, v) in &edges {
            tracker.edge(u, v).unwrap();
            symmetric.add_undirected_edge(u, v).unwrap();
        }

        let expected = strongly_connected_components(&symmetric).unwrap();
        prop_assert_eq!(groups(&tracker.components()), groups(&expected));
        prop_assert_eq!(tracker.component_count(), expected.len());
    }
}

// ============================================================
// 5. Similarity Graph into Component Trackers
// ============================================================

#[test]
fn test_similarity_into_undirected_tracker_is_thread_independent() {
    let items: Vec<Item> = (0..200u32)
        .map(|id| Item {
            id,
            elements: ImmutableIdSet::collect_unique([id % 13, id % 7 + 20, id % 3 + 40]),
        })
        .collect();
    let threshold = Threshold::at_least(Fraction::new(1, 2));

    let mut listings = Vec::new();
    for workers in [1, 2, 8] {
        let tracker = UndirectedConnectedComponents::new(universe(200));
        SimilarityGraphBuilder::new(threshold, workers)
            .run(&items, &tracker)
            .unwrap();
        listings.push(groups(&tracker.components()));
    }

    assert_eq!(listings[0], listings[1]);
    assert_eq!(listings[0], listings[2]);
}

#[test]
fn test_similarity_edges_form_expected_graph() {
    let item = |id: u32, elements: &[u32]| Item {
        id,
        elements: ImmutableIdSet::from_sorted(elements.to_vec()).unwrap(),
    };
    let items = vec![item(10, &[1, 2]), item(20, &[1, 2, 3]), item(30, &[7])];
    let collector = EdgeCollector::new();
    SimilarityGraphBuilder::new(Threshold::greater_than(Fraction::new(1, 2)), 2)
        .run(&items, &collector)
        .unwrap();
    assert_eq!(collector.into_edges(), vec![(10, 20)]);
}
