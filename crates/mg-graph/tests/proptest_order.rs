//! Property tests for the ordering engine.

use std::collections::HashMap;

use mg_core::Edge;
use mg_graph::{build_graph, sort_edges, topological_order};
use proptest::prelude::*;

/// Edges over a small alphabet, cycles allowed.
fn any_edges() -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::vec((0u8..8, 0u8..8), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(a, b)| Edge::new(format!("n{a}"), format!("n{b}")))
            .collect()
    })
}

/// Edges that only point from a lower to a higher index, so always a DAG.
fn dag_edges() -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::vec((0u8..10, 0u8..10), 0..30).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| {
                let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                Edge::new(format!("n{lo}"), format!("n{hi}"))
            })
            .collect()
    })
}

fn multiset(edges: &[Edge]) -> HashMap<&Edge, usize> {
    let mut counts = HashMap::new();
    for edge in edges {
        *counts.entry(edge).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn sort_preserves_multiset(input in any_edges()) {
        let sorted = sort_edges(&input);
        prop_assert_eq!(sorted.len(), input.len());
        prop_assert_eq!(multiset(&sorted), multiset(&input));
    }

    #[test]
    fn sort_is_deterministic(input in any_edges()) {
        prop_assert_eq!(sort_edges(&input), sort_edges(&input));
    }

    #[test]
    fn cycle_means_unchanged(input in any_edges()) {
        if topological_order(&build_graph(&input)).is_err() {
            prop_assert_eq!(sort_edges(&input), input);
        }
    }

    #[test]
    fn dag_order_respects_edges(input in dag_edges()) {
        let graph = build_graph(&input);
        let order = topological_order(&graph).unwrap();
        prop_assert_eq!(order.len(), graph.node_count());
        for edge in &input {
            let from = order.rank(edge.from.as_str()).unwrap();
            let to = order.rank(edge.to.as_str()).unwrap();
            prop_assert!(from < to, "{} ranked after its dependent", edge);
        }
    }

    #[test]
    fn dag_sorted_edges_descend_by_source_rank(input in dag_edges()) {
        let order = topological_order(&build_graph(&input)).unwrap();
        let sorted = sort_edges(&input);
        let ranks: Vec<usize> = sorted
            .iter()
            .map(|e| order.rank(e.from.as_str()).unwrap())
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }
}
