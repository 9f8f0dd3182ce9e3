//! Invariant tests over generated graphs.

use graph_diameter::{
    graphs::{Graph, Vertex},
    queue::radix_queue::RadixQueue,
    search::dijkstra::shortest_path_tree_with_queue,
};
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1u32..24).prop_flat_map(|order| {
        prop::collection::vec((0..order, 0..order, 0u32..50), 0..64).prop_map(move |edges| {
            let mut graph = Graph::new(order);
            for (u, v, weight) in edges {
                graph.insert_edge(u, v, weight).unwrap();
            }
            graph
        })
    })
}

fn graph_and_root_strategy() -> impl Strategy<Value = (Graph, Vertex)> {
    graph_strategy().prop_flat_map(|graph| {
        let order = graph.order();
        (Just(graph), 0..order)
    })
}

proptest! {
    #[test]
    fn root_has_distance_zero_and_no_parent((graph, root) in graph_and_root_strategy()) {
        let table = graph.shortest_path_tree(root).unwrap();

        prop_assert_eq!(table.root(), root);
        prop_assert_eq!(table.distance(root).unwrap(), Some(0));
        prop_assert_eq!(table.parent(root).unwrap(), None);
        prop_assert!(table.visited(root).unwrap());
    }

    #[test]
    fn every_parent_pointer_is_tight((graph, root) in graph_and_root_strategy()) {
        let table = graph.shortest_path_tree(root).unwrap();

        for vertex in 0..graph.order() {
            let Some(parent) = table.parent(vertex).unwrap() else {
                continue;
            };
            let distance = table.distance(vertex).unwrap().unwrap();
            let parent_distance = table.distance(parent).unwrap().unwrap();

            prop_assert!(parent_distance <= distance);
            // some edge between parent and vertex realizes the distance exactly
            prop_assert!(graph.adjacent(vertex).iter().any(|edge| edge.connects(parent, vertex)
                && parent_distance + edge.weight() == distance));
        }
    }

    #[test]
    fn reached_and_finalized_coincide_after_termination((graph, root) in graph_and_root_strategy()) {
        let table = graph.shortest_path_tree(root).unwrap();

        for vertex in 0..graph.order() {
            prop_assert_eq!(
                table.distance(vertex).unwrap().is_some(),
                table.visited(vertex).unwrap()
            );
        }
    }

    #[test]
    fn repeated_traversals_are_identical((graph, root) in graph_and_root_strategy()) {
        let first = graph.shortest_path_tree(root).unwrap();
        let second = graph.shortest_path_tree(root).unwrap();

        for vertex in 0..graph.order() {
            prop_assert_eq!(
                first.distance(vertex).unwrap(),
                second.distance(vertex).unwrap()
            );
            prop_assert_eq!(first.parent(vertex).unwrap(), second.parent(vertex).unwrap());
        }
    }

    #[test]
    fn radix_queue_matches_the_default_heap((graph, root) in graph_and_root_strategy()) {
        let with_heap = graph.shortest_path_tree(root).unwrap();

        let mut radix = RadixQueue::new();
        let with_radix = shortest_path_tree_with_queue(&graph, &mut radix, root).unwrap();

        for vertex in 0..graph.order() {
            prop_assert_eq!(
                with_heap.distance(vertex).unwrap(),
                with_radix.distance(vertex).unwrap()
            );
        }
    }

    #[test]
    fn diameter_dominates_every_eccentricity_and_is_realized(graph in graph_strategy()) {
        let diameter = graph.diameter().unwrap();

        let table = graph.shortest_path_tree(diameter.start).unwrap();
        prop_assert_eq!(table.max_distance(), diameter.distance);
        prop_assert_eq!(
            table.distance(diameter.end).unwrap(),
            Some(diameter.distance)
        );

        for root in 0..graph.order() {
            let table = graph.shortest_path_tree(root).unwrap();
            prop_assert!(table.max_distance() <= diameter.distance);
        }
    }
}
