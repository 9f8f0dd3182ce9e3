use graph_diameter::{graphs::Graph, search::diameter::Diameter};

fn triangle_graph() -> Graph {
    let mut graph = Graph::new(3);
    graph.insert_edge(0, 1, 1).unwrap();
    graph.insert_edge(1, 2, 1).unwrap();
    graph.insert_edge(0, 2, 5).unwrap();
    graph
}

#[test]
fn triangle_diameter_ignores_the_heavy_direct_edge() {
    let graph = triangle_graph();

    assert_eq!(
        graph.diameter(),
        Some(Diameter {
            start: 0,
            end: 2,
            distance: 2
        })
    );
}

#[test]
fn single_vertex_diameter_is_zero() {
    let graph = Graph::new(1);

    assert_eq!(
        graph.diameter(),
        Some(Diameter {
            start: 0,
            end: 0,
            distance: 0
        })
    );
}

#[test]
fn empty_graph_has_no_diameter() {
    let graph = Graph::new(0);

    assert_eq!(graph.diameter(), None);
}

#[test]
fn ties_resolve_to_the_lowest_root() {
    // both endpoints of a single edge have eccentricity 3
    let mut graph = Graph::new(2);
    graph.insert_edge(0, 1, 3).unwrap();

    assert_eq!(
        graph.diameter(),
        Some(Diameter {
            start: 0,
            end: 1,
            distance: 3
        })
    );
}

#[test]
fn line_graph_diameter_spans_the_endpoints() {
    let mut graph = Graph::new(4);
    graph.insert_edge(0, 1, 1).unwrap();
    graph.insert_edge(1, 2, 1).unwrap();
    graph.insert_edge(2, 3, 1).unwrap();

    assert_eq!(
        graph.diameter(),
        Some(Diameter {
            start: 0,
            end: 3,
            distance: 3
        })
    );
}

#[test]
fn disconnected_graph_reports_the_widest_component() {
    let mut graph = Graph::new(4);
    graph.insert_edge(0, 1, 1).unwrap();
    graph.insert_edge(2, 3, 7).unwrap();

    assert_eq!(
        graph.diameter(),
        Some(Diameter {
            start: 2,
            end: 3,
            distance: 7
        })
    );
}

#[test]
fn edgeless_graph_diameter_is_zero_from_the_first_vertex() {
    // every vertex only reaches itself, eccentricity 0 everywhere
    let graph = Graph::new(3);

    assert_eq!(
        graph.diameter(),
        Some(Diameter {
            start: 0,
            end: 0,
            distance: 0
        })
    );
}

#[test]
fn diameter_is_realized_by_its_endpoints_and_dominates_eccentricities() {
    let mut graph = Graph::new(7);
    graph.insert_edge(0, 1, 2).unwrap();
    graph.insert_edge(1, 2, 4).unwrap();
    graph.insert_edge(2, 3, 1).unwrap();
    graph.insert_edge(3, 4, 6).unwrap();
    graph.insert_edge(4, 5, 2).unwrap();
    graph.insert_edge(0, 5, 3).unwrap();
    graph.insert_edge(1, 6, 9).unwrap();

    let diameter = graph.diameter().unwrap();

    let table = graph.shortest_path_tree(diameter.start).unwrap();
    assert_eq!(table.distance(diameter.end).unwrap(), Some(diameter.distance));

    for root in 0..graph.order() {
        let table = graph.shortest_path_tree(root).unwrap();
        assert!(table.max_distance() <= diameter.distance);
    }
}
