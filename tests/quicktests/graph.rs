use dsa::graph::{traversal, AdjacencyList, AdjacencyMatrix, Direction};

use std::collections::HashSet;

use crate::init_logging;

/// Builds a list graph from raw edges, folding vertices into a small range so that the random
/// graphs actually connect.
fn build(edges: &[(u8, u8)], direction: Direction) -> AdjacencyList<u8, u32> {
    let mut graph = AdjacencyList::new(direction);
    for &(u, v) in edges {
        graph.add_unweighted_edge(u % 16, v % 16);
    }
    graph
}

/// Vertices reachable from `start`, computed by repeatedly relaxing the edge set until nothing
/// changes. Deliberately unlike any of the traversals under test.
fn reachable(graph: &AdjacencyList<u8, u32>, start: u8) -> HashSet<u8> {
    let mut seen = HashSet::from([start]);
    loop {
        let grown: HashSet<u8> = seen
            .iter()
            .flat_map(|v| graph.neighbors(v).iter().map(|(n, _)| *n))
            .chain(seen.iter().copied())
            .collect();
        if grown.len() == seen.len() {
            return seen;
        }
        seen = grown;
    }
}

/// Every vertex after the first has an edge from something visited before it.
fn each_step_follows_an_edge(graph: &AdjacencyList<u8, u32>, order: &[u8]) -> bool {
    order
        .iter()
        .enumerate()
        .skip(1)
        .all(|(i, v)| order[..i].iter().any(|u| graph.has_edge(u, v)))
}

fn visits_reachable_once(order: &[u8], expected: &HashSet<u8>) -> bool {
    let unique: HashSet<u8> = order.iter().copied().collect();
    unique.len() == order.len() && unique == *expected
}

quickcheck::quickcheck! {
    fn traversals_visit_reachable_exactly_once(edges: Vec<(u8, u8)>, start: u8, directed: bool) -> bool {
        init_logging();
        let direction = if directed { Direction::Directed } else { Direction::Undirected };
        let graph = build(&edges, direction);
        let start = start % 16;
        let expected = reachable(&graph, start);

        let orders = [
            traversal::dfs_recursive(&graph, &start),
            traversal::dfs_iterative(&graph, &start),
            traversal::bfs(&graph, &start),
        ];
        orders.iter().all(|order| {
            order.first() == Some(&start)
                && visits_reachable_once(order, &expected)
                && each_step_follows_an_edge(&graph, order)
        })
    }
}

quickcheck::quickcheck! {
    fn iterative_dfs_matches_recursive(edges: Vec<(u8, u8)>, start: u8) -> bool {
        let graph = build(&edges, Direction::Directed);
        let start = start % 16;

        traversal::dfs_iterative(&graph, &start) == traversal::dfs_recursive(&graph, &start)
    }
}

quickcheck::quickcheck! {
    fn undirected_edges_are_reciprocal(edges: Vec<(u8, u8, u8)>) -> bool {
        let mut graph = AdjacencyList::undirected();
        for &(u, v, w) in &edges {
            graph.add_edge(u, v, w);
        }

        edges.iter().all(|(u, v, _)| graph.has_edge(u, v) && graph.has_edge(v, u))
    }
}

quickcheck::quickcheck! {
    fn matrix_agrees_with_list(edges: Vec<(u8, u8)>) -> bool {
        let list = build(&edges, Direction::Undirected);
        let mut matrix: AdjacencyMatrix<u8, u32> = AdjacencyMatrix::undirected(16);
        for &(u, v) in &edges {
            if matrix.add_unweighted_edge(u % 16, v % 16).is_err() {
                return false;
            }
        }

        (0..16u8).all(|u| (0..16u8).all(|v| list.has_edge(&u, &v) == matrix.has_edge(&u, &v)))
    }
}

quickcheck::quickcheck! {
    fn full_matrix_rejects_new_vertices(extra: u8) -> bool {
        let mut matrix: AdjacencyMatrix<u8, u8> = AdjacencyMatrix::directed(4);
        for v in 0..4 {
            matrix.add_unweighted_edge(v, (v + 1) % 4).unwrap();
        }
        let extra = 4 + extra % 200;

        matrix.add_vertex(extra).is_err()
            && matrix.add_unweighted_edge(0, extra).is_err()
            && matrix.vertex_count() == 4
            && (0..4).all(|v| matrix.weight(&v, &((v + 1) % 4)) == 1)
    }
}
