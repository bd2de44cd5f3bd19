//! End-to-end scenarios on labeled graphs.

use u_tour::graph::Graph;
use u_tour::hamiltonian::{
    hamiltonian_path_from, HamiltonianConfig, HamiltonianDetector, HamiltonianStrategy,
};
use u_tour::tsp::{BranchAndBoundSolver, BruteForceSolver, NearestNeighborSolver, TspSolver};
use u_tour::TourError;

fn four_cities() -> Graph {
    let mut g = Graph::new(["1", "2", "3", "4"]).unwrap();
    for (a, b, cost) in [
        ("1", "2", 10),
        ("1", "3", 15),
        ("1", "4", 20),
        ("2", "3", 35),
        ("2", "4", 25),
        ("3", "4", 30),
    ] {
        assert!(g.add_edge(a, b, cost).unwrap());
    }
    g
}

fn ring() -> Graph {
    let mut g = Graph::new(["0", "1", "2", "3", "4"]).unwrap();
    for (a, b) in [("0", "1"), ("1", "2"), ("2", "3"), ("3", "4"), ("4", "0")] {
        g.add_edge(a, b, 1).unwrap();
    }
    g
}

#[test]
fn test_four_cities_exact_and_greedy() {
    let g = four_cities();

    let brute = BruteForceSolver::default().solve(&g).unwrap().tour.unwrap();
    let bnb = BranchAndBoundSolver::new().solve(&g).unwrap().tour.unwrap();
    assert_eq!(brute.cost, 80);
    assert_eq!(bnb.cost, 80);
    assert_eq!(brute.canonical(), bnb.canonical());
    assert_eq!(g.labels_of(&bnb.route).unwrap(), ["1", "2", "4", "3"]);

    let greedy = g.greedy_round_trip("1").unwrap().unwrap();
    assert!(greedy.cost >= 80);
    assert_eq!(g.round_trip_cost(&greedy.stops).unwrap(), Some(greedy.cost));
}

#[test]
fn test_ring_hamiltonian_until_edge_removed() {
    let mut g = ring();
    for strategy in [HamiltonianStrategy::Permutation, HamiltonianStrategy::Backtracking] {
        let detector = HamiltonianDetector::new(HamiltonianConfig::default().with_strategy(strategy));
        assert!(detector.is_hamiltonian(&g).unwrap());
    }
    assert_eq!(g.shortest_round_trip_backtrack().unwrap().unwrap().cost, 5);

    assert!(g.remove_edge("2", "3").unwrap());
    for strategy in [HamiltonianStrategy::Permutation, HamiltonianStrategy::Backtracking] {
        let detector = HamiltonianDetector::new(HamiltonianConfig::default().with_strategy(strategy));
        assert!(!detector.is_hamiltonian(&g).unwrap());
    }
    assert_eq!(g.shortest_round_trip_brute().unwrap(), None);
    assert_eq!(g.greedy_round_trip("0").unwrap(), None);

    // The remaining line 3-4-0-1-2 is still a Hamiltonian path from "3".
    let start = g.index_of("3").unwrap();
    let path = hamiltonian_path_from(&g, start).unwrap().unwrap();
    assert_eq!(g.labels_of(&path).unwrap(), ["3", "4", "0", "1", "2"]);
}

#[test]
fn test_graph_can_change_between_searches() {
    let mut g = four_cities();
    g.set_edge("3", "4", 1).unwrap();
    // 1-2-4-3-1 now costs 10 + 25 + 1 + 15.
    assert_eq!(g.shortest_round_trip_brute().unwrap().unwrap().cost, 51);
    assert_eq!(g.shortest_round_trip_backtrack().unwrap().unwrap().cost, 51);
}

#[test]
fn test_asymmetric_matrix_rejected() {
    let rows: Vec<Vec<u32>> = vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 31, 0],
    ];
    assert!(matches!(
        Graph::from_matrix(["1", "2", "3", "4"], &rows),
        Err(TourError::Asymmetric { from: 2, to: 3, .. })
    ));
    let err = BranchAndBoundSolver::new().solve(&rows).unwrap_err();
    assert!(err.is_structural());
    assert!(NearestNeighborSolver::new(0).solve(&rows).is_err());
}

#[test]
fn test_diagonal_cost_rejected_by_every_solver() {
    let single: Vec<Vec<u32>> = vec![vec![5]];
    let expected = TourError::DiagonalCost { vertex: 0, cost: 5 };
    assert_eq!(BruteForceSolver::default().solve(&single).unwrap_err(), expected);
    assert_eq!(BranchAndBoundSolver::new().solve(&single).unwrap_err(), expected);
    assert_eq!(NearestNeighborSolver::new(0).solve(&single).unwrap_err(), expected);
    let detector = HamiltonianDetector::new(HamiltonianConfig::default());
    assert_eq!(detector.is_hamiltonian(&single), Err(expected));
}
