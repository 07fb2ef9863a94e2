//! End-to-end annealing runs.

use queen_anneal::boltzmann::{AnnealRunner, AnnealingNetwork, DriverState, NetworkConfig};
use queen_anneal::random::create_rng;
use queen_anneal::Board;

fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn go(prefix: &mut Vec<usize>, n: usize, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == n {
            out.push(prefix.clone());
            return;
        }
        for c in 0..n {
            if !prefix.contains(&c) {
                prefix.push(c);
                go(prefix, n, out);
                prefix.pop();
            }
        }
    }
    let mut out = Vec::new();
    go(&mut Vec::new(), n, &mut out);
    out
}

#[test]
fn four_queens_has_exactly_two_solutions() {
    let solutions: Vec<_> = permutations(4)
        .into_iter()
        .filter(|p| Board::from_columns(p).unwrap().is_feasible())
        .collect();
    assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
}

#[test]
fn known_solution_counts() {
    // 1, 0, 0, 2, 10, 4, 40, 92
    let expected = [1, 0, 0, 2, 10, 4, 40, 92];
    for (i, &count) in expected.iter().enumerate() {
        let n = i + 1;
        let found = permutations(n)
            .iter()
            .filter(|p| Board::from_columns(p).unwrap().is_feasible())
            .count();
        assert_eq!(found, count, "n={n}");
    }
}

#[test]
fn every_six_queens_solution_has_feasible_energy() {
    let config = NetworkConfig::new(6);
    let mut net = AnnealingNetwork::with_rng(&config, create_rng(0)).unwrap();
    let mut seen = 0;
    for columns in permutations(6) {
        let board = Board::from_columns(&columns).unwrap();
        if board.is_feasible() {
            net.set_board(board);
            assert!((net.energy() + 18.0).abs() < 1e-9);
            seen += 1;
        }
    }
    assert_eq!(seen, 4);
}

#[test]
fn four_queens_end_to_end() {
    let mut solved = 0;
    let trials = 30;
    for seed in 0..trials {
        let config = NetworkConfig::new(4)
            .with_max_iterations(10_000)
            .with_seed(seed);
        let result = AnnealRunner::run(&config).unwrap();
        assert!(result.iterations <= 10_000);
        match result.state {
            DriverState::Solved => {
                solved += 1;
                assert!(result.board.is_feasible());
                assert_eq!(result.board.active_count(), 4);
            }
            DriverState::Exhausted => assert_eq!(result.iterations, 10_000),
            DriverState::Running => panic!("run ended while still running"),
        }
    }
    assert!(solved >= 27, "solved {solved}/{trials}");
}

#[test]
fn one_queen_is_trivially_solved() {
    let config = NetworkConfig::new(1).with_seed(4);
    let result = AnnealRunner::run(&config).unwrap();
    // the single queen starts placed; the run ends once it flips off and back on
    assert!(result.is_solved());
    assert_eq!(result.solution, Some(vec![0]));
    assert!(result.state_changes >= 2);
}
