//! Concrete construction scenarios for small patterns.

use levenshtein_anml::prelude::*;
use levenshtein_anml::topology::validate_parameters;

fn kind_at(topology: &Topology, row: usize, col: usize) -> BlockKind {
    topology.node_at(Coord::new(row, col)).unwrap().kind
}

fn edges_at(topology: &Topology, row: usize, col: usize) -> Vec<(Coord, InPort)> {
    let grid = *topology.grid();
    topology
        .edges_from(Coord::new(row, col))
        .map(|edge| (grid.coord_of(edge.target), edge.in_port))
        .collect()
}

#[test]
fn test_two_symbol_pattern_with_zero_distance_rejected() {
    let err = Topology::build("ab", 0).unwrap_err();
    assert!(matches!(err, InvalidParameterError::EditDistanceTooSmall { .. }));
}

#[test]
fn test_pattern_not_longer_than_distance_plus_one_rejected() {
    assert!(matches!(
        Topology::build("abc", 2),
        Err(InvalidParameterError::PatternTooShort { pattern_len: 3, edit_distance: 2 })
    ));
    assert!(Topology::build("abcd", 2).is_ok());
}

#[test]
fn test_abcd_distance_one_dimensions() {
    let topology = Topology::build("abcd", 1).unwrap();
    assert_eq!(topology.grid().height(), 2);
    assert_eq!(topology.grid().width(), 5);
    assert_eq!(topology.nodes().len(), 9);
}

#[test]
fn test_abcd_distance_one_classification() {
    let topology = Topology::build("abcd", 1).unwrap();
    assert_eq!(kind_at(&topology, 0, 1), BlockKind::StartingMatch);
    assert_eq!(kind_at(&topology, 0, 4), BlockKind::ReportingMatch);
    assert_eq!(kind_at(&topology, 1, 0), BlockKind::SimpleStartingError);
    assert_eq!(kind_at(&topology, 1, 1), BlockKind::StartingError);
    assert_eq!(kind_at(&topology, 1, 2), BlockKind::LateStartMatch);
}

#[test]
fn test_abcd_distance_one_starting_match_edges() {
    let topology = Topology::build("abcd", 1).unwrap();
    assert_eq!(
        edges_at(&topology, 0, 1),
        vec![
            (Coord::new(1, 1), InPort::ErrorIn), // insertion
            (Coord::new(0, 2), InPort::MatchIn), // match
            (Coord::new(1, 2), InPort::ErrorIn), // replacement
            (Coord::new(1, 3), InPort::MatchIn), // delete 'b', match 'c'
        ]
    );
    assert!(topology
        .edges_from(Coord::new(0, 1))
        .all(|edge| edge.out == OutCapabilities::MATCH_ONLY));
}

#[test]
fn test_simple_starting_error_only_emits_errors() {
    let topology = Topology::build("abcdef", 3).unwrap();
    let edges: Vec<_> = topology.edges_from(Coord::new(1, 0)).collect();
    assert!(!edges.is_empty());
    assert!(edges.iter().all(|edge| edge.out == OutCapabilities::ERROR_ONLY));
}

#[test]
fn test_kitten_distance_two_grid() {
    let topology = Topology::build("kitten", 2).unwrap();
    let rows: Vec<Vec<&str>> = (0..3)
        .rev()
        .map(|row| {
            (0..7)
                .map(|col| {
                    topology
                        .node_at(Coord::new(row, col))
                        .map_or("--", |node| node.kind.abbreviation())
                })
                .collect()
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            vec!["CSTE", "SiEB", "SEB", "LSMB", "SiEB", "SiEB", "SERB"],
            vec!["SSEB", "SEB", "LSMB", "SiEB", "SiEB", "SERB", "SERB"],
            vec!["--", "StMB", "SiMB", "SiMB", "RMB", "RMB", "RMB"],
        ]
    );
}

#[test]
fn test_skip_edges_from_bottom_left() {
    // "abcdefgh", distance 3: from (0, 1), D1 = min(3, 6) = 3, D2 = min(2, 6) = 2
    let topology = Topology::build("abcdefgh", 3).unwrap();
    let families: Vec<_> = topology
        .edges_from(Coord::new(0, 1))
        .map(|edge| edge.family)
        .collect();
    assert_eq!(
        families,
        vec![
            EdgeFamily::Insertion,
            EdgeFamily::Match,
            EdgeFamily::Replacement,
            EdgeFamily::SkipThenMatch { deleted: 1 },
            EdgeFamily::SkipThenMatch { deleted: 2 },
            EdgeFamily::SkipThenMatch { deleted: 3 },
            EdgeFamily::SkipThenError { deleted: 1 },
            EdgeFamily::SkipThenError { deleted: 2 },
        ]
    );
    let targets: Vec<_> = edges_at(&topology, 0, 1).into_iter().map(|(c, _)| c).collect();
    assert_eq!(targets[5], Coord::new(3, 5));
    assert_eq!(targets[7], Coord::new(3, 4));
}

#[test]
fn test_builder_matches_direct_build() {
    let built = TopologyBuilder::new()
        .pattern("abcdef")
        .edit_distance(2)
        .build()
        .unwrap();
    assert_eq!(built, Topology::build("abcdef", 2).unwrap());
}

#[test]
fn test_validate_parameters_matches_build() {
    for (len, distance) in [(0, 1), (2, 1), (3, 1), (3, 2), (4, 2), (10, 0), (10, 8), (10, 9)] {
        let pattern: String = "x".repeat(len);
        assert_eq!(
            validate_parameters(len, distance).is_ok(),
            Topology::build(&pattern, distance).is_ok(),
            "len {len} distance {distance}"
        );
    }
}
