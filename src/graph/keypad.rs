// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The default telephone-keypad knight-move topology.
//!
//! The keypad is modelled as 18 vertices: the letters `A`-`O` laid out in
//! a 3×5 grid plus the digits `1`-`3` on the bottom row. Each adjacency
//! list holds the keys a chess knight could jump to from that key. The
//! lists are hand-authored data, not derived from coordinates, so callers
//! substituting their own graph are free to supply any directed topology.

use super::Graph;

/// Build the default keypad knight-move graph.
///
/// 18 vertices, 60 directed edges.
pub fn keypad() -> Graph {
    let mut graph = Graph::new();
    graph.insert("A", &["H", "L"]);
    graph.insert("B", &["K", "M", "I"]);
    graph.insert("C", &["F", "L", "N", "J"]);
    graph.insert("D", &["G", "M", "O"]);
    graph.insert("E", &["H", "N"]);
    graph.insert("F", &["1", "M", "C"]);
    graph.insert("G", &["2", "N", "D"]);
    graph.insert("H", &["A", "K", "1", "3", "E", "O"]);
    graph.insert("I", &["2", "B", "L"]);
    graph.insert("J", &["3", "C", "M"]);
    graph.insert("K", &["B", "H", "2"]);
    graph.insert("L", &["A", "C", "I", "3"]);
    graph.insert("M", &["B", "D", "F", "J"]);
    graph.insert("N", &["1", "G", "C", "E"]);
    graph.insert("O", &["2", "H", "D"]);
    graph.insert("1", &["F", "H", "N"]);
    graph.insert("2", &["G", "I", "K", "O"]);
    graph.insert("3", &["L", "H", "J"]);
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_shape() {
        let graph = keypad();
        assert_eq!(graph.len(), 18);
        assert_eq!(graph.total_out_degree(), 60);
    }

    #[test]
    fn test_keypad_neighbours_resolve() {
        let graph = keypad();
        for (label, adjacent) in graph.iter() {
            for neighbour in adjacent {
                assert!(
                    graph.contains(neighbour),
                    "{} lists unknown neighbour {}",
                    label,
                    neighbour
                );
            }
        }
    }

    #[test]
    fn test_keypad_sample_rows() {
        let graph = keypad();
        assert_eq!(graph.neighbours("A").unwrap(), ["H", "L"]);
        assert_eq!(graph.neighbours("H").unwrap(), ["A", "K", "1", "3", "E", "O"]);
        assert_eq!(graph.neighbours("2").unwrap(), ["G", "I", "K", "O"]);
    }
}
