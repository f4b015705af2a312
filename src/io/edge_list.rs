//! Plain-text edge-list reader and writer.
//!
//! # Supported format
//! - One edge per line: two whitespace-separated non-negative integers.
//! - Lines starting with `#` or `%` are comments; blank lines are skipped.
//!
//! This is the interchange format of the SNAP graph collections. Raw graphs
//! carry arbitrary vertex ids; [`densify`] remaps them to a dense `[0, n)`
//! space and [`bipartite_double`] turns a directed graph over that space into
//! its bipartite double, ready for [`PartitionSpec::halved`] and
//! [`PartitionSpec::split_edges`](crate::graph::partition::PartitionSpec::split_edges).
//!
//! [`PartitionSpec::halved`]: crate::graph::partition::PartitionSpec::halved

use crate::match_error::MatchError;
use hashbrown::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read, Write};

/// Reads `(u, v)` pairs from an edge-list stream, in file order.
pub fn read_edge_list<R: Read>(reader: R) -> Result<Vec<(usize, usize)>, MatchError> {
    let mut edges = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let u = parse_vertex(fields.next(), idx + 1)?;
        let v = parse_vertex(fields.next(), idx + 1)?;
        edges.push((u, v));
    }
    Ok(edges)
}

fn parse_vertex(raw: Option<&str>, line: usize) -> Result<usize, MatchError> {
    let raw = raw.ok_or_else(|| MatchError::EdgeListParse {
        line,
        reason: "expected two vertex ids".into(),
    })?;
    raw.parse::<usize>().map_err(|_| MatchError::EdgeListParse {
        line,
        reason: format!("invalid vertex id `{raw}`"),
    })
}

/// Remaps arbitrary vertex ids to a dense `[0, n)` space in first-seen
/// order. Returns the remapped edges and the vertex count `n`.
pub fn densify(edges: &[(usize, usize)]) -> (Vec<(usize, usize)>, usize) {
    let mut ids: HashMap<usize, usize> = HashMap::with_capacity(edges.len());
    let mut dense = Vec::with_capacity(edges.len());
    for &(u, v) in edges {
        let next = ids.len();
        let du = *ids.entry(u).or_insert(next);
        let next = ids.len();
        let dv = *ids.entry(v).or_insert(next);
        dense.push((du, dv));
    }
    let count = ids.len();
    (dense, count)
}

/// Doubles a directed graph over dense ids `[0, n)` into a bipartite graph
/// over `[0, 2n)`.
///
/// Both partitions copy the vertex set; each directed edge `(u, v)` becomes
/// the pair of crossing edges `(u, v + n)` and `(v, u + n)`, so a vertex's
/// left copy sees the right copies of all its neighbors in either direction.
/// Duplicate directed edges are emitted once.
pub fn bipartite_double(edges: &[(usize, usize)], vertex_count: usize) -> Vec<(usize, usize)> {
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(edges.len());
    let mut doubled = Vec::with_capacity(edges.len() * 2);
    for &(u, v) in edges {
        debug_assert!(u < vertex_count && v < vertex_count, "ids must be dense");
        if !seen.insert((u, v)) {
            continue;
        }
        doubled.push((u, v + vertex_count));
        doubled.push((v, u + vertex_count));
    }
    doubled
}

/// Writes edges one per line, `u v`.
pub fn write_edge_list<W: Write>(mut writer: W, edges: &[(usize, usize)]) -> Result<(), MatchError> {
    for &(u, v) in edges {
        writeln!(writer, "{u} {v}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_skips_comments() {
        let input = "# SNAP header\n% matrix-market header\n0 1\n\n  2 3\n";
        let edges = read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(edges, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn parse_error_carries_line_number() {
        let input = "0 1\nfoo bar\n";
        let err = read_edge_list(input.as_bytes()).unwrap_err();
        assert!(matches!(err, MatchError::EdgeListParse { line: 2, .. }));
    }

    #[test]
    fn missing_second_field_is_an_error() {
        let err = read_edge_list("7\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MatchError::EdgeListParse { line: 1, .. }));
    }

    #[test]
    fn densify_assigns_first_seen_order() {
        let (dense, n) = densify(&[(30, 10), (10, 20), (30, 20)]);
        assert_eq!(dense, vec![(0, 1), (1, 2), (0, 2)]);
        assert_eq!(n, 3);
    }

    #[test]
    fn densify_handles_self_loops() {
        let (dense, n) = densify(&[(5, 5)]);
        assert_eq!(dense, vec![(0, 0)]);
        assert_eq!(n, 1);
    }

    #[test]
    fn doubling_crosses_the_partition() {
        let doubled = bipartite_double(&[(0, 1), (1, 2)], 3);
        assert_eq!(doubled, vec![(0, 4), (1, 3), (1, 5), (2, 4)]);
        for &(u, v) in &doubled {
            assert!(u < 3 && (3..6).contains(&v));
        }
    }

    #[test]
    fn doubling_dedups_directed_edges() {
        let doubled = bipartite_double(&[(0, 1), (0, 1)], 2);
        assert_eq!(doubled.len(), 2);
        // The reverse direction is a distinct directed edge and doubles too.
        let both = bipartite_double(&[(0, 1), (1, 0)], 2);
        assert_eq!(both.len(), 4);
    }

    #[test]
    fn write_then_read_is_identity() {
        let edges = vec![(0, 3), (1, 2)];
        let mut buf = Vec::new();
        write_edge_list(&mut buf, &edges).unwrap();
        assert_eq!(read_edge_list(buf.as_slice()).unwrap(), edges);
    }
}
