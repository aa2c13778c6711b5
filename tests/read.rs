use dimacs_csr::{
    dimacs::{read_from_file, DimacsReader, EdgeCountPolicy, ErrorKind, LineKind, Malformed, FORMAT},
    graph::Graph,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const ROADS: &str = "\
c 9th DIMACS Implementation Challenge: Shortest Paths
c sample road network
p sp 6 9
c arcs are not sorted by source
a 4 5 3
a 1 2 17
a 2 3 1
a 6 1 8
a 1 4 2
a 5 6 4
a 2 6 12
a 1 3 9
a 3 5 6
";

fn arc_lines(content: &str) -> Vec<(usize, usize)> {
    content
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| tokens.first() == Some(&"a"))
        .map(|tokens| (tokens[1].parse().unwrap(), tokens[2].parse().unwrap()))
        .collect()
}

#[test]
fn test_example() {
    let file = create_file("p DIMACS 3 2\na 1 2 5\na 2 3 7\n");
    let graph = read_from_file(file.path(), FORMAT).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.row_offsets(), [0, 1, 2, 2]);
    assert_eq!(graph.column_indices(), [2, 3]);
}

#[test]
fn test_offsets_shape() {
    let file = create_file(ROADS);
    let graph = Graph::read_from_file(file.path(), "DIMACS").unwrap();
    let offsets = graph.row_offsets();
    assert_eq!(offsets.len(), graph.node_count() + 1);
    assert_eq!(offsets[0], 0);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(offsets[graph.node_count()], arc_lines(ROADS).len());
    assert_eq!(graph.column_indices().len(), graph.edge_weights().len());
}

#[test]
fn test_degrees_match_arc_lines() {
    let file = create_file(ROADS);
    let graph = read_from_file(file.path(), FORMAT).unwrap();
    let arcs = arc_lines(ROADS);
    for v in graph.nodes() {
        let expected: Vec<_> = arcs
            .iter()
            .filter(|&&(source, _)| source == v)
            .map(|&(_, target)| target)
            .collect();
        assert_eq!(graph.out_degree(v), expected.len());
        assert_eq!(graph.neighbors(v), &expected[..]);
    }
    assert_eq!(
        graph.arcs(1).collect::<Vec<_>>(),
        [(2, 17.0), (4, 2.0), (3, 9.0)]
    );
}

#[test]
fn test_deterministic() {
    let file = create_file(ROADS);
    let first = read_from_file(file.path(), FORMAT).unwrap();
    let second = read_from_file(file.path(), FORMAT).unwrap();
    assert_eq!(first.row_offsets(), second.row_offsets());
    assert_eq!(first.column_indices(), second.column_indices());
}

#[test]
fn test_declared_edge_count() {
    let matching = create_file("p sp 3 2\na 1 2 1\na 3 2 1\n");
    let graph = read_from_file(matching.path(), FORMAT).unwrap();
    assert_eq!((graph.edge_count(), graph.num_arcs()), (2, 2));

    let mismatching = create_file("p sp 3 10\na 1 2 1\na 3 2 1\n");
    let graph = read_from_file(mismatching.path(), FORMAT).unwrap();
    assert_eq!((graph.edge_count(), graph.num_arcs()), (10, 2));
    assert_eq!(graph.row_offsets()[3], 2);

    let e = DimacsReader::new()
        .edge_count_policy(EdgeCountPolicy::Strict)
        .read_from_file(mismatching.path(), FORMAT)
        .unwrap_err();
    assert!(matches!(
        e.kind(),
        ErrorKind::EdgeCountMismatch {
            declared: 10,
            actual: 2
        }
    ));
}

#[test]
fn test_edge_before_problem() {
    let file = create_file("c header follows\nc\na 1 2 3\np sp 2 1\n");
    let e = read_from_file(file.path(), FORMAT).unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::EdgeBeforeProblem));
    assert_eq!(e.line(), Some(3));
    assert_eq!(e.line_kind(), Some(LineKind::Arc));
    assert_eq!(e.path(), file.path());
    assert_eq!(
        e.to_string(),
        format!("{}:3: edge read before the problem", file.path().display())
    );
}

#[test]
fn test_duplicate_problem_line() {
    let file = create_file("p sp 2 1\nc\na 1 2 3\nc\np sp 2 1\n");
    let e = read_from_file(file.path(), FORMAT).unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::DuplicateProblemLine));
    assert_eq!(e.line(), Some(5));
}

#[test]
fn test_node_id_out_of_range() {
    let file = create_file("p sp 3 1\na 9 1 0\n");
    let e = read_from_file(file.path(), FORMAT).unwrap_err();
    assert!(matches!(
        e.kind(),
        ErrorKind::NodeIdOutOfRange {
            id: 9,
            node_count: 3
        }
    ));
    assert_eq!(e.line(), Some(2));
}

#[test]
fn test_empty_problem_line() {
    let file = create_file("p\n");
    let e = read_from_file(file.path(), FORMAT).unwrap_err();
    assert!(matches!(
        e.kind(),
        ErrorKind::MalformedLine(Malformed::TokenCount { .. })
    ));
    assert_eq!(e.line(), Some(1));
}

#[test]
fn test_missing_problem_line() {
    let file = create_file("c only comments\n");
    let e = read_from_file(file.path(), FORMAT).unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::MissingProblemLine));
    assert_eq!(
        e.to_string(),
        format!("{}: missing the problem line", file.path().display())
    );
}

#[test]
fn test_unsupported_format() {
    let file = create_file(ROADS);
    let e = read_from_file(file.path(), "dimacs").unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::UnsupportedFormat(_)));
}
