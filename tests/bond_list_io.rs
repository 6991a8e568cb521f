mod util;
use periodic_net::algs::{analyze, PercolationReport};
use periodic_net::io::bond_list::{read_bond_list, read_network, write_network};
use periodic_net::net_error::PeriodicNetError;
use util::*;

const CASE_A_TEXT: &str = "\
# node1 node2 bx by bz
1 2 -1 0 0
2 3 -1 0 0

3 1 -1 0 0
";

#[test]
fn reads_reference_text() {
    let g = read_network(CASE_A_TEXT.as_bytes(), None, None).unwrap();
    assert_eq!(g, net_from(CASE_A));
    let report = analyze(&g).unwrap();
    assert_eq!(report.dimensionality(), 1);
    assert!(report.basis.loops[0].eq_up_to_sign(&cv([3, 0, 0])));
}

#[test]
fn written_network_reads_back_identically() {
    let g = net_from(CASE_C);
    let mut buf = Vec::new();
    write_network(&g, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), CASE_C.len());
    assert_eq!(text.lines().next(), Some("1 2 1 1 0"));

    let back = read_network(text.as_bytes(), Some(3), Some(10)).unwrap();
    assert_eq!(back, g);
    assert_eq!(analyze(&back).unwrap(), analyze(&g).unwrap());
}

#[test]
fn empty_input_has_no_network() {
    let list = read_bond_list("# nothing here\n\n".as_bytes(), None, None).unwrap();
    assert!(list.bonds.is_empty());
    assert_eq!(list.dimension, 3);
    assert_eq!(list.to_graph().unwrap_err(), PeriodicNetError::EmptyNetwork);
}

#[test]
fn empty_input_with_node_count_does_not_percolate() {
    let g = read_network("# nothing here\n".as_bytes(), Some(3), Some(8)).unwrap();
    assert_eq!(g.get_number_of_nodes(), 8);
    let report = analyze(&g).unwrap();
    assert_eq!(report.raw_loops, 0);
    assert!(!report.percolates());
}

#[test]
fn trailing_isolated_nodes_survive_reading() {
    let text = "0 0 1 0 0\n";
    assert_eq!(read_network(text.as_bytes(), None, None).unwrap().get_number_of_nodes(), 1);
    let g = read_network(text.as_bytes(), None, Some(4)).unwrap();
    assert_eq!(g.get_number_of_nodes(), 4);
    assert_eq!(analyze(&g).unwrap().reduced_nodes, 4);
}

#[test]
fn oversized_node_ids_are_rejected_not_allocated() {
    let err = read_network("0 18446744073709551615 1 0 0\n".as_bytes(), None, None).unwrap_err();
    assert!(matches!(err, PeriodicNetError::BondListParse { line: 1, .. }), "{err}");
    let err = read_network("0 1000000000000 1 0 0\n".as_bytes(), None, None).unwrap_err();
    assert!(matches!(err, PeriodicNetError::BondListParse { line: 1, .. }), "{err}");
}

#[test]
fn garbage_is_reported_with_its_line() {
    let text = "0 1 0 0 1\n0 x 1 0 0\n";
    match read_bond_list(text.as_bytes(), None, None).unwrap_err() {
        PeriodicNetError::BondListParse { line, msg } => {
            assert_eq!(line, 2);
            assert!(msg.contains("node2"), "{msg}");
        }
        other => panic!("unexpected error {other:?}"),
    }
    let err = read_bond_list("0 1\n".as_bytes(), None, None).unwrap_err();
    assert!(err.to_string().contains("missing crossing vector"), "{err}");
}

#[test]
fn report_serializes_to_json() {
    let report = analyze(&net_from(CASE_D)).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"loops\":[[1,1,0],[0,0,1]]"), "{json}");
    let back: PercolationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert_eq!(back.reduced_nodes, 3);
    assert_eq!(back.raw_loops, 2);
}
