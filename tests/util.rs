#![allow(dead_code)]
use periodic_net::algs::hermite::hermite_normal_form;
use periodic_net::topology::{CrossingVector, PeriodicGraph};

pub type Bond = (usize, usize, [i64; 3]);

/// Build a 3D network sized to fit `bonds` and assert every bond is accepted.
pub fn net_from(bonds: &[Bond]) -> PeriodicGraph {
    PeriodicGraph::from_edges(3, bonds.iter().copied()).expect("valid bond table")
}

pub fn cv(v: [i64; 3]) -> CrossingVector {
    CrossingVector::from(v)
}

/// Canonical basis of the lattice spanned by `rows`.
pub fn lattice_of(rows: &[CrossingVector]) -> Vec<Vec<i64>> {
    let m: Vec<Vec<i64>> = rows.iter().map(|r| r.as_slice().to_vec()).collect();
    let h = hermite_normal_form(&m).expect("no overflow");
    h.independent_rows().to_vec()
}

/// Two loop sets span the same integer lattice.
pub fn assert_same_lattice(got: &[CrossingVector], want: &[CrossingVector]) {
    assert_eq!(
        lattice_of(got),
        lattice_of(want),
        "different lattices\n got={:?}\nwant={:?}",
        got,
        want
    );
}

pub fn cross(a: &CrossingVector, b: &CrossingVector) -> [i64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// -----------------------------------------------------------------------------
// Reference networks (node1, node2, bx, by, bz)
// -----------------------------------------------------------------------------

/// Triangle wrapping x three times in the negative direction.
pub const CASE_A: &[Bond] = &[(1, 2, [-1, 0, 0]), (2, 3, [-1, 0, 0]), (3, 1, [-1, 0, 0])];

/// Crossing edges only; percolates in all three directions.
pub const CASE_B: &[Bond] = &[
    (1, 2, [1, 1, 0]),
    (1, 4, [1, 0, 0]),
    (1, 7, [1, 0, 0]),
    (2, 3, [1, 1, 0]),
    (2, 3, [-1, -1, 0]),
    (3, 4, [0, 1, 0]),
    (4, 1, [0, -1, 0]),
    (4, 5, [0, -1, -1]),
    (5, 3, [0, 1, 0]),
    (5, 6, [1, 1, 1]),
    (6, 7, [0, -1, -1]),
    (7, 2, [1, 0, 0]),
    (7, 8, [0, 0, -1]),
    (8, 5, [0, -1, 0]),
    (8, 9, [0, 0, 1]),
];

/// CASE_B plus internal edges (one duplicated); reduces to 5 nodes / 14 edges.
pub const CASE_C: &[Bond] = &[
    (1, 2, [1, 1, 0]),
    (1, 4, [1, 0, 0]),
    (1, 7, [1, 0, 0]),
    (2, 3, [1, 1, 0]),
    (2, 3, [-1, -1, 0]),
    (3, 4, [0, 1, 0]),
    (4, 1, [0, -1, 0]),
    (4, 5, [0, -1, -1]),
    (5, 3, [0, 1, 0]),
    (5, 6, [1, 1, 1]),
    (6, 7, [0, -1, -1]),
    (7, 2, [1, 0, 0]),
    (7, 8, [0, 0, -1]),
    (8, 5, [0, -1, 0]),
    (8, 9, [0, 0, 1]),
    (1, 2, [0, 0, 0]),
    (3, 4, [0, 0, 0]),
    (1, 9, [0, 0, 0]),
    (2, 4, [0, 0, 0]),
    (1, 6, [0, 0, 0]),
    (6, 3, [0, 0, 0]),
    (1, 3, [0, 0, 0]),
    (1, 3, [0, 0, 0]),
];

/// Two clusters; percolates in the plane spanned by [1,1,0] and [0,0,1].
pub const CASE_D: &[Bond] = &[
    (1, 2, [1, 0, 0]),
    (2, 3, [0, 0, 0]),
    (3, 2, [0, 0, 1]),
    (2, 1, [0, 1, 0]),
];

/// A forest of crossing edges: no cycles at all.
pub const NO_LOOPS: &[Bond] = &[
    (0, 23, [0, -1, 0]),
    (2, 56, [0, -1, 0]),
    (5, 25, [1, 0, 0]),
    (12, 26, [0, 0, -1]),
    (15, 55, [0, 1, 0]),
    (15, 75, [0, 1, 0]),
    (21, 64, [0, 0, -1]),
    (26, 42, [1, 0, 0]),
    (28, 2, [0, 1, 0]),
    (33, 58, [-1, 0, 1]),
    (38, 51, [-1, 0, 0]),
    (39, 19, [0, 0, 1]),
    (45, 22, [0, 0, -1]),
    (48, 65, [0, 0, 1]),
    (50, 65, [0, 0, 1]),
];

/// Star around node 8 whose only cycles wrap y.
pub const STAR_Y: &[Bond] = &[
    (1, 8, [0, -1, 0]),
    (2, 8, [0, -1, 0]),
    (3, 4, [1, 0, 0]),
    (5, 2, [0, 0, -1]),
    (6, 2, [0, 0, -1]),
    (8, 6, [0, 0, 1]),
    (8, 9, [0, 0, 1]),
    (8, 10, [0, 0, 1]),
    (9, 2, [0, 0, -1]),
];
