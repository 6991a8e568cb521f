use periodic_net::algs::hermite::{hermite_normal_form, lattice_rank};
use periodic_net::net_error::PeriodicNetError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn mul(u: &[Vec<i64>], a: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let cols = a.first().map_or(0, Vec::len);
    u.iter()
        .map(|ur| {
            (0..cols)
                .map(|j| ur.iter().zip(a).map(|(x, row)| x * row[j]).sum())
                .collect()
        })
        .collect()
}

/// Echelon shape with positive pivots and reduced entries above them.
fn assert_canonical(r: &[Vec<i64>], rank: usize) {
    let mut last_pivot: Option<usize> = None;
    for (i, row) in r.iter().enumerate() {
        let pivot = row.iter().position(|&x| x != 0);
        if i >= rank {
            assert_eq!(pivot, None, "row {i} beyond rank must be zero: {r:?}");
            continue;
        }
        let p = pivot.unwrap_or_else(|| panic!("row {i} below rank is zero: {r:?}"));
        if let Some(prev) = last_pivot {
            assert!(p > prev, "pivots not increasing: {r:?}");
        }
        last_pivot = Some(p);
        let lead = row[p];
        assert!(lead > 0, "pivot not positive: {r:?}");
        for above in &r[..i] {
            assert!(
                (0..lead).contains(&above[p]),
                "entry above pivot not reduced: {r:?}"
            );
        }
    }
}

#[test]
fn known_lattice_has_known_form() {
    let a = vec![vec![2i64, 2, 0], vec![1, 3, 0], vec![0, 1, -1]];
    let h = hermite_normal_form(&a).unwrap();
    assert_eq!(h.rank, 3);
    assert_eq!(
        h.reduced,
        vec![vec![1, 0, 3], vec![0, 1, 3], vec![0, 0, 4]]
    );
    assert_eq!(mul(&h.transform, &a), h.reduced);
}

#[test]
fn row_order_does_not_change_the_form() {
    let a = vec![vec![0i64, 1, -1], vec![2, 2, 0], vec![1, 3, 0]];
    let b = vec![vec![1i64, 3, 0], vec![0, 1, -1], vec![2, 2, 0]];
    let ha = hermite_normal_form(&a).unwrap();
    let hb = hermite_normal_form(&b).unwrap();
    assert_eq!(ha.independent_rows(), hb.independent_rows());
}

#[test]
fn collinear_loops_have_rank_one() {
    let a = vec![vec![2i64, 0, 0], vec![-4, 0, 0], vec![6, 0, 0]];
    let h = hermite_normal_form(&a).unwrap();
    assert_eq!(h.rank, 1);
    assert_eq!(h.independent_rows(), &[vec![2, 0, 0]]);
    assert_eq!(lattice_rank(&a).unwrap(), 1);
}

#[test]
fn zero_rows_and_columns_are_skipped() {
    let a = vec![vec![0i64, 0, 5], vec![0, 0, 0], vec![0, 0, -3]];
    let h = hermite_normal_form(&a).unwrap();
    assert_eq!(h.rank, 1);
    assert_eq!(h.independent_rows(), &[vec![0, 0, 1]]);
    assert_eq!(mul(&h.transform, &a), h.reduced);
}

#[test]
fn narrow_types_report_overflow() {
    let a: Vec<Vec<i8>> = vec![vec![i8::MIN, 1], vec![1, 0]];
    match hermite_normal_form(&a) {
        Ok(h) => assert_eq!(h.rank, 2),
        Err(e) => assert!(matches!(e, PeriodicNetError::ArithmeticOverflow { .. })),
    }
    let b: Vec<Vec<i8>> = vec![vec![i8::MIN]];
    assert_eq!(
        hermite_normal_form(&b).unwrap_err(),
        PeriodicNetError::ArithmeticOverflow { row: 0, col: 0 }
    );
}

#[test]
fn random_matrices_reduce_exactly() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let m = rng.gen_range(1..7);
        let n = rng.gen_range(1..5);
        let a: Vec<Vec<i64>> = (0..m)
            .map(|_| (0..n).map(|_| rng.gen_range(-6..=6)).collect())
            .collect();
        let h = hermite_normal_form(&a).unwrap();
        assert!(h.rank <= m.min(n));
        assert_eq!(mul(&h.transform, &a), h.reduced, "U*A != R for {a:?}");
        assert_canonical(&h.reduced, h.rank);

        // the reduced rows span the same lattice as the input
        let again = hermite_normal_form(h.independent_rows()).unwrap();
        assert_eq!(again.independent_rows(), h.independent_rows());
    }
}
