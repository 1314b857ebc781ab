use super::*;
use crate::{Site, Vec2};

fn sites(pts: &[(i32, i32)]) -> Vec<Site> {
    pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

#[test]
fn sq_dist_basics() {
    let a = Vec2::new(0, 0);
    let b = Vec2::new(3, 4);
    assert_eq!(sq_dist(a, a), 0);
    assert_eq!(sq_dist(a, b), 25);
    assert_eq!(sq_dist(b, a), 25);
}

#[test]
fn sq_dist_widens_before_squaring() {
    // dx = 3e9 would overflow i32; dx² = 9e18 still fits i64.
    let a = Vec2::new(1_500_000_000, 0);
    let b = Vec2::new(-1_500_000_000, 0);
    assert_eq!(sq_dist(a, b), 9_000_000_000_000_000_000);
}

#[test]
fn rows_are_sorted_and_exclude_self() {
    let s = sites(&[(0, 0), (5, 0), (1, 0), (0, 2)]);
    let table = build_table(&s);
    assert_eq!(table.len(), 4);
    for i in 0..4 {
        let row = table.row(i);
        assert_eq!(row.len(), 3);
        for nb in row {
            assert_ne!(nb.index as usize, i);
        }
        for w in row.windows(2) {
            assert!((w[0].dist, w[0].index) <= (w[1].dist, w[1].index));
        }
    }
    // Row 0 by hand: (1,0) at 1, (0,2) at 4, (5,0) at 25.
    let row0: Vec<(i64, u32)> = table.row(0).iter().map(|nb| (nb.dist, nb.index)).collect();
    assert_eq!(row0, vec![(1, 2), (4, 3), (25, 1)]);
}

#[test]
fn equidistant_neighbors_tie_off_by_index() {
    // Four unit-distance neighbors around the origin.
    let s = sites(&[(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)]);
    let table = build_table(&s);
    let row0: Vec<u32> = table.row(0).iter().map(|nb| nb.index).collect();
    assert_eq!(row0, vec![1, 2, 3, 4]);
    assert!(table.row(0).iter().all(|nb| nb.dist == 1));
}

#[test]
fn coincident_sites_sort_first_at_distance_zero() {
    let s = sites(&[(2, 2), (7, 7), (2, 2)]);
    let table = build_table(&s);
    // Site 1's nearest entries are the duplicates 0 and 2, in index order.
    let row1: Vec<(i64, u32)> = table.row(1).iter().map(|nb| (nb.dist, nb.index)).collect();
    assert_eq!(row1, vec![(50, 0), (50, 2)]);
    let row0: Vec<(i64, u32)> = table.row(0).iter().map(|nb| (nb.dist, nb.index)).collect();
    assert_eq!(row0, vec![(0, 2), (50, 1)]);
}

#[test]
fn in_range_matches_linear_cutoff() {
    let s = sites(&[(0, 0), (1, 0), (2, 0), (10, 0), (0, 3)]);
    let table = build_table(&s);
    for i in 0..s.len() {
        for sqr in [0i64, 1, 3, 4, 9, 10, 99, 100, 1000] {
            let prefix = table.in_range(i, sqr);
            let linear: Vec<_> = table
                .row(i)
                .iter()
                .take_while(|nb| nb.dist <= sqr)
                .copied()
                .collect();
            assert_eq!(prefix, linear.as_slice(), "site {i} at sqr {sqr}");
        }
    }
}

#[test]
fn single_site_has_empty_row() {
    let table = build_table(&sites(&[(4, -4)]));
    assert_eq!(table.len(), 1);
    assert!(table.row(0).is_empty());
    assert!(table.in_range(0, i64::MAX).is_empty());
}
