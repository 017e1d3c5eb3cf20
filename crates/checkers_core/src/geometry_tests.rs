use super::*;

#[test]
fn test_plain_column_delta() {
    assert_eq!(column_delta(2, 3), 1);
    assert_eq!(column_delta(3, 1), -2);
    assert_eq!(column_delta(4, 4), 0);
}

#[test]
fn test_column_delta_wraps_short_way() {
    assert_eq!(column_delta(0, 7), -1);
    assert_eq!(column_delta(7, 0), 1);
    assert_eq!(column_delta(6, 0), 2);
    assert_eq!(column_delta(0, 6), -2);
    assert_eq!(column_delta(1, 7), -2);
    assert_eq!(column_delta(7, 1), 2);
}

#[test]
fn test_midpoint_without_wrap_is_mean() {
    assert_eq!(midpoint_col(2, 4), 3);
    assert_eq!(midpoint_col(5, 3), 4);
}

#[test]
fn test_midpoint_across_seam_is_neighbour() {
    assert_eq!(midpoint_col(6, 0), 7);
    assert_eq!(midpoint_col(7, 1), 0);
    assert_eq!(midpoint_col(0, 6), 7);
    assert_eq!(midpoint_col(1, 7), 0);
}

#[test]
fn test_wrap_column() {
    assert_eq!(wrap_column(0, -1), Some(7));
    assert_eq!(wrap_column(7, 1), Some(0));
    assert_eq!(wrap_column(1, -2), Some(7));
    assert_eq!(wrap_column(6, 2), Some(0));
    assert_eq!(wrap_column(3, 2), None);
}
