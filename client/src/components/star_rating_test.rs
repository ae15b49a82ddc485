use super::*;

#[test]
fn star_fill_marks_leading_stars() {
    assert_eq!(star_fill(3), [true, true, true, false, false]);
}

#[test]
fn star_fill_bounds() {
    assert_eq!(star_fill(0), [false; 5]);
    assert_eq!(star_fill(5), [true; 5]);
    assert_eq!(star_fill(9), [true; 5]);
}
