use super::*;

#[test]
fn next_title_index_advances_and_wraps() {
    assert_eq!(next_title_index(0, TITLES.len()), 1);
    assert_eq!(next_title_index(TITLES.len() - 1, TITLES.len()), 0);
}

#[test]
fn next_title_index_handles_empty_list() {
    assert_eq!(next_title_index(3, 0), 0);
}

#[test]
fn title_class_positions_relative_to_active() {
    assert_eq!(title_class(2, 2), "hero__word hero__word--active");
    assert_eq!(title_class(1, 2), "hero__word hero__word--above");
    assert_eq!(title_class(3, 2), "hero__word hero__word--below");
}
