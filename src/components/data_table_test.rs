use super::*;

#[test]
fn range_label_reads_showing_x_to_y_of_z() {
    assert_eq!(range_label(Some((6, 7)), 7), "نمایش 6 تا 7 از 7 رکورد");
    assert_eq!(range_label(None, 0), "");
}

#[test]
fn sort_indicator_marks_active_direction() {
    assert_eq!(sort_indicator(true, Some(SortDirection::Asc)), "▲");
    assert_eq!(sort_indicator(true, Some(SortDirection::Desc)), "▼");
    assert_eq!(sort_indicator(true, None), "↕");
    assert_eq!(sort_indicator(false, None), "");
}

#[test]
fn aria_sort_matches_direction() {
    assert_eq!(aria_sort(Some(SortDirection::Asc)), "ascending");
    assert_eq!(aria_sort(None), "none");
}

#[test]
fn row_class_combines_modifiers() {
    assert_eq!(row_class(false, false), "data-table__row");
    assert_eq!(row_class(true, true), "data-table__row data-table__row--selected data-table__row--clickable");
}
