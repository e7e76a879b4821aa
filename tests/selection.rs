//! Selection Integration Tests
//!
//! Bounds and no-op behaviour of next/previous/select.

use std::sync::Arc;

use mediashelf::core::SelectionController;
use mediashelf::domain::{default_documents, default_streams, Library, MediaKind};

fn controller() -> SelectionController {
    let library = Library::new(default_documents("pdf", "pdf", "assets/pdfs"), default_streams());
    SelectionController::new(Arc::new(library))
}

#[test]
fn test_next_at_last_is_noop() {
    let mut c = controller();
    assert_eq!(c.select_index(MediaKind::Stream, 4), Some(4));

    assert_eq!(c.next(MediaKind::Stream), None);
    assert_eq!(c.current(MediaKind::Stream), Some(4));
    assert!(!c.has_next(MediaKind::Stream));
}

#[test]
fn test_previous_at_first_is_noop() {
    let mut c = controller();
    c.select_index(MediaKind::Document, 0);

    assert_eq!(c.previous(MediaKind::Document), None);
    assert_eq!(c.current(MediaKind::Document), Some(0));
}

#[test]
fn test_previous_with_nothing_selected_is_noop() {
    let mut c = controller();

    assert_eq!(c.previous(MediaKind::Document), None);
    assert_eq!(c.current(MediaKind::Document), None);
}

#[test]
fn test_next_from_nothing_selects_first() {
    let mut c = controller();

    assert_eq!(c.next(MediaKind::Document), Some(0));
    assert_eq!(c.next(MediaKind::Document), Some(1));
    assert_eq!(c.previous(MediaKind::Document), Some(0));
}

#[test]
fn test_out_of_range_select_keeps_current() {
    let mut c = controller();
    c.select_index(MediaKind::Document, 2);

    assert_eq!(c.select_index(MediaKind::Document, 11), None);
    assert_eq!(c.select_index(MediaKind::Document, usize::MAX), None);
    assert_eq!(c.current(MediaKind::Document), Some(2));
}

#[test]
fn test_non_numeric_input_keeps_current() {
    let mut c = controller();
    c.select_input(MediaKind::Stream, "3");

    for raw in ["", "abc", "-1", "1.5", "two"] {
        assert_eq!(c.select_input(MediaKind::Stream, raw), None, "input {:?}", raw);
        assert_eq!(c.current(MediaKind::Stream), Some(3));
    }

    assert_eq!(c.select_input(MediaKind::Stream, " 1 "), Some(1));
}

#[test]
fn test_empty_list_never_selects() {
    let mut c = SelectionController::new(Arc::new(Library::default()));

    assert_eq!(c.next(MediaKind::Document), None);
    assert_eq!(c.select_index(MediaKind::Document, 0), None);
    assert!(!c.has_next(MediaKind::Document));
}
