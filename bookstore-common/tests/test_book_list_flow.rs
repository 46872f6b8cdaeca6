mod support;

use crate::support::{book, tracing_init, CountingCatalog, RecordingNavigator, ScriptedPrompt};
use bookstore_common::{
    book_rows, AdminRoute, AdminSession, BookId, BookListController, CurrencyFormat,
    MemorySessionStore, MountOutcome, SessionStore, ViewState,
};
use std::rc::Rc;

const FLAG: &str = "isAdminAuthenticated";

struct Harness {
    catalog: Rc<CountingCatalog>,
    store: Rc<MemorySessionStore>,
    navigator: Rc<RecordingNavigator>,
    controller: BookListController<
        Rc<CountingCatalog>,
        Rc<MemorySessionStore>,
        Rc<RecordingNavigator>,
    >,
}

fn harness(flag: Option<&str>, catalog: CountingCatalog) -> Harness {
    tracing_init();
    let catalog = Rc::new(catalog);
    let store = Rc::new(MemorySessionStore::new());
    if let Some(value) = flag {
        store.set(FLAG, value);
    }
    let navigator = Rc::new(RecordingNavigator::default());
    let controller = BookListController::new(
        catalog.clone(),
        AdminSession::new(store.clone(), FLAG),
        navigator.clone(),
        "Are you sure you want to delete this book?",
    );
    Harness {
        catalog,
        store,
        navigator,
        controller,
    }
}

fn two_books() -> CountingCatalog {
    CountingCatalog::new(vec![
        book(1, "The Hobbit", Some(1234.5)),
        book(2, "Dune", None),
    ])
}

fn loaded(h: &Harness) -> ViewState {
    match h.controller.on_mount() {
        MountOutcome::Loaded(state) => state,
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn test_mount_without_session_redirects_and_skips_fetch() {
    for flag in [None, Some("false"), Some("yes"), Some("")] {
        let h = harness(flag, two_books());
        assert!(matches!(
            h.controller.on_mount(),
            MountOutcome::RedirectedToLogin
        ));
        assert_eq!(*h.navigator.routes.borrow(), vec![AdminRoute::Login]);
        assert_eq!(*h.navigator.replaced.borrow(), vec![AdminRoute::Login]);
        assert_eq!(h.catalog.calls.get(), 0, "flag {flag:?} must not fetch");
    }
}

#[test]
fn test_mount_with_session_fetches_once() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);
    assert_eq!(h.catalog.calls.get(), 1);
    assert!(h.navigator.routes.borrow().is_empty());
    assert_eq!(
        state.into_books(),
        vec![book(1, "The Hobbit", Some(1234.5)), book(2, "Dune", None)]
    );
}

#[test]
fn test_mount_reports_catalog_failure() {
    let h = harness(Some("true"), CountingCatalog::failing());
    match h.controller.on_mount() {
        MountOutcome::LoadFailed(e) => assert!(e.to_string().contains("offline")),
        other => panic!("expected LoadFailed, got {other:?}"),
    }
    assert_eq!(h.catalog.calls.get(), 1);
}

#[test]
fn test_confirmed_delete_removes_book() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);
    let prompt = ScriptedPrompt::answering(true);

    let next = h.controller.delete_book(&state, BookId(1), &prompt);

    assert_eq!(next.ids(), vec![BookId(2)]);
    assert_eq!(
        *prompt.asked.borrow(),
        vec!["Are you sure you want to delete this book?".to_string()]
    );
    // local only: the catalog is never consulted again
    assert_eq!(h.catalog.calls.get(), 1);
}

#[test]
fn test_cancelled_delete_leaves_state() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);
    let prompt = ScriptedPrompt::answering(false);

    let next = h.controller.delete_book(&state, BookId(1), &prompt);

    assert_eq!(next, state);
    assert_eq!(prompt.asked.borrow().len(), 1);
}

#[test]
fn test_two_step_delete() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);

    let pending = h.controller.request_deletion(&state, BookId(2));
    assert_eq!(pending.title.as_deref(), Some("Dune"));

    let kept = h.controller.resolve_deletion(&state, pending.clone(), false);
    assert_eq!(kept, state);

    let next = h.controller.resolve_deletion(&state, pending, true);
    assert_eq!(next.ids(), vec![BookId(1)]);
}

#[test]
fn test_delete_does_not_survive_remount() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);
    let next = h
        .controller
        .delete_book(&state, BookId(1), &|_: &str| true);
    assert_eq!(next.len(), 1);

    let reloaded = loaded(&h);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(h.catalog.calls.get(), 2);
}

#[test]
fn test_logout_clears_flag_and_redirects() {
    let h = harness(Some("true"), two_books());
    let _ = loaded(&h);

    h.controller.logout();

    assert_eq!(h.store.get(FLAG), None);
    assert_eq!(*h.navigator.routes.borrow(), vec![AdminRoute::Login]);
    assert_eq!(*h.navigator.replaced.borrow(), vec![AdminRoute::Login]);

    // next activation is turned away
    assert!(matches!(
        h.controller.on_mount(),
        MountOutcome::RedirectedToLogin
    ));
    assert_eq!(h.catalog.calls.get(), 1);
}

#[test]
fn test_logout_without_session_still_redirects() {
    let h = harness(None, two_books());
    h.controller.logout();
    assert_eq!(h.store.get(FLAG), None);
    assert_eq!(*h.navigator.routes.borrow(), vec![AdminRoute::Login]);
}

#[test]
fn test_navigation_actions_keep_state() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);

    h.controller.add_book();
    h.controller.edit_book(BookId(2));

    assert_eq!(
        *h.navigator.routes.borrow(),
        vec![AdminRoute::AddBook, AdminRoute::EditBook(BookId(2))]
    );
    assert!(h.navigator.replaced.borrow().is_empty());
    assert_eq!(state.len(), 2);
}

#[test]
fn test_rendered_rows_after_delete() {
    let h = harness(Some("true"), two_books());
    let state = loaded(&h);
    let rows = book_rows(&state, &CurrencyFormat::default());
    assert_eq!(rows[0].price, "฿1,234.50");
    assert_eq!(rows[1].price, "-");

    let next = h
        .controller
        .delete_book(&state, BookId(1), &|_: &str| true);
    let rows = book_rows(&next, &CurrencyFormat::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Dune");
}
