//! bookstore-web - Bookstore back office for the browser
//!
//! Wires the pure views from bookstore-ui to browser storage, the router and
//! the bundled book catalog.

pub mod catalog;
pub mod config;
pub mod navigation;
pub mod pages;
pub mod storage;

use bookstore_common::BookId;
use dioxus::prelude::*;
use pages::{AddBook, BookList, EditBook, Login};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::BookList {})]
    #[route("/login")]
    Login {},
    #[route("/store-manager/all-books")]
    BookList {},
    #[route("/store-manager/add-book")]
    AddBook {},
    #[route("/store-manager/edit-book/:book_id")]
    EditBook { book_id: BookId },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
