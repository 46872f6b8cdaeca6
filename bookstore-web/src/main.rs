//! Bookstore back office web entry point

fn main() {
    dioxus::launch(bookstore_web::App);
}
