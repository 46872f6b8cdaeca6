//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod book_list;

pub use book_list::*;
