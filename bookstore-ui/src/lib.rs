//! bookstore-ui - Pure view components for the bookstore back office
//!
//! Views take state and callbacks as props and never fetch data or touch
//! browser storage; the web app wires them up.

pub mod components;
pub mod stores;

pub use components::*;
pub use stores::*;
