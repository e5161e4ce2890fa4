//! Host platform integration.

pub mod links;

pub use links::open_url;
