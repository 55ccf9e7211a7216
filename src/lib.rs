pub mod config;
pub mod customer;
pub mod error;
pub mod history;
pub mod item;
pub mod library;
pub mod shelf;

pub use error::LibraryError;
pub use library::{Library, ReturnPolicy};
