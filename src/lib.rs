// TodoStore - in-memory task list state with filtered views

pub mod filter;
pub mod models;
pub mod repl;
pub mod store;

// Re-export main types for convenience
pub use filter::Filter;
pub use models::Task;
pub use store::Store;
