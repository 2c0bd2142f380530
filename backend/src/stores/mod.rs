//! Storage backends for the todo repository.

pub mod postgres;

pub use postgres::PostgresTodoRepository;
