//! SQLite storage implementation for the profile singleton.

mod model;
mod repository;

pub use model::ProfileDB;
pub use repository::ProfileRepository;
