//! Whole-store maintenance - full wipe for reset and backup import.

mod repository;

pub use repository::MaintenanceRepository;
