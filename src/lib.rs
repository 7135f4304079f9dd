// Calendar Layout Library
// Exports all modules for testing and reuse

pub mod layout;
pub mod models;
pub mod utils;
