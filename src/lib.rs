pub mod commands;
pub mod error;
pub mod sizes;
pub mod tool;
