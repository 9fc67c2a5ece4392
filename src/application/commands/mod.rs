// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the UI and the controller
// - Commands accept DTOs, return DTOs
// - Commands convert errors into ErrorResponse

pub mod product_commands;

pub use product_commands::*;
