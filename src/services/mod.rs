// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_controller;

pub use catalog_controller::{EditDraft, ProductCollectionController};
