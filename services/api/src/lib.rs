//! services/api/src/lib.rs
//!
//! The HTTP service around `curalink_core`: configuration, storage adapters
//! and the axum web layer.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
