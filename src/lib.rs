//! Core of the listings dashboard: loading, normalization, filtering and
//! chart-data derivation. Everything here is UI-free; the `atico-dash`
//! binary layers the egui presentation on top.

pub mod config;
pub mod data;
pub mod format;
