//! User Interface Module
//!
//! Rendering for the palette screen and its overlays. Rendering only reads
//! `App`; all state changes go through the key handlers.

pub mod adjust_panel;
pub mod colors;
pub mod components;
pub mod library;
pub mod palette_view;
