// src/lib.rs
//! Windowed list rendering for VivaCRM contact lists.
//!
//! [`scroll::VirtualScroll`] keeps only the visible rows (plus a small
//! buffer) materialized on a [`surface::ScrollSurface`]. The surface can be
//! in memory, the terminal host in [`ui`], or any other host behind the
//! trait.

pub mod app;
pub mod config;
pub mod directive;
pub mod input;
pub mod scroll;
pub mod surface;
pub mod ui;
