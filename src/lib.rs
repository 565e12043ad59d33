//! Real-time strip-chart engine.
//!
//! Samples go into a [`SeriesEngine`], which keeps a fixed window per channel
//! and turns it into plot-local geometry: one polyline per channel plus tick
//! marks for the time and value axes. Painting that geometry is left to the
//! host; [`render_frame_png`] is a headless example.
pub mod chart;
pub use chart::*;
