// src/chart/mod.rs
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod pipeline;
pub mod plot;
pub mod points;
pub mod ring;
pub mod series;
pub mod source;
pub mod ticks;
pub use config::ChartConfig;
pub use error::ChartError;
pub use frame::ChartFrame;
pub use geometry::{Layout, Point, Rect, ValueRange, Viewport, AXIS_MARGIN, HEADROOM};
pub use pipeline::ChartPipeline;
pub use plot::{render_frame_png, PlotStyle};
pub use ring::CircularBuffer;
pub use series::{ChannelId, SeriesEngine};
pub use source::{ManualSource, RandomSource, SampleSource};
pub use ticks::{second_of_minute, TickSet};
