use std::num::NonZeroUsize;
use serde::{Deserialize, Serialize};
use crate::chart::ChartError;
/// Plain-value settings for a [`SeriesEngine`](crate::chart::SeriesEngine).
///
/// Every field has a default, so a JSON document only needs the keys it
/// wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Samples retained per channel.
    pub capacity: usize,
    /// Derive the value range from buffered data instead of `minimum`/`maximum`.
    pub autoscale: bool,
    pub minimum: f32,
    pub maximum: f32,
    /// Value-axis tick spacing; zero turns value ticks off.
    pub tick_step: f32,
    /// Horizontal zoom applied to point and time-tick spacing.
    pub view_width: f32,
}
impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            capacity: 300,
            autoscale: false,
            minimum: 0.0,
            maximum: 10.0,
            tick_step: 2.0,
            view_width: 1.0,
        }
    }
}
impl ChartConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
    pub(crate) fn validate(&self) -> Result<NonZeroUsize, ChartError> {
        if !self.view_width.is_finite() || self.view_width <= 0.0 {
            return Err(ChartError::InvalidViewWidth(self.view_width));
        }
        NonZeroUsize::new(self.capacity).ok_or(ChartError::InvalidCapacity {
            capacity: self.capacity,
        })
    }
}
