use std::num::NonZeroUsize;
use std::time::SystemTime;
use log::{debug, info, warn};
use crate::chart::geometry::{Layout, ValueRange, Viewport};
use crate::chart::{ChartConfig, ChartError, CircularBuffer};
/// Zero-based channel index handed out by [`SeriesEngine::register_channel`].
pub type ChannelId = usize;
/// Lock-step multi-channel window plus the scale and layout state that the
/// point and tick generators read.
pub struct SeriesEngine {
    config: ChartConfig,
    capacity: NonZeroUsize,
    pub(crate) channels: Vec<CircularBuffer<f32>>,
    pub(crate) time: Option<CircularBuffer<SystemTime>>,
    viewport: Viewport,
    range: ValueRange,
    scale_stale: bool,
    locked: bool,
}
impl SeriesEngine {
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let capacity = config.validate()?;
        let range = ValueRange {
            min: config.minimum,
            max: config.maximum,
        };
        Ok(Self {
            config,
            capacity,
            channels: Vec::new(),
            time: None,
            viewport: Viewport::default(),
            range,
            scale_stale: true,
            locked: false,
        })
    }
    pub fn with_capacity(capacity: usize) -> Result<Self, ChartError> {
        Self::new(ChartConfig::with_capacity(capacity))
    }
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
    pub fn channel(&self, id: ChannelId) -> Option<&CircularBuffer<f32>> {
        self.channels.get(id)
    }
    /// Shared timestamps; `None` until the first channel is registered.
    pub fn time(&self) -> Option<&CircularBuffer<SystemTime>> {
        self.time.as_ref()
    }
    pub fn is_locked(&self) -> bool {
        self.locked
    }
    /// Freezes the channel topology: registration and clearing become no-ops.
    pub fn lock(&mut self) {
        self.locked = true;
    }
    pub fn unlock(&mut self) {
        self.locked = false;
    }
    /// Adds an empty channel and returns its id, or `None` while locked.
    ///
    /// Registering on a chart that already holds samples resets the window:
    /// every channel and the timeline are emptied so all buffers keep the
    /// same length.
    pub fn register_channel(&mut self) -> Option<ChannelId> {
        if self.locked {
            debug!("channel registration ignored: topology is locked");
            return None;
        }
        let capacity = self.capacity;
        match self.time.as_ref().map(|time| time.len()) {
            None => self.time = Some(CircularBuffer::with_capacity(capacity)),
            Some(0) => {}
            Some(buffered) => {
                // A late channel would start out of step with the timeline.
                info!("new channel joins a running chart; discarding {buffered} buffered sample(s)");
                self.time = Some(CircularBuffer::with_capacity(capacity));
                for channel in &mut self.channels {
                    *channel = CircularBuffer::with_capacity(capacity);
                }
            }
        }
        let id = self.channels.len();
        self.channels.push(CircularBuffer::with_capacity(capacity));
        self.scale_stale = true;
        info!("registered channel {id} (capacity {capacity})");
        Some(id)
    }
    /// Drops every channel together with the shared timeline. Returns `false`
    /// when the topology is locked.
    pub fn clear_channels(&mut self) -> bool {
        if self.locked {
            debug!("clear ignored: topology is locked");
            return false;
        }
        self.channels.clear();
        self.time = None;
        self.scale_stale = true;
        info!("cleared all channels");
        true
    }
    /// Appends one timestamped sample to every channel.
    ///
    /// A vector shorter than the channel count is dropped as a whole so the
    /// buffers never drift apart; surplus values are ignored.
    pub fn push_sample(&mut self, values: &[f32]) -> bool {
        self.push_sample_at(values, SystemTime::now())
    }
    pub fn push_sample_at(&mut self, values: &[f32], timestamp: SystemTime) -> bool {
        if self.channels.is_empty() {
            return false;
        }
        if values.len() < self.channels.len() {
            debug!(
                "dropping sample with {} value(s) for {} channel(s)",
                values.len(),
                self.channels.len()
            );
            return false;
        }
        let Some(time) = self.time.as_mut() else {
            warn!("channels registered without a time buffer; sample dropped");
            return false;
        };
        time.append(timestamp);
        for (channel, &value) in self.channels.iter_mut().zip(values) {
            channel.append(value);
        }
        self.scale_stale = true;
        true
    }
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }
    pub fn layout(&self) -> Layout {
        Layout::from_viewport(self.viewport)
    }
    pub fn set_autoscale(&mut self, autoscale: bool) {
        self.config.autoscale = autoscale;
        self.scale_stale = true;
    }
    pub fn set_fixed_range(&mut self, minimum: f32, maximum: f32) {
        self.config.minimum = minimum;
        self.config.maximum = maximum;
        self.scale_stale = true;
    }
    pub fn set_tick_step(&mut self, step: f32) {
        self.config.tick_step = step;
    }
    pub fn set_view_width(&mut self, view_width: f32) -> Result<(), ChartError> {
        if !view_width.is_finite() || view_width <= 0.0 {
            return Err(ChartError::InvalidViewWidth(view_width));
        }
        self.config.view_width = view_width;
        Ok(())
    }
    /// Range produced by the last [`recompute_scale`](Self::recompute_scale).
    ///
    /// [`points`](Self::points) and the tick generators read this range as is;
    /// [`compute_frame`](Self::compute_frame) recomputes it before drawing.
    pub fn active_range(&self) -> ValueRange {
        self.range
    }
    pub fn is_scale_stale(&self) -> bool {
        self.scale_stale
    }
    pub fn recompute_scale(&mut self) {
        if !self.config.autoscale {
            self.range = ValueRange {
                min: self.config.minimum,
                max: self.config.maximum,
            };
            self.scale_stale = false;
            return;
        }
        if self.channels.is_empty() {
            return;
        }
        let (min, max) = self
            .channels
            .iter()
            .flat_map(|channel| channel.iter().copied())
            .filter(|v| !v.is_nan())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            debug!("autoscale found no samples; keeping previous range");
            self.scale_stale = false;
            return;
        }
        self.range = ValueRange {
            min: min.floor() - 1.0,
            max: max.floor() + 1.0,
        };
        self.scale_stale = false;
    }
    pub(crate) fn scale_for_render(&self) -> ValueRange {
        if self.scale_stale {
            warn!(
                "reading a scale that predates the latest data or settings; \
                 call recompute_scale or compute_frame first"
            );
        }
        self.range
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn engine_with_channels(capacity: usize, channels: usize) -> SeriesEngine {
        let mut engine = SeriesEngine::with_capacity(capacity).unwrap();
        for _ in 0..channels {
            engine.register_channel().unwrap();
        }
        engine
    }
    #[test]
    fn first_channel_creates_time_buffer() {
        let mut engine = SeriesEngine::with_capacity(8).unwrap();
        assert!(engine.time().is_none());
        assert_eq!(engine.register_channel(), Some(0));
        assert_eq!(engine.register_channel(), Some(1));
        assert_eq!(engine.time().map(|t| t.capacity()), Some(8));
    }
    #[test]
    fn late_registration_restarts_the_window() {
        let mut engine = engine_with_channels(4, 1);
        engine.push_sample(&[1.0]);
        engine.push_sample(&[2.0]);
        assert_eq!(engine.register_channel(), Some(1));
        assert!(engine.time().unwrap().is_empty());
        assert!(engine.channel(0).unwrap().is_empty());
        engine.push_sample(&[3.0, 4.0]);
        assert_eq!(engine.channel(0).unwrap().to_vec(), vec![3.0]);
        assert_eq!(engine.channel(1).unwrap().to_vec(), vec![4.0]);
    }
    #[test]
    fn push_without_channels_is_noop() {
        let mut engine = SeriesEngine::with_capacity(4).unwrap();
        assert!(!engine.push_sample(&[1.0, 2.0]));
        assert!(engine.time().is_none());
    }
    #[test]
    fn short_sample_is_dropped_whole() {
        let mut engine = engine_with_channels(4, 2);
        assert!(engine.push_sample(&[1.0, 2.0]));
        assert!(!engine.push_sample(&[3.0]));
        assert_eq!(engine.channel(0).unwrap().len(), 1);
        assert_eq!(engine.channel(1).unwrap().len(), 1);
        assert_eq!(engine.time().unwrap().len(), 1);
    }
    #[test]
    fn surplus_values_are_ignored() {
        let mut engine = engine_with_channels(4, 1);
        assert!(engine.push_sample(&[5.0, 6.0, 7.0]));
        assert_eq!(engine.channel(0).unwrap().to_vec(), vec![5.0]);
    }
    #[test]
    fn buffers_stay_in_lock_step() {
        let mut engine = engine_with_channels(3, 2);
        for k in 0..7 {
            engine.push_sample(&[k as f32, -(k as f32)]);
            let expected = (k + 1).min(3);
            assert_eq!(engine.time().unwrap().len(), expected);
            assert_eq!(engine.channel(0).unwrap().len(), expected);
            assert_eq!(engine.channel(1).unwrap().len(), expected);
        }
    }
    #[test]
    fn lock_guards_topology() {
        let mut engine = engine_with_channels(4, 1);
        engine.lock();
        assert_eq!(engine.register_channel(), None);
        assert!(!engine.clear_channels());
        assert_eq!(engine.channel_count(), 1);
        engine.unlock();
        assert!(engine.clear_channels());
        assert_eq!(engine.channel_count(), 0);
        assert!(engine.time().is_none());
    }
    #[test]
    fn fixed_scale_uses_configured_bounds() {
        let mut engine = engine_with_channels(4, 1);
        engine.set_fixed_range(-5.0, 5.0);
        engine.push_sample(&[100.0]);
        engine.recompute_scale();
        assert_eq!(engine.active_range(), ValueRange { min: -5.0, max: 5.0 });
    }
    #[test]
    fn autoscale_widens_floored_extremes() {
        let mut engine = engine_with_channels(4, 2);
        engine.set_autoscale(true);
        engine.push_sample(&[2.5, -1.5]);
        engine.push_sample(&[7.9, 0.0]);
        engine.recompute_scale();
        assert_eq!(engine.active_range(), ValueRange { min: -3.0, max: 8.0 });
        assert!(!engine.is_scale_stale());
    }
    #[test]
    fn autoscale_without_channels_keeps_range() {
        let mut engine = SeriesEngine::with_capacity(4).unwrap();
        engine.set_autoscale(true);
        let before = engine.active_range();
        engine.recompute_scale();
        assert_eq!(engine.active_range(), before);
    }
    #[test]
    fn data_changes_mark_scale_stale_until_next_frame() {
        let mut engine = engine_with_channels(4, 1);
        engine.set_autoscale(true);
        engine.recompute_scale();
        assert!(!engine.is_scale_stale());
        engine.push_sample(&[42.0]);
        assert!(engine.is_scale_stale());
        let frame = engine.compute_frame();
        assert!(!engine.is_scale_stale());
        assert_eq!(frame.range, ValueRange { min: 41.0, max: 43.0 });
    }
    #[test]
    fn invalid_view_width_is_rejected() {
        let mut engine = SeriesEngine::with_capacity(4).unwrap();
        assert!(engine.set_view_width(0.0).is_err());
        assert!(engine.set_view_width(0.5).is_ok());
    }
}
