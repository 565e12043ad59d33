use log::warn;
use crate::chart::geometry::{Point, VerticalScale};
use crate::chart::series::{ChannelId, SeriesEngine};
use crate::chart::{ChartError, CircularBuffer};
impl SeriesEngine {
    /// Screen-space polyline for one channel, oldest sample first.
    ///
    /// Asking for a channel that was never registered is a caller bug and
    /// returns [`ChartError::UnknownChannel`]. Numeric trouble (a degenerate
    /// range, an empty reference channel) yields no points and a warning.
    pub fn points(&self, id: ChannelId) -> Result<Vec<Point>, ChartError> {
        let channel = self.channels.get(id).ok_or(ChartError::UnknownChannel {
            id,
            count: self.channels.len(),
        })?;
        if channel.is_empty() {
            return Ok(Vec::new());
        }
        match self.project_channel(channel) {
            Ok(points) => Ok(points),
            Err(err) => {
                warn!("channel {id}: no points this cycle: {err}");
                Ok(Vec::new())
            }
        }
    }
    fn project_channel(&self, channel: &CircularBuffer<f32>) -> Result<Vec<Point>, ChartError> {
        let plot = self.layout().plot;
        // Horizontal spacing always follows channel 0; the others are in lock-step with it.
        let reference_len = self.channels.first().map_or(0, |c| c.len());
        if reference_len != channel.len() {
            warn!(
                "channel length {} differs from channel 0 length {reference_len}",
                channel.len()
            );
        }
        let x_factor = plot.width * self.config().view_width / reference_len as f32;
        if !x_factor.is_finite() {
            return Err(ChartError::NonFiniteScale { axis: "horizontal" });
        }
        let scale = VerticalScale::new(self.scale_for_render(), plot.height)
            .ok_or(ChartError::NonFiniteScale { axis: "vertical" })?;
        let mut points = Vec::with_capacity(channel.len());
        let mut samples = channel.iter();
        for index in 0..channel.len() {
            let point = match samples.next() {
                Some(&value) => Point::new(
                    index as f32 * x_factor + plot.x,
                    scale.project(value.max(scale.min())),
                ),
                None => *points.last().ok_or(ChartError::BufferExhausted)?,
            };
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::NonFiniteScale { axis: "vertical" });
            }
            points.push(point);
        }
        Ok(points)
    }
}
