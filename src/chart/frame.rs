use std::time::SystemTime;
use serde::Serialize;
use crate::chart::geometry::{Layout, Point, ValueRange};
use crate::chart::series::SeriesEngine;
use crate::chart::ticks::TickSet;
/// Everything a renderer needs for one redraw, in plot-local units.
#[derive(Clone, Debug, Serialize)]
pub struct ChartFrame {
    pub layout: Layout,
    pub range: ValueRange,
    pub time_ticks: TickSet<SystemTime>,
    pub value_ticks: TickSet<f32>,
    /// One polyline per channel, indexed by channel id.
    pub series: Vec<Vec<Point>>,
}
impl SeriesEngine {
    /// Runs a full compute cycle: scale first, then axes, then every channel.
    pub fn compute_frame(&mut self) -> ChartFrame {
        self.recompute_scale();
        let time_ticks = self.time_ticks();
        let value_ticks = self.value_ticks();
        let series = (0..self.channel_count())
            .map(|id| self.points(id).unwrap_or_default())
            .collect();
        ChartFrame {
            layout: self.layout(),
            range: self.active_range(),
            time_ticks,
            value_ticks,
            series,
        }
    }
}
