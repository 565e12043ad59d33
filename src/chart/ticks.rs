use std::time::{SystemTime, UNIX_EPOCH};
use log::warn;
use serde::Serialize;
use crate::chart::geometry::{Point, Rect, VerticalScale};
use crate::chart::series::SeriesEngine;
/// Time ticks land on seconds divisible by this interval.
pub const TIME_TICK_INTERVAL_SECS: u64 = 2;
/// Length of a time-axis tick mark.
pub const TIME_TICK_LENGTH: f32 = 10.0;
/// Value-axis tick marks start this far into the value-axis strip.
pub const VALUE_TICK_INSET: f32 = 20.0;
/// Upper bound on value ticks per cycle.
pub const MAX_VALUE_TICKS: usize = 1024;
/// Tick marks for one axis.
///
/// `rects[i]` belongs to `values[i]`. When the set is not empty it carries one
/// more rect than values: the trailing axis line (baseline or plot boundary).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickSet<V> {
    pub rects: Vec<Rect>,
    pub values: Vec<V>,
    /// Index of the emphasized tick, if any.
    pub emphasized: Option<usize>,
}
impl<V> TickSet<V> {
    pub fn empty() -> Self {
        Self {
            rects: Vec::new(),
            values: Vec::new(),
            emphasized: None,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
    /// Labelled marks, without the trailing axis line.
    pub fn ticks(&self) -> impl Iterator<Item = (&Rect, &V)> {
        self.rects.iter().zip(&self.values)
    }
    pub fn axis_line(&self) -> Option<&Rect> {
        if self.rects.len() > self.values.len() {
            self.rects.last()
        } else {
            None
        }
    }
}
/// Second-of-minute of a wall-clock timestamp (UTC).
pub fn second_of_minute(timestamp: &SystemTime) -> Option<u64> {
    timestamp
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs() % 60)
}
impl SeriesEngine {
    pub fn time_ticks(&self) -> TickSet<SystemTime> {
        let axis = self.layout().time_axis;
        let baseline = Rect::from_points(
            Point::new(axis.left(), axis.top()),
            Point::new(axis.right(), axis.top()),
        );
        let mut ticks = TickSet::empty();
        let Some(time) = self.time().filter(|t| !t.is_empty()) else {
            ticks.rects.push(baseline);
            return ticks;
        };
        let step = axis.width * self.config().view_width / time.len() as f32;
        let mut x = axis.left();
        let mut last_second = None;
        for timestamp in time {
            x += step;
            let Some(second) = second_of_minute(timestamp) else {
                continue;
            };
            if second % TIME_TICK_INTERVAL_SECS != 0 || last_second == Some(second) {
                continue;
            }
            last_second = Some(second);
            if x <= axis.left() + step + 0.1 {
                continue;
            }
            ticks.rects.push(Rect::from_points(
                Point::new(x, axis.top()),
                Point::new(x, axis.top() + TIME_TICK_LENGTH),
            ));
            ticks.values.push(*timestamp);
        }
        ticks.rects.push(baseline);
        ticks
    }
    pub fn value_ticks(&self) -> TickSet<f32> {
        let step = self.config().tick_step;
        if !step.is_finite() || step <= 0.0 {
            return TickSet::empty();
        }
        let layout = self.layout();
        let axis = layout.value_axis;
        let range = self.scale_for_render();
        let Some(scale) = VerticalScale::new(range, axis.height) else {
            return TickSet::empty();
        };
        let mark = |value: f32| {
            let y = scale.project(value);
            Rect::from_points(
                Point::new(axis.left() + VALUE_TICK_INSET, y),
                Point::new(axis.right(), y),
            )
        };
        let mut ticks = TickSet::empty();
        ticks.rects.push(mark(0.0));
        ticks.values.push(0.0);
        ticks.emphasized = Some(0);
        let mut previous = None;
        for k in 0.. {
            let value = range.min + k as f32 * step;
            if value > range.max {
                break;
            }
            if previous == Some(value) {
                warn!("value axis step {step} is below float resolution near {value}");
                break;
            }
            previous = Some(value);
            if ticks.values.len() >= MAX_VALUE_TICKS {
                warn!("value axis capped at {MAX_VALUE_TICKS} ticks (step {step})");
                break;
            }
            if value == 0.0 {
                continue;
            }
            ticks.rects.push(mark(value));
            ticks.values.push(value);
        }
        let plot = layout.plot;
        ticks.rects.push(Rect::from_points(
            plot.top_left(),
            Point::new(plot.left(), plot.bottom()),
        ));
        ticks
    }
}
