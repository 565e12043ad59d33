use serde::Serialize;
/// Width reserved for each axis strip.
pub const AXIS_MARGIN: f32 = 30.0;
/// Space kept free above the largest plotted value.
pub const HEADROOM: f32 = 10.0;
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
/// Axis-aligned rectangle in plot-local units (y grows downwards).
///
/// Tick marks are usually degenerate: zero width for vertical marks, zero
/// height for horizontal ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
    /// Smallest rectangle containing both corners, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
    pub fn left(&self) -> f32 {
        self.x
    }
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
    pub fn top(&self) -> f32 {
        self.y
    }
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}
/// Regions derived from the viewport on every compute cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Layout {
    pub viewport: Viewport,
    pub plot: Rect,
    pub time_axis: Rect,
    pub value_axis: Rect,
}
impl Layout {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let plot_width = (viewport.width - AXIS_MARGIN).max(0.0);
        let plot_height = (viewport.height - AXIS_MARGIN).max(0.0);
        let plot = Rect::new(AXIS_MARGIN, 0.0, plot_width, plot_height);
        Self {
            viewport,
            plot,
            time_axis: Rect::new(plot.x, plot.bottom(), plot.width, AXIS_MARGIN),
            value_axis: Rect::new(0.0, 0.0, AXIS_MARGIN, plot.height),
        }
    }
}
/// Closed value interval mapped onto the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}
/// Maps values to y coordinates inside a strip of the given height.
#[derive(Clone, Copy, Debug)]
pub(crate) struct VerticalScale {
    min: f32,
    factor: f32,
    height: f32,
}
impl VerticalScale {
    /// `None` when the range is degenerate, unbounded or too wide to
    /// represent, since any of those leaves no usable factor.
    pub(crate) fn new(range: ValueRange, height: f32) -> Option<Self> {
        let span = range.max - range.min;
        if !range.min.is_finite() || !range.max.is_finite() || !span.is_finite() {
            return None;
        }
        let factor = (height - HEADROOM) / span;
        (factor.is_finite() && factor != 0.0).then_some(Self {
            min: range.min,
            factor,
            height,
        })
    }
    pub(crate) fn min(&self) -> f32 {
        self.min
    }
    pub(crate) fn project(&self, value: f32) -> f32 {
        self.height - (value - self.min) * self.factor
    }
}
