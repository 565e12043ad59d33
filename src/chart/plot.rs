use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use crate::chart::error::ChartError;
use crate::chart::frame::ChartFrame;
use crate::chart::geometry::{Point, Rect};
use crate::chart::ticks::second_of_minute;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub background: RGBColor,
    pub axis: RGBColor,
    pub palette: Vec<RGBColor>,
    /// Draw tick labels; needs a system sans-serif font.
    pub labels: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: RGBColor(10, 10, 10),
            axis: WHITE,
            palette: vec![GREEN, RED, BLUE, CYAN, MAGENTA, YELLOW],
            labels: true,
        }
    }
}
/// Paints a computed frame to a PNG the size of its viewport.
pub fn render_frame_png(frame: &ChartFrame, style: &PlotStyle) -> Result<Vec<u8>, ChartError> {
    let width = frame.layout.viewport.width.round() as u32;
    let height = frame.layout.viewport.height.round() as u32;
    if width == 0 || height == 0 {
        return Err(ChartError::Plot("viewport has no area".into()));
    }
    if style.palette.is_empty() {
        return Err(ChartError::Plot("palette has no colors".into()));
    }
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        for (idx, points) in frame.series.iter().enumerate() {
            if points.len() < 2 {
                continue;
            }
            let color = style.palette[idx % style.palette.len()];
            let path: Vec<(i32, i32)> = points.iter().copied().map(pixel).collect();
            root.draw(&PathElement::new(path, &color))?;
        }
        let font = ("sans-serif", 10).into_font().color(&style.axis);
        for rect in &frame.time_ticks.rects {
            root.draw(&outline(rect, &style.axis))?;
        }
        for rect in &frame.value_ticks.rects {
            root.draw(&outline(rect, &style.axis))?;
        }
        if style.labels {
            for (rect, timestamp) in frame.time_ticks.ticks() {
                if let Some(second) = second_of_minute(timestamp) {
                    let (x, y) = pixel(rect.top_left());
                    root.draw(&Text::new(format!("{second:02}"), (x - 6, y + 12), font.clone()))?;
                }
            }
            for (rect, value) in frame.value_ticks.ticks() {
                let (x, y) = pixel(rect.top_left());
                root.draw(&Text::new(format!("{value}"), (x - 18, y - 5), font.clone()))?;
            }
        }
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
fn pixel(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}
fn outline(rect: &Rect, color: &RGBColor) -> PathElement<(i32, i32)> {
    let (left, top) = pixel(rect.top_left());
    let (right, bottom) = pixel(rect.bottom_right());
    PathElement::new(
        vec![(left, top), (right, top), (right, bottom), (left, bottom), (left, top)],
        color,
    )
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ChartError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
