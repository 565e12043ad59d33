// src/gui.rs
use std::time::{Duration, Instant};
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rounding, Stroke, Vec2};
use log::warn;
use stripchart::{
    second_of_minute, ChartConfig, ChartError, ChartFrame, ChartPipeline, Point, RandomSource,
    SeriesEngine,
};
const SAMPLE_PERIOD: Duration = Duration::from_millis(20);
struct ChannelStyle {
    name: &'static str,
    color: Color32,
    range: std::ops::Range<i32>,
}
pub struct StripChartApp {
    pipeline: ChartPipeline<RandomSource>,
    channels: Vec<ChannelStyle>,
    last_sample: Instant,
    paused: bool,
}
impl StripChartApp {
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let channels = vec![
            ChannelStyle {
                name: "Current",
                color: Color32::GREEN,
                range: 0..7,
            },
            ChannelStyle {
                name: "Voltage",
                color: Color32::RED,
                range: 10..13,
            },
        ];
        let mut engine = SeriesEngine::new(config)?;
        for _ in &channels {
            engine.register_channel();
        }
        engine.lock();
        let source = RandomSource::new(channels.iter().map(|c| c.range.clone()).collect());
        Ok(Self {
            pipeline: ChartPipeline::new(source, engine),
            channels,
            last_sample: Instant::now(),
            paused: false,
        })
    }
    fn pump(&mut self) {
        let due = self.last_sample.elapsed().as_millis() / SAMPLE_PERIOD.as_millis();
        if due == 0 {
            return;
        }
        // After a long stall only the newest window's worth matters.
        let due = (due as usize).min(self.pipeline.engine().capacity());
        for _ in 0..due {
            if let Err(err) = self.pipeline.pump_once() {
                warn!("sample source failed: {err}");
                break;
            }
        }
        self.last_sample = Instant::now();
    }
    fn paint(&self, painter: &egui::Painter, origin: Pos2, frame: &ChartFrame) {
        let to_screen = |p: Point| origin + Vec2::new(p.x, p.y);
        for (points, style) in frame.series.iter().zip(&self.channels) {
            if points.len() < 2 {
                continue;
            }
            let line = points.iter().copied().map(to_screen).collect();
            painter.add(egui::Shape::line(line, Stroke::new(1.0, style.color)));
        }
        let axis = Stroke::new(1.0, Color32::GRAY);
        let emphasis = Stroke::new(2.0, Color32::LIGHT_GRAY);
        let value_rects = frame.value_ticks.rects.iter().enumerate().map(|(i, rect)| {
            let stroke = if frame.value_ticks.emphasized == Some(i) {
                emphasis
            } else {
                axis
            };
            (rect, stroke)
        });
        let time_rects = frame.time_ticks.rects.iter().map(|rect| (rect, axis));
        for (rect, stroke) in time_rects.chain(value_rects) {
            let a = to_screen(rect.top_left());
            let b = to_screen(rect.bottom_right());
            if rect.width == 0.0 || rect.height == 0.0 {
                painter.line_segment([a, b], stroke);
            } else {
                painter.rect_stroke(egui::Rect::from_two_pos(a, b), Rounding::same(0.0), stroke);
            }
        }
        let font = FontId::proportional(9.0);
        for (rect, timestamp) in frame.time_ticks.ticks() {
            if let Some(second) = second_of_minute(timestamp) {
                let pos = to_screen(rect.bottom_right());
                painter.text(
                    pos,
                    Align2::CENTER_TOP,
                    format!("{second:02}"),
                    font.clone(),
                    Color32::GRAY,
                );
            }
        }
        for (rect, value) in frame.value_ticks.ticks() {
            let pos = to_screen(rect.top_left()) - Vec2::new(2.0, 0.0);
            painter.text(
                pos,
                Align2::RIGHT_CENTER,
                format!("{value}"),
                font.clone(),
                Color32::GRAY,
            );
        }
    }
}
impl eframe::App for StripChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.paused {
            self.pump();
        }
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.paused, "Pause");
                let mut autoscale = self.pipeline.engine().config().autoscale;
                if ui.checkbox(&mut autoscale, "Autoscale").changed() {
                    self.pipeline.engine_mut().set_autoscale(autoscale);
                }
                ui.separator();
                for style in &self.channels {
                    ui.colored_label(style.color, style.name);
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            self.pipeline.engine_mut().resize(rect.width(), rect.height());
            let frame = self.pipeline.frame();
            self.paint(&painter, rect.min, &frame);
        });
        ctx.request_repaint_after(SAMPLE_PERIOD);
    }
}
