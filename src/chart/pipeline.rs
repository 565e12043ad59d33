use log::debug;
use crate::chart::error::ChartError;
use crate::chart::frame::ChartFrame;
use crate::chart::series::SeriesEngine;
use crate::chart::source::SampleSource;
/// Couples a sample source to a [`SeriesEngine`]; the host decides when to
/// pump and when to draw.
pub struct ChartPipeline<S: SampleSource> {
    source: S,
    engine: SeriesEngine,
}
impl<S: SampleSource> ChartPipeline<S> {
    pub fn new(source: S, engine: SeriesEngine) -> Self {
        Self { source, engine }
    }
    /// Moves at most one sample from the source into the engine. Returns
    /// `Ok(false)` when the source is drained or the sample was dropped.
    pub fn pump_once(&mut self) -> Result<bool, ChartError> {
        let Some(sample) = self.source.next_sample()? else {
            return Ok(false);
        };
        let accepted = self.engine.push_sample(&sample);
        if !accepted {
            debug!("pipeline sample not accepted by engine");
        }
        Ok(accepted)
    }
    pub fn frame(&mut self) -> ChartFrame {
        self.engine.compute_frame()
    }
    pub fn engine(&self) -> &SeriesEngine {
        &self.engine
    }
    pub fn engine_mut(&mut self) -> &mut SeriesEngine {
        &mut self.engine
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::source::ManualSource;
    #[test]
    fn pipeline_buffers_and_builds_frames() {
        let source = ManualSource::new(vec![vec![1.0, 4.0], vec![2.0], vec![3.0, 6.0]]);
        let mut engine = SeriesEngine::with_capacity(16).unwrap();
        engine.register_channel().unwrap();
        engine.register_channel().unwrap();
        engine.resize(200.0, 100.0);
        let mut pipeline = ChartPipeline::new(source, engine);
        assert!(pipeline.pump_once().unwrap());
        assert!(!pipeline.pump_once().unwrap());
        assert!(pipeline.pump_once().unwrap());
        assert!(!pipeline.pump_once().unwrap());
        let frame = pipeline.frame();
        assert_eq!(frame.series.len(), 2);
        assert_eq!(frame.series[0].len(), 2);
        assert_eq!(pipeline.engine().channel(1).unwrap().to_vec(), vec![4.0, 6.0]);
    }
}
