use thiserror::Error;
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("buffer capacity must be greater than zero, got {capacity}")]
    InvalidCapacity { capacity: usize },
    #[error("view width must be finite and positive, got {0}")]
    InvalidViewWidth(f32),
    #[error("unknown channel {id}: {count} channel(s) registered")]
    UnknownChannel { id: usize, count: usize },
    #[error("{axis} scale factor is not finite")]
    NonFiniteScale { axis: &'static str },
    #[error("channel buffer exhausted before any point was produced")]
    BufferExhausted,
    #[error("invalid chart configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to render chart: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ChartError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ChartError {
    fn from(value: image::ImageError) -> Self {
        ChartError::Plot(value.to_string())
    }
}
