use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("HTTP {status} while fetching {url}")]
    Fetch { url: String, status: u16 },

    #[error("transport failure while fetching {url}: {message}")]
    Transport { url: String, message: String },
}
