use thiserror::Error;

#[derive(Error, Debug)]
pub enum MicrotiterError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Out of Bounds: pixel ({x}, {y}) lies outside the {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Unknown {kind} method: '{code}'")]
    UnknownMethod { kind: &'static str, code: String },

    #[error("Malformed Report: {0}")]
    MalformedReport(String),
}

pub type MtResult<T> = Result<T, MicrotiterError>;
