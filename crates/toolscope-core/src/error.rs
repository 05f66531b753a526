use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Camera request failed: {0}")]
    Camera(#[from] reqwest::Error),

    #[error("Camera returned HTTP {status} for {url}")]
    CameraStatus { status: u16, url: String },

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid crop dimensions: {width}x{height}")]
    InvalidCrop { width: u32, height: u32 },

    #[error("Missing query parameter: {0}")]
    MissingParam(&'static str),

    #[error("Invalid value for query parameter {name}: {value:?}")]
    InvalidParam { name: &'static str, value: String },

    #[error("Unknown API command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, ToolscopeError>;
