pub mod batch;
pub mod normalize;

pub use batch::{BatchReport, normalize_files};
pub use normalize::NormalizeConfig;

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
