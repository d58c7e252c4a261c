use thiserror::Error;

/// A transition was requested before the scene could honor it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("{0} is not loaded yet")]
    AssetNotReady(&'static str),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed scene manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("node `{0}` has inverted bounds")]
    InvertedBounds(String),
    #[error("scene manifest contains no nodes")]
    Empty,
}

/// A placard image could not be turned into texture data.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image response was empty")]
    Empty,
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}
