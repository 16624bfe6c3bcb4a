use thiserror::Error;

/// Failure modes of the catalog fetch. Kept as distinct variants so the
/// caller decides what a user sees; the GUI collapses all three into a
/// single banner message plus an empty catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog response is not valid JSON: {0}")]
    Decode(String),

    #[error("Unexpected catalog shape: {0}")]
    Shape(String),
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Market data request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Market data format error: {0}")]
    SeriesFormat(String),

    #[error("Image error: {source}")]
    Image {
        #[from]
        source: image::ImageError,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    // tract surfaces its failures as anyhow errors; pass them through.
    #[error(transparent)]
    Model(#[from] anyhow::Error),
}
