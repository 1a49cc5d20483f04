/// Errors raised while building reusable matchers or loading options.
///
/// The text transforms themselves never fail; only compiling a delimiter set
/// and parsing configuration can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("delimiter pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
