use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown target language {0}, expected one of python, java")]
    UnknownTargetLanguage(String),

    #[error("Error formatting generated source")]
    FormatError(#[from] std::fmt::Error),
}
