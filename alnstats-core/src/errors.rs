use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Sequence data before the first header in: {0}")]
    MissingHeader(String),

    #[error("Corrupted file. 0 sequences found in the file: {0}")]
    EmptyAlignment(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
