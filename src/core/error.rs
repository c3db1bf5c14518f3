use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Destination already exists: {target} (while renaming {original})")]
    DestinationExists { original: String, target: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::DestinationExists { .. } => "DESTINATION_EXISTS",
            Error::Io(_) => "IO_ERROR",
        }
    }
}
