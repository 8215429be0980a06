use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display("{_0}")]
    Custom(String),

    // -- Externals
    #[display("io error: {_0}")]
    #[from]
    Io(std::io::Error),

    #[display("json error: {_0}")]
    #[from]
    Json(serde_json::Error),
}

impl Error {
    pub fn custom(val: impl std::fmt::Display) -> Self {
        Self::Custom(val.to_string())
    }
}

impl std::error::Error for Error {}
