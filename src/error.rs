use std::io;

#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("self loop on {0}: a city is always 0 hours from itself")]
    SelfLoop(String),

    #[error("malformed edge on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
