use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("serializing report: {0}")]
    Json(#[from] serde_json::Error),
}
