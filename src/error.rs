use std::path::PathBuf;
use thiserror::Error;

use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum SemPararError {
    #[error("Failed to connect to Sem Parar: {0}")]
    Connect(#[from] TransportError),

    #[error("CPF or password incorrect for user {cpf}")]
    CpfOrPasswordIncorrect {
        cpf: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fill the invoice numbers: {0}")]
    InvoiceNumbers(String),

    #[error("Failed to fill the invoice data: {0}")]
    InvoiceData(#[source] serde_json::Error),

    #[error("Invalid month {0}. Only the current month and the last 3 months with an invoice are available")]
    InvalidMonth(u32),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Config file already exists at {0}")]
    ConfigAlreadyExists(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SemPararError>;
