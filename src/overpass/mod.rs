use json_parser::OverpassJsonParserError;

use std::{io, path::PathBuf};

pub mod client;
pub mod data_reader;
pub mod json_parser;
pub mod query;

#[derive(Debug, thiserror::Error)]
pub enum ShelterDataError {
    #[error("Overpass JSON parser error: {error}")]
    ParserError { error: OverpassJsonParserError },

    #[error("Failed to build HTTP client: {error}")]
    HttpClientError { error: reqwest::Error },

    #[error("Overpass request failed: {error}")]
    RequestError { error: reqwest::Error },

    #[error("Overpass returned status {status}")]
    ResponseStatus { status: reqwest::StatusCode },

    #[error("Failed to read Overpass response: {error}")]
    ResponseReadError { error: reqwest::Error },

    #[error("File error: {error}")]
    FileError { error: io::Error },

    #[error("Read error: {error}")]
    ReadError { error: io::Error },
}

#[derive(Debug, PartialEq, Clone)]
pub enum DataSource {
    Overpass { endpoint: String, area: String },
    JsonFile { file: PathBuf },
    Stdin,
}
