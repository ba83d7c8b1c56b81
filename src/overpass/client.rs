use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use super::{query::ShelterQuery, ShelterDataError};

pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

const USER_AGENT: &str = concat!("rifugi-map/", env!("CARGO_PKG_VERSION"));

// Longer than the [timeout:..] in the query so the server side trips first.
const HTTP_TIMEOUT_SECS: u64 = 60;

pub struct OverpassClient {
    endpoint: String,
    http: Client,
}

impl OverpassClient {
    pub fn new(endpoint: &str) -> Result<Self, ShelterDataError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|error| ShelterDataError::HttpClientError { error })?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            http,
        })
    }

    pub fn fetch(&self, query: &ShelterQuery) -> Result<String, ShelterDataError> {
        info!(
            endpoint = %self.endpoint,
            area = query.area(),
            "requesting shelter data"
        );
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("data", query.to_ql())])
            .send()
            .map_err(|error| ShelterDataError::RequestError { error })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShelterDataError::ResponseStatus { status });
        }
        response
            .text()
            .map_err(|error| ShelterDataError::ResponseReadError { error })
    }
}
