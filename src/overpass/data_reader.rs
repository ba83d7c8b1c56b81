use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    time::Instant,
};

use tracing::trace;

use crate::map_data::element::ShelterElement;

use super::{
    client::OverpassClient, json_parser::OverpassJsonParser, query::ShelterQuery, DataSource,
    ShelterDataError,
};

pub struct ShelterDataReader {
    source: DataSource,
}

impl ShelterDataReader {
    pub fn new(data_source: DataSource) -> Self {
        Self {
            source: data_source,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn read(self) -> Result<Vec<ShelterElement>, ShelterDataError> {
        let read_start = Instant::now();
        let elements = match self.source {
            DataSource::Overpass {
                ref endpoint,
                ref area,
            } => {
                let client = OverpassClient::new(endpoint)?;
                let body = client.fetch(&ShelterQuery::for_area(area))?;
                Self::parse_lines(Cursor::new(body))?
            }
            DataSource::JsonFile { ref file } => {
                let f = File::open(file).map_err(|error| ShelterDataError::FileError { error })?;
                Self::parse_lines(BufReader::new(f))?
            }
            DataSource::Stdin => {
                let stdin = std::io::stdin();
                let locked = stdin.lock();
                Self::parse_lines(locked)?
            }
        };

        let read_duration = read_start.elapsed();
        trace!(
            read_duration_secs = read_duration.as_secs(),
            elements = elements.len(),
            "Shelter data read done"
        );

        Ok(elements)
    }

    fn parse_lines<R: BufRead>(mut reader: R) -> Result<Vec<ShelterElement>, ShelterDataError> {
        let mut parser_state = OverpassJsonParser::new();
        let mut elements = Vec::new();
        loop {
            let mut line = String::new();
            let len = reader
                .read_line(&mut line)
                .map_err(|error| ShelterDataError::ReadError { error })?;
            if len == 0 {
                break;
            }
            let parsed = parser_state
                .parse_line(line.as_bytes().to_owned())
                .map_err(|error| ShelterDataError::ParserError { error })?;
            elements.extend(parsed);
        }
        Ok(elements)
    }
}
