use std::{
    io::{self, Write},
    path::PathBuf,
};

use serde_derive::Serialize;
use tracing::trace;

use crate::map_data::marker::ShelterMarker;

#[derive(Debug, thiserror::Error)]
pub enum ResultWriterError {
    #[error("JSON Serialization error {error}")]
    SerializeJson { error: serde_json::Error },

    #[error("Failed to write to stdout: {error}")]
    Stdout { error: io::Error },

    #[error("Failed to write to file: {error}")]
    FileWrite { error: io::Error },
}

#[derive(Debug, PartialEq, Clone)]
pub enum DataDestination {
    Stdout,
    Json { file: PathBuf },
}

/// Flat marker form for dump output, one record per marker. Absent tags are
/// left out of the JSON instead of being written as null.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MarkerRecord {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mattress: Option<String>,
}

impl From<&ShelterMarker> for MarkerRecord {
    fn from(marker: &ShelterMarker) -> Self {
        MarkerRecord {
            lat: marker.position.y(),
            lon: marker.position.x(),
            name: marker.info.name.clone(),
            operator: marker.info.operator.clone(),
            description: marker.info.description.clone(),
            capacity: marker.info.capacity.clone(),
            water: marker.info.water.clone(),
            opening: marker.info.opening.clone(),
            addr: marker.info.addr.clone(),
            city: marker.info.city.clone(),
            mattress: marker.info.mattress.clone(),
        }
    }
}

pub struct ResultWriter;
impl ResultWriter {
    #[tracing::instrument(skip(markers))]
    pub fn write(
        dest: DataDestination,
        markers: &[ShelterMarker],
    ) -> Result<(), ResultWriterError> {
        let records: Vec<MarkerRecord> = markers.iter().map(MarkerRecord::from).collect();
        match dest {
            DataDestination::Stdout => {
                let json = serde_json::to_string(&records)
                    .map_err(|error| ResultWriterError::SerializeJson { error })?;

                trace!(bytes_len = json.as_bytes().len(), "Writing json to stdout");

                std::io::stdout()
                    .write_all(json.as_bytes())
                    .map_err(|error| ResultWriterError::Stdout { error })?;
                Ok(())
            }
            DataDestination::Json { file } => {
                let json = serde_json::to_string(&records)
                    .map_err(|error| ResultWriterError::SerializeJson { error })?;

                trace!(
                    bytes_len = json.as_bytes().len(),
                    destination = ?file,
                    "Writing json"
                );

                std::fs::write(file, json)
                    .map_err(|error| ResultWriterError::FileWrite { error })?;

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use geo::Point;
    use serde_json::json;

    use super::*;
    use crate::map_data::marker::ShelterInfo;
    use crate::test_utils::get_test_marker;

    #[test]
    fn record_carries_position_and_tags() {
        let marker = ShelterMarker {
            position: Point::new(9.3355621, 45.8308094),
            info: ShelterInfo {
                name: Some("Rifugio S.E.V.".to_string()),
                operator: Some("Società Escursionisti Valmadrerese".to_string()),
                capacity: Some("28".to_string()),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(MarkerRecord::from(&marker)).expect("record serializes");

        assert_eq!(
            value,
            json!({
                "lat": 45.8308094,
                "lon": 9.3355621,
                "name": "Rifugio S.E.V.",
                "operator": "Società Escursionisti Valmadrerese",
                "capacity": "28",
            })
        );
    }

    #[test]
    fn absent_tags_are_left_out_of_json() {
        let marker = get_test_marker(45.7, 9.9, "Rifugio Test");

        let value = serde_json::to_value(MarkerRecord::from(&marker)).expect("record serializes");

        assert_eq!(
            value,
            json!({
                "lat": 45.7,
                "lon": 9.9,
                "name": "Rifugio Test",
            })
        );
    }
}
