use geo::Point;
use std::collections::HashMap;
use tracing::trace;

use super::element::{ElementKind, ShelterElement};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ShelterInfo {
    pub name: Option<String>,
    pub operator: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<String>,
    pub water: Option<String>,
    pub opening: Option<String>,
    pub addr: Option<String>,
    pub city: Option<String>,
    pub mattress: Option<String>,
}

impl ShelterInfo {
    pub fn from_tags(tags: &HashMap<String, String>) -> Self {
        ShelterInfo {
            name: Self::non_empty(tags, "name"),
            operator: Self::non_empty(tags, "operator"),
            description: Self::non_empty(tags, "description"),
            capacity: Self::non_empty(tags, "capacity")
                .or_else(|| Self::non_empty(tags, "beds")),
            water: Self::non_empty(tags, "drinking_water"),
            opening: Self::non_empty(tags, "opening_hours"),
            addr: Self::non_empty(tags, "addr"),
            city: Self::non_empty(tags, "city"),
            mattress: Self::non_empty(tags, "mattress"),
        }
    }

    pub fn has_popup_content(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.operator.is_some()
    }

    fn non_empty(tags: &HashMap<String, String>, key: &str) -> Option<String> {
        tags.get(key).filter(|value| !value.is_empty()).cloned()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShelterMarker {
    pub position: Point<f64>,
    pub info: ShelterInfo,
}

impl ShelterMarker {
    pub fn from_element(element: &ShelterElement) -> Option<Self> {
        let info = ShelterInfo::from_tags(&element.tags);
        info.name.as_ref()?;
        let position = match element.kind {
            ElementKind::Node => Point::new(element.lon?, element.lat?),
            ElementKind::Way => element.bounds?.min_corner(),
            ElementKind::Relation => return None,
        };
        Some(ShelterMarker { position, info })
    }
}

pub fn build_markers(elements: &[ShelterElement]) -> Vec<ShelterMarker> {
    let markers: Vec<_> = elements
        .iter()
        .filter_map(ShelterMarker::from_element)
        .collect();
    trace!(
        elements = elements.len(),
        markers = markers.len(),
        "built shelter markers"
    );
    markers
}
