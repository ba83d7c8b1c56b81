use egui::Pos2;
use geo::Point;

use super::layer::LayerSet;
use crate::map_data::marker::ShelterInfo;

/// Popup body, one labelled line per known tag.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PopupContent {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl PopupContent {
    pub fn for_info(info: &ShelterInfo) -> Self {
        let mut lines = Vec::new();
        if let Some(description) = &info.description {
            lines.push(format!("Info: {description}"));
        }
        if let Some(operator) = &info.operator {
            lines.push(format!("Gestione: {operator}"));
        }
        if let Some(capacity) = &info.capacity {
            lines.push(format!("Posti letto: {capacity}"));
        }
        if let Some(mattress) = &info.mattress {
            lines.push(format!("Materassi: {mattress}"));
        }
        if let Some(opening) = &info.opening {
            // sic
            lines.push(format!("Apertra: {opening}"));
        }
        if let Some(water) = &info.water {
            lines.push(format!("Acqua: {water}"));
        }
        if let Some(addr) = &info.addr {
            lines.push(format!("Località: {addr}"));
        }
        if let Some(city) = &info.city {
            lines.push(format!("Paese: {city}"));
        }
        PopupContent {
            heading: info.name.clone(),
            lines,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub enum PopupState {
    #[default]
    Hidden,
    Shown {
        anchor: Point<f64>,
        content: PopupContent,
    },
}

impl PopupState {
    /// Resolves a map click. Any click first hides the popup, then the first
    /// marker within its layer's hit radius claims the click. A hit marker
    /// without popup content still consumes the click and leaves the popup
    /// hidden.
    pub fn apply_click(
        &mut self,
        layers: &LayerSet,
        click: Pos2,
        to_screen: impl Fn(Point<f64>) -> Pos2,
    ) {
        *self = PopupState::Hidden;
        for layer in layers.layers() {
            let hit_radius = layer.style.hit_radius();
            for marker in &layer.markers {
                if to_screen(marker.position).distance(click) <= hit_radius {
                    if marker.info.has_popup_content() {
                        *self = PopupState::Shown {
                            anchor: marker.position,
                            content: PopupContent::for_info(&marker.info),
                        };
                    }
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::map_data::marker::ShelterMarker;
    use crate::test_utils::get_test_marker;
    use crate::viewer::layer::{LayerSet, MarkerLayer};

    fn to_screen(position: Point<f64>) -> Pos2 {
        Pos2::new(position.x() as f32, position.y() as f32)
    }

    fn single_marker_layers(marker: ShelterMarker) -> LayerSet {
        let mut layers = LayerSet::new();
        layers.add(MarkerLayer::new(vec![marker]));
        layers
    }

    #[test]
    fn click_on_marker_shows_popup() {
        let layers = single_marker_layers(get_test_marker(40.0, 10.0, "Rifugio Test"));
        let mut state = PopupState::default();

        state.apply_click(&layers, Pos2::new(10.0, 40.0), to_screen);

        assert_eq!(
            state,
            PopupState::Shown {
                anchor: Point::new(10.0, 40.0),
                content: PopupContent {
                    heading: Some("Rifugio Test".to_string()),
                    lines: Vec::new(),
                },
            }
        );
    }

    #[test]
    fn click_on_empty_map_hides_popup() {
        let layers = single_marker_layers(get_test_marker(40.0, 10.0, "Rifugio Test"));
        let mut state = PopupState::default();

        state.apply_click(&layers, Pos2::new(10.0, 40.0), to_screen);
        assert!(matches!(state, PopupState::Shown { .. }));

        state.apply_click(&layers, Pos2::new(300.0, 300.0), to_screen);
        assert_eq!(state, PopupState::Hidden);
    }

    #[test]
    fn click_inside_hit_radius_counts_as_hit() {
        let layers = single_marker_layers(get_test_marker(40.0, 10.0, "Rifugio Test"));
        let mut state = PopupState::default();

        state.apply_click(&layers, Pos2::new(17.0, 40.0), to_screen);
        assert!(matches!(state, PopupState::Shown { .. }));

        state.apply_click(&layers, Pos2::new(17.5, 40.0), to_screen);
        assert_eq!(state, PopupState::Hidden);
    }

    #[test]
    fn first_marker_claims_overlapping_click() {
        let mut layers = LayerSet::new();
        layers.add(MarkerLayer::new(vec![get_test_marker(
            40.0,
            10.0,
            "Rifugio Primo",
        )]));
        layers.add(MarkerLayer::new(vec![get_test_marker(
            40.0,
            10.0,
            "Rifugio Secondo",
        )]));
        let mut state = PopupState::default();

        state.apply_click(&layers, Pos2::new(10.0, 40.0), to_screen);

        match state {
            PopupState::Shown { content, .. } => {
                assert_eq!(content.heading.as_deref(), Some("Rifugio Primo"));
            }
            PopupState::Hidden => panic!("expected popup to be shown"),
        }
    }

    #[test]
    fn hit_on_marker_without_popup_content_consumes_click() {
        let marker = ShelterMarker {
            position: Point::new(10.0, 40.0),
            info: ShelterInfo {
                capacity: Some("20".to_string()),
                ..Default::default()
            },
        };
        let layers = single_marker_layers(marker);
        let mut state = PopupState::Shown {
            anchor: Point::new(0.0, 0.0),
            content: PopupContent::default(),
        };

        state.apply_click(&layers, Pos2::new(10.0, 40.0), to_screen);
        assert_eq!(state, PopupState::Hidden);
    }

    #[test]
    fn content_lines_follow_popup_order() {
        let info = ShelterInfo {
            name: Some("Rifugio Test".to_string()),
            operator: Some("CAI".to_string()),
            description: Some("Bivacco in quota".to_string()),
            capacity: Some("20".to_string()),
            water: Some("yes".to_string()),
            opening: Some("Jun-Sep".to_string()),
            addr: Some("Val Brembana".to_string()),
            city: Some("Bergamo".to_string()),
            mattress: Some("10".to_string()),
        };

        let content = PopupContent::for_info(&info);

        assert_eq!(content.heading.as_deref(), Some("Rifugio Test"));
        assert_eq!(
            content.lines,
            vec![
                "Info: Bivacco in quota",
                "Gestione: CAI",
                "Posti letto: 20",
                "Materassi: 10",
                "Apertra: Jun-Sep",
                "Acqua: yes",
                "Località: Val Brembana",
                "Paese: Bergamo",
            ]
        );
    }

    #[test]
    fn content_skips_missing_fields() {
        let info = ShelterInfo {
            name: Some("Rifugio Test".to_string()),
            capacity: Some("20".to_string()),
            ..Default::default()
        };

        let content = PopupContent::for_info(&info);

        assert_eq!(content.heading.as_deref(), Some("Rifugio Test"));
        assert_eq!(content.lines, vec!["Posti letto: 20"]);
    }
}
