use egui::Color32;

use crate::map_data::marker::ShelterMarker;

#[derive(Debug, PartialEq, Clone)]
pub struct MarkerStyle {
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            radius: 6.0,
            fill: Color32::RED,
            stroke: Color32::WHITE,
            stroke_width: 2.0,
        }
    }
}

impl MarkerStyle {
    /// Click tolerance around a marker center. The stroke straddles the
    /// circle edge, so half of it extends past the radius.
    pub fn hit_radius(&self) -> f32 {
        self.radius + self.stroke_width / 2.0
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct MarkerLayer {
    pub markers: Vec<ShelterMarker>,
    pub style: MarkerStyle,
}

impl MarkerLayer {
    pub fn new(markers: Vec<ShelterMarker>) -> Self {
        MarkerLayer {
            markers,
            style: MarkerStyle::default(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct LayerSet {
    layers: Vec<MarkerLayer>,
}

impl LayerSet {
    pub fn new() -> Self {
        LayerSet { layers: Vec::new() }
    }

    /// Appends a layer. Layers are never merged or deduplicated, so loading
    /// the same data twice shows two stacked copies of every marker.
    pub fn add(&mut self, layer: MarkerLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[MarkerLayer] {
        &self.layers
    }

    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.markers.len()).sum()
    }
}
