use crossbeam_channel::Receiver;

use crate::map_data::marker::ShelterMarker;
use crate::overpass::ShelterDataError;

pub mod app;
pub mod layer;
pub mod popup;

/// Message from the background loader thread to the map window.
pub type LoaderMessage = Result<Vec<ShelterMarker>, ShelterDataError>;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Failed to run map window: {error}")]
    Run { error: eframe::Error },
}

#[derive(Debug, PartialEq, Clone)]
pub struct ViewSettings {
    pub title: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            title: "Rifugi".to_string(),
            center_lat: 45.5,
            center_lon: 9.5,
            zoom: 8.0,
        }
    }
}

/// Opens the map window and blocks until it is closed. Markers arriving on
/// `rx` while the window is open are added as layers.
pub fn run(settings: ViewSettings, rx: Receiver<LoaderMessage>) -> Result<(), ViewerError> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.title.clone())
            .with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "rifugi-map",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::ShelterMapApp::new(cc, settings, rx)))),
    )
    .map_err(|error| ViewerError::Run { error })
}
