use crossbeam_channel::Receiver;
use egui::{Color32, Stroke};
use tracing::{error, info, warn};
use walkers::sources::OpenStreetMap;
use walkers::{lon_lat, HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use super::layer::{LayerSet, MarkerLayer};
use super::popup::PopupState;
use super::{LoaderMessage, ViewSettings};

pub struct ShelterMapApp {
    tiles: HttpTiles,
    memory: MapMemory,
    center: Position,
    layers: LayerSet,
    popup: PopupState,
    rx: Receiver<LoaderMessage>,
    loading: bool,
}

impl ShelterMapApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: ViewSettings,
        rx: Receiver<LoaderMessage>,
    ) -> Self {
        let mut memory = MapMemory::default();
        if let Err(error) = memory.set_zoom(settings.zoom) {
            warn!(
                "Zoom level {} not accepted, keeping default: {:?}",
                settings.zoom, error
            );
        }
        ShelterMapApp {
            tiles: HttpTiles::new(OpenStreetMap, cc.egui_ctx.clone()),
            memory,
            center: lon_lat(settings.center_lon, settings.center_lat),
            layers: LayerSet::new(),
            popup: PopupState::default(),
            rx,
            loading: true,
        }
    }

    fn process_loader_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.loading = false;
            match message {
                Ok(markers) => {
                    self.layers.add(MarkerLayer::new(markers));
                    info!(
                        total_markers = self.layers.marker_count(),
                        "shelter markers loaded"
                    );
                }
                Err(error) => {
                    error!("Failed to load shelter data: {error}");
                }
            }
        }
    }
}

impl eframe::App for ShelterMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_loader_messages();
        if self.loading {
            // Keep polling the loader channel even without input events.
            ctx.request_repaint();
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            let map = Map::new(Some(&mut self.tiles), &mut self.memory, self.center).with_plugin(
                ShelterLayerPlugin {
                    layers: &self.layers,
                    popup: &mut self.popup,
                },
            );
            ui.add(map);
        });
    }
}

/// Draws marker layers over the basemap tiles and drives the popup from
/// click events on the map widget.
struct ShelterLayerPlugin<'a> {
    layers: &'a LayerSet,
    popup: &'a mut PopupState,
}

impl Plugin for ShelterLayerPlugin<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
    ) {
        for layer in self.layers.layers() {
            let style = &layer.style;
            for marker in &layer.markers {
                let projected =
                    projector.project(lon_lat(marker.position.x(), marker.position.y()));
                ui.painter().circle(
                    egui::pos2(projected.x, projected.y),
                    style.radius,
                    style.fill,
                    Stroke::new(style.stroke_width, style.stroke),
                );
            }
        }

        if response.clicked() {
            if let Some(click) = response.interact_pointer_pos() {
                self.popup.apply_click(self.layers, click, |position| {
                    let projected = projector.project(lon_lat(position.x(), position.y()));
                    egui::pos2(projected.x, projected.y)
                });
            }
        }

        if let PopupState::Shown { anchor, content } = &*self.popup {
            let projected = projector.project(lon_lat(anchor.x(), anchor.y()));
            egui::Area::new(egui::Id::new("shelter_popup"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(projected.x, projected.y))
                .show(ui.ctx(), |ui| {
                    egui::Frame::new()
                        .fill(Color32::WHITE)
                        .stroke(Stroke::new(1.0, Color32::BLACK))
                        .inner_margin(5)
                        .show(ui, |ui| {
                            ui.visuals_mut().override_text_color = Some(Color32::BLACK);
                            if let Some(heading) = &content.heading {
                                ui.label(egui::RichText::new(heading).strong());
                            }
                            for line in &content.lines {
                                ui.label(line);
                            }
                        });
                });
        }
    }
}
