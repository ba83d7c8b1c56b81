use std::{num::ParseFloatError, path::PathBuf, thread, time::Instant};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    map_data::marker::build_markers,
    overpass::{
        client::DEFAULT_ENDPOINT, data_reader::ShelterDataReader, query::DEFAULT_AREA, DataSource,
        ShelterDataError,
    },
    result_writer::{DataDestination, ResultWriter, ResultWriterError},
    viewer::{self, ViewSettings, ViewerError},
};

#[derive(Debug)]
pub enum AppRunnerError {
    OutputFileFormatIncorrect {
        filename: PathBuf,
    },
    Coords {
        name: String,
        cause: String,
        error: Option<ParseFloatError>,
    },
    DataRead {
        error: ShelterDataError,
    },
    ResultWrite {
        error: ResultWriterError,
    },
    Viewer {
        error: ViewerError,
    },
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    pub mode: CliMode,
}

#[derive(Subcommand)]
enum CliMode {
    View {
        #[arg(long, value_name = "NAME")]
        area: Option<String>,

        #[arg(long, value_name = "LAT,LON")]
        center: Option<String>,

        #[arg(long, value_name = "LEVEL")]
        zoom: Option<f64>,

        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        #[arg(long, value_name = "FILE")]
        data_json: Option<PathBuf>,
    },
    Dump {
        #[arg(long, value_name = "NAME")]
        area: Option<String>,

        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        #[arg(long, value_name = "FILE")]
        data_json: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub enum RunMode {
    View {
        data_source: DataSource,
        settings: ViewSettings,
    },
    Dump {
        data_source: DataSource,
        data_destination: DataDestination,
    },
}

pub struct AppRunner {
    mode: RunMode,
}

impl AppRunner {
    pub fn init() -> Self {
        let cli = Cli::parse();
        let mode = match cli.mode {
            CliMode::View {
                area,
                center,
                zoom,
                endpoint,
                data_json,
            } => {
                let settings = get_view_settings(&area, center, zoom)
                    .expect("could not get map center coordinates");
                RunMode::View {
                    data_source: get_data_source(data_json, area, endpoint),
                    settings,
                }
            }
            CliMode::Dump {
                area,
                endpoint,
                data_json,
                output,
            } => RunMode::Dump {
                data_source: get_data_source(data_json, area, endpoint),
                data_destination: get_data_destination(output)
                    .expect("could not get data destination"),
            },
        };

        Self { mode }
    }

    #[tracing::instrument(skip(self))]
    fn run_view(
        &self,
        data_source: &DataSource,
        settings: &ViewSettings,
    ) -> Result<(), AppRunnerError> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let source = data_source.clone();
        thread::spawn(move || {
            let result = ShelterDataReader::new(source)
                .read()
                .map(|elements| build_markers(&elements));
            if tx.send(result).is_err() {
                tracing::warn!("Map window closed before shelter data arrived");
            }
        });

        viewer::run(settings.clone(), rx).map_err(|error| AppRunnerError::Viewer { error })
    }

    #[tracing::instrument(skip(self))]
    fn run_dump(
        &self,
        data_source: &DataSource,
        data_destination: &DataDestination,
    ) -> Result<(), AppRunnerError> {
        let dump_start = Instant::now();

        let elements = ShelterDataReader::new(data_source.clone())
            .read()
            .map_err(|error| AppRunnerError::DataRead { error })?;
        let markers = build_markers(&elements);
        info!(
            elements = elements.len(),
            markers = markers.len(),
            "dump ready"
        );

        ResultWriter::write(data_destination.clone(), &markers)
            .map_err(|error| AppRunnerError::ResultWrite { error })?;

        let dump_end = dump_start.elapsed();
        info!("dump took {}s", dump_end.as_secs());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn run(&self) -> Result<(), AppRunnerError> {
        match &self.mode {
            RunMode::View {
                data_source,
                settings,
            } => self.run_view(data_source, settings),
            RunMode::Dump {
                data_source,
                data_destination,
            } => self.run_dump(data_source, data_destination),
        }
    }
}

fn get_view_settings(
    area: &Option<String>,
    center: Option<String>,
    zoom: Option<f64>,
) -> Result<ViewSettings, AppRunnerError> {
    let mut settings = ViewSettings {
        title: format!("Rifugi in {}", area.as_deref().unwrap_or(DEFAULT_AREA)),
        ..Default::default()
    };
    if let Some(center) = center {
        let (lat, lon) = get_center_coords(&center)?;
        settings.center_lat = lat;
        settings.center_lon = lon;
    }
    if let Some(zoom) = zoom {
        settings.zoom = zoom;
    }
    Ok(settings)
}

fn get_center_coords(center: &str) -> Result<(f64, f64), AppRunnerError> {
    let mut center = center.split(",");
    let lat = center
        .next()
        .ok_or_else(|| AppRunnerError::Coords {
            name: "LAT".to_string(),
            cause: "missing".to_string(),
            error: None,
        })?
        .parse()
        .map_err(|error| AppRunnerError::Coords {
            name: "LAT".to_string(),
            cause: "not parsable as f64".to_string(),
            error: Some(error),
        })?;
    let lon = center
        .next()
        .ok_or_else(|| AppRunnerError::Coords {
            name: "LON".to_string(),
            cause: "missing".to_string(),
            error: None,
        })?
        .parse()
        .map_err(|error| AppRunnerError::Coords {
            name: "LON".to_string(),
            cause: "not parsable as f64".to_string(),
            error: Some(error),
        })?;
    Ok((lat, lon))
}

fn get_data_source(
    data_json: Option<PathBuf>,
    area: Option<String>,
    endpoint: Option<String>,
) -> DataSource {
    match data_json {
        Some(file) if file.as_os_str() == "-" => DataSource::Stdin,
        Some(file) => DataSource::JsonFile { file },
        None => DataSource::Overpass {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            area: area.unwrap_or_else(|| DEFAULT_AREA.to_string()),
        },
    }
}

fn get_data_destination(output: Option<PathBuf>) -> Result<DataDestination, AppRunnerError> {
    if let Some(output) = output {
        if let Some(ext) = output.extension() {
            if ext == "json" {
                return Ok(DataDestination::Json { file: output });
            }
        }
        return Err(AppRunnerError::OutputFileFormatIncorrect { filename: output });
    }

    Ok(DataDestination::Stdout)
}
