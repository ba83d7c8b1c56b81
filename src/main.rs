use std::io;

use app_runner::AppRunner;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod app_runner;
mod map_data;
mod overpass;
mod result_writer;
#[cfg(test)]
mod test_utils;
mod viewer;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
    let app = AppRunner::init();
    app.run().unwrap();
}
