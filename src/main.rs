use std::sync::Arc;

use crate::abs::App;
use crate::triangle::TriangleDemo;

mod abs;
mod triangle;

fn setup_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()
        .unwrap();
}

fn main() {
    setup_logging();

    let mut app = App::new("Basic Triangle", 800, 600, false);
    let mut demo = TriangleDemo::new(Arc::clone(&app.driver));

    log::info!("starting render loop");
    app.run(&mut demo);
    log::info!("window closed, exiting");
}
