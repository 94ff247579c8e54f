use anyhow::Context;
use tracing::info;

use platformer::app::App;
use platformer::constants::LOOP_TIME;
use platformer::platform;

/// The main entry point of the application.
///
/// Sets up logging, initializes SDL and the window, then runs frames until the player quits from the menu or closes
/// the window.
fn main() -> anyhow::Result<()> {
    platform::init_logging().context("Could not initialize logging")?;

    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Game loop finished");
    Ok(())
}
