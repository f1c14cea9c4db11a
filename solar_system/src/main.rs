//! Solar System Simulation
//!
//! Opens the simulation window and runs the render loop until the user
//! closes it. Exits with `-1` if the window or its OpenGL context cannot be
//! set up.

use solar_engine::foundation::logging;
use solar_engine::prelude::*;
use solar_engine::render::opengl::GlfwBackend;

/// Exit code for a normal run
const EXIT_SUCCESS: i32 = 0;
/// Exit code for a failed window or context setup
const EXIT_SETUP_FAILED: i32 = -1;

/// The simulation itself
///
/// Nothing is simulated yet: the default `render` clears every frame to the
/// configured color. Planet drawing will override it.
struct SolarSystem;

impl<B: WindowBackend> Application<B> for SolarSystem {
    fn initialize(&mut self, window: &mut WindowContext<B>) -> Result<(), AppError> {
        let (width, height) = window.framebuffer_size();
        log::info!("Framebuffer is {width}x{height}");
        Ok(())
    }

    fn handle_event(&mut self, _window: &mut WindowContext<B>, event: WindowEvent) -> Result<(), AppError> {
        if event == WindowEvent::CloseRequested {
            log::info!("Window close requested");
        }
        Ok(())
    }
}

fn run<B: WindowBackend>(config: &ApplicationConfig) -> Result<(), EngineError> {
    let mut engine = Engine::<B>::new(config)?;
    engine.run(&mut SolarSystem)?;
    Ok(())
}

/// Map the outcome of a run to the process exit code
///
/// Setup failures were already logged where they happened.
fn exit_code(result: &Result<(), EngineError>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(EngineError::Window(_)) => EXIT_SETUP_FAILED,
        Err(e @ EngineError::ApplicationError(_)) => {
            log::error!("{e}");
            EXIT_SETUP_FAILED
        }
    }
}

fn main() {
    let config = ApplicationConfig::default();
    logging::init(&config.engine.log_level);

    // `run` owns the window, so it is destroyed before the process exits.
    let code = exit_code(&run::<GlfwBackend>(&config));

    std::process::exit(code);
}
