use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};
use smallvec::SmallVec;
use tracing::{debug, error, info, trace, warn};

use crate::constants::{LOOP_TIME, VIEWPORT_SIZE, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::input::{process_simple_key_events, Bindings, SimpleKeyEvent};
use crate::platform;
use crate::render;

/// Main application wrapper that owns the SDL context, the window and the game for the lifetime of the loop.
///
/// SDL is initialised in [`App::new`] and torn down when the `App` is dropped.
pub struct App {
    pub game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    bindings: Bindings,
    focused: bool,
    // Keep SDL alive for the app lifetime so the video subsystem is not shut down
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, creates the game window and sets up a fresh game at the main menu.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = VIEWPORT_SIZE.x, height = VIEWPORT_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, VIEWPORT_SIZE.x, VIEWPORT_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(VIEWPORT_SIZE.x, VIEWPORT_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        info!("Application initialization completed successfully");
        Ok(App {
            game: Game::new(),
            canvas,
            event_pump,
            bindings: Bindings::default(),
            focused: true,
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame: input, game logic, painting, presenting, then sleeping out the rest of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        formatter::increment_frame();

        let mut events: SmallVec<[SimpleKeyEvent; 8]> = SmallVec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => {
                    debug!("Window lost focus");
                    self.focused = false;
                    self.bindings.release_all();
                }
                Event::Window {
                    win_event: WindowEvent::FocusGained,
                    ..
                } => {
                    debug!("Window gained focus");
                    self.focused = true;
                }
                other => events.extend(SimpleKeyEvent::from_sdl(&other)),
            }
        }

        let input = process_simple_key_events(&mut self.bindings, &events);
        if self.game.tick(&input) {
            return false;
        }

        if let Err(e) = render::draw_frame(&mut self.canvas, &self.game) {
            error!("Failed to draw frame: {e}");
        }
        self.canvas.present();

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
