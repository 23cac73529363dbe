pub mod runner;

pub use runner::GameRunner;
pub use tilewalk_engine;

/// Convert an engine error into a JavaScript `Error`.
pub fn js_error(err: impl std::fmt::Display) -> wasm_bindgen::JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// tilewalk_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: a type implementing `tilewalk_engine::Game` with a `new()` constructor
/// - `$game_name`: a string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Parse the asset manifest and start the game. Rejects with the asset
        /// error if a sheet is missing or cannot be sliced; later host calls
        /// are then no-ops.
        #[wasm_bindgen]
        pub fn game_init(manifest_json: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            let result = runner.init(manifest_json);

            // Stored even on failure: an uninitialized runner ignores input and ticks.
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            match result {
                Ok(()) => {
                    log::info!("{}: initialized", $game_name);
                    Ok(())
                }
                Err(err) => {
                    log::error!("{}: init failed: {}", $game_name, err);
                    Err($crate::js_error(err))
                }
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::tilewalk_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input($crate::tilewalk_engine::InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_focus_lost() {
            with_runner(|r| r.push_input($crate::tilewalk_engine::InputEvent::FocusLost));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
