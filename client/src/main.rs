use macroquad::prelude::*;

mod app;
mod input;
mod loader;
mod render;

use apricorn_core::GameState;
use app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: "Apricorn Trail".to_string(),
        window_width: 960,
        window_height: 540,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        std::panic::set_hook(Box::new(|info| match info.location() {
            Some(at) => log::error!("panic at {}:{}: {}", at.file(), at.line(), info),
            None => log::error!("panic: {}", info),
        }));
    }
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let data = match loader::load_game_data().await {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to load game data: {}", e);
            return loader::fatal(&e.to_string()).await;
        }
    };

    let seed = data
        .config
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);

    let state = match GameState::new(data, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to build world: {}", e);
            return loader::fatal(&e.to_string()).await;
        }
    };

    let mut app = App::new(state);
    while app.run_frame() {
        next_frame().await;
    }

    log::info!("Goodbye");
}
