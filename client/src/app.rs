//! Frame loop shared by the desktop and web builds

use apricorn_core::{GameEvent, GameState};
use macroquad::prelude::*;

use crate::input::InputHandler;
use crate::render::ui::area_banner::{area_name, AreaBanner};
use crate::render::ui::notice::NoticeLog;
use crate::render::Renderer;

/// Longest step fed to the simulation; avoids tunnelling after a stall
const MAX_FRAME_DELTA: f32 = 0.1;

pub struct App {
    state: GameState,
    input: InputHandler,
    renderer: Renderer,
    banner: AreaBanner,
    notices: NoticeLog,
}

impl App {
    pub fn new(state: GameState) -> Self {
        let mut banner = AreaBanner::default();
        banner.show(area_name(state.world().current_coords()));

        Self {
            state,
            input: InputHandler::new(),
            renderer: Renderer::new(),
            banner,
            notices: NoticeLog::default(),
        }
    }

    /// Run a single frame: input, simulation, render. Returns false once the
    /// player asked to quit.
    pub fn run_frame(&mut self) -> bool {
        let delta = get_frame_time().min(MAX_FRAME_DELTA);

        let mut events = Vec::new();
        for command in self.input.poll_commands() {
            events.extend(self.state.handle(command));
        }
        events.extend(self.state.update(delta, self.input.poll_movement()));

        let mut keep_running = true;
        for event in &events {
            match event {
                GameEvent::QuitRequested => keep_running = false,
                GameEvent::AreaChanged { area } => self.banner.show(area_name(*area)),
                other => {
                    if let Some(text) = notice_text(other) {
                        self.notices.push(text);
                    }
                }
            }
        }

        self.banner.update(delta);
        self.notices.update(delta);

        self.renderer.render(&self.state, &self.banner, &self.notices);
        keep_running
    }
}

/// HUD line for an event, if it deserves one
pub fn notice_text(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Notice(text) => Some(text.clone()),
        GameEvent::Harvested { amount } => Some(format!("Picked {} apricorns.", amount)),
        GameEvent::Crafted { item } => Some(format!("Crafted a {}!", item)),
        GameEvent::WildSpawned { name } => Some(format!("A wild {} appeared nearby.", name)),
        GameEvent::Caught {
            name,
            joined_team: false,
        } => Some(format!("Team is full. {} was released.", name)),
        _ => None,
    }
}
