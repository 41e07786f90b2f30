//! Status line, controls hint and help panel

use apricorn_core::GameState;
use macroquad::prelude::*;

use super::super::Renderer;
use super::area_banner::area_name;
use super::common::*;

/// Key help, one binding per line
const HELP_LINES: [(&str, &str); 11] = [
    ("WASD / Arrows", "Move"),
    ("R", "Toggle running"),
    ("E", "Battle a nearby creature or pick a bush"),
    ("F", "Attack (in battle)"),
    ("Space", "Throw a ball (in battle)"),
    ("C", "Craft a ball from 3 apricorns"),
    ("B", "Open the bag"),
    ("P", "Call a wild creature (debug)"),
    ("M / H", "Toggle this help"),
    ("Esc", "Run from battle, close panels, quit"),
    ("", "Walk over a bush to pick it"),
];

impl Renderer {
    /// Top status line
    pub(crate) fn render_hud(&self, state: &GameState) {
        let player = state.player();
        let (ax, ay) = state.world().current_coords();
        let (caught, total) = state.dex_progress();

        draw_rectangle(0.0, 0.0, screen_width(), 26.0, Color::new(0.0, 0.0, 0.0, 0.55));

        let status = format!(
            "{} ({},{})   Balls: {}   Apricorns: {}   Team: {}/{}   Dex: {}/{}",
            area_name((ax, ay)),
            ax + 1,
            ay + 1,
            player.balls(),
            player.apricorns(),
            player.team().len(),
            player.team_capacity(),
            caught,
            total
        );
        self.draw_text_sharp(&status, 10.0, 18.0, 18.0, TEXT_NORMAL);

        let hp_x = screen_width() - 190.0;
        self.draw_text_sharp("HP", hp_x - 26.0, 18.0, 18.0, TEXT_DIM);
        self.draw_hp_bar(hp_x, 8.0, 100.0, player.hp, player.max_hp);

        if player.running {
            self.draw_text_sharp("RUN", hp_x - 70.0, 18.0, 18.0, FRAME_ACCENT);
        }
    }

    pub(crate) fn render_controls_hint(&self) {
        let hint = "[M] Help";
        let width = self.measure_text_sharp(hint, 16.0).width;
        self.draw_text_outlined(hint, screen_width() - width - 12.0, screen_height() - 10.0, 16.0, TEXT_DIM);
    }

    pub(crate) fn render_help(&self) {
        let width = 440.0;
        let height = 52.0 + HELP_LINES.len() as f32 * 22.0;
        let x = screen_width() - width - 16.0;
        let y = 40.0;

        self.draw_panel_frame(x, y, width, height);
        self.draw_corner_accents(x, y, width, height);
        let mut line_y = self.draw_panel_header("CONTROLS", x, y, width) + 12.0;

        for (key, action) in HELP_LINES {
            self.draw_text_sharp(key, x + 20.0, line_y, 18.0, TEXT_GOLD);
            self.draw_text_sharp(action, x + 150.0, line_y, 18.0, TEXT_NORMAL);
            line_y += 22.0;
        }
    }
}
