//! Victory overlay shown once every species has been caught

use apricorn_core::GameState;
use macroquad::prelude::*;

use super::super::Renderer;
use super::common::*;

impl Renderer {
    pub(crate) fn render_victory(&self, state: &GameState) {
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));

        let width = 460.0;
        let height = 170.0;
        let x = ((screen_width() - width) / 2.0).floor();
        let y = ((screen_height() - height) / 2.0).floor();
        self.draw_panel_frame(x, y, width, height);
        self.draw_corner_accents(x, y, width, height);
        let content_y = self.draw_panel_header("VICTORY", x, y, width);

        let center_x = x + width / 2.0;
        let (_, total) = state.dex_progress();
        self.draw_text_centered("You caught every species!", center_x, content_y + 34.0, 28.0, TEXT_GOLD);
        self.draw_text_centered(
            &format!("{} of {} species registered", total, total),
            center_x,
            content_y + 64.0,
            18.0,
            TEXT_NORMAL,
        );
        self.draw_text_centered(
            "Press Space or Esc to keep exploring",
            center_x,
            content_y + 94.0,
            16.0,
            TEXT_DIM,
        );
    }
}
