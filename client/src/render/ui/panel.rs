//! Shared panel drawing: framed boxes, headers and HP bars

use macroquad::prelude::*;

use super::super::Renderer;
use super::common::*;

impl Renderer {
    /// Layered bronze frame with a dark fill
    pub(crate) fn draw_panel_frame(&self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, FRAME_OUTER);
        draw_rectangle(x + 1.0, y + 1.0, w - 2.0, h - 2.0, FRAME_MID);
        draw_rectangle(x + 3.0, y + 3.0, w - 6.0, h - 6.0, FRAME_INNER);
        draw_rectangle(
            x + FRAME_THICKNESS,
            y + FRAME_THICKNESS,
            w - FRAME_THICKNESS * 2.0,
            h - FRAME_THICKNESS * 2.0,
            PANEL_BG_DARK,
        );
    }

    pub(crate) fn draw_corner_accents(&self, x: f32, y: f32, w: f32, h: f32) {
        let s = CORNER_ACCENT_SIZE;
        for (cx, cy) in [(x, y), (x + w - s, y), (x, y + h - s), (x + w - s, y + h - s)] {
            draw_rectangle(cx, cy, s, s, FRAME_ACCENT);
            draw_rectangle(cx + 2.0, cy + 2.0, s - 4.0, s - 4.0, FRAME_OUTER);
        }
    }

    /// Title bar inside a panel frame; returns the y where content starts
    pub(crate) fn draw_panel_header(&self, title: &str, x: f32, y: f32, w: f32) -> f32 {
        let inner_x = x + FRAME_THICKNESS;
        let inner_y = y + FRAME_THICKNESS;
        let inner_w = w - FRAME_THICKNESS * 2.0;

        draw_rectangle(inner_x, inner_y, inner_w, HEADER_HEIGHT, HEADER_BG);
        draw_line(
            inner_x,
            inner_y + HEADER_HEIGHT,
            inner_x + inner_w,
            inner_y + HEADER_HEIGHT,
            1.0,
            HEADER_BORDER,
        );
        self.draw_text_centered(title, x + w / 2.0, inner_y + 20.0, 20.0, TEXT_TITLE);

        inner_y + HEADER_HEIGHT + 8.0
    }

    /// Labelled HP bar
    pub(crate) fn draw_hp_bar(&self, x: f32, y: f32, width: f32, hp: i32, max_hp: i32) {
        let fraction = if max_hp > 0 {
            (hp.max(0) as f32 / max_hp as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };

        draw_rectangle(x - 1.0, y - 1.0, width + 2.0, HP_BAR_HEIGHT + 2.0, FRAME_OUTER);
        draw_rectangle(x, y, width, HP_BAR_HEIGHT, HEALTHBAR_BG);
        draw_rectangle(x, y, width * fraction, HP_BAR_HEIGHT, hp_bar_color(fraction));

        let label = format!("{}/{}", hp.max(0), max_hp);
        self.draw_text_sharp(&label, x + width + 8.0, y + HP_BAR_HEIGHT, 16.0, TEXT_NORMAL);
    }
}
