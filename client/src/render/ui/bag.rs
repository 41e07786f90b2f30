//! Bag panel: item counts, crafting recipe and the team

use apricorn_core::crafting::BALL_RECIPE;
use apricorn_core::GameState;
use macroquad::prelude::*;

use super::super::Renderer;
use super::common::*;

const BAG_WIDTH: f32 = 340.0;
const BAG_HEIGHT: f32 = 360.0;
const LINE_HEIGHT: f32 = 22.0;

/// Display label for an item id: "poke_ball" -> "Poke Ball"
fn item_label(item_id: &str) -> String {
    item_id
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Renderer {
    pub(crate) fn render_bag(&self, state: &GameState) {
        let x = 16.0;
        let y = 40.0;
        self.draw_panel_frame(x, y, BAG_WIDTH, BAG_HEIGHT);
        self.draw_corner_accents(x, y, BAG_WIDTH, BAG_HEIGHT);
        let mut line_y = self.draw_panel_header("BAG", x, y, BAG_WIDTH) + 12.0;
        let left = x + 18.0;
        let right = x + BAG_WIDTH - 18.0;

        let player = state.player();
        let mut empty = true;
        for (item_id, count) in player.inventory.iter() {
            empty = false;
            self.draw_text_sharp(&item_label(item_id), left, line_y, 18.0, TEXT_NORMAL);
            let count_text = format!("x{}", count);
            let width = self.measure_text_sharp(&count_text, 18.0).width;
            self.draw_text_sharp(&count_text, right - width, line_y, 18.0, TEXT_GOLD);
            line_y += LINE_HEIGHT;
        }
        if empty {
            self.draw_text_sharp("Empty", left, line_y, 18.0, TEXT_DIM);
            line_y += LINE_HEIGHT;
        }

        if let Some(recipe) = state.recipes().get(BALL_RECIPE) {
            line_y += 4.0;
            let color = if player.inventory.can_craft(recipe) { TEXT_TITLE } else { TEXT_DIM };
            self.draw_text_sharp(&format!("[C] {}", recipe.description), left, line_y, 16.0, color);
            line_y += LINE_HEIGHT;
        }

        line_y += 6.0;
        draw_line(left, line_y - 14.0, right, line_y - 14.0, 1.0, HEADER_BORDER);
        let team_title = format!("TEAM {}/{}", player.team().len(), player.team_capacity());
        self.draw_text_sharp(&team_title, left, line_y, 18.0, TEXT_TITLE);
        line_y += LINE_HEIGHT;

        if player.team().is_empty() {
            self.draw_text_sharp("No creatures yet", left, line_y, 18.0, TEXT_DIM);
        }
        for member in player.team() {
            let line = format!("{} Lv{}", member.name, member.level);
            self.draw_text_sharp(&line, left, line_y, 18.0, TEXT_NORMAL);
            let hp = format!("{}/{} hp", member.hp, member.max_hp);
            let width = self.measure_text_sharp(&hp, 16.0).width;
            self.draw_text_sharp(&hp, right - width, line_y, 16.0, TEXT_DIM);
            line_y += LINE_HEIGHT;
        }
    }
}
