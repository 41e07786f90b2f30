//! Battle panel

use apricorn_core::{BattleSession, GameState, Phase, Turn};
use macroquad::prelude::*;

use super::super::Renderer;
use super::common::*;

const PANEL_WIDTH: f32 = 560.0;
const PANEL_HEIGHT: f32 = 214.0;

impl Renderer {
    pub(crate) fn render_battle(&self, state: &GameState, battle: &BattleSession) {
        // Dim the world behind the battle
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.35));

        let x = ((screen_width() - PANEL_WIDTH) / 2.0).floor();
        let y = (screen_height() - PANEL_HEIGHT - 36.0).floor();
        self.draw_panel_frame(x, y, PANEL_WIDTH, PANEL_HEIGHT);
        self.draw_corner_accents(x, y, PANEL_WIDTH, PANEL_HEIGHT);

        let wild = battle.wild();
        let title = format!("WILD {} Lv{}", wild.name.to_uppercase(), wild.level);
        let content_y = self.draw_panel_header(&title, x, y, PANEL_WIDTH);
        let left = x + 20.0;

        // Creature portrait
        let portrait_x = x + PANEL_WIDTH - 70.0;
        draw_rectangle(portrait_x - 26.0, content_y, 52.0, 52.0, PANEL_BG_MID);
        draw_circle(portrait_x, content_y + 26.0, 18.0, creature_color(wild.biome));

        self.draw_text_sharp(&wild.name, left, content_y + 14.0, 18.0, TEXT_NORMAL);
        self.draw_hp_bar(left + 110.0, content_y + 4.0, 200.0, wild.hp, wild.max_hp);

        let player = state.player();
        self.draw_text_sharp("You", left, content_y + 38.0, 18.0, TEXT_NORMAL);
        self.draw_hp_bar(left + 110.0, content_y + 28.0, 200.0, player.hp, player.max_hp);

        // Lead team member, when there is one
        if let Some(lead) = player.team().first() {
            let label = format!("{} Lv{}", lead.name, lead.level);
            self.draw_text_sharp(&label, left, content_y + 62.0, 16.0, TEXT_DIM);
            self.draw_hp_bar(left + 110.0, content_y + 52.0, 200.0, lead.hp, lead.max_hp);
        }

        // Latest battle line
        let message_y = content_y + 98.0;
        draw_line(left, message_y - 16.0, x + PANEL_WIDTH - 20.0, message_y - 16.0, 1.0, HEADER_BORDER);
        self.draw_text_sharp(battle.message(), left, message_y, 18.0, TEXT_GOLD);

        let actions = match battle.phase() {
            Phase::Active(Turn::Player) => format!(
                "[F] Attack   [Space] Throw ball ({})   [C] Craft   [Esc] Run",
                player.balls()
            ),
            Phase::Active(Turn::Creature) => "...".to_string(),
            Phase::Ended(outcome) => outcome.as_str().to_string(),
        };
        self.draw_text_sharp(&actions, left, y + PANEL_HEIGHT - 18.0, 16.0, TEXT_DIM);
    }
}
