use apricorn_core::entity::Direction;
use apricorn_core::tilemap::{GRID_HEIGHT, GRID_WIDTH};
use apricorn_core::{Area, Bush, GameState, Player, Tilemap, WildCreature};
use macroquad::prelude::*;

use super::ui::area_banner::AreaBanner;
use super::ui::common::*;
use super::ui::notice::NoticeLog;

/// Draws the world and the UI with plain shapes; there are no textures
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw text with the built-in font, snapped to whole pixels
    pub fn draw_text_sharp(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        draw_text(text, x.floor(), y.floor(), font_size, color);
    }

    pub(crate) fn measure_text_sharp(&self, text: &str, font_size: f32) -> TextDimensions {
        measure_text(text, None, font_size as u16, 1.0)
    }

    /// Text centred horizontally on `center_x`
    pub(crate) fn draw_text_centered(&self, text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
        let width = self.measure_text_sharp(text, font_size).width;
        self.draw_text_sharp(text, center_x - width / 2.0, y, font_size, color);
    }

    /// Text with a one pixel dark outline for legibility over the map
    pub(crate) fn draw_text_outlined(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        for ox in [-1.0, 1.0] {
            for oy in [-1.0, 1.0] {
                self.draw_text_sharp(text, x + ox, y + oy, font_size, Color::new(0.0, 0.0, 0.0, color.a));
            }
        }
        self.draw_text_sharp(text, x, y, font_size, color);
    }

    pub fn render(&self, state: &GameState, banner: &AreaBanner, notices: &NoticeLog) {
        clear_background(BLACK);

        let area = state.world().current();
        self.render_tilemap(area.map());
        for bush in area.bushes() {
            self.render_bush(bush);
        }
        for wild in area.creatures() {
            self.render_creature(wild);
        }
        self.render_player(state.player());
        self.render_reach_hint(state, area);

        self.render_hud(state);
        self.render_notices(notices);
        self.render_area_banner(banner);

        if state.show_bag() {
            self.render_bag(state);
        }
        if let Some(battle) = state.battle() {
            self.render_battle(state, battle);
        }
        if state.show_help() {
            self.render_help();
        } else {
            self.render_controls_hint();
        }
        if state.is_victory_shown() {
            self.render_victory(state);
        }
    }

    fn render_tilemap(&self, map: &Tilemap) {
        for y in 0..GRID_HEIGHT as i32 {
            for x in 0..GRID_WIDTH as i32 {
                let Some(biome) = map.tile(x, y) else {
                    continue;
                };
                let rect = Tilemap::tile_rect(x, y);
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, tile_color(biome));
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, TILE_GRID_LINE);
            }
        }
    }

    fn render_bush(&self, bush: &Bush) {
        let r = bush.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, BUSH_LEAVES_DARK);
        draw_rectangle(r.x + 2.0, r.y + 2.0, r.w - 4.0, r.h - 4.0, BUSH_LEAVES);

        if bush.is_harvestable() {
            // Three apricorns
            let (cx, cy) = r.center();
            for (ox, oy) in [(-5.0, -3.0), (4.0, -4.0), (0.0, 5.0)] {
                draw_circle(cx + ox, cy + oy, 3.0, APRICORN_COLOR);
            }
        } else if let Some(remaining) = bush.regrow_remaining() {
            let label = format!("{:.0}", remaining.ceil());
            self.draw_text_centered(&label, r.center().0, r.y - 2.0, 14.0, TEXT_DIM);
        }
    }

    fn render_creature(&self, wild: &WildCreature) {
        let r = wild.rect;
        let (cx, cy) = r.center();
        draw_circle(cx, cy, r.w / 2.0, creature_color(wild.biome));
        draw_circle_lines(cx, cy, r.w / 2.0, 1.5, Color::new(0.0, 0.0, 0.0, 0.6));

        let label = format!("Lv{}", wild.level);
        self.draw_text_centered(&label, cx, r.y - 3.0, 14.0, TEXT_NORMAL);
    }

    fn render_player(&self, player: &Player) {
        let r = player.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, PLAYER_OUTLINE);
        draw_rectangle(r.x + 2.0, r.y + 2.0, r.w - 4.0, r.h - 4.0, PLAYER_FILL);

        // Facing marker on the leading edge
        let (cx, cy) = r.center();
        let (fx, fy) = player.facing.to_unit_vector();
        let (mx, my) = (cx + fx * (r.w / 2.0 - 4.0), cy + fy * (r.h / 2.0 - 4.0));
        let (w, h) = match player.facing {
            Direction::Left | Direction::Right => (4.0, 10.0),
            Direction::Up | Direction::Down => (10.0, 4.0),
        };
        draw_rectangle(mx - w / 2.0, my - h / 2.0, w, h, PLAYER_OUTLINE);

        if player.running {
            draw_rectangle_lines(r.x - 2.0, r.y - 2.0, r.w + 4.0, r.h + 4.0, 1.0, FRAME_ACCENT);
        }
    }

    /// Outline whatever the interact key would act on
    fn render_reach_hint(&self, state: &GameState, area: &Area) {
        if state.battle().is_some() {
            return;
        }
        let reach = state.config().world.reach;
        let player = &state.player().rect;

        let target = area
            .creature_in_reach(player, reach)
            .and_then(|id| area.creature(id))
            .map(|wild| wild.rect)
            .or_else(|| {
                area.bush_in_reach(player, reach)
                    .and_then(|index| area.bushes().get(index))
                    .map(|bush| bush.rect)
            });

        if let Some(r) = target {
            draw_rectangle_lines(r.x - 3.0, r.y - 3.0, r.w + 6.0, r.h + 6.0, 2.0, SLOT_SELECTED_BORDER);
        }
    }
}
