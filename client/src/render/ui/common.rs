//! Palette and layout constants shared by the UI panels and the world view

use apricorn_core::Biome;
use macroquad::prelude::Color;

// Panels share the dark slate and bronze frame look

pub const PANEL_BG_DARK: Color = Color::from_rgba(18, 18, 24, 240);
pub const PANEL_BG_MID: Color = Color::from_rgba(28, 28, 38, 255);
pub const FRAME_OUTER: Color = Color::from_rgba(82, 62, 42, 255);
pub const FRAME_MID: Color = Color::from_rgba(142, 108, 68, 255);
pub const FRAME_INNER: Color = Color::from_rgba(186, 148, 92, 255);
pub const FRAME_ACCENT: Color = Color::from_rgba(218, 178, 108, 255);
pub const HEADER_BG: Color = Color::from_rgba(36, 32, 42, 255);
pub const HEADER_BORDER: Color = Color::from_rgba(118, 98, 68, 255);
pub const SLOT_SELECTED_BORDER: Color = Color::from_rgba(218, 188, 128, 255);

pub const TEXT_TITLE: Color = Color::from_rgba(218, 188, 128, 255);
pub const TEXT_NORMAL: Color = Color::from_rgba(210, 210, 218, 255);
pub const TEXT_DIM: Color = Color::from_rgba(128, 128, 138, 255);
pub const TEXT_GOLD: Color = Color::from_rgba(255, 215, 80, 255);

pub const HEALTHBAR_BG: Color = Color::from_rgba(20, 18, 23, 255);
pub const HEALTH_GREEN: Color = Color::from_rgba(51, 158, 82, 255);
pub const HEALTH_YELLOW: Color = Color::from_rgba(217, 158, 31, 255);
pub const HEALTH_RED: Color = Color::from_rgba(191, 46, 46, 255);

// World

pub const TILE_GRASS: Color = Color::from_rgba(90, 160, 80, 255);
pub const TILE_SAND: Color = Color::from_rgba(221, 200, 140, 255);
pub const TILE_WATER: Color = Color::from_rgba(63, 118, 196, 255);
pub const TILE_GRID_LINE: Color = Color::from_rgba(0, 0, 0, 20);

pub const CREATURE_GRASS: Color = Color::from_rgba(148, 220, 86, 255);
pub const CREATURE_SAND: Color = Color::from_rgba(217, 133, 64, 255);
pub const CREATURE_WATER: Color = Color::from_rgba(107, 213, 243, 255);

pub const BUSH_LEAVES_DARK: Color = Color::from_rgba(25, 76, 33, 255);
pub const BUSH_LEAVES: Color = Color::from_rgba(38, 107, 48, 255);
pub const APRICORN_COLOR: Color = Color::from_rgba(237, 115, 43, 255);

pub const PLAYER_FILL: Color = Color::from_rgba(224, 65, 65, 255);
pub const PLAYER_OUTLINE: Color = Color::from_rgba(40, 12, 12, 255);

// Layout

pub const FRAME_THICKNESS: f32 = 4.0;
pub const CORNER_ACCENT_SIZE: f32 = 8.0;
pub const HEADER_HEIGHT: f32 = 28.0;
pub const HP_BAR_HEIGHT: f32 = 10.0;

pub fn tile_color(biome: Biome) -> Color {
    match biome {
        Biome::Grass => TILE_GRASS,
        Biome::Sand => TILE_SAND,
        Biome::Water => TILE_WATER,
    }
}

pub fn creature_color(biome: Biome) -> Color {
    match biome {
        Biome::Grass => CREATURE_GRASS,
        Biome::Sand => CREATURE_SAND,
        Biome::Water => CREATURE_WATER,
    }
}

/// Bar colour for an HP fraction: green, amber below half, red below a fifth
pub fn hp_bar_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        HEALTH_GREEN
    } else if fraction > 0.2 {
        HEALTH_YELLOW
    } else {
        HEALTH_RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_bar_color_thresholds() {
        assert_eq!(hp_bar_color(1.0), HEALTH_GREEN);
        assert_eq!(hp_bar_color(0.5), HEALTH_YELLOW);
        assert_eq!(hp_bar_color(0.2), HEALTH_RED);
        assert_eq!(hp_bar_color(0.0), HEALTH_RED);
    }
}
