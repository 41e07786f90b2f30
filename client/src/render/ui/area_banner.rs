//! Area name banner shown after walking into a new area

use macroquad::prelude::*;

use super::super::Renderer;
use super::common::*;

const FADE_IN: f32 = 0.4;
const HOLD: f32 = 1.6;
const FADE_OUT: f32 = 0.6;
const TOTAL: f32 = FADE_IN + HOLD + FADE_OUT;

/// Names of the 3x3 overworld, row by row from the north-west corner
const AREA_NAMES: [[&str; 3]; 3] = [
    ["Mossy Hollow", "Northern Dunes", "Cliffside Pond"],
    ["Westbrook Meadow", "Apricorn Trail", "Sunbaked Flats"],
    ["Reedmarsh", "Southern Glade", "Shell Beach"],
];

pub fn area_name(area: (usize, usize)) -> &'static str {
    let (ax, ay) = area;
    AREA_NAMES
        .get(ay)
        .and_then(|row| row.get(ax))
        .copied()
        .unwrap_or("Wilds")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    Hidden,
    FadingIn,
    Holding,
    FadingOut,
}

/// Fades in, holds, then fades out on a single clock. `elapsed` is None
/// while nothing is shown.
#[derive(Debug, Clone, Default)]
pub struct AreaBanner {
    text: String,
    elapsed: Option<f32>,
}

impl AreaBanner {
    /// Show `name`, restarting any banner already on screen
    pub fn show(&mut self, name: &str) {
        self.text = name.to_string();
        self.elapsed = Some(0.0);
    }

    pub fn update(&mut self, delta: f32) {
        self.elapsed = self.elapsed.map(|t| t + delta).filter(|t| *t < TOTAL);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> BannerPhase {
        match self.elapsed {
            None => BannerPhase::Hidden,
            Some(t) if t < FADE_IN => BannerPhase::FadingIn,
            Some(t) if t < FADE_IN + HOLD => BannerPhase::Holding,
            Some(_) => BannerPhase::FadingOut,
        }
    }

    pub fn opacity(&self) -> f32 {
        let Some(t) = self.elapsed else {
            return 0.0;
        };
        let alpha = match self.phase() {
            BannerPhase::FadingIn => t / FADE_IN,
            BannerPhase::FadingOut => (TOTAL - t) / FADE_OUT,
            _ => 1.0,
        };
        alpha.clamp(0.0, 1.0)
    }
}

impl Renderer {
    pub(crate) fn render_area_banner(&self, banner: &AreaBanner) {
        let alpha = banner.opacity();
        if alpha <= 0.0 {
            return;
        }

        let font_size = 32.0;
        let text = banner.text();
        let width = self.measure_text_sharp(text, font_size).width;
        let x = (screen_width() - width) / 2.0;
        let y = 110.0;

        draw_rectangle(
            x - 24.0,
            y - font_size,
            width + 48.0,
            font_size + 14.0,
            Color::new(0.0, 0.0, 0.0, 0.55 * alpha),
        );
        let underline = Color { a: alpha, ..FRAME_ACCENT };
        draw_line(x - 24.0, y + 14.0, x + width + 24.0, y + 14.0, 1.0, underline);

        self.draw_text_outlined(text, x, y, font_size, Color { a: alpha, ..TEXT_GOLD });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lifecycle() {
        let mut banner = AreaBanner::default();
        assert_eq!(banner.phase(), BannerPhase::Hidden);
        assert_eq!(banner.opacity(), 0.0);

        banner.show("Shell Beach");
        assert_eq!(banner.text(), "Shell Beach");
        assert_eq!(banner.phase(), BannerPhase::FadingIn);
        assert_eq!(banner.opacity(), 0.0);

        banner.update(0.5);
        assert_eq!(banner.phase(), BannerPhase::Holding);
        assert_eq!(banner.opacity(), 1.0);

        banner.update(1.8);
        assert_eq!(banner.phase(), BannerPhase::FadingOut);
        assert!((banner.opacity() - 0.5).abs() < 1e-3);

        banner.update(1.0);
        assert_eq!(banner.phase(), BannerPhase::Hidden);
    }

    #[test]
    fn test_show_restarts() {
        let mut banner = AreaBanner::default();
        banner.show("Reedmarsh");
        banner.update(2.2);
        banner.show("Southern Glade");
        assert_eq!(banner.phase(), BannerPhase::FadingIn);
        assert_eq!(banner.text(), "Southern Glade");
    }

    #[test]
    fn test_area_names() {
        assert_eq!(area_name((1, 1)), "Apricorn Trail");
        assert_eq!(area_name((2, 2)), "Shell Beach");
        assert_eq!(area_name((5, 0)), "Wilds");
    }
}
