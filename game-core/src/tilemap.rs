//! Area tile grid
//!
//! Each area is a fixed 32x18 grid of 30px tiles parsed from a text file:
//! `G` grass, `S` sand, `W` water and `.` (plain grass). Water blocks the
//! player; every tile also tags the biome that decides which species spawn
//! there.

use rand::Rng;
use serde::Deserialize;

use crate::entity::Rect;
use crate::error::DataError;

pub const TILE_SIZE: f32 = 30.0;
pub const GRID_WIDTH: usize = 32;
pub const GRID_HEIGHT: usize = 18;
pub const AREA_WIDTH: f32 = TILE_SIZE * GRID_WIDTH as f32;
pub const AREA_HEIGHT: f32 = TILE_SIZE * GRID_HEIGHT as f32;
pub const AREA_BOUNDS: Rect = Rect::new(0.0, 0.0, AREA_WIDTH, AREA_HEIGHT);

const RANDOM_TILE_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biome {
    Grass,
    Sand,
    Water,
}

impl Biome {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | '.' => Some(Biome::Grass),
            'S' => Some(Biome::Sand),
            'W' => Some(Biome::Water),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Biome::Grass => "grass",
            Biome::Sand => "sand",
            Biome::Water => "water",
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, Biome::Water)
    }
}

/// One area's terrain
#[derive(Debug, Clone)]
pub struct Tilemap {
    tiles: Vec<Biome>,
}

impl Tilemap {
    /// Parse a level file. `origin` only labels errors.
    pub fn parse(origin: &str, text: &str) -> Result<Self, DataError> {
        let level_error = |reason: String| DataError::Level {
            origin: origin.to_string(),
            reason,
        };

        let mut rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        if rows.len() != GRID_HEIGHT {
            return Err(level_error(format!(
                "expected {} rows, found {}",
                GRID_HEIGHT,
                rows.len()
            )));
        }

        let mut tiles = Vec::with_capacity(GRID_WIDTH * GRID_HEIGHT);
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != GRID_WIDTH {
                return Err(level_error(format!(
                    "row {} has {} columns, expected {}",
                    y + 1,
                    width,
                    GRID_WIDTH
                )));
            }

            for (x, c) in row.chars().enumerate() {
                let biome = Biome::from_char(c).ok_or_else(|| {
                    level_error(format!("unknown tile '{}' at row {}, column {}", c, y + 1, x + 1))
                })?;
                tiles.push(biome);
            }
        }

        Ok(Self { tiles })
    }

    /// Map covered entirely by one biome
    pub fn filled(biome: Biome) -> Self {
        Self {
            tiles: vec![biome; GRID_WIDTH * GRID_HEIGHT],
        }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= GRID_WIDTH as i32 || y >= GRID_HEIGHT as i32 {
            return None;
        }
        Some(y as usize * GRID_WIDTH + x as usize)
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<Biome> {
        Self::index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn set_tile(&mut self, x: i32, y: i32, biome: Biome) {
        if let Some(idx) = Self::index(x, y) {
            self.tiles[idx] = biome;
        }
    }

    /// Biome under a world position, clamped to the grid
    pub fn biome_at(&self, px: f32, py: f32) -> Biome {
        let x = ((px / TILE_SIZE) as i32).clamp(0, GRID_WIDTH as i32 - 1);
        let y = ((py / TILE_SIZE) as i32).clamp(0, GRID_HEIGHT as i32 - 1);
        self.tiles[y as usize * GRID_WIDTH + x as usize]
    }

    pub fn tile_rect(x: i32, y: i32) -> Rect {
        Rect::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE, TILE_SIZE, TILE_SIZE)
    }

    pub fn is_tile_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|b| b.is_walkable())
    }

    /// True when every tile the box overlaps is walkable
    pub fn is_rect_walkable(&self, rect: &Rect) -> bool {
        if !AREA_BOUNDS.contains(rect) {
            return false;
        }

        let x0 = (rect.x / TILE_SIZE).floor() as i32;
        let y0 = (rect.y / TILE_SIZE).floor() as i32;
        let x1 = (rect.right() / TILE_SIZE).ceil() as i32 - 1;
        let y1 = (rect.bottom() / TILE_SIZE).ceil() as i32 - 1;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if !self.is_tile_walkable(x, y) {
                    return false;
                }
            }
        }
        true
    }

    /// Move a box by (dx, dy) inside the area, sliding along blocked tiles.
    /// Falls back to x-only, then y-only, then no movement.
    pub fn resolve_movement(&self, from: &Rect, dx: f32, dy: f32) -> Rect {
        let target = from.translate(dx, dy).clamp_within(&AREA_BOUNDS);
        if self.is_rect_walkable(&target) {
            return target;
        }

        let x_only = from.translate(dx, 0.0).clamp_within(&AREA_BOUNDS);
        if dx != 0.0 && self.is_rect_walkable(&x_only) {
            return x_only;
        }

        let y_only = from.translate(0.0, dy).clamp_within(&AREA_BOUNDS);
        if dy != 0.0 && self.is_rect_walkable(&y_only) {
            return y_only;
        }

        *from
    }

    /// Closest placement of `rect` that stands on walkable ground, searching
    /// tile centres in growing rings around it
    pub fn nearest_walkable(&self, rect: &Rect) -> Rect {
        if self.is_rect_walkable(rect) {
            return *rect;
        }

        let (cx, cy) = rect.center();
        let origin_x = (cx / TILE_SIZE) as i32;
        let origin_y = (cy / TILE_SIZE) as i32;

        for radius in 1..GRID_WIDTH as i32 {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx.abs() != radius && dy.abs() != radius {
                        continue;
                    }
                    let (tx, ty) = (origin_x + dx, origin_y + dy);
                    if self.tile(tx, ty).is_none() {
                        continue;
                    }
                    let (tcx, tcy) = Self::tile_rect(tx, ty).center();
                    let candidate = Rect::centered(tcx, tcy, rect.w, rect.h);
                    if self.is_rect_walkable(&candidate) {
                        return candidate;
                    }
                }
            }
        }

        *rect
    }

    /// Random tile whose biome passes `accept`
    pub fn random_tile<R: Rng>(
        &self,
        rng: &mut R,
        accept: impl Fn(Biome) -> bool,
    ) -> Option<(i32, i32)> {
        for _ in 0..RANDOM_TILE_ATTEMPTS {
            let x = rng.gen_range(0..GRID_WIDTH as i32);
            let y = rng.gen_range(0..GRID_HEIGHT as i32);
            if self.tile(x, y).is_some_and(&accept) {
                return Some((x, y));
            }
        }
        None
    }

    pub fn random_tile_of<R: Rng>(&self, rng: &mut R, biome: Biome) -> Option<(i32, i32)> {
        self.random_tile(rng, |b| b == biome)
    }

    /// Pixel bounds of the area
    pub fn bounds(&self) -> Rect {
        AREA_BOUNDS
    }

    pub fn count(&self, biome: Biome) -> usize {
        self.tiles.iter().filter(|&&b| b == biome).count()
    }
}
