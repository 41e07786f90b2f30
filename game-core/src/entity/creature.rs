use rand::Rng;

use super::geometry::Rect;
use super::player::TeamMember;
use crate::catalog::Species;
use crate::tilemap::{Biome, TILE_SIZE, Tilemap};

pub const CREATURE_SIZE: f32 = TILE_SIZE - 6.0;

/// HP gained per level on top of the species base
const HP_PER_LEVEL: i32 = 3;
/// Catch difficulty gained per level above 1
const DIFFICULTY_PER_LEVEL: f32 = 0.05;
const MAX_CATCH_DIFFICULTY: f32 = 0.9;
const WANDER_SPEED_MIN: f32 = 20.0;
const WANDER_SPEED_MAX: f32 = 35.0;

/// A roaming creature instance
#[derive(Debug, Clone, PartialEq)]
pub struct WildCreature {
    pub id: u32,
    pub species_id: String,
    pub name: String,
    pub biome: Biome,
    pub level: u32,
    pub rect: Rect,
    /// Wander velocity in pixels per second
    pub velocity: (f32, f32),
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    /// Species capture multiplier
    pub catch_rate: f32,
    /// 0.0 (trivial) to 0.9 (hardest); grows with level
    pub catch_difficulty: f32,
}

impl WildCreature {
    /// Instantiate a species at a level, centred on a world position, with a
    /// random wander heading
    pub fn spawn<R: Rng>(id: u32, species: &Species, level: u32, center: (f32, f32), rng: &mut R) -> Self {
        let level = level.max(1);
        let max_hp = species.base_hp + HP_PER_LEVEL * level as i32;

        let (mut vx, mut vy) = (rng.gen_range(-1.0f32..=1.0), rng.gen_range(-1.0f32..=1.0));
        let len = (vx * vx + vy * vy).sqrt();
        if len < f32::EPSILON {
            (vx, vy) = (1.0, 0.0);
        } else {
            (vx, vy) = (vx / len, vy / len);
        }
        let speed = rng.gen_range(WANDER_SPEED_MIN..=WANDER_SPEED_MAX);

        Self {
            id,
            species_id: species.id.clone(),
            name: species.display_name.clone(),
            biome: species.biome,
            level,
            rect: Rect::centered(center.0, center.1, CREATURE_SIZE, CREATURE_SIZE),
            velocity: (vx * speed, vy * speed),
            hp: max_hp,
            max_hp,
            attack: species.attack + level as i32 / 3,
            defense: species.defense,
            catch_rate: species.catch_rate,
            catch_difficulty: ((level - 1) as f32 * DIFFICULTY_PER_LEVEL).min(MAX_CATCH_DIFFICULTY),
        }
    }

    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp.max(0) as f32 / self.max_hp as f32).clamp(0.0, 1.0)
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount.max(0);
    }

    /// Drift along the wander heading. The creature turns around instead of
    /// leaving the area or its home biome.
    pub fn wander(&mut self, delta: f32, map: &Tilemap) {
        let next = self.rect.translate(self.velocity.0 * delta, self.velocity.1 * delta);
        let (cx, cy) = next.center();
        let bounds = map.bounds();

        if !bounds.contains(&next) || map.biome_at(cx, cy) != self.biome {
            self.velocity = (-self.velocity.0, -self.velocity.1);
            self.rect = self.rect.clamp_within(&bounds);
            return;
        }

        self.rect = next;
    }

    pub fn to_team_member(&self) -> TeamMember {
        TeamMember {
            species_id: self.species_id.clone(),
            name: self.name.clone(),
            level: self.level,
            max_hp: self.max_hp,
            hp: self.hp.max(0),
        }
    }
}
