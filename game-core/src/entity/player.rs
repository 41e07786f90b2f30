use std::collections::BTreeSet;

use super::geometry::{Direction, Rect};
use crate::config::PlayerConfig;
use crate::inventory::{APRICORN, Inventory, POKE_BALL};
use crate::tilemap::TILE_SIZE;

pub const PLAYER_SIZE: f32 = TILE_SIZE - 6.0;

/// A captured creature travelling with the player
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub species_id: String,
    pub name: String,
    pub level: u32,
    pub max_hp: i32,
    pub hp: i32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub facing: Direction,
    pub running: bool,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub inventory: Inventory,
    team: Vec<TeamMember>,
    team_capacity: usize,
    caught_species: BTreeSet<String>,
}

impl Player {
    /// Fresh player centred on a world position
    pub fn new(config: &PlayerConfig, cx: f32, cy: f32) -> Self {
        let mut inventory = Inventory::new();
        inventory.add(POKE_BALL, config.starting_balls);
        inventory.add(APRICORN, config.starting_apricorns);

        Self {
            rect: Rect::centered(cx, cy, PLAYER_SIZE, PLAYER_SIZE),
            facing: Direction::default(),
            running: false,
            hp: config.max_hp.max(1),
            max_hp: config.max_hp.max(1),
            attack: config.attack,
            defense: config.defense,
            inventory,
            team: Vec::new(),
            team_capacity: config.team_capacity,
            caught_species: BTreeSet::new(),
        }
    }

    /// Movement speed in pixels per second
    pub fn speed(&self, config: &PlayerConfig) -> f32 {
        if self.running {
            config.walk_speed * config.run_multiplier
        } else {
            config.walk_speed
        }
    }

    pub fn balls(&self) -> u32 {
        self.inventory.count(POKE_BALL)
    }

    pub fn apricorns(&self) -> u32 {
        self.inventory.count(APRICORN)
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn team_capacity(&self) -> usize {
        self.team_capacity
    }

    pub fn is_team_full(&self) -> bool {
        self.team.len() >= self.team_capacity
    }

    pub fn caught_species(&self) -> &BTreeSet<String> {
        &self.caught_species
    }

    /// Register a capture. The species always counts as caught; the creature
    /// only joins the team while there is room. Returns whether it joined.
    pub fn record_catch(&mut self, member: TeamMember) -> bool {
        self.caught_species.insert(member.species_id.clone());
        if self.is_team_full() {
            return false;
        }
        self.team.push(member);
        true
    }

    /// Apply damage; true when the player is out of HP
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount.max(0)).max(0);
        self.is_fainted()
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    pub fn heal_full(&mut self) {
        self.hp = self.max_hp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(species: &str) -> TeamMember {
        TeamMember {
            species_id: species.to_string(),
            name: species.to_string(),
            level: 3,
            max_hp: 19,
            hp: 4,
        }
    }

    #[test]
    fn test_new_player_uses_config() {
        let config = PlayerConfig {
            starting_balls: 2,
            starting_apricorns: 5,
            ..PlayerConfig::default()
        };
        let player = Player::new(&config, 100.0, 50.0);

        assert_eq!(player.balls(), 2);
        assert_eq!(player.apricorns(), 5);
        assert_eq!(player.rect.center(), (100.0, 50.0));
        assert_eq!(player.hp, config.max_hp);
    }

    #[test]
    fn test_running_speed() {
        let config = PlayerConfig::default();
        let mut player = Player::new(&config, 0.0, 0.0);
        assert_eq!(player.speed(&config), 140.0);
        player.running = true;
        assert!((player.speed(&config) - 224.0).abs() < 0.01);
    }

    #[test]
    fn test_full_team_still_records_species() {
        let config = PlayerConfig {
            team_capacity: 2,
            ..PlayerConfig::default()
        };
        let mut player = Player::new(&config, 0.0, 0.0);

        assert!(player.record_catch(member("sproutling")));
        assert!(player.record_catch(member("ripplet")));
        assert!(player.is_team_full());

        assert!(!player.record_catch(member("dunecrab")));
        assert_eq!(player.team().len(), 2);
        assert!(player.caught_species().contains("dunecrab"));
        assert_eq!(player.caught_species().len(), 3);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut player = Player::new(&PlayerConfig::default(), 0.0, 0.0);
        assert!(!player.take_damage(10));
        assert!(player.take_damage(100));
        assert_eq!(player.hp, 0);
        player.heal_full();
        assert_eq!(player.hp, player.max_hp);
    }
}
