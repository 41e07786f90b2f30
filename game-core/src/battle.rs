//! Battle state machine
//!
//! A `BattleSession` owns the engaged creature for the length of the fight.
//! The player acts on `Active(Player)`; every player action that does not end
//! the battle hands the turn to the creature, whose move is resolved
//! automatically by `resolve_creature_turn`. Once the phase is `Ended` the
//! session is consumed with `into_parts` and the creature goes back to the
//! world or leaves it for good.

use rand::Rng;
use tracing::debug;

use crate::config::BattleConfig;
use crate::entity::{Player, WildCreature};
use crate::inventory::{Inventory, POKE_BALL};

/// Lowest HP fraction used in the capture roll, so a creature at 0 HP is not
/// a guaranteed catch by itself
const MIN_HP_RATIO: f32 = 0.05;
const MIN_CATCH_PENALTY: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Creature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Creature knocked out
    Defeated,
    Caught,
    /// Battle left early, by either side
    Fled,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Defeated => "defeated",
            Outcome::Caught => "caught",
            Outcome::Fled => "fled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active(Turn),
    Ended(Outcome),
}

/// Damage dealt by one hit: attack minus defense, never less than 1
pub fn damage(attack: i32, defense: i32) -> i32 {
    (attack - defense).max(1)
}

/// Chance in [0, 1] that a thrown ball catches the creature. Grows as its HP
/// drops, shrinks with catch difficulty, scaled by the species catch rate.
pub fn capture_chance(wild: &WildCreature, config: &BattleConfig) -> f32 {
    let hp_ratio = wild.hp_fraction().max(MIN_HP_RATIO);
    let penalty = (1.0 - wild.catch_difficulty).max(MIN_CATCH_PENALTY);
    let chance = (config.capture_base * (1.0 - hp_ratio) * penalty + config.capture_bonus)
        * wild.catch_rate;
    chance.clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct BattleSession {
    wild: WildCreature,
    phase: Phase,
    message: String,
    player_retreated: bool,
}

impl BattleSession {
    /// Start a battle; the player always moves first
    pub fn begin(wild: WildCreature) -> Self {
        let message = format!("A wild {} (Lv{}) appeared!", wild.name, wild.level);
        Self {
            wild,
            phase: Phase::Active(Turn::Player),
            message,
            player_retreated: false,
        }
    }

    pub fn wild(&self) -> &WildCreature {
        &self.wild
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest battle line for the HUD
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            Phase::Active(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// True when the battle ended because the player ran out of HP
    pub fn player_retreated(&self) -> bool {
        self.player_retreated
    }

    fn is_player_turn(&self) -> bool {
        self.phase == Phase::Active(Turn::Player)
    }

    /// Hit the creature. Returns false (and changes nothing) outside the
    /// player's turn.
    pub fn attack(&mut self, player: &Player) -> bool {
        if !self.is_player_turn() {
            return false;
        }

        let dealt = damage(player.attack, self.wild.defense);
        self.wild.take_damage(dealt);

        if self.wild.is_fainted() {
            self.message = format!("{} fainted!", self.wild.name);
            self.phase = Phase::Ended(Outcome::Defeated);
        } else {
            self.message = format!("You hit {} for {}!", self.wild.name, dealt);
            self.phase = Phase::Active(Turn::Creature);
        }
        true
    }

    /// Throw a ball. Without a ball, or outside the player's turn, nothing
    /// happens and false is returned.
    pub fn throw_ball<R: Rng>(
        &mut self,
        inventory: &mut Inventory,
        config: &BattleConfig,
        rng: &mut R,
    ) -> bool {
        if !self.is_player_turn() {
            return false;
        }
        if !inventory.remove(POKE_BALL, 1) {
            self.message = "No balls left! Craft with [C].".to_string();
            return false;
        }

        let chance = capture_chance(&self.wild, config);
        let caught = rng.gen_bool(chance as f64);
        debug!(
            "Ball thrown at {} (hp {}/{}): chance {:.2}, caught {}",
            self.wild.name, self.wild.hp, self.wild.max_hp, chance, caught
        );

        if caught {
            self.message = format!("Gotcha! {} was caught!", self.wild.name);
            self.phase = Phase::Ended(Outcome::Caught);
        } else {
            self.message = "Oh no! It broke free.".to_string();
            self.phase = Phase::Active(Turn::Creature);
        }
        true
    }

    /// Play the creature's turn: it either runs away or strikes back. A player
    /// knocked to 0 HP retreats, ending the battle as fled.
    pub fn resolve_creature_turn<R: Rng>(
        &mut self,
        player: &mut Player,
        config: &BattleConfig,
        rng: &mut R,
    ) {
        if self.phase != Phase::Active(Turn::Creature) {
            return;
        }

        if rng.gen_bool(config.creature_flee_chance.clamp(0.0, 1.0) as f64) {
            self.message = format!("{} ran away!", self.wild.name);
            self.phase = Phase::Ended(Outcome::Fled);
            return;
        }

        let dealt = damage(self.wild.attack, player.defense);
        if player.take_damage(dealt) {
            self.message = format!(
                "{} hits you for {}. You retreat to catch your breath.",
                self.wild.name, dealt
            );
            self.player_retreated = true;
            self.phase = Phase::Ended(Outcome::Fled);
            return;
        }

        self.message = format!("{} {} hits back for {}.", self.message, self.wild.name, dealt);
        self.phase = Phase::Active(Turn::Player);
    }

    /// Leave the battle immediately. Always succeeds while the battle is active.
    pub fn escape(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.message = "Got away safely!".to_string();
        self.phase = Phase::Ended(Outcome::Fled);
        true
    }

    /// Hand the creature back together with the final phase
    pub fn into_parts(self) -> (WildCreature, Phase) {
        (self.wild, self.phase)
    }
}
