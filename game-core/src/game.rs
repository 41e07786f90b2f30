//! Game state and frame update
//!
//! `GameState` is the single record the frontend threads through each frame.
//! Discrete key presses arrive as `Command`s through `handle`; continuous
//! movement and timers advance through `update`. Both return the
//! `GameEvent`s that happened so the frontend can show feedback.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::battle::{BattleSession, Outcome, Phase, Turn};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::crafting::{BALL_RECIPE, CraftingRegistry};
use crate::data::GameData;
use crate::entity::Player;
use crate::error::DataError;
use crate::inventory::APRICORN;
use crate::movement::step_player;
use crate::tilemap::{AREA_HEIGHT, AREA_WIDTH};
use crate::world::Overworld;

#[derive(Debug, Clone)]
pub enum Mode {
    Roaming,
    Battle(BattleSession),
}

/// One discrete player action, mapped from a key press by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Interact,
    Attack,
    ThrowBall,
    ToggleBag,
    Craft,
    ToggleRun,
    /// Debug: spawn a creature next to the player
    SpawnWild,
    ToggleHelp,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BattleStarted { name: String, level: u32 },
    BattleEnded { outcome: Outcome, name: String },
    /// Captured creature; `joined_team` is false when the team was full
    Caught { name: String, joined_team: bool },
    Harvested { amount: u32 },
    Crafted { item: String },
    WildSpawned { name: String },
    AreaChanged { area: (usize, usize) },
    /// Action had no effect; the text explains why
    Notice(String),
    Victory,
    VictoryDismissed,
    QuitRequested,
}

pub struct GameState {
    config: GameConfig,
    catalog: Catalog,
    recipes: CraftingRegistry,
    world: Overworld,
    player: Player,
    mode: Mode,
    victory_shown: bool,
    victory_declared: bool,
    show_help: bool,
    show_bag: bool,
    rng: StdRng,
}

impl GameState {
    /// Build the world from loaded data and drop the player in the middle of
    /// the starting area
    pub fn new(data: GameData, seed: u64) -> Result<Self, DataError> {
        let GameData {
            config,
            catalog,
            recipes,
            levels,
        } = data;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = Overworld::new(levels)?;
        world.populate(&catalog, &config.world, &mut rng);

        let mut player = Player::new(&config.player, AREA_WIDTH / 2.0, AREA_HEIGHT / 2.0);
        player.rect = world.current().map().nearest_walkable(&player.rect);

        info!("New game (seed {}), {} species to catch", seed, catalog.len());

        Ok(Self {
            config,
            catalog,
            recipes,
            world,
            player,
            mode: Mode::Roaming,
            victory_shown: false,
            victory_declared: false,
            show_help: true,
            show_bag: false,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recipes(&self) -> &CraftingRegistry {
        &self.recipes
    }

    pub fn world(&self) -> &Overworld {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        match &self.mode {
            Mode::Battle(session) => Some(session),
            Mode::Roaming => None,
        }
    }

    pub fn is_victory_shown(&self) -> bool {
        self.victory_shown
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn show_bag(&self) -> bool {
        self.show_bag
    }

    /// (species caught, species in the catalog)
    pub fn dex_progress(&self) -> (usize, usize) {
        let caught = self
            .catalog
            .species_ids()
            .filter(|id| self.player.caught_species().contains(*id))
            .count();
        (caught, self.catalog.len())
    }

    /// Apply one player command
    pub fn handle(&mut self, command: Command) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.victory_shown {
            if matches!(command, Command::ThrowBall | Command::Escape) {
                self.victory_shown = false;
                events.push(GameEvent::VictoryDismissed);
            }
            return events;
        }

        match command {
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::ToggleBag => self.show_bag = !self.show_bag,
            Command::ToggleRun => self.player.running = !self.player.running,
            Command::Craft => self.craft(&mut events),
            Command::Interact => self.interact(&mut events),
            Command::SpawnWild => self.spawn_wild(&mut events),
            Command::Attack => {
                if let Mode::Battle(session) = &mut self.mode {
                    session.attack(&self.player);
                    self.advance_battle(&mut events);
                }
            }
            Command::ThrowBall => {
                if let Mode::Battle(session) = &mut self.mode {
                    if session.phase() == Phase::Active(Turn::Player)
                        && !session.throw_ball(&mut self.player.inventory, &self.config.battle, &mut self.rng)
                    {
                        events.push(GameEvent::Notice(session.message().to_string()));
                    }
                    self.advance_battle(&mut events);
                }
            }
            Command::Escape => match &mut self.mode {
                Mode::Battle(session) => {
                    session.escape();
                    self.advance_battle(&mut events);
                }
                Mode::Roaming if self.show_bag => self.show_bag = false,
                Mode::Roaming if self.show_help => self.show_help = false,
                Mode::Roaming => events.push(GameEvent::QuitRequested),
            },
        }

        events
    }

    /// Advance one frame. The world holds still during a battle and while the
    /// victory overlay is up.
    pub fn update(&mut self, delta: f32, axis: (f32, f32)) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.victory_shown || matches!(self.mode, Mode::Battle(_)) {
            return events;
        }

        let moved = step_player(
            &mut self.player,
            self.world.current().map(),
            axis,
            delta,
            &self.config.player,
        );

        if moved {
            // Walking over a ripe bush picks it
            if let Some(index) = self.world.current().bush_in_reach(&self.player.rect, 0.0) {
                self.harvest_bush(index, &mut events);
            }
            if let Some(area) = self.world.try_transition(&mut self.player.rect) {
                events.push(GameEvent::AreaChanged { area });
            }
        }

        self.world.tick(
            delta,
            &self.catalog,
            &self.config.world,
            &mut self.rng,
            self.player.rect.center(),
        );

        events
    }

    fn interact(&mut self, events: &mut Vec<GameEvent>) {
        if !matches!(self.mode, Mode::Roaming) {
            return;
        }

        let reach = self.config.world.reach;
        let area = self.world.current();
        let creature = area.creature_in_reach(&self.player.rect, reach);
        let bush = area.bush_in_reach(&self.player.rect, reach);

        if let Some(id) = creature {
            if let Some(wild) = self.world.current_mut().take_creature(id) {
                info!("Battle started with {} (Lv{}, id {})", wild.name, wild.level, wild.id);
                events.push(GameEvent::BattleStarted {
                    name: wild.name.clone(),
                    level: wild.level,
                });
                self.show_bag = false;
                self.mode = Mode::Battle(BattleSession::begin(wild));
            }
            return;
        }

        if let Some(index) = bush {
            self.harvest_bush(index, events);
            return;
        }

        debug!("Interact with nothing in reach");
        events.push(GameEvent::Notice("Nothing to interact with here.".to_string()));
    }

    fn harvest_bush(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let amount = self.config.world.apricorns_per_bush;
        let regrow = self.config.world.bush_regrow_secs;
        let Some(bush) = self.world.current_mut().bush_mut(index) else {
            return;
        };
        if self.player.inventory.harvest(bush, amount, regrow) {
            debug!("Harvested {} apricorns", amount);
            events.push(GameEvent::Harvested { amount });
        }
    }

    fn craft(&mut self, events: &mut Vec<GameEvent>) {
        let Some(recipe) = self.recipes.get(BALL_RECIPE) else {
            events.push(GameEvent::Notice("No recipe for balls.".to_string()));
            return;
        };

        if self.player.inventory.craft(recipe) {
            info!("Crafted {}", recipe.display_name);
            events.push(GameEvent::Crafted {
                item: recipe.display_name.clone(),
            });
        } else {
            events.push(GameEvent::Notice(format!(
                "Need {} apricorns to craft a ball.",
                recipe.needs(APRICORN)
            )));
        }
    }

    fn spawn_wild(&mut self, events: &mut Vec<GameEvent>) {
        if !matches!(self.mode, Mode::Roaming) {
            return;
        }

        let spawned = self.world.spawn_wild(
            &self.catalog,
            &self.config.world,
            &mut self.rng,
            Some(self.player.rect.center()),
        );
        match spawned.and_then(|id| self.world.current().creature(id)) {
            Some(wild) => {
                info!("Debug spawn: {} (Lv{})", wild.name, wild.level);
                events.push(GameEvent::WildSpawned {
                    name: wild.name.clone(),
                });
            }
            None => events.push(GameEvent::Notice("Nothing wants to come out here.".to_string())),
        }
    }

    /// Run the creature's reply if it is its turn, then wrap up a finished
    /// battle
    fn advance_battle(&mut self, events: &mut Vec<GameEvent>) {
        let Mode::Battle(session) = &mut self.mode else {
            return;
        };

        if session.phase() == Phase::Active(Turn::Creature) {
            session.resolve_creature_turn(&mut self.player, &self.config.battle, &mut self.rng);
        }

        if session.is_over() {
            self.finish_battle(events);
        }
    }

    fn finish_battle(&mut self, events: &mut Vec<GameEvent>) {
        let Mode::Battle(session) = std::mem::replace(&mut self.mode, Mode::Roaming) else {
            return;
        };
        let Some(outcome) = session.outcome() else {
            self.mode = Mode::Battle(session);
            return;
        };
        let retreated = session.player_retreated();
        let message = session.message().to_string();
        let (wild, _) = session.into_parts();

        info!("Battle with {} ended: {}", wild.name, outcome.as_str());
        events.push(GameEvent::Notice(message));
        events.push(GameEvent::BattleEnded {
            outcome,
            name: wild.name.clone(),
        });

        match outcome {
            Outcome::Caught => {
                let joined_team = self.player.record_catch(wild.to_team_member());
                if !joined_team {
                    info!("Team full, {} released", wild.name);
                }
                events.push(GameEvent::Caught {
                    name: wild.name.clone(),
                    joined_team,
                });
                self.check_victory(events);
            }
            Outcome::Defeated => {
                let reward = self.config.world.apricorns_per_defeat;
                self.player.inventory.add(APRICORN, reward);
                self.world.respawn_defeated(&self.catalog, &wild, &mut self.rng);
            }
            Outcome::Fled => {
                self.world.current_mut().insert_creature(wild);
            }
        }

        if retreated {
            self.player.heal_full();
        }
    }

    fn check_victory(&mut self, events: &mut Vec<GameEvent>) {
        if self.victory_declared {
            return;
        }
        let (caught, total) = self.dex_progress();
        if total > 0 && caught == total {
            info!("All {} species caught", total);
            self.victory_declared = true;
            self.victory_shown = true;
            events.push(GameEvent::Victory);
        }
    }
}
