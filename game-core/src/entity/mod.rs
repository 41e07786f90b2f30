pub mod bush;
pub mod creature;
pub mod geometry;
pub mod player;

pub use bush::{Bush, BUSH_SIZE};
pub use creature::{WildCreature, CREATURE_SIZE};
pub use geometry::{Direction, Rect};
pub use player::{Player, TeamMember, PLAYER_SIZE};
