use super::geometry::Rect;
use crate::tilemap::{TILE_SIZE, Tilemap};

pub const BUSH_SIZE: f32 = TILE_SIZE - 8.0;

/// Apricorn bush. Picking it starts a regrow countdown; it can be picked
/// again once the countdown runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct Bush {
    pub rect: Rect,
    regrow_remaining: Option<f32>,
}

impl Bush {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            regrow_remaining: None,
        }
    }

    /// Bush centred in a tile
    pub fn at_tile(x: i32, y: i32) -> Self {
        let (cx, cy) = Tilemap::tile_rect(x, y).center();
        Self::new(Rect::centered(cx, cy, BUSH_SIZE, BUSH_SIZE))
    }

    pub fn is_harvestable(&self) -> bool {
        self.regrow_remaining.is_none()
    }

    pub fn regrow_remaining(&self) -> Option<f32> {
        self.regrow_remaining
    }

    /// Mark as picked. Returns false if it was already bare.
    pub fn harvest(&mut self, regrow_secs: f32) -> bool {
        if !self.is_harvestable() {
            return false;
        }
        self.regrow_remaining = Some(regrow_secs.max(0.0));
        true
    }

    /// Advance the regrow countdown; true on the frame the bush regrows
    pub fn tick(&mut self, delta: f32) -> bool {
        match self.regrow_remaining {
            Some(remaining) if remaining - delta <= 0.0 => {
                self.regrow_remaining = None;
                true
            }
            Some(remaining) => {
                self.regrow_remaining = Some(remaining - delta);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bush_regrows_after_cooldown() {
        let mut bush = Bush::at_tile(2, 3);
        assert!(bush.is_harvestable());
        assert_eq!(bush.rect.center(), (75.0, 105.0));

        assert!(bush.harvest(6.0));
        assert!(!bush.is_harvestable());
        assert!(!bush.harvest(6.0));

        assert!(!bush.tick(5.0));
        assert!(!bush.is_harvestable());
        assert!(bush.tick(1.0));
        assert!(bush.is_harvestable());
        assert!(!bush.tick(1.0));
    }
}
