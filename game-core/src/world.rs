//! Overworld
//!
//! Nine areas laid out 3x3. Each area owns its bushes and the wild creatures
//! roaming it; a creature leaves its area only while a battle holds it.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::WorldConfig;
use crate::entity::{Bush, Rect, WildCreature};
use crate::error::DataError;
use crate::tilemap::{AREA_HEIGHT, AREA_WIDTH, Biome, GRID_HEIGHT, GRID_WIDTH, TILE_SIZE, Tilemap};

pub const WORLD_COLUMNS: usize = 3;
pub const WORLD_ROWS: usize = 3;
/// The player starts in the middle area
pub const START_AREA: (usize, usize) = (1, 1);

/// Gap left between the player and the edge they arrive through
const ARRIVAL_GAP: f32 = 2.0;
const SPAWN_ATTEMPTS: usize = 20;
/// Tile offsets (x, y) around the player used for respawns
const NEAR_SPAWN_RANGE: (i32, i32) = (4, 3);

/// Level file index for an area (1-based, row-major)
pub fn level_index(ax: usize, ay: usize) -> usize {
    ay * WORLD_COLUMNS + ax + 1
}

pub struct Area {
    map: Tilemap,
    bushes: Vec<Bush>,
    creatures: Vec<WildCreature>,
    respawn_timer: f32,
}

impl Area {
    pub fn new(map: Tilemap) -> Self {
        Self {
            map,
            bushes: Vec::new(),
            creatures: Vec::new(),
            respawn_timer: 0.0,
        }
    }

    pub fn map(&self) -> &Tilemap {
        &self.map
    }

    pub fn bushes(&self) -> &[Bush] {
        &self.bushes
    }

    pub fn bush_mut(&mut self, index: usize) -> Option<&mut Bush> {
        self.bushes.get_mut(index)
    }

    pub fn creatures(&self) -> &[WildCreature] {
        &self.creatures
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    pub fn creature(&self, id: u32) -> Option<&WildCreature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn add_bush(&mut self, bush: Bush) {
        self.bushes.push(bush);
    }

    /// Put a creature into the area (new spawn or back from a battle)
    pub fn insert_creature(&mut self, wild: WildCreature) {
        self.creatures.push(wild);
    }

    /// Remove a creature from the area, handing ownership to the caller
    pub fn take_creature(&mut self, id: u32) -> Option<WildCreature> {
        let index = self.creatures.iter().position(|c| c.id == id)?;
        Some(self.creatures.swap_remove(index))
    }

    /// Grow a bush on a free grass tile
    pub fn spawn_bush<R: Rng>(&mut self, rng: &mut R) -> bool {
        for _ in 0..SPAWN_ATTEMPTS {
            let Some((x, y)) = self.map.random_tile_of(rng, Biome::Grass) else {
                return false;
            };
            let bush = Bush::at_tile(x, y);
            if self.bushes.iter().any(|b| b.rect.intersects(&bush.rect)) {
                continue;
            }
            self.bushes.push(bush);
            return true;
        }
        false
    }

    /// Spawn a creature of a species native to the chosen tile's biome. With
    /// `near`, the tile is picked close to that world position.
    pub fn spawn_creature<R: Rng>(
        &mut self,
        catalog: &Catalog,
        config: &WorldConfig,
        rng: &mut R,
        id: u32,
        near: Option<(f32, f32)>,
    ) -> bool {
        for _ in 0..SPAWN_ATTEMPTS {
            let (x, y) = match near {
                Some((px, py)) => {
                    let (rx, ry) = NEAR_SPAWN_RANGE;
                    let tx = (px / TILE_SIZE) as i32 + rng.gen_range(-rx..=rx);
                    let ty = (py / TILE_SIZE) as i32 + rng.gen_range(-ry..=ry);
                    (tx.clamp(0, GRID_WIDTH as i32 - 1), ty.clamp(0, GRID_HEIGHT as i32 - 1))
                }
                None => (rng.gen_range(0..GRID_WIDTH as i32), rng.gen_range(0..GRID_HEIGHT as i32)),
            };
            let Some(biome) = self.map.tile(x, y) else {
                continue;
            };
            let Some(species) = catalog.by_biome(biome).choose(rng).copied() else {
                continue;
            };

            let level = rng.gen_range(config.level_min..=config.level_max.max(config.level_min));
            let center = Tilemap::tile_rect(x, y).center();
            let wild = WildCreature::spawn(id, species, level, center, rng);
            debug!("Spawned {} (Lv{}) at tile ({}, {})", wild.name, wild.level, x, y);
            self.creatures.push(wild);
            return true;
        }
        false
    }

    /// Nearest creature whose box, grown by `reach`, touches `rect`
    pub fn creature_in_reach(&self, rect: &Rect, reach: f32) -> Option<u32> {
        self.creatures
            .iter()
            .filter(|c| c.rect.inflate(reach).intersects(rect))
            .min_by(|a, b| {
                a.rect
                    .center_distance_sq(rect)
                    .total_cmp(&b.rect.center_distance_sq(rect))
            })
            .map(|c| c.id)
    }

    /// Nearest harvestable bush whose box, grown by `reach`, touches `rect`
    pub fn bush_in_reach(&self, rect: &Rect, reach: f32) -> Option<usize> {
        self.bushes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_harvestable() && b.rect.inflate(reach).intersects(rect))
            .min_by(|(_, a), (_, b)| {
                a.rect
                    .center_distance_sq(rect)
                    .total_cmp(&b.rect.center_distance_sq(rect))
            })
            .map(|(index, _)| index)
    }

    /// Move creatures and regrow bushes
    pub fn tick(&mut self, delta: f32) {
        for wild in &mut self.creatures {
            wild.wander(delta, &self.map);
        }
        for bush in &mut self.bushes {
            bush.tick(delta);
        }
    }
}

pub struct Overworld {
    areas: Vec<Area>,
    current: (usize, usize),
    next_creature_id: u32,
}

impl Overworld {
    /// Build from the nine level maps in row-major order
    pub fn new(maps: Vec<Tilemap>) -> Result<Self, DataError> {
        if maps.len() != WORLD_COLUMNS * WORLD_ROWS {
            return Err(DataError::Level {
                origin: "overworld".to_string(),
                reason: format!(
                    "expected {} levels, found {}",
                    WORLD_COLUMNS * WORLD_ROWS,
                    maps.len()
                ),
            });
        }

        Ok(Self {
            areas: maps.into_iter().map(Area::new).collect(),
            current: START_AREA,
            next_creature_id: 1,
        })
    }

    /// Fill every area with its starting bushes and creatures
    pub fn populate<R: Rng>(&mut self, catalog: &Catalog, config: &WorldConfig, rng: &mut R) {
        for index in 0..self.areas.len() {
            for _ in 0..config.bushes_per_area {
                self.areas[index].spawn_bush(rng);
            }
            for _ in 0..config.wild_target {
                let id = self.allocate_id();
                self.areas[index].spawn_creature(catalog, config, rng, id, None);
            }
        }
        info!(
            "Populated {} areas: {} creatures",
            self.areas.len(),
            self.total_creatures()
        );
    }

    pub fn allocate_id(&mut self) -> u32 {
        let id = self.next_creature_id;
        self.next_creature_id += 1;
        id
    }

    pub fn current_coords(&self) -> (usize, usize) {
        self.current
    }

    pub fn area(&self, ax: usize, ay: usize) -> Option<&Area> {
        if ax >= WORLD_COLUMNS || ay >= WORLD_ROWS {
            return None;
        }
        self.areas.get(ay * WORLD_COLUMNS + ax)
    }

    pub fn current(&self) -> &Area {
        let (ax, ay) = self.current;
        &self.areas[ay * WORLD_COLUMNS + ax]
    }

    pub fn current_mut(&mut self) -> &mut Area {
        let (ax, ay) = self.current;
        &mut self.areas[ay * WORLD_COLUMNS + ax]
    }

    pub fn total_creatures(&self) -> usize {
        self.areas.iter().map(Area::creature_count).sum()
    }

    /// Spawn a creature in the current area. Returns its id.
    pub fn spawn_wild<R: Rng>(
        &mut self,
        catalog: &Catalog,
        config: &WorldConfig,
        rng: &mut R,
        near: Option<(f32, f32)>,
    ) -> Option<u32> {
        let id = self.allocate_id();
        self.current_mut()
            .spawn_creature(catalog, config, rng, id, near)
            .then_some(id)
    }

    /// Replace a defeated creature with a fresh one of the same species and
    /// level where it stood
    pub fn respawn_defeated<R: Rng>(&mut self, catalog: &Catalog, defeated: &WildCreature, rng: &mut R) -> Option<u32> {
        let species = catalog.get(&defeated.species_id)?;
        let id = self.allocate_id();
        let wild = WildCreature::spawn(id, species, defeated.level, defeated.rect.center(), rng);
        self.current_mut().insert_creature(wild);
        Some(id)
    }

    /// Advance the current area: wander, regrow, and top creatures back up to
    /// the target count near the player on the respawn interval
    pub fn tick<R: Rng>(
        &mut self,
        delta: f32,
        catalog: &Catalog,
        config: &WorldConfig,
        rng: &mut R,
        player_center: (f32, f32),
    ) {
        self.current_mut().tick(delta);

        let area = self.current_mut();
        area.respawn_timer += delta;
        if area.respawn_timer < config.wild_respawn_secs {
            return;
        }
        area.respawn_timer = 0.0;

        let mut attempts = config.wild_target;
        while self.current().creature_count() < config.wild_target && attempts > 0 {
            attempts -= 1;
            self.spawn_wild(catalog, config, rng, Some(player_center));
        }
    }

    /// Move to the neighbouring area when the player touches an inner edge.
    /// The player box is placed just inside the opposite edge of the new area.
    pub fn try_transition(&mut self, rect: &mut Rect) -> Option<(usize, usize)> {
        let (ax, ay) = self.current;
        let mut moved = *rect;

        let next = if rect.right() >= AREA_WIDTH && ax + 1 < WORLD_COLUMNS {
            moved.x = ARRIVAL_GAP;
            (ax + 1, ay)
        } else if rect.x <= 0.0 && ax > 0 {
            moved.x = AREA_WIDTH - rect.w - ARRIVAL_GAP;
            (ax - 1, ay)
        } else if rect.bottom() >= AREA_HEIGHT && ay + 1 < WORLD_ROWS {
            moved.y = ARRIVAL_GAP;
            (ax, ay + 1)
        } else if rect.y <= 0.0 && ay > 0 {
            moved.y = AREA_HEIGHT - rect.h - ARRIVAL_GAP;
            (ax, ay - 1)
        } else {
            return None;
        };

        self.current = next;
        *rect = self.current().map().nearest_walkable(&moved);
        info!("Entered area {},{}", next.0 + 1, next.1 + 1);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PLAYER_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CATALOG: &str = r#"
        [sproutling]
        biome = "grass"

        [ripplet]
        biome = "water"
    "#;

    fn world() -> Overworld {
        Overworld::new(vec![Tilemap::filled(Biome::Grass); 9]).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_toml_str("test", CATALOG).unwrap()
    }

    #[test]
    fn test_requires_nine_levels() {
        assert!(Overworld::new(vec![Tilemap::filled(Biome::Grass); 4]).is_err());
        assert_eq!(level_index(0, 0), 1);
        assert_eq!(level_index(1, 1), 5);
        assert_eq!(level_index(2, 2), 9);
    }

    #[test]
    fn test_populate_fills_every_area() {
        let mut world = world();
        let mut rng = StdRng::seed_from_u64(1);
        let config = WorldConfig::default();
        world.populate(&catalog(), &config, &mut rng);

        assert_eq!(world.total_creatures(), 9 * config.wild_target);
        let area = world.area(0, 2).unwrap();
        assert_eq!(area.bushes().len(), config.bushes_per_area);
        assert!(area.creatures().iter().all(|c| c.species_id == "sproutling"));
        assert!(world.area(3, 0).is_none());
    }

    #[test]
    fn test_spawn_skips_biomes_without_species() {
        let mut area = Area::new(Tilemap::filled(Biome::Sand));
        let mut rng = StdRng::seed_from_u64(2);
        assert!(!area.spawn_creature(&catalog(), &WorldConfig::default(), &mut rng, 1, None));
        assert_eq!(area.creature_count(), 0);
    }

    #[test]
    fn test_take_and_return_creature() {
        let mut world = world();
        let mut rng = StdRng::seed_from_u64(3);
        let config = WorldConfig::default();
        let id = world.spawn_wild(&catalog(), &config, &mut rng, None).unwrap();

        let wild = world.current_mut().take_creature(id).unwrap();
        assert_eq!(world.current().creature_count(), 0);
        assert!(world.current_mut().take_creature(id).is_none());

        world.current_mut().insert_creature(wild);
        assert!(world.current().creature(id).is_some());
    }

    #[test]
    fn test_reach_queries_pick_nearest() {
        let mut area = Area::new(Tilemap::filled(Biome::Grass));
        area.add_bush(Bush::at_tile(5, 5));
        area.add_bush(Bush::at_tile(6, 5));
        let player = Tilemap::tile_rect(6, 5).translate(-10.0, 0.0);

        assert_eq!(area.bush_in_reach(&player, 5.0), Some(1));
        area.bush_mut(1).unwrap().harvest(6.0);
        assert_eq!(area.bush_in_reach(&player, 5.0), Some(0));

        let far = Tilemap::tile_rect(20, 10);
        assert_eq!(area.bush_in_reach(&far, 5.0), None);
        assert_eq!(area.creature_in_reach(&far, 5.0), None);
    }

    #[test]
    fn test_respawn_tops_up_near_player() {
        let mut world = world();
        let mut rng = StdRng::seed_from_u64(4);
        let catalog = catalog();
        let config = WorldConfig {
            wild_target: 3,
            ..WorldConfig::default()
        };

        world.tick(config.wild_respawn_secs / 2.0, &catalog, &config, &mut rng, (480.0, 270.0));
        assert_eq!(world.current().creature_count(), 0);

        world.tick(config.wild_respawn_secs, &catalog, &config, &mut rng, (480.0, 270.0));
        assert_eq!(world.current().creature_count(), 3);
        for wild in world.current().creatures() {
            let (cx, cy) = wild.rect.center();
            // Spawned within the near window (plus a little wander)
            assert!((cx - 480.0).abs() <= 5.0 * 30.0 + 20.0);
            assert!((cy - 270.0).abs() <= 4.0 * 30.0 + 20.0);
        }
    }

    #[test]
    fn test_respawn_defeated_keeps_count() {
        let mut world = world();
        let mut rng = StdRng::seed_from_u64(5);
        let catalog = catalog();
        let id = world.spawn_wild(&catalog, &WorldConfig::default(), &mut rng, None).unwrap();

        let defeated = world.current_mut().take_creature(id).unwrap();
        let new_id = world.respawn_defeated(&catalog, &defeated, &mut rng).unwrap();

        assert_ne!(new_id, id);
        let fresh = world.current().creature(new_id).unwrap();
        assert_eq!(fresh.species_id, defeated.species_id);
        assert_eq!(fresh.hp, fresh.max_hp);
        assert_eq!(world.current().creature_count(), 1);
    }

    #[test]
    fn test_edge_transitions() {
        let mut world = world();
        let mut rect = Rect::new(AREA_WIDTH - PLAYER_SIZE, 200.0, PLAYER_SIZE, PLAYER_SIZE);

        assert_eq!(world.try_transition(&mut rect), Some((2, 1)));
        assert_eq!(rect.x, ARRIVAL_GAP);

        // Outer border of the world: nothing happens
        let mut edge = Rect::new(AREA_WIDTH - PLAYER_SIZE, 200.0, PLAYER_SIZE, PLAYER_SIZE);
        assert_eq!(world.try_transition(&mut edge), None);
        assert_eq!(world.current_coords(), (2, 1));

        let mut top = Rect::new(300.0, 0.0, PLAYER_SIZE, PLAYER_SIZE);
        assert_eq!(world.try_transition(&mut top), Some((2, 0)));
        assert_eq!(top.bottom(), AREA_HEIGHT - ARRIVAL_GAP);

        let mut middle = Rect::new(300.0, 200.0, PLAYER_SIZE, PLAYER_SIZE);
        assert_eq!(world.try_transition(&mut middle), None);
    }

    #[test]
    fn test_transition_avoids_water() {
        let mut maps = vec![Tilemap::filled(Biome::Grass); 9];
        let mut east = Tilemap::filled(Biome::Grass);
        for y in 0..GRID_HEIGHT as i32 {
            east.set_tile(0, y, Biome::Water);
        }
        maps[level_index(2, 1) - 1] = east;
        let mut world = Overworld::new(maps).unwrap();

        let mut rect = Rect::new(AREA_WIDTH - PLAYER_SIZE, 200.0, PLAYER_SIZE, PLAYER_SIZE);
        world.try_transition(&mut rect);
        assert!(world.current().map().is_rect_walkable(&rect));
    }
}
