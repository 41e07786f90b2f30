use crate::config::PlayerConfig;
use crate::entity::{Direction, Player};
use crate::tilemap::Tilemap;

/// Move the player one frame along an input axis. Diagonals are normalised
/// so they are no faster than straight lines; blocked axes slide.
/// Returns true if the player moved.
pub fn step_player(
    player: &mut Player,
    map: &Tilemap,
    axis: (f32, f32),
    delta: f32,
    config: &PlayerConfig,
) -> bool {
    let (mut dx, mut dy) = axis;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        return false;
    }
    if len > 1.0 {
        dx /= len;
        dy /= len;
    }

    if let Some(facing) = Direction::from_velocity(dx, dy) {
        player.facing = facing;
    }

    let speed = player.speed(config);
    let next = map.resolve_movement(&player.rect, dx * speed * delta, dy * speed * delta);
    let moved = next != player.rect;
    player.rect = next;
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilemap::Biome;

    fn setup() -> (Player, Tilemap, PlayerConfig) {
        let config = PlayerConfig::default();
        let player = Player::new(&config, 300.0, 300.0);
        (player, Tilemap::filled(Biome::Grass), config)
    }

    #[test]
    fn test_walk_speed() {
        let (mut player, map, config) = setup();
        assert!(step_player(&mut player, &map, (1.0, 0.0), 0.5, &config));
        assert_eq!(player.rect.center(), (370.0, 300.0));
        assert_eq!(player.facing, Direction::Right);
    }

    #[test]
    fn test_running_is_faster() {
        let (mut player, map, config) = setup();
        player.running = true;
        step_player(&mut player, &map, (0.0, -1.0), 1.0, &config);
        let (_, cy) = player.rect.center();
        assert!((300.0 - cy - config.walk_speed * config.run_multiplier).abs() < 1e-3);
        assert_eq!(player.facing, Direction::Up);
    }

    #[test]
    fn test_diagonal_is_normalised() {
        let (mut player, map, config) = setup();
        step_player(&mut player, &map, (1.0, 1.0), 1.0, &config);
        let (cx, cy) = player.rect.center();
        let travelled = ((cx - 300.0).powi(2) + (cy - 300.0).powi(2)).sqrt();
        assert!((travelled - config.walk_speed).abs() < 1e-2);
    }

    #[test]
    fn test_idle_keeps_facing() {
        let (mut player, map, config) = setup();
        player.facing = Direction::Left;
        assert!(!step_player(&mut player, &map, (0.0, 0.0), 1.0, &config));
        assert_eq!(player.facing, Direction::Left);
        assert_eq!(player.rect.center(), (300.0, 300.0));
    }

    #[test]
    fn test_blocked_by_water() {
        let (mut player, mut map, config) = setup();
        for y in 0..18 {
            map.set_tile(11, y, Biome::Water);
        }
        // Right edge of the player sits at 312; water starts at 330
        for _ in 0..60 {
            step_player(&mut player, &map, (1.0, 0.0), 1.0 / 60.0, &config);
        }
        assert!(player.rect.right() <= 330.0);
        assert!(map.is_rect_walkable(&player.rect));
    }
}
