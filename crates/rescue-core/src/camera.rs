use crate::config::WorldConfig;

/// Horizontal scroll offset that centres the player, clamped so the view
/// never leaves the world.
pub fn camera_offset(player_x: f32, world: &WorldConfig) -> f32 {
    let max = (world.width - world.viewport_width).max(0.0);
    (player_x - world.viewport_width / 2.0).clamp(0.0, max)
}
