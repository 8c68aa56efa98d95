use rescue_core::config::GameConfig;

use crate::diag::console_warn;

/// Game tuning compiled into the client.
pub const BUNDLED_CONFIG: &str = include_str!("../../../config/game.toml");

/// Parse `toml`, falling back to defaults if it is malformed, then size the
/// world's viewport to the canvas and validate the result.
pub fn game_config(
    toml: &str,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<GameConfig, String> {
    let mut config = GameConfig::from_toml_str(toml).unwrap_or_else(|e| {
        console_warn!("Invalid game config, using defaults: {e}");
        GameConfig::default()
    });
    config.world.viewport_width = canvas_width as f32;
    config.world.viewport_height = canvas_height as f32;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_fits_default_canvas() {
        let cfg = game_config(BUNDLED_CONFIG, 960, 540).unwrap();
        assert_eq!(cfg.world.width, 2000.0);
        assert_eq!(cfg.world.ground_y(), 460.0);
        assert_eq!(cfg.level.enemies.len(), 3);
    }

    #[test]
    fn canvas_size_overrides_viewport() {
        let toml = "[world]\nviewport_width = 100.0\nviewport_height = 100.0\n";
        let cfg = game_config(toml, 1280, 720).unwrap();
        assert_eq!(cfg.world.viewport_width, 1280.0);
        assert_eq!(cfg.world.ground_y(), 640.0);
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let cfg = game_config("world = 5", 960, 540).unwrap();
        assert_eq!(cfg.physics.move_speed, GameConfig::default().physics.move_speed);
    }

    #[test]
    fn canvas_too_short_is_rejected() {
        assert!(game_config(BUNDLED_CONFIG, 960, 100).is_err());
    }
}
