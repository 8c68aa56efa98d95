use serde::{Deserialize, Serialize};

/// Horizontal extent of the level.
pub const WORLD_WIDTH: f32 = 2000.0;
/// Canvas width in pixels.
pub const VIEWPORT_WIDTH: f32 = 960.0;
/// Canvas height in pixels.
pub const VIEWPORT_HEIGHT: f32 = 540.0;
/// Distance from the bottom of the viewport to the ground line.
pub const GROUND_MARGIN: f32 = 80.0;

/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.6;
/// Terminal downward velocity per frame.
pub const MAX_FALL_SPEED: f32 = 15.0;
/// Horizontal speed while a move key is held.
pub const MOVE_SPEED: f32 = 4.0;
/// Initial upward velocity of a jump.
pub const JUMP_STRENGTH: f32 = 12.0;
pub const PLAYER_WIDTH: f32 = 48.0;
pub const PLAYER_HEIGHT: f32 = 64.0;
pub const PLAYER_SPAWN_X: f32 = 100.0;

/// Frames an attack stays active.
pub const ATTACK_DURATION: u32 = 12;
/// Extra horizontal velocity added when a kick starts in the air.
pub const FLYING_KICK_IMPULSE: f32 = 3.0;
/// Width of the grounded strike hitbox.
pub const STRIKE_WIDTH: f32 = 30.0;
/// Vertical inset of the strike hitbox from the player's top and bottom.
pub const STRIKE_INSET: f32 = 8.0;

/// Frames between run-cycle advances.
pub const ANIM_SPEED: u32 = 6;
pub const RUN_FRAMES: u32 = 4;
/// |vx| above this counts as moving for animation purposes.
pub const MOVING_THRESHOLD: f32 = 0.1;

pub const SPRITE_FRAME_WIDTH: f32 = 32.0;
pub const SPRITE_FRAME_HEIGHT: f32 = 32.0;

/// World and viewport dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_margin: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_margin: GROUND_MARGIN,
        }
    }
}

impl WorldConfig {
    /// Y coordinate of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - self.ground_margin
    }
}

/// Player movement tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub move_speed: f32,
    pub jump_strength: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            move_speed: MOVE_SPEED,
            jump_strength: JUMP_STRENGTH,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: PLAYER_SPAWN_X,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub attack_duration: u32,
    pub flying_kick_impulse: f32,
    pub strike_width: f32,
    pub strike_inset: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_duration: ATTACK_DURATION,
            flying_kick_impulse: FLYING_KICK_IMPULSE,
            strike_width: STRIKE_WIDTH,
            strike_inset: STRIKE_INSET,
        }
    }
}

/// Run-cycle timing and sprite strip layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub anim_speed: u32,
    pub run_frames: u32,
    pub moving_threshold: f32,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            anim_speed: ANIM_SPEED,
            run_frames: RUN_FRAMES,
            moving_threshold: MOVING_THRESHOLD,
            frame_width: SPRITE_FRAME_WIDTH,
            frame_height: SPRITE_FRAME_HEIGHT,
        }
    }
}

/// Enemy placement. `lift` is how far above the ground line the enemy's top
/// edge sits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnemySpawn {
    pub x: f32,
    pub lift: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

impl EnemySpawn {
    fn grunt(x: f32) -> Self {
        Self {
            x,
            lift: 50.0,
            width: 36.0,
            height: 48.0,
            color: "#ff3333".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalSpawn {
    pub x: f32,
    pub lift: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub enemies: Vec<EnemySpawn>,
    pub goal: GoalSpawn,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            enemies: vec![
                EnemySpawn::grunt(550.0),
                EnemySpawn::grunt(900.0),
                EnemySpawn::grunt(1300.0),
            ],
            goal: GoalSpawn {
                x: 1800.0,
                lift: 120.0,
                width: 60.0,
                height: 120.0,
            },
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub combat: CombatConfig,
    pub animation: AnimationConfig,
    pub level: LevelConfig,
}

impl GameConfig {
    /// Parse a TOML document. Missing tables and fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject values that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), String> {
        if self.world.width < self.physics.player_width {
            return Err("world.width must be at least physics.player_width".to_string());
        }
        if self.world.ground_y() < self.physics.player_height {
            return Err("ground line leaves no room for the player".to_string());
        }
        if self.physics.max_fall_speed <= 0.0 {
            return Err("physics.max_fall_speed must be > 0".to_string());
        }
        if self.combat.attack_duration == 0 {
            return Err("combat.attack_duration must be > 0".to_string());
        }
        if self.animation.run_frames == 0 {
            return Err("animation.run_frames must be > 0".to_string());
        }
        if self.animation.anim_speed == 0 {
            return Err("animation.anim_speed must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.world.width, 2000.0);
        assert_eq!(cfg.world.ground_y(), 460.0);
        assert_eq!(cfg.combat.attack_duration, 12);
        assert_eq!(cfg.level.enemies.len(), 3);
        assert_eq!(cfg.level.goal.x, 1800.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[physics]
move_speed = 6.0

[world]
width = 3000.0
"#;
        let cfg = GameConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.physics.move_speed, 6.0);
        assert_eq!(cfg.physics.gravity, GRAVITY);
        assert_eq!(cfg.world.width, 3000.0);
        assert_eq!(cfg.world.viewport_width, VIEWPORT_WIDTH);
    }

    #[test]
    fn parse_custom_level() {
        let toml_str = r##"
[level.goal]
x = 900.0
lift = 100.0
width = 40.0
height = 100.0

[[level.enemies]]
x = 300.0
lift = 40.0
width = 20.0
height = 40.0
color = "#00ff00"
"##;
        let cfg = GameConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.level.enemies.len(), 1);
        assert_eq!(cfg.level.enemies[0].color, "#00ff00");
        assert_eq!(cfg.level.goal.x, 900.0);
    }

    #[test]
    fn bundled_sample_matches_defaults() {
        let cfg = GameConfig::from_toml_str(include_str!("../../../config/game.toml")).unwrap();
        let defaults = GameConfig::default();
        assert_eq!(cfg.world.width, defaults.world.width);
        assert_eq!(cfg.physics.jump_strength, defaults.physics.jump_strength);
        assert_eq!(cfg.level.enemies, defaults.level.enemies);
        assert_eq!(cfg.level.goal, defaults.level.goal);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(GameConfig::from_toml_str("world = 5").is_err());
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let mut cfg = GameConfig::default();
        cfg.combat.attack_duration = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_narrow_world() {
        let mut cfg = GameConfig::default();
        cfg.world.width = 10.0;
        assert!(cfg.validate().is_err());
    }
}
