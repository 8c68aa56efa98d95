use serde::{Deserialize, Serialize};

use crate::config::{CombatConfig, EnemySpawn, GoalSpawn, PhysicsConfig};
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Which hitbox an active attack uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackMode {
    /// Short box beside the player on the facing side.
    #[default]
    Strike,
    /// Whole body, started while airborne.
    FlyingKick,
}

/// State of the single player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub facing: Facing,
    pub on_ground: bool,
    pub is_attacking: bool,
    pub attack_mode: AttackMode,
    pub attack_timer: u32,
    /// Kick impulse still to be folded into the next position integration.
    pub pending_impulse: f32,
    pub anim_frame: u32,
    pub anim_timer: u32,
}

impl Player {
    /// Spawn standing on the ground line.
    pub fn new(physics: &PhysicsConfig, ground_y: f32) -> Self {
        Self {
            x: physics.spawn_x,
            y: ground_y - physics.player_height,
            vx: 0.0,
            vy: 0.0,
            width: physics.player_width,
            height: physics.player_height,
            facing: Facing::Right,
            on_ground: true,
            is_attacking: false,
            attack_mode: AttackMode::Strike,
            attack_timer: 0,
            pending_impulse: 0.0,
            anim_frame: 0,
            anim_timer: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_flying_kick(&self) -> bool {
        self.is_attacking && self.attack_mode == AttackMode::FlyingKick
    }

    /// Region that damages enemies for the current attack mode.
    pub fn attack_hitbox(&self, combat: &CombatConfig) -> Rect {
        match self.attack_mode {
            AttackMode::FlyingKick => self.bounds(),
            AttackMode::Strike => {
                let w = combat.strike_width;
                let x = match self.facing {
                    Facing::Right => self.x + self.width,
                    Facing::Left => self.x - w,
                };
                Rect::new(
                    x,
                    self.y + combat.strike_inset,
                    w,
                    self.height - 2.0 * combat.strike_inset,
                )
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub alive: bool,
}

impl Enemy {
    pub fn spawn(spawn: &EnemySpawn, ground_y: f32) -> Self {
        Self {
            x: spawn.x,
            y: ground_y - spawn.lift,
            width: spawn.width,
            height: spawn.height,
            color: spawn.color.clone(),
            alive: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Trigger region that completes the level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Goal {
    pub fn spawn(spawn: &GoalSpawn, ground_y: f32) -> Self {
        Self {
            x: spawn.x,
            y: ground_y - spawn.lift,
            width: spawn.width,
            height: spawn.height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32, facing: Facing) -> Player {
        let mut p = Player::new(&PhysicsConfig::default(), 460.0);
        p.x = x;
        p.y = y;
        p.facing = facing;
        p
    }

    #[test]
    fn spawn_stands_on_ground() {
        let p = Player::new(&PhysicsConfig::default(), 460.0);
        assert_eq!(p.bounds().bottom(), 460.0);
        assert!(p.on_ground);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn strike_hitbox_facing_right() {
        let p = player_at(100.0, 396.0, Facing::Right);
        let hb = p.attack_hitbox(&CombatConfig::default());
        assert_eq!(hb, Rect::new(148.0, 404.0, 30.0, 48.0));
    }

    #[test]
    fn strike_hitbox_facing_left() {
        let p = player_at(100.0, 396.0, Facing::Left);
        let hb = p.attack_hitbox(&CombatConfig::default());
        assert_eq!(hb, Rect::new(70.0, 404.0, 30.0, 48.0));
    }

    #[test]
    fn flying_kick_hitbox_is_body() {
        let mut p = player_at(100.0, 300.0, Facing::Left);
        p.attack_mode = AttackMode::FlyingKick;
        assert_eq!(p.attack_hitbox(&CombatConfig::default()), p.bounds());
    }

    #[test]
    fn enemy_and_goal_placed_relative_to_ground() {
        let level = crate::config::LevelConfig::default();
        let enemy = Enemy::spawn(&level.enemies[0], 460.0);
        assert_eq!(enemy.y, 410.0);
        assert!(enemy.alive);
        let goal = Goal::spawn(&level.goal, 460.0);
        assert_eq!(goal.bounds(), Rect::new(1800.0, 340.0, 60.0, 120.0));
    }
}
