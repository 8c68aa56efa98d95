use serde::{Deserialize, Serialize};

use crate::animation::update_animation;
use crate::camera::camera_offset;
use crate::config::{CombatConfig, GameConfig, PhysicsConfig, WorldConfig};
use crate::entities::{AttackMode, Enemy, Facing, Goal, Player};
use crate::input::InputState;

/// Everything that changes while the level is played.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
    pub camera_x: f32,
    pub level_complete: bool,
    pub frame: u64,
}

/// Notable things that happened during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyDefeated { index: usize },
    LevelComplete,
}

impl GameState {
    /// Build the level from config: player at spawn, all enemies alive.
    pub fn new(config: &GameConfig) -> Self {
        let ground_y = config.world.ground_y();
        let player = Player::new(&config.physics, ground_y);
        let camera_x = camera_offset(player.x, &config.world);
        Self {
            player,
            enemies: config
                .level
                .enemies
                .iter()
                .map(|spawn| Enemy::spawn(spawn, ground_y))
                .collect(),
            goal: Goal::spawn(&config.level.goal, ground_y),
            camera_x,
            level_complete: false,
            frame: 0,
        }
    }

    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// Begin an attack. Ignored while one is already running. Started in the
    /// air it becomes a flying kick with a one-frame forward push.
    pub fn start_attack(&mut self, combat: &CombatConfig) {
        let player = &mut self.player;
        if player.is_attacking {
            return;
        }

        player.is_attacking = true;
        player.attack_timer = combat.attack_duration;

        if player.on_ground {
            player.attack_mode = AttackMode::Strike;
        } else {
            player.attack_mode = AttackMode::FlyingKick;
            let impulse = player.facing.sign() * combat.flying_kick_impulse;
            player.vx += impulse;
            player.pending_impulse = impulse;
        }
    }

    /// Advance one frame. Does nothing once the level is complete.
    pub fn step(&mut self, input: &InputState, config: &GameConfig) -> Vec<GameEvent> {
        if self.level_complete {
            return Vec::new();
        }
        self.frame += 1;

        let mut events = Vec::new();

        tick_player(&mut self.player, input, &config.physics, &config.world);

        if self.player.is_attacking {
            self.player.attack_timer = self.player.attack_timer.saturating_sub(1);
            if self.player.attack_timer == 0 {
                self.player.is_attacking = false;
                self.player.attack_mode = AttackMode::Strike;
            } else {
                self.apply_attack_hits(&config.combat, &mut events);
            }
        }

        self.camera_x = camera_offset(self.player.x, &config.world);

        if self.player.bounds().overlaps(&self.goal.bounds()) {
            self.level_complete = true;
            tracing::info!(frame = self.frame, "Level complete");
            events.push(GameEvent::LevelComplete);
        }

        update_animation(&mut self.player, &config.animation);

        events
    }

    /// Kill every living enemy the current attack hitbox touches.
    pub fn apply_attack_hits(&mut self, combat: &CombatConfig, events: &mut Vec<GameEvent>) {
        let hitbox = self.player.attack_hitbox(combat);
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if !enemy.alive {
                continue;
            }
            if hitbox.overlaps(&enemy.bounds()) {
                enemy.alive = false;
                tracing::info!(enemy = index, mode = ?self.player.attack_mode, "Enemy defeated");
                events.push(GameEvent::EnemyDefeated { index });
            }
        }
    }
}

/// Movement, gravity, ground contact and world bounds for one frame.
pub fn tick_player(
    player: &mut Player,
    input: &InputState,
    physics: &PhysicsConfig,
    world: &WorldConfig,
) {
    // Right is evaluated last so it wins when both are held
    player.vx = 0.0;
    if input.left {
        player.vx = -physics.move_speed;
        player.facing = Facing::Left;
    }
    if input.right {
        player.vx = physics.move_speed;
        player.facing = Facing::Right;
    }
    player.vx += std::mem::take(&mut player.pending_impulse);

    if input.jump && player.on_ground {
        player.vy = -physics.jump_strength;
        player.on_ground = false;
    }

    player.vy += physics.gravity;
    if player.vy > physics.max_fall_speed {
        player.vy = physics.max_fall_speed;
    }

    player.x += player.vx;
    player.y += player.vy;

    resolve_ground(player, world.ground_y());

    let max_x = world.width - player.width;
    player.x = player.x.clamp(0.0, max_x);
}

pub(crate) fn resolve_ground(player: &mut Player, ground_y: f32) {
    if player.y + player.height >= ground_y {
        player.y = ground_y - player.height;
        player.vy = 0.0;
        player.on_ground = true;
        // Landing ends the kick pose; the attack timer keeps running
        player.attack_mode = AttackMode::Strike;
    }
}
