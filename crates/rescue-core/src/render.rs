use serde::Serialize;

use crate::config::GameConfig;
use crate::entities::Facing;
use crate::geometry::Rect;
use crate::simulation::GameState;

pub const BACKGROUND_COLOR: &str = "#1b2632";
pub const PARALLAX_COLOR: &str = "#111820";
pub const GROUND_COLOR: &str = "#444444";
pub const GOAL_COLOR: &str = "#6666ff";
pub const PLAYER_FALLBACK_COLOR: &str = "#ffcc00";
pub const HITBOX_COLOR: &str = "#00ff00";
pub const TEXT_COLOR: &str = "#ffffff";

/// Height of the far background band.
const PARALLAX_BAND_HEIGHT: f32 = 200.0;
/// The far band scrolls at this fraction of the camera offset.
const PARALLAX_FACTOR: f32 = 0.3;

pub const INSTRUCTIONS: &str =
    "A/D or \u{2190}/\u{2192}: Walk  |  W/\u{2191}/Space: Jump  |  J: Punch/Flying Kick";
pub const LEVEL_COMPLETE_TEXT: &str = "LEVEL COMPLETE!";

/// A single 2D drawing operation in screen space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: String,
    },
    StrokeRect {
        rect: Rect,
        color: String,
    },
    /// Blit `src` from the sprite strip into `dest`, mirrored around the
    /// centre of `dest` when `flip_x` is set.
    Sprite {
        src: Rect,
        dest: Rect,
        flip_x: bool,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCmd::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCmd::StrokeRect {
            rect,
            color: color.to_string(),
        });
    }

    pub fn sprite(&mut self, src: Rect, dest: Rect, flip_x: bool) {
        self.commands.push(DrawCmd::Sprite { src, dest, flip_x });
    }

    pub fn text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }
}

/// Fill `out` with the draw commands for the current state. Reads only.
pub fn render_frame(
    state: &GameState,
    config: &GameConfig,
    sprite_ready: bool,
    out: &mut DrawList,
) {
    out.clear();

    let world = &config.world;
    let cam = state.camera_x;
    let ground_y = world.ground_y();

    out.fill_rect(
        Rect::new(0.0, 0.0, world.viewport_width, world.viewport_height),
        BACKGROUND_COLOR,
    );
    out.fill_rect(
        Rect::new(
            -cam * PARALLAX_FACTOR,
            world.viewport_height - PARALLAX_BAND_HEIGHT,
            world.width,
            PARALLAX_BAND_HEIGHT,
        ),
        PARALLAX_COLOR,
    );
    out.fill_rect(
        Rect::new(-cam, ground_y, world.width, world.viewport_height - ground_y),
        GROUND_COLOR,
    );

    for enemy in state.enemies.iter().filter(|e| e.alive) {
        out.fill_rect(enemy.bounds().offset_x(-cam), &enemy.color);
    }

    out.fill_rect(state.goal.bounds().offset_x(-cam), GOAL_COLOR);

    draw_player(state, config, sprite_ready, out);

    // Debug outline of the live hitbox
    if state.player.is_attacking {
        let hitbox = state.player.attack_hitbox(&config.combat);
        out.stroke_rect(hitbox.offset_x(-cam), HITBOX_COLOR);
    }

    out.text(INSTRUCTIONS, 20.0, 30.0, "18px Arial", TEXT_COLOR);

    if state.level_complete {
        out.text(
            LEVEL_COMPLETE_TEXT,
            world.viewport_width / 2.0 - 130.0,
            80.0,
            "32px Arial",
            TEXT_COLOR,
        );
    }
}

fn draw_player(state: &GameState, config: &GameConfig, sprite_ready: bool, out: &mut DrawList) {
    let player = &state.player;
    let dest = player.bounds().offset_x(-state.camera_x);

    if !sprite_ready {
        out.fill_rect(dest, PLAYER_FALLBACK_COLOR);
        return;
    }

    let anim = &config.animation;
    let src = Rect::new(
        player.anim_frame as f32 * anim.frame_width,
        0.0,
        anim.frame_width,
        anim.frame_height,
    );
    out.sprite(src, dest, player.facing == Facing::Left);
}
