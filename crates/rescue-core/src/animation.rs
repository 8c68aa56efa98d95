use crate::config::AnimationConfig;
use crate::entities::Player;

/// Advance the run cycle while the player moves on the ground; otherwise hold
/// frame 0.
pub fn update_animation(player: &mut Player, anim: &AnimationConfig) {
    let is_moving = player.vx.abs() > anim.moving_threshold && player.on_ground;

    if is_moving {
        player.anim_timer += 1;
        if player.anim_timer >= anim.anim_speed {
            player.anim_timer = 0;
            player.anim_frame = (player.anim_frame + 1) % anim.run_frames;
        }
    } else {
        player.anim_frame = 0;
        player.anim_timer = 0;
    }
}
