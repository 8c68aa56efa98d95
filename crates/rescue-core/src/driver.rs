use crate::game::Game;
use crate::simulation::GameEvent;

/// Run (simulate, render) pairs until `should_continue` returns false or
/// `max_frames` frames have run. `present` sees the game after every frame
/// along with that frame's events. Returns the number of frames executed.
///
/// The browser client drives [`Game::frame`] from `requestAnimationFrame`
/// instead; this entry point exists for headless runs and tests.
pub fn run_frames<C, P>(
    game: &mut Game,
    max_frames: u64,
    mut should_continue: C,
    mut present: P,
) -> u64
where
    C: FnMut(&Game) -> bool,
    P: FnMut(&Game, &[GameEvent]),
{
    let mut frames = 0;
    while frames < max_frames && should_continue(game) {
        let events = game.frame();
        present(game, &events);
        frames += 1;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_frame_bound() {
        let mut game = Game::default();
        let ran = run_frames(&mut game, 30, |_| true, |_, _| {});
        assert_eq!(ran, 30);
        assert_eq!(game.state().frame, 30);
    }

    #[test]
    fn predicate_checked_before_each_frame() {
        let mut game = Game::default();
        let ran = run_frames(&mut game, 100, |g| g.state().frame < 7, |_, _| {});
        assert_eq!(ran, 7);

        let mut fresh = Game::default();
        assert_eq!(run_frames(&mut fresh, 100, |_| false, |_, _| {}), 0);
    }

    #[test]
    fn rendering_continues_after_level_complete() {
        let mut game = Game::default();
        game.key_down("KeyD");

        let mut completions = 0;
        let mut presented = 0;
        let ran = run_frames(
            &mut game,
            1000,
            |_| true,
            |g, events| {
                completions += events
                    .iter()
                    .filter(|e| **e == GameEvent::LevelComplete)
                    .count();
                assert!(!g.draw_list().commands().is_empty());
                presented += 1;
            },
        );

        assert_eq!(ran, 1000);
        assert_eq!(presented, 1000);
        assert_eq!(completions, 1);
        assert!(game.state().level_complete);
        // Simulation froze on the completing frame
        assert!(game.state().frame < 1000);
    }

    #[test]
    fn headless_run_until_complete() {
        let mut game = Game::default();
        game.key_down("ArrowRight");
        let ran = run_frames(&mut game, 5000, |g| !g.state().level_complete, |_, _| {});
        assert!(game.state().level_complete);
        assert!(ran < 5000);
    }
}
