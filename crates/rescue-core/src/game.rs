use crate::assets::AssetReady;
use crate::config::GameConfig;
use crate::input::{Action, InputState};
use crate::render::{DrawList, render_frame};
use crate::simulation::{GameEvent, GameState};

/// A running level: state, held input, config, the player sprite's readiness
/// and the draw list of the last rendered frame.
pub struct Game {
    config: GameConfig,
    state: GameState,
    input: InputState,
    sprite: AssetReady,
    draw_list: DrawList,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            input: InputState::new(),
            sprite: AssetReady::new(),
            draw_list: DrawList::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn sprite(&self) -> &AssetReady {
        &self.sprite
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Route a key press. The attack key starts an attack immediately.
    pub fn key_down(&mut self, code: &str) -> Option<Action> {
        let action = self.input.on_key_down(code);
        if action == Some(Action::Attack) {
            self.state.start_attack(&self.config.combat);
        }
        action
    }

    pub fn key_up(&mut self, code: &str) {
        self.input.on_key_up(code);
    }

    /// Advance the simulation one frame.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        self.state.step(&self.input, &self.config)
    }

    /// Rebuild the draw list from the current state.
    pub fn render(&mut self) -> &DrawList {
        render_frame(
            &self.state,
            &self.config,
            self.sprite.is_ready(),
            &mut self.draw_list,
        );
        &self.draw_list
    }

    /// One display frame: simulate, then render.
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let events = self.tick();
        self.render();
        events
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
