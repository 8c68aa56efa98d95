use serde::{Deserialize, Serialize};

/// Logical game actions that keys map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
}

impl Action {
    /// Map a physical key code (`KeyboardEvent.code`) to an action.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Self::MoveLeft),
            "ArrowRight" | "KeyD" => Some(Self::MoveRight),
            "ArrowUp" | "Space" | "KeyW" => Some(Self::Jump),
            "KeyJ" => Some(Self::Attack),
            _ => None,
        }
    }
}

/// Held state for the level-sensitive actions. Attack has no held state; it
/// is reported to the caller on key-down and handled as an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key press. Returns the action the key maps to, if any.
    pub fn on_key_down(&mut self, code: &str) -> Option<Action> {
        let action = Action::from_key_code(code)?;
        self.set_held(action, true);
        Some(action)
    }

    /// Register a key release.
    pub fn on_key_up(&mut self, code: &str) {
        if let Some(action) = Action::from_key_code(code) {
            self.set_held(action, false);
        }
    }

    fn set_held(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
            Action::Jump => self.jump = held,
            Action::Attack => {},
        }
    }
}
