use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use rescue_core::Game;
use rescue_core::simulation::GameEvent;

use crate::bridge::attach_input_listeners;
use crate::canvas::CanvasRenderer;
use crate::diag::{console_log, console_warn};
use crate::settings::{BUNDLED_CONFIG, game_config};

pub const CANVAS_ID: &str = "gameCanvas";
pub const SPRITE_URL: &str = "player.png.webp";

/// Browser-side application: the game plus the canvas it draws to.
pub struct App {
    pub game: Game,
    renderer: CanvasRenderer,
}

impl App {
    /// Simulate and draw one display frame.
    fn frame(&mut self) {
        for event in self.game.frame() {
            match event {
                GameEvent::EnemyDefeated { index } => {
                    let remaining = self.game.state().living_enemies();
                    console_log!("Enemy {index} defeated, {remaining} remaining");
                },
                GameEvent::LevelComplete => console_log!("Level complete"),
            }
        }
        if let Err(e) = self.renderer.draw(self.game.draw_list()) {
            console_warn!("Draw failed: {e:?}");
        }
    }
}

/// Wire up canvas, sprite, listeners, and start the frame loop.
pub fn run() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("No #gameCanvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "Not a canvas element")?;

    let config = game_config(BUNDLED_CONFIG, canvas.width(), canvas.height())?;

    let sprite = web_sys::HtmlImageElement::new().map_err(|e| format!("Image: {e:?}"))?;
    let renderer = CanvasRenderer::new(&canvas, sprite.clone())?;

    let app = Rc::new(RefCell::new(App {
        game: Game::new(config),
        renderer,
    }));

    // Sprite load completes asynchronously; until then the player is a box
    {
        let app = Rc::clone(&app);
        let onload = Closure::<dyn FnMut()>::new(move || {
            if app.borrow().game.sprite().mark_ready() {
                console_log!("Player sprite loaded");
            }
        });
        sprite.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
    }
    {
        let onerror = Closure::<dyn FnMut()>::new(move || {
            console_warn!("Failed to load {SPRITE_URL}, drawing fallback player");
        });
        sprite.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    }
    sprite.set_src(SPRITE_URL);

    attach_input_listeners(&app);
    request_animation_frame(app);

    console_log!("Princess Rescue running");
    Ok(())
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        console_warn!("requestAnimationFrame failed, frame loop stopped: {e:?}");
    }
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    app.borrow_mut().frame();
    request_animation_frame(app);
}
