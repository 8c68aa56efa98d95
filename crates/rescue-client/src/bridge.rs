use rescue_core::input::Action;

/// Keys whose browser default (page scroll) must be suppressed while playing.
pub fn should_prevent_default(code: &str) -> bool {
    matches!(
        code,
        "Space" | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight"
    )
}

/// Whether a key-down should reach the game. Auto-repeat events are dropped so
/// a held attack key fires once per press.
pub fn accepts_key_down(code: &str, repeat: bool) -> bool {
    !repeat && Action::from_key_code(code).is_some()
}

/// Attach keyboard listeners that forward to the game.
#[cfg(target_family = "wasm")]
pub fn attach_input_listeners(app: &std::rc::Rc<std::cell::RefCell<crate::app::App>>) {
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::diag::console_warn;

    let Some(window) = web_sys::window() else {
        return;
    };

    // Keyboard: keydown
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                let code = evt.code();
                if should_prevent_default(&code) {
                    evt.prevent_default();
                }
                if accepts_key_down(&code, evt.repeat()) {
                    app.borrow_mut().game.key_down(&code);
                }
            },
        );
        if let Err(e) =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            console_warn!("Failed to attach keydown listener: {e:?}");
        }
        closure.forget();
    }

    // Keyboard: keyup
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                app.borrow_mut().game.key_up(&evt.code());
            },
        );
        if let Err(e) =
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
        {
            console_warn!("Failed to attach keyup listener: {e:?}");
        }
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keys_are_suppressed() {
        assert!(should_prevent_default("Space"));
        assert!(should_prevent_default("ArrowLeft"));
        assert!(!should_prevent_default("KeyJ"));
        assert!(!should_prevent_default("KeyA"));
    }

    #[test]
    fn repeats_and_unknown_keys_filtered() {
        assert!(accepts_key_down("KeyJ", false));
        assert!(!accepts_key_down("KeyJ", true));
        assert!(!accepts_key_down("KeyZ", false));
    }
}
