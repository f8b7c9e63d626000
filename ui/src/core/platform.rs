//! Platform detection and the little bit of browser glue the report needs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Whether arrow keys are captured on `window` rather than on the report root.
    pub fn has_global_key_listener(self) -> bool {
        self == Self::Web
    }
}

/// Install a `keydown` listener on `window` for the lifetime of the page.
/// `on_key` receives `KeyboardEvent.key`.
#[cfg(target_arch = "wasm32")]
pub fn listen_for_keys(on_key: impl Fn(String) + 'static) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; keyboard navigation disabled");
        return;
    };
    let closure = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| on_key(event.key()),
    );
    if let Err(err) =
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        tracing::warn!("failed to install keydown listener: {err:?}");
    }
    // The listener lives as long as the page.
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn listen_for_keys(_on_key: impl Fn(String) + 'static) {}
