//! Document-level input capture for the duration of a gesture.

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget};

/// Events that carry gesture movement.
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
/// Events that end a gesture.
const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Register `callback` for `kind` on `target`.
///
/// Touch listeners are registered non-passive so they may cancel scrolling.
pub fn add_listener(target: &EventTarget, kind: &str, callback: &Function) -> Result<(), JsValue> {
    if kind.starts_with("touch") {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind, callback, &options,
        )
    } else {
        target.add_event_listener_with_callback(kind, callback)
    }
}

/// Move/end handlers installed on the document while a gesture is active.
///
/// The closures live as long as this value; capture guards only hold
/// references to them.
pub struct DocumentListeners {
    document: Document,
    on_move: Closure<dyn FnMut(Event)>,
    on_end: Closure<dyn FnMut(Event)>,
}

impl DocumentListeners {
    pub fn new(
        document: Document,
        on_move: impl FnMut(Event) + 'static,
        on_end: impl FnMut(Event) + 'static,
    ) -> Self {
        Self {
            document,
            on_move: Closure::new(on_move),
            on_end: Closure::new(on_end),
        }
    }

    /// Install the handlers; they are removed when the guard drops.
    pub fn acquire(&self) -> Result<CaptureGuard, JsValue> {
        let guard = CaptureGuard {
            document: self.document.clone(),
            on_move: self.on_move.as_ref().unchecked_ref::<Function>().clone(),
            on_end: self.on_end.as_ref().unchecked_ref::<Function>().clone(),
        };
        for kind in MOVE_EVENTS {
            add_listener(&guard.document, kind, &guard.on_move)?;
        }
        for kind in END_EVENTS {
            add_listener(&guard.document, kind, &guard.on_end)?;
        }
        Ok(guard)
    }
}

/// Active document capture. Dropping it removes the gesture listeners.
pub struct CaptureGuard {
    document: Document,
    on_move: Function,
    on_end: Function,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        let removals = MOVE_EVENTS
            .iter()
            .map(|kind| (kind, &self.on_move))
            .chain(END_EVENTS.iter().map(|kind| (kind, &self.on_end)));
        for (kind, callback) in removals {
            if let Err(e) = self.document.remove_event_listener_with_callback(kind, callback) {
                log::error!("Failed to remove {} listener: {:?}", kind, e);
            }
        }
    }
}
