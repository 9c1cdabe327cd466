//! WebAssembly entry point and page wiring.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use floatframe_core::{FrameController, FrameHandle, SizeFields, navigate};
use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlIFrameElement, HtmlInputElement,
    KeyboardEvent, Window,
};
use web_time::Instant;

use crate::capture::{DocumentListeners, add_listener};
use crate::dom::{DomSink, IframeLoader, pointer_source};
use crate::page::{CONFIG_ELEMENT_ID, PageConfig, PageError, initial_url};

/// How often stale gestures are checked for, in milliseconds.
const EXPIRY_POLL_MS: i32 = 1_000;

fn js_error(value: JsValue) -> PageError {
    PageError::Js(format!("{:?}", value))
}

/// Look up an element by id and cast it.
fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType(id.to_string()))
}

/// Runtime state for the mounted widget.
struct WebFrame {
    window: Window,
    controller: FrameController<DomSink>,
    loader: IframeLoader,
    url_input: HtmlInputElement,
    width_input: HtmlInputElement,
    height_input: HtmlInputElement,
}

impl WebFrame {
    /// Size the frame from the page's default field values, then load any startup URL.
    fn start(&mut self, url: Option<String>) {
        // Read before the first sync overwrites them.
        let fields = SizeFields::new(self.width_input.value(), self.height_input.value());
        self.controller.init_with_fields(&fields);
        if let Some(url) = url {
            self.url_input.set_value(&url);
            self.load_url();
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }

    fn load_url(&mut self) {
        let input = self.url_input.value();
        if let Err(e) = navigate(&mut self.loader, &input) {
            log::warn!("{}", e);
            self.alert(&e.to_string());
        }
    }

    fn set_size(&mut self) {
        let (width, height) = (self.width_input.value(), self.height_input.value());
        if let Err(e) = self.controller.submit_size_fields(&width, &height) {
            log::warn!("{}", e);
            self.alert(&e.to_string());
            // Put the fields back to the size actually applied.
            self.controller.sync_dimensions();
        }
    }

    fn pointer_down(&mut self, target: FrameHandle, event: &Event) {
        event.prevent_default();
        let Some(source) = pointer_source(event) else {
            return;
        };
        if let Err(e) = self.controller.pointer_down(target, &source) {
            log::warn!("{}", e);
        }
    }

    fn document_move(&mut self, event: &Event) {
        let Some(source) = pointer_source(event) else {
            return;
        };
        if self.controller.pointer_move(&source) {
            event.prevent_default();
        }
    }

    fn document_end(&mut self, event: &Event) {
        if event.type_() == "touchcancel" {
            self.controller.cancel();
        } else {
            self.controller.pointer_up();
        }
    }
}

/// Run `f` on the frame unless it is already borrowed by an outer handler.
fn with_frame(frame: &RefCell<WebFrame>, f: impl FnOnce(&mut WebFrame)) {
    match frame.try_borrow_mut() {
        Ok(mut frame) => f(&mut frame),
        Err(_) => log::warn!("Frame busy, dropping event"),
    }
}

fn with_weak_frame(frame: &Weak<RefCell<WebFrame>>, f: impl FnOnce(&mut WebFrame)) {
    if let Some(frame) = frame.upgrade() {
        with_frame(&frame, f);
    }
}

/// Attach a page-lifetime listener that runs `action` on the frame.
fn listen(
    target: &EventTarget,
    kinds: &[&str],
    frame: &Rc<RefCell<WebFrame>>,
    action: impl Fn(&mut WebFrame, &Event) + 'static,
) -> Result<(), PageError> {
    let frame = Rc::clone(frame);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        with_frame(&frame, |frame| action(frame, &event));
    });
    for kind in kinds {
        add_listener(target, kind, callback.as_ref().unchecked_ref()).map_err(js_error)?;
    }
    callback.forget();
    Ok(())
}

fn is_enter(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|key| key.key() == "Enter")
}

fn start_expiry_timer(window: &Window, frame: &Rc<RefCell<WebFrame>>) -> Result<(), PageError> {
    let frame = Rc::clone(frame);
    let tick = Closure::<dyn FnMut()>::new(move || {
        with_frame(&frame, |frame| {
            frame.controller.expire_stale(Instant::now());
        });
    });
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            EXPIRY_POLL_MS,
        )
        .map_err(js_error)?;
    tick.forget();
    Ok(())
}

/// Bind the widget to the current page.
fn mount() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoWindow)?;

    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = PageConfig::load_or_default(embedded.as_deref());
    let ids = &config.elements;

    let wrapper: HtmlElement = element(&document, &ids.wrapper)?;
    let handle: HtmlElement = element(&document, &ids.drag_handle)?;
    let grip: HtmlElement = element(&document, &ids.resize_grip)?;
    let readout: Element = element(&document, &ids.dimensions)?;
    let viewer: HtmlIFrameElement = element(&document, &ids.viewer)?;
    let url_input: HtmlInputElement = element(&document, &ids.url_input)?;
    let go_button: HtmlElement = element(&document, &ids.go_button)?;
    let width_input: HtmlInputElement = element(&document, &ids.width_input)?;
    let height_input: HtmlInputElement = element(&document, &ids.height_input)?;
    let set_size_button: HtmlElement = element(&document, &ids.set_size_button)?;

    // Start from wherever the stylesheet placed the wrapper.
    let mut frame_config = config.frame.clone();
    frame_config.initial_position =
        Point::new(wrapper.offset_left() as f64, wrapper.offset_top() as f64);

    let frame = Rc::new_cyclic(|weak: &Weak<RefCell<WebFrame>>| {
        let on_move = {
            let weak = weak.clone();
            move |event: Event| with_weak_frame(&weak, |frame| frame.document_move(&event))
        };
        let on_end = {
            let weak = weak.clone();
            move |event: Event| with_weak_frame(&weak, |frame| frame.document_end(&event))
        };
        let listeners = DocumentListeners::new(document.clone(), on_move, on_end);
        let sink = DomSink::new(
            wrapper.clone(),
            readout,
            width_input.clone(),
            height_input.clone(),
            listeners,
        );
        RefCell::new(WebFrame {
            window: window.clone(),
            controller: FrameController::new(frame_config, sink),
            loader: IframeLoader::new(viewer),
            url_input: url_input.clone(),
            width_input: width_input.clone(),
            height_input: height_input.clone(),
        })
    });

    let location = window.location();
    let startup_url = initial_url(
        &location.search().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    );
    frame.borrow_mut().start(startup_url);

    listen(&handle, &["mousedown", "touchstart"], &frame, |frame, event| {
        frame.pointer_down(FrameHandle::DragHandle, event)
    })?;
    listen(&grip, &["mousedown", "touchstart"], &frame, |frame, event| {
        frame.pointer_down(FrameHandle::ResizeGrip, event)
    })?;
    listen(&go_button, &["click"], &frame, |frame, _| frame.load_url())?;
    listen(&url_input, &["keydown"], &frame, |frame, event| {
        if is_enter(event) {
            frame.load_url();
        }
    })?;
    listen(&set_size_button, &["click"], &frame, |frame, _| frame.set_size())?;
    for input in [&width_input, &height_input] {
        listen(input, &["keydown"], &frame, |frame, event| {
            if is_enter(event) {
                frame.set_size();
            }
        })?;
    }
    start_expiry_timer(&window, &frame)?;

    log::info!("FloatFrame mounted on #{}", ids.wrapper);
    Ok(())
}

/// Initialize and mount the widget.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Starting FloatFrame (WASM)");

    mount().map_err(|e| {
        log::error!("{}", e);
        JsValue::from_str(&e.to_string())
    })
}
