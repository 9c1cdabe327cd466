//! DOM implementations of the frame sink and content loader.

use floatframe_core::{ContentLoader, Dimensions, FrameSink, FrameState, GestureKind, PointerSource};
use kurbo::{Point, Size};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlIFrameElement, HtmlInputElement, MouseEvent, TouchEvent,
};

use crate::capture::{CaptureGuard, DocumentListeners};

/// Read coordinates from a mouse or touch event.
pub fn pointer_source(event: &Event) -> Option<PointerSource> {
    // `TouchEvent` is undefined on some desktop browsers, so check the
    // event type instead of `instanceof`.
    if event.type_().starts_with("touch") {
        let touches = event.unchecked_ref::<TouchEvent>().touches();
        let points = (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64));
        Some(PointerSource::touch(points))
    } else {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some(PointerSource::mouse(mouse.client_x() as f64, mouse.client_y() as f64))
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Writes frame geometry as inline styles on the wrapper element.
pub struct DomSink {
    wrapper: HtmlElement,
    readout: Element,
    width_input: HtmlInputElement,
    height_input: HtmlInputElement,
    listeners: DocumentListeners,
}

impl DomSink {
    pub fn new(
        wrapper: HtmlElement,
        readout: Element,
        width_input: HtmlInputElement,
        height_input: HtmlInputElement,
        listeners: DocumentListeners,
    ) -> Self {
        Self {
            wrapper,
            readout,
            width_input,
            height_input,
            listeners,
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.wrapper.style().set_property(property, value) {
            log::error!("Failed to set {}: {:?}", property, e);
        }
    }
}

impl FrameSink for DomSink {
    type Capture = Option<CaptureGuard>;

    fn apply_position(&mut self, position: Point) {
        self.set_style("left", &px(position.x));
        self.set_style("top", &px(position.y));
    }

    fn apply_size(&mut self, size: Size) {
        self.set_style("width", &px(size.width));
        self.set_style("height", &px(size.height));
    }

    fn set_state(&mut self, state: FrameState) {
        let classes = self.wrapper.class_list();
        let mut result = classes.remove_2("dragging", "resizing");
        if let Some(class) = state.marker_class() {
            result = result.and_then(|_| classes.add_1(class));
        }
        if let Err(e) = result {
            log::error!("Failed to update state class: {:?}", e);
        }
    }

    fn show_dimensions(&mut self, dimensions: Dimensions) {
        self.readout.set_text_content(Some(&dimensions.readout()));
        let fields = dimensions.fields();
        self.width_input.set_value(&fields.width);
        self.height_input.set_value(&fields.height);
    }

    fn acquire_capture(&mut self, kind: GestureKind) -> Option<CaptureGuard> {
        match self.listeners.acquire() {
            Ok(guard) => Some(guard),
            Err(e) => {
                log::error!("Failed to capture input for {:?}: {:?}", kind, e);
                None
            }
        }
    }
}

/// Loads URLs into the embedded iframe.
pub struct IframeLoader {
    iframe: HtmlIFrameElement,
}

impl IframeLoader {
    pub fn new(iframe: HtmlIFrameElement) -> Self {
        Self { iframe }
    }
}

impl ContentLoader for IframeLoader {
    fn load(&mut self, url: &str) {
        self.iframe.set_src(url);
    }
}
