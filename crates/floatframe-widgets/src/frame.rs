//! Floating viewer frame: drag by the title bar, resize from the corner grip.

use egui::{
    Align2, Area, Context, CornerRadius, CursorIcon, FontId, Id, Order, Pos2, Rect, Response,
    Sense, Stroke, Ui, UiBuilder, pos2, vec2,
};
use floatframe_core::widget::{grip_rect, handle_rect, hit_test};
use floatframe_core::{
    ContentLoader, Dimensions, FrameConfig, FrameController, FrameGeometry, FrameHandle,
    FrameSink, FrameState, GestureKind, PointerSource, SizeFields, navigate,
};
use kurbo::Size;

use crate::{chrome, sizing, theme};

/// Convert a kurbo rectangle to egui screen space.
pub fn to_egui_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.x0 as f32, rect.y0 as f32),
        pos2(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Convert an egui position to page coordinates.
pub fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

/// Convert an egui position to a pointer source.
pub fn pointer_source(pos: Pos2) -> PointerSource {
    PointerSource::Mouse(to_point(pos))
}

/// Sink that keeps the frame's presentation state between egui passes.
///
/// egui holds pointer capture for a dragged widget on its own, so the
/// capture token carries nothing.
#[derive(Debug, Default)]
pub struct EguiSink {
    position: kurbo::Point,
    size: Size,
    state: FrameState,
    readout: String,
    fields: SizeFields,
}

impl EguiSink {
    pub fn readout(&self) -> &str {
        &self.readout
    }

    pub fn fields(&self) -> &SizeFields {
        &self.fields
    }

    /// Editable size fields, overwritten on every dimensions sync.
    pub fn fields_mut(&mut self) -> &mut SizeFields {
        &mut self.fields
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Last applied geometry.
    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry::new(self.position, self.size)
    }
}

impl FrameSink for EguiSink {
    type Capture = ();

    fn apply_position(&mut self, position: kurbo::Point) {
        self.position = position;
    }

    fn apply_size(&mut self, size: Size) {
        self.size = size;
    }

    fn set_state(&mut self, state: FrameState) {
        self.state = state;
    }

    fn show_dimensions(&mut self, dimensions: Dimensions) {
        self.readout = dimensions.readout();
        self.fields = dimensions.fields();
    }

    fn acquire_capture(&mut self, kind: GestureKind) {
        log::debug!("egui capture for {:?}", kind);
    }
}

/// The URL currently shown in the viewer.
#[derive(Debug, Default)]
struct Viewer {
    url: Option<String>,
}

impl ContentLoader for Viewer {
    fn load(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }
}

/// A floating frame hosting an embedded viewer.
pub struct FloatingFrame {
    id: Id,
    title: String,
    controller: FrameController<EguiSink>,
    viewer: Viewer,
    url_input: String,
    error: Option<String>,
}

impl FloatingFrame {
    /// Create a frame and run its startup sync.
    pub fn new(id_salt: impl std::hash::Hash, config: FrameConfig) -> Self {
        let mut controller = FrameController::new(config, EguiSink::default());
        controller.init();
        Self {
            id: Id::new(id_salt),
            title: "Viewer".to_string(),
            controller,
            viewer: Viewer::default(),
            url_input: String::new(),
            error: None,
        }
    }

    /// Set the title shown on the drag handle.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn controller(&self) -> &FrameController<EguiSink> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FrameController<EguiSink> {
        &mut self.controller
    }

    /// URL loaded in the viewer, if any.
    pub fn current_url(&self) -> Option<&str> {
        self.viewer.url.as_deref()
    }

    pub fn url_input_mut(&mut self) -> &mut String {
        &mut self.url_input
    }

    pub fn size_fields_mut(&mut self) -> &mut SizeFields {
        self.controller.sink_mut().fields_mut()
    }

    /// Last validation error, if the most recent submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load the URL typed into the URL bar.
    ///
    /// A rejected URL is kept as the frame's error and the viewer is left
    /// unchanged.
    pub fn submit_url(&mut self) {
        let input = self.url_input.clone();
        match navigate(&mut self.viewer, &input) {
            Ok(url) => {
                self.url_input = url;
                self.error = None;
            }
            Err(e) => self.record_error(e),
        }
    }

    /// Apply the size typed into the size fields.
    ///
    /// Invalid fields are kept as the frame's error and put back to the
    /// current size.
    pub fn submit_size(&mut self) {
        let fields = self.controller.sink().fields().clone();
        match self.controller.submit_size_fields(&fields.width, &fields.height) {
            Ok(_) => self.error = None,
            Err(e) => {
                self.record_error(e);
                self.controller.sync_dimensions();
            }
        }
    }

    fn record_error(&mut self, error: impl std::fmt::Display) {
        log::warn!("{}", error);
        self.error = Some(error.to_string());
    }

    /// Show the frame as a floating area.
    pub fn show(&mut self, ctx: &Context) {
        let geometry = self.controller.geometry();
        let frame_rect = to_egui_rect(geometry.rect());

        Area::new(self.id)
            .fixed_pos(frame_rect.min)
            .order(Order::Middle)
            .show(ctx, |ui| {
                let (_, response) = ui.allocate_exact_size(frame_rect.size(), Sense::drag());
                self.route(ctx, &geometry, &response);

                // egui always reports drag_stopped; a gesture that outlives
                // its drag lost the pointer some other way.
                if self.controller.active_gesture().is_some()
                    && !response.dragged()
                    && !response.drag_stopped()
                {
                    self.controller.cancel();
                }

                self.paint(ui, &self.controller.geometry());
                self.set_cursor(ctx, &geometry, &response);
            });
    }

    /// Feed one egui pass of drag state into the controller.
    ///
    /// Only presses that land on the handle or grip start a gesture.
    fn route(&mut self, ctx: &Context, geometry: &FrameGeometry, response: &Response) {
        if response.drag_started() {
            let origin = ctx
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            let press = origin.and_then(|pos| Some((hit_test(geometry, to_point(pos))?, pos)));
            if let Some((target, pos)) = press {
                if let Err(e) = self.controller.pointer_down(target, &pointer_source(pos)) {
                    log::warn!("{}", e);
                }
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.controller.pointer_move(&pointer_source(pos));
            }
        }
        if response.drag_stopped() {
            self.controller.pointer_up();
        }
    }

    fn set_cursor(&self, ctx: &Context, geometry: &FrameGeometry, response: &Response) {
        let icon = match self.controller.active_gesture() {
            Some(GestureKind::Drag) => Some(CursorIcon::Grabbing),
            Some(GestureKind::Resize) => Some(CursorIcon::ResizeNwSe),
            None => response
                .hover_pos()
                .and_then(|pos| hit_test(geometry, to_point(pos)))
                .map(|target| match target {
                    FrameHandle::DragHandle => CursorIcon::Grab,
                    FrameHandle::ResizeGrip => CursorIcon::ResizeNwSe,
                }),
        };
        if let Some(icon) = icon {
            ctx.set_cursor_icon(icon);
        }
    }

    fn paint(&self, ui: &mut Ui, geometry: &FrameGeometry) {
        let rect = to_egui_rect(geometry.rect());
        let border = if self.controller.state().is_active() {
            theme::ACCENT
        } else {
            theme::BORDER
        };
        ui.painter()
            .add(chrome::panel_frame().stroke(Stroke::new(1.0, border)).paint(rect));

        let bar = to_egui_rect(handle_rect(geometry));
        ui.painter().rect_filled(
            bar,
            CornerRadius {
                nw: sizing::PANEL_RADIUS,
                ne: sizing::PANEL_RADIUS,
                sw: 0,
                se: 0,
            },
            theme::HANDLE_BG,
        );
        ui.painter().text(
            bar.left_center() + vec2(10.0, 0.0),
            Align2::LEFT_CENTER,
            &self.title,
            FontId::proportional(13.0),
            theme::TEXT,
        );
        ui.painter().text(
            bar.right_center() - vec2(10.0, 0.0),
            Align2::RIGHT_CENTER,
            self.controller.sink().readout(),
            FontId::proportional(11.0),
            theme::TEXT_MUTED,
        );

        let content = Rect::from_min_max(pos2(rect.left(), bar.bottom()), rect.max).shrink(12.0);
        ui.scope_builder(UiBuilder::new().max_rect(content), |ui| match self.current_url() {
            Some(url) => {
                ui.hyperlink(url);
            }
            None => {
                ui.colored_label(theme::TEXT_MUTED, "No page loaded");
            }
        });

        let grip = to_egui_rect(grip_rect(geometry));
        for step in 1..=3 {
            let offset = step as f32 * 4.0;
            ui.painter().line_segment(
                [
                    pos2(grip.right() - offset, grip.bottom() - 2.0),
                    pos2(grip.right() - 2.0, grip.bottom() - offset),
                ],
                Stroke::new(1.0, theme::TEXT_MUTED),
            );
        }
    }
}
