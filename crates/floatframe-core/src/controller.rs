//! Frame controller: the drag/resize state machine.

use kurbo::{Point, Size};
use thiserror::Error;

use crate::config::FrameConfig;
use crate::dimensions::Dimensions;
use crate::geometry::{FrameGeometry, clamp_size};
use crate::input::{PointerEvent, PointerSource};
use crate::session::{ActiveSession, EndReason, Gesture, GestureKind};
use crate::sink::FrameSink;
use crate::size_input::{SizeFields, SizeInputError, parse_size_fields};
use crate::widget::{FrameHandle, FrameState};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Gesture errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GestureError {
    #[error("Pointer event carried no coordinates")]
    MissingCoordinates,
}

/// Owns the container geometry and at most one gesture session.
///
/// Drag and resize share a single session slot, so the two gestures are
/// mutually exclusive. All output goes through the sink `S`.
pub struct FrameController<S: FrameSink> {
    config: FrameConfig,
    geometry: FrameGeometry,
    session: Option<ActiveSession<S::Capture>>,
    sink: S,
}

impl<S: FrameSink> FrameController<S> {
    /// Create a controller. The initial size is clamped to the minimum.
    pub fn new(config: FrameConfig, sink: S) -> Self {
        let size = clamp_size(config.initial_size, config.min_size);
        let geometry = FrameGeometry::new(config.initial_position, size);
        Self {
            config,
            geometry,
            session: None,
            sink,
        }
    }

    /// Push the initial geometry to the sink and run the startup sync.
    pub fn init(&mut self) -> Dimensions {
        self.sink.apply_position(self.geometry.position);
        self.sink.apply_size(self.geometry.size);
        self.sink.set_state(FrameState::Idle);
        self.sync_dimensions()
    }

    /// Startup from the page's size fields.
    ///
    /// Valid fields replace the configured initial size (clamped to the
    /// minimum); invalid ones are logged and the configured size is kept.
    /// Either way the geometry is pushed and synced once.
    pub fn init_with_fields(&mut self, fields: &SizeFields) -> Dimensions {
        match fields.parse() {
            Ok(size) => self.geometry.size = clamp_size(size, self.config.min_size),
            Err(e) => log::warn!("Ignoring initial size fields: {}", e),
        }
        self.init()
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The gesture in progress, if any.
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.session.as_ref().map(|session| session.kind())
    }

    /// Current interaction state.
    pub fn state(&self) -> FrameState {
        self.active_gesture()
            .map(FrameState::from)
            .unwrap_or(FrameState::Idle)
    }

    /// Process a pointer event.
    ///
    /// Returns whether the event belonged to a gesture, in which case the
    /// host should suppress its default behavior.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Result<bool, GestureError> {
        match event {
            PointerEvent::Down { target, source } => {
                self.pointer_down(target, &source)?;
                Ok(true)
            }
            PointerEvent::Move { source } => Ok(self.pointer_move(&source)),
            PointerEvent::Up => Ok(self.pointer_up().is_some()),
            PointerEvent::Cancel => Ok(self.cancel().is_some()),
        }
    }

    /// Start a gesture from a press on `target`.
    ///
    /// A session left open by a lost pointer-up is ended first.
    pub fn pointer_down(
        &mut self,
        target: FrameHandle,
        source: &PointerSource,
    ) -> Result<GestureKind, GestureError> {
        let start_point = source.position().ok_or(GestureError::MissingCoordinates)?;

        if let Some(stale) = self.session.take() {
            log::warn!("{:?} gesture still open at pointer-down, ending it", stale.kind());
            self.finish(stale, EndReason::Superseded);
        }

        let gesture = match target.gesture() {
            GestureKind::Drag => Gesture::Drag {
                origin_position: self.geometry.position,
            },
            GestureKind::Resize => Gesture::Resize {
                origin_size: self.geometry.size,
            },
        };
        let kind = gesture.kind();
        let capture = self.sink.acquire_capture(kind);
        self.sink.set_state(FrameState::from(kind));
        self.session = Some(ActiveSession::new(gesture, start_point, capture));

        log::debug!("{:?} started at ({}, {})", kind, start_point.x, start_point.y);
        Ok(kind)
    }

    /// Apply pointer movement to the active gesture.
    ///
    /// Returns `false` when no gesture is active. Movement without
    /// coordinates is ignored but still counts as part of the gesture.
    pub fn pointer_move(&mut self, source: &PointerSource) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(point) = source.position() else {
            log::debug!("Ignoring pointer move without coordinates");
            return true;
        };

        session.update(point);
        let delta = session.delta();

        match session.gesture() {
            Gesture::Drag { origin_position } => {
                let position = origin_position + delta;
                self.geometry.position = position;
                self.sink.apply_position(position);
            }
            Gesture::Resize { origin_size } => {
                let candidate = Size::new(origin_size.width + delta.x, origin_size.height + delta.y);
                let size = clamp_size(candidate, self.config.min_size);
                self.geometry.size = size;
                self.sink.apply_size(size);
                self.sync_dimensions();
            }
        }
        true
    }

    /// End the active gesture on pointer release.
    pub fn pointer_up(&mut self) -> Option<GestureKind> {
        let session = self.session.take()?;
        Some(self.finish(session, EndReason::Released))
    }

    /// End the active gesture because the host aborted it.
    pub fn cancel(&mut self) -> Option<GestureKind> {
        let session = self.session.take()?;
        Some(self.finish(session, EndReason::Cancelled))
    }

    /// Release a gesture that has seen no activity within the configured timeout.
    pub fn expire_stale(&mut self, now: Instant) -> Option<GestureKind> {
        let timeout = self.config.gesture_timeout();
        if !self.session.as_ref()?.is_stale(now, timeout) {
            return None;
        }
        let session = self.session.take()?;
        log::warn!(
            "{:?} gesture idle for {:?}, releasing capture",
            session.kind(),
            timeout
        );
        Some(self.finish(session, EndReason::TimedOut))
    }

    /// Mirror the current size into the readout and size fields.
    pub fn sync_dimensions(&mut self) -> Dimensions {
        let dimensions = Dimensions::from_size(self.geometry.size);
        self.sink.show_dimensions(dimensions);
        dimensions
    }

    /// Set the size directly, clamped to the minimum, then sync.
    pub fn apply_size(&mut self, size: Size) -> Size {
        let size = clamp_size(size, self.config.min_size);
        self.geometry.size = size;
        self.sink.apply_size(size);
        self.sync_dimensions();
        size
    }

    /// Move the frame directly. Position is not constrained.
    pub fn set_position(&mut self, position: Point) {
        self.geometry.position = position;
        self.sink.apply_position(position);
    }

    /// Parse the external size fields and apply the result.
    ///
    /// Nothing changes if either field is invalid.
    pub fn submit_size_fields(&mut self, width: &str, height: &str) -> Result<Size, SizeInputError> {
        let size = parse_size_fields(width, height)?;
        Ok(self.apply_size(size))
    }

    fn finish(&mut self, session: ActiveSession<S::Capture>, reason: EndReason) -> GestureKind {
        let kind = session.kind();
        drop(session);
        self.sink.set_state(FrameState::Idle);
        if kind == GestureKind::Resize {
            self.sync_dimensions();
        }
        log::debug!("{:?} ended ({:?})", kind, reason);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{MIN_HEIGHT, MIN_WIDTH};
    use crate::sink::{RecordingSink, SinkCall};
    use std::time::Duration;

    fn controller() -> FrameController<RecordingSink> {
        let mut controller = FrameController::new(FrameConfig::default(), RecordingSink::new());
        controller.init();
        controller.sink_mut().clear_calls();
        controller
    }

    fn mouse(x: f64, y: f64) -> PointerSource {
        PointerSource::mouse(x, y)
    }

    #[test]
    fn test_init_syncs_once() {
        let mut controller = FrameController::new(FrameConfig::default(), RecordingSink::new());
        let dims = controller.init();

        assert_eq!(dims, Dimensions { width: 600, height: 400 });
        assert_eq!(controller.sink().readout(), Some("W: 600px, H: 400px"));
        assert_eq!(controller.sink().sync_count(), 1);
        assert_eq!(controller.sink().position(), Some(Point::ZERO));
    }

    #[test]
    fn test_init_with_fields_uses_page_values() {
        let mut controller = FrameController::new(FrameConfig::default(), RecordingSink::new());
        let dims = controller.init_with_fields(&SizeFields::new("800", "500"));

        assert_eq!(dims, Dimensions { width: 800, height: 500 });
        assert_eq!(controller.geometry().size, Size::new(800.0, 500.0));
        assert_eq!(controller.sink().fields(), &SizeFields::new("800", "500"));
        assert_eq!(controller.sink().sync_count(), 1);
        // The configured 600x400 never reaches the sink.
        let sizes: Vec<_> = controller
            .sink()
            .calls()
            .iter()
            .filter(|call| matches!(call, SinkCall::Size(_)))
            .collect();
        assert_eq!(sizes, vec![&SinkCall::Size(Size::new(800.0, 500.0))]);
    }

    #[test]
    fn test_init_with_fields_clamps_small_values() {
        let mut controller = FrameController::new(FrameConfig::default(), RecordingSink::new());
        controller.init_with_fields(&SizeFields::new("20", "500"));
        assert_eq!(controller.geometry().size, Size::new(MIN_WIDTH, 500.0));
        assert_eq!(controller.sink().readout(), Some("W: 150px, H: 500px"));
    }

    #[test]
    fn test_init_with_invalid_fields_falls_back_to_config() {
        for fields in [
            SizeFields::new("", ""),
            SizeFields::new("wide", "500"),
            SizeFields::new("800", "5000000000"),
        ] {
            let mut controller =
                FrameController::new(FrameConfig::default(), RecordingSink::new());
            controller.init_with_fields(&fields);

            assert_eq!(controller.geometry().size, Size::new(600.0, 400.0));
            assert_eq!(controller.sink().fields(), &SizeFields::new("600", "400"));
            assert_eq!(controller.sink().sync_count(), 1);
        }
    }

    #[test]
    fn test_initial_size_clamped() {
        let config = FrameConfig {
            initial_size: Size::new(10.0, 10.0),
            ..FrameConfig::default()
        };
        let controller = FrameController::new(config, RecordingSink::new());
        assert_eq!(controller.geometry().size, Size::new(MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_resize_scenario() {
        let mut controller = controller();

        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(100.0, 100.0))
            .unwrap();
        assert_eq!(controller.state(), FrameState::Resizing);

        assert!(controller.pointer_move(&mouse(150.0, 130.0)));
        assert_eq!(controller.geometry().size, Size::new(650.0, 430.0));
        assert_eq!(controller.sink().readout(), Some("W: 650px, H: 430px"));
        assert_eq!(controller.sink().fields().width, "650");
        assert_eq!(controller.sink().fields().height, "430");
    }

    #[test]
    fn test_resize_clamps_large_negative_delta() {
        let mut controller = controller();

        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(100.0, 100.0))
            .unwrap();
        controller.pointer_move(&mouse(-500.0, -500.0));

        assert_eq!(controller.geometry().size, Size::new(MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(controller.sink().readout(), Some("W: 150px, H: 100px"));
    }

    #[test]
    fn test_resize_never_below_minimum() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
            .unwrap();

        let path = [
            (-100.0, 50.0),
            (-800.0, -20.0),
            (40.0, -900.0),
            (-451.0, -301.0),
            (-449.0, -299.0),
            (1000.0, 1000.0),
            (-10_000.0, -10_000.0),
        ];
        for (x, y) in path {
            controller.pointer_move(&mouse(x, y));
            let size = controller.geometry().size;
            assert!(size.width >= MIN_WIDTH, "width {} at ({}, {})", size.width, x, y);
            assert!(size.height >= MIN_HEIGHT, "height {} at ({}, {})", size.height, x, y);
        }
    }

    #[test]
    fn test_resize_is_relative_to_gesture_origin() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
            .unwrap();
        controller.pointer_move(&mouse(-1000.0, -1000.0));
        controller.pointer_move(&mouse(10.0, 20.0));

        // Clamping mid-gesture does not shift the baseline.
        assert_eq!(controller.geometry().size, Size::new(610.0, 420.0));
    }

    #[test]
    fn test_drag_follows_cumulative_delta() {
        let mut controller = controller();
        controller.set_position(Point::new(40.0, 60.0));

        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(200.0, 200.0))
            .unwrap();
        assert_eq!(controller.state(), FrameState::Dragging);

        controller.pointer_move(&mouse(210.0, 195.0));
        assert_eq!(controller.geometry().position, Point::new(50.0, 55.0));

        controller.pointer_move(&mouse(-300.0, -400.0));
        assert_eq!(controller.geometry().position, Point::new(-460.0, -540.0));
        assert_eq!(controller.sink().position(), Some(Point::new(-460.0, -540.0)));
    }

    #[test]
    fn test_drag_does_not_touch_size_or_sync() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();
        controller.pointer_move(&mouse(30.0, 30.0));
        controller.pointer_up();

        assert_eq!(controller.geometry().size, Size::new(600.0, 400.0));
        assert_eq!(controller.sink().sync_count(), 0);
    }

    #[test]
    fn test_resize_end_syncs_exactly_once() {
        for moves in [0usize, 1, 5, 20] {
            let mut controller = controller();
            controller
                .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
                .unwrap();
            for i in 0..moves {
                controller.pointer_move(&mouse(i as f64, i as f64));
            }
            let before = controller.sink().sync_count();
            assert_eq!(before, moves);

            assert_eq!(controller.pointer_up(), Some(GestureKind::Resize));
            assert_eq!(controller.sink().sync_count(), before + 1);
        }
    }

    #[test]
    fn test_up_without_session_is_noop() {
        let mut controller = controller();
        assert_eq!(controller.pointer_up(), None);
        assert!(!controller.pointer_move(&mouse(10.0, 10.0)));
        assert!(controller.sink().calls().is_empty());
    }

    #[test]
    fn test_state_markers_toggle() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();
        assert_eq!(controller.sink().state(), FrameState::Dragging);
        controller.pointer_up();
        assert_eq!(controller.sink().state(), FrameState::Idle);
        assert_eq!(controller.active_gesture(), None);
    }

    #[test]
    fn test_capture_released_on_every_exit_path() {
        let mut controller = controller();

        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();
        controller.pointer_up();
        assert_eq!(controller.sink().captures_released(), 1);

        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
            .unwrap();
        controller.cancel();
        assert_eq!(controller.sink().captures_released(), 2);

        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();
        let later = Instant::now() + controller.config().gesture_timeout();
        assert_eq!(controller.expire_stale(later), Some(GestureKind::Drag));
        assert_eq!(controller.sink().captures_released(), 3);

        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();
        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
            .unwrap();
        assert_eq!(controller.sink().captures_released(), 4);
        assert_eq!(controller.sink().captures_acquired(), 5);

        drop(controller);
    }

    #[test]
    fn test_new_press_supersedes_open_session() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
            .unwrap();
        controller.pointer_move(&mouse(20.0, 20.0));

        let kind = controller
            .pointer_down(FrameHandle::DragHandle, &mouse(5.0, 5.0))
            .unwrap();
        assert_eq!(kind, GestureKind::Drag);
        assert_eq!(controller.active_gesture(), Some(GestureKind::Drag));
        // The superseded resize still got its final sync.
        assert_eq!(controller.sink().sync_count(), 2);
        assert_eq!(controller.sink().readout(), Some("W: 620px, H: 420px"));
    }

    #[test]
    fn test_expire_stale_keeps_recent_session() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();

        assert_eq!(controller.expire_stale(Instant::now()), None);
        assert_eq!(controller.active_gesture(), Some(GestureKind::Drag));

        let later = Instant::now() + Duration::from_millis(controller.config().gesture_timeout_ms);
        assert!(controller.expire_stale(later).is_some());
        assert_eq!(controller.active_gesture(), None);
    }

    #[test]
    fn test_moves_refresh_inactivity_timer() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::DragHandle, &mouse(0.0, 0.0))
            .unwrap();
        let pressed = Instant::now();
        let timeout = controller.config().gesture_timeout();

        std::thread::sleep(Duration::from_millis(20));
        controller.pointer_move(&mouse(5.0, 5.0));

        // Stale relative to the press, but not to the last move.
        assert_eq!(controller.expire_stale(pressed + timeout), None);
        assert_eq!(controller.active_gesture(), Some(GestureKind::Drag));

        let idle = Instant::now() + timeout;
        assert_eq!(controller.expire_stale(idle), Some(GestureKind::Drag));
    }

    #[test]
    fn test_oversized_fields_leave_geometry_and_readout_in_step() {
        let mut controller = controller();
        let err = controller.submit_size_fields("5000000000", "300").unwrap_err();

        assert!(matches!(err, SizeInputError::TooLarge { .. }));
        assert_eq!(controller.geometry().size, Size::new(600.0, 400.0));
        assert!(controller.sink().calls().is_empty());

        controller.submit_size_fields("100000", "300").unwrap();
        let dims = Dimensions::from_size(controller.geometry().size);
        assert_eq!(controller.sink().fields(), &dims.fields());
        assert_eq!(controller.sink().fields().width, "100000");
    }

    #[test]
    fn test_expire_stale_without_session() {
        let mut controller = controller();
        assert_eq!(controller.expire_stale(Instant::now()), None);
    }

    #[test]
    fn test_timed_out_resize_gets_final_sync() {
        let mut controller = controller();
        controller
            .pointer_down(FrameHandle::ResizeGrip, &mouse(0.0, 0.0))
            .unwrap();
        let later = Instant::now() + controller.config().gesture_timeout();
        controller.expire_stale(later);
        assert_eq!(controller.sink().sync_count(), 1);
        assert_eq!(controller.sink().state(), FrameState::Idle);
    }

    #[test]
    fn test_touch_down_without_points_rejected() {
        let mut controller = controller();
        let result = controller.pointer_down(
            FrameHandle::DragHandle,
            &PointerSource::touch(std::iter::empty()),
        );
        assert_eq!(result, Err(GestureError::MissingCoordinates));
        assert_eq!(controller.active_gesture(), None);
        assert_eq!(controller.sink().captures_acquired(), 0);
    }

    #[test]
    fn test_touch_drag_uses_first_touch() {
        let mut controller = controller();
        controller
            .pointer_down(
                FrameHandle::DragHandle,
                &PointerSource::touch([Point::new(10.0, 10.0), Point::new(400.0, 400.0)]),
            )
            .unwrap();
        controller.pointer_move(&PointerSource::touch([
            Point::new(25.0, 40.0),
            Point::new(0.0, 0.0),
        ]));
        assert_eq!(controller.geometry().position, Point::new(15.0, 30.0));

        // A move with no touches is part of the gesture but changes nothing.
        assert!(controller.pointer_move(&PointerSource::touch(std::iter::empty())));
        assert_eq!(controller.geometry().position, Point::new(15.0, 30.0));
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut controller = controller();
        let first = controller.sync_dimensions();
        let readout = controller.sink().readout().map(str::to_string);
        let fields = controller.sink().fields().clone();

        let second = controller.sync_dimensions();
        assert_eq!(first, second);
        assert_eq!(controller.sink().readout().map(str::to_string), readout);
        assert_eq!(controller.sink().fields(), &fields);
    }

    #[test]
    fn test_submit_size_fields_round_trip() {
        let mut controller = controller();
        let size = controller.submit_size_fields("500", "300").unwrap();
        assert_eq!(size, Size::new(500.0, 300.0));
        assert_eq!(controller.geometry().size, Size::new(500.0, 300.0));
        assert_eq!(controller.sink().readout(), Some("W: 500px, H: 300px"));
    }

    #[test]
    fn test_submit_size_fields_clamps_and_reflects_clamped_values() {
        let mut controller = controller();
        controller.submit_size_fields("10", "10").unwrap();
        assert_eq!(controller.geometry().size, Size::new(MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(controller.sink().fields().width, "150");
        assert_eq!(controller.sink().fields().height, "100");
    }

    #[test]
    fn test_submit_invalid_fields_leaves_geometry_untouched() {
        let mut controller = controller();
        let err = controller.submit_size_fields("abc", "300").unwrap_err();
        assert!(matches!(err, SizeInputError::NotANumber { .. }));
        assert_eq!(controller.geometry().size, Size::new(600.0, 400.0));
        assert!(controller.sink().calls().is_empty());
    }

    #[test]
    fn test_handle_pointer_event_dispatch() {
        let mut controller = controller();

        let consumed = controller
            .handle_pointer_event(PointerEvent::Down {
                target: FrameHandle::ResizeGrip,
                source: mouse(100.0, 100.0),
            })
            .unwrap();
        assert!(consumed);

        controller
            .handle_pointer_event(PointerEvent::Move {
                source: mouse(150.0, 130.0),
            })
            .unwrap();
        assert!(controller.handle_pointer_event(PointerEvent::Up).unwrap());
        assert!(!controller.handle_pointer_event(PointerEvent::Up).unwrap());
        assert!(!controller.handle_pointer_event(PointerEvent::Cancel).unwrap());

        assert_eq!(controller.geometry().size, Size::new(650.0, 430.0));
        assert_eq!(
            controller.sink().calls().last(),
            Some(&SinkCall::Dimensions(Dimensions { width: 650, height: 430 }))
        );
    }
}
