use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::viewport::PlaneWindow;

/// Multiplicative zoom applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.1;

/// Pan distance per step, in units of the visible range at zoom 1.
pub const PAN_STEP: f64 = 0.2;

/// Axis-aligned base region of the complex plane, before zoom and pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneBounds {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl PlaneBounds {
    pub const fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Self {
        Self {
            re_min,
            re_max,
            im_min,
            im_max,
        }
    }

    pub fn re_range(&self) -> f64 {
        self.re_max - self.re_min
    }

    pub fn im_range(&self) -> f64 {
        self.im_max - self.im_min
    }
}

impl Default for PlaneBounds {
    /// `[-2, 1] × [-1, 1]`: the whole set with a little room on the right.
    fn default() -> Self {
        Self::new(-2.0, 1.0, -1.0, 1.0)
    }
}

/// Direction of a single pan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A navigation command issued by whatever drives the view (keyboard, script, config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    ZoomIn,
    ZoomOut,
    Pan(Direction),
    Reset,
}

/// The logical view: base plane bounds plus the user's zoom and pan.
///
/// This is a plain value. Navigation produces a new state in place on the
/// caller's copy; the computation only ever reads it through [`ViewState::window`].
/// `pan` is measured in multiples of the zoomed range, so `pan = (0.5, 0.0)`
/// shifts the centre right by half of the currently visible width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub bounds: PlaneBounds,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub pan: (f64, f64),
}

fn default_zoom() -> f64 {
    1.0
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PlaneBounds::default())
    }
}

impl ViewState {
    /// Unzoomed, unpanned view of `bounds`.
    pub fn new(bounds: PlaneBounds) -> Self {
        Self {
            bounds,
            zoom: default_zoom(),
            pan: (0.0, 0.0),
        }
    }

    /// Check the view invariants: finite ordered bounds, finite positive zoom, finite pan.
    pub fn validate(&self) -> crate::Result<()> {
        let b = &self.bounds;
        let all_finite = [b.re_min, b.re_max, b.im_min, b.im_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(CoreError::degenerate(format!(
                "plane bounds must be finite, got {b:?}"
            )));
        }
        if b.re_max <= b.re_min {
            return Err(CoreError::degenerate(format!(
                "real extent must be positive, got [{}, {}]",
                b.re_min, b.re_max
            )));
        }
        if b.im_max <= b.im_min {
            return Err(CoreError::degenerate(format!(
                "imaginary extent must be positive, got [{}, {}]",
                b.im_min, b.im_max
            )));
        }
        if self.zoom <= 0.0 || !self.zoom.is_finite() {
            return Err(CoreError::degenerate(format!(
                "zoom must be positive and finite, got {}",
                self.zoom
            )));
        }
        if !self.pan.0.is_finite() || !self.pan.1.is_finite() {
            return Err(CoreError::degenerate(format!(
                "pan must be finite, got {:?}",
                self.pan
            )));
        }
        Ok(())
    }

    /// Derive the visible plane window.
    ///
    /// `range = base_range / zoom`, `center = base_center + pan * range`,
    /// window = `center ± range / 2`. Always computed fresh from the state.
    pub fn window(&self) -> crate::Result<PlaneWindow> {
        self.validate()?;
        let b = &self.bounds;

        let re_range = b.re_range() / self.zoom;
        let im_range = b.im_range() / self.zoom;

        let re_center = b.re_min + b.re_range() / 2.0 + self.pan.0 * re_range;
        let im_center = b.im_min + b.im_range() / 2.0 + self.pan.1 * im_range;

        PlaneWindow::new(
            re_center - re_range / 2.0,
            re_center + re_range / 2.0,
            im_center - im_range / 2.0,
            im_center + im_range / 2.0,
        )
    }

    pub fn zoom_in(&mut self) {
        self.zoom *= ZOOM_STEP;
        debug!(zoom = self.zoom, "Zoom in");
    }

    pub fn zoom_out(&mut self) {
        self.zoom /= ZOOM_STEP;
        debug!(zoom = self.zoom, "Zoom out");
    }

    /// Move one step; the step shrinks as the zoom grows.
    pub fn pan(&mut self, direction: Direction) {
        let step = PAN_STEP / self.zoom;
        match direction {
            Direction::Up => self.pan.1 -= step,
            Direction::Down => self.pan.1 += step,
            Direction::Left => self.pan.0 -= step,
            Direction::Right => self.pan.0 += step,
        }
        debug!(pan_re = self.pan.0, pan_im = self.pan.1, ?direction, "Pan");
    }

    /// Drop zoom and pan, keeping the base bounds.
    pub fn reset(&mut self) {
        *self = Self::new(self.bounds);
        debug!("View reset");
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::ZoomIn => self.zoom_in(),
            NavCommand::ZoomOut => self.zoom_out(),
            NavCommand::Pan(direction) => self.pan(direction),
            NavCommand::Reset => self.reset(),
        }
    }
}
