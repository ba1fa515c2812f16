pub mod complex;
pub mod error;
pub mod fractal;
pub mod mandelbrot;
pub mod view;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use fractal::Fractal;
pub use mandelbrot::{escape_time, Mandelbrot, DEFAULT_MAX_ITERATIONS, ESCAPE_RADIUS_SQ};
/// Single-point entry: the escape count for one plane point.
pub use mandelbrot::escape_time as evaluate_point;
pub use view::{Direction, NavCommand, PlaneBounds, ViewState, PAN_STEP, ZOOM_STEP};
pub use viewport::{PlaneWindow, Viewport};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
