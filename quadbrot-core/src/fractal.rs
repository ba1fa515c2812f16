use crate::complex::Complex;

/// An escape-time fractal: maps a plane point to an iteration count.
///
/// Designed for **static dispatch**. The grid computer is generic over
/// `F: Fractal` so the per-pixel loop inlines the iteration.
pub trait Fractal {
    /// Iteration count for `point`, in `0..=max_iterations()`.
    ///
    /// Returning exactly `max_iterations()` means the orbit never escaped
    /// and the point is treated as inside the set.
    fn iterate(&self, point: Complex) -> u32;

    /// The iteration cap, doubling as the "inside" sentinel.
    fn max_iterations(&self) -> u32;

    #[inline]
    fn is_interior(&self, iterations: u32) -> bool {
        iterations >= self.max_iterations()
    }
}
