use crate::complex::Complex;
use crate::error::CoreError;
use crate::fractal::Fractal;

/// Squared escape radius. The bailout is `|z| > 2`, fixed.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Escape time of `c` under `z_{n+1} = z_n² + c`, `z₀ = 0`.
///
/// The magnitude is checked *before* each step and the counter incremented
/// after it, so the result is the number of steps taken while `|z|² ≤ 4`
/// held, capped at `max_iter`. With that convention `0` only comes back
/// when `max_iter == 0`, since `z₀ = 0` always passes the first check.
/// For example `c = 3` returns 1 and `c = 2`, which sits on the escape
/// circle after one step, returns 2.
#[inline]
pub fn escape_time(c: Complex, max_iter: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut n = 0;
    while z.norm_sq() <= ESCAPE_RADIUS_SQ && n < max_iter {
        z = z * z + c;
        n += 1;
    }
    n
}

/// The Mandelbrot set with a fixed iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mandelbrot {
    max_iterations: u32,
}

impl Mandelbrot {
    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Fractal for Mandelbrot {
    #[inline]
    fn iterate(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, 100), 100);
        assert_eq!(escape_time(Complex::ZERO, 1), 1);
    }

    #[test]
    fn two_escapes_after_second_step() {
        // z₁ = 2 (|z|² = 4, still inside), z₂ = 6 → stop with n = 2.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 100), 2);
    }

    #[test]
    fn outside_radius_escapes_after_first_step() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 100), 1);
        assert_eq!(escape_time(Complex::new(0.0, -2.5), 100), 1);
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z = 0 → 1 → 2 → 5; |5|² > 4 after the third step.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 3);
    }

    #[test]
    fn period_two_orbit_is_interior() {
        // c = -1: 0 → -1 → 0 → -1 …
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn zero_cap_returns_zero() {
        assert_eq!(escape_time(Complex::new(0.3, 0.3), 0), 0);
    }

    #[test]
    fn result_is_bounded_by_cap() {
        for i in 0..50 {
            let c = Complex::new(-2.0 + i as f64 * 0.06, 0.1 * (i % 7) as f64);
            let n = escape_time(c, 64);
            assert!(n <= 64);
        }
    }

    #[test]
    fn mandelbrot_rejects_zero_cap() {
        assert_eq!(Mandelbrot::new(0), Err(CoreError::InvalidMaxIterations(0)));
    }

    #[test]
    fn fractal_trait_matches_free_function() {
        let mb = Mandelbrot::new(80).unwrap();
        let c = Complex::new(-0.75, 0.1);
        assert_eq!(mb.iterate(c), escape_time(c, 80));
        assert!(mb.is_interior(mb.iterate(Complex::ZERO)));
        assert!(!mb.is_interior(mb.iterate(Complex::new(3.0, 0.0))));
    }
}
