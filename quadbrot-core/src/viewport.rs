use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// The rectangle of the complex plane that is actually visible.
///
/// Derived from a [`ViewState`](crate::ViewState) on every request and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneWindow {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl PlaneWindow {
    /// Build a window, rejecting non-finite or zero/negative-area rectangles.
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> crate::Result<Self> {
        let all_finite = [re_min, re_max, im_min, im_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(CoreError::degenerate(format!(
                "window is not finite: [{re_min}, {re_max}] × [{im_min}, {im_max}]"
            )));
        }
        if re_max <= re_min || im_max <= im_min {
            return Err(CoreError::degenerate(format!(
                "window has no area: [{re_min}, {re_max}] × [{im_min}, {im_max}]"
            )));
        }
        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    /// Bottom-left corner, the origin of the pixel mapping.
    #[inline]
    pub fn min(&self) -> Complex {
        Complex::new(self.re_min, self.im_min)
    }

    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.re_min + self.re_max) / 2.0,
            (self.im_min + self.im_max) / 2.0,
        )
    }
}

/// Fixed pixel ↔ plane mapping for one computation.
///
/// Holds only the origin (`window.min`) and the per-axis scale in pixels per
/// plane unit. Every pixel's coordinate is computed directly from these two
/// values, never from a running increment, so any sub-block of the grid maps
/// its pixels to exactly the same points no matter how or in which order
/// the grid was split.
///
/// Pixel `(0, 0)` maps to `(re_min, im_min)`; `px` grows with the real part
/// and `py` with the imaginary part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// The window this mapping was fitted to.
    pub window: PlaneWindow,
    pub origin: Complex,
    /// Pixels per plane unit along the real axis.
    pub scale_x: f64,
    /// Pixels per plane unit along the imaginary axis.
    pub scale_y: f64,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Fit `width × height` pixels onto `window`.
    pub fn new(window: &PlaneWindow, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let scale_x = width as f64 / window.width();
        let scale_y = height as f64 / window.height();
        if !scale_x.is_finite() || !scale_y.is_finite() || scale_x <= 0.0 || scale_y <= 0.0 {
            return Err(CoreError::degenerate(format!(
                "pixel scale is not usable: {scale_x} × {scale_y} px per unit"
            )));
        }
        Ok(Self {
            window: *window,
            origin: window.min(),
            scale_x,
            scale_y,
            width,
            height,
        })
    }

    /// Map a pixel index to its point on the complex plane.
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32) -> Complex {
        Complex::new(
            self.origin.re + px as f64 / self.scale_x,
            self.origin.im + py as f64 / self.scale_y,
        )
    }

    /// Map a plane point back to the nearest pixel index.
    ///
    /// The result is signed and unclamped: points outside the window map to
    /// indices outside `0..width` / `0..height`.
    #[inline]
    pub fn complex_to_pixel(&self, c: Complex) -> (i64, i64) {
        (
            ((c.re - self.origin.re) * self.scale_x).round() as i64,
            ((c.im - self.origin.im) * self.scale_y).round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn standard_window() -> PlaneWindow {
        PlaneWindow::new(-2.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn scales_follow_window() {
        let vp = Viewport::new(&standard_window(), 400, 300).unwrap();
        assert!((vp.scale_x - 400.0 / 3.0).abs() < EPSILON);
        assert!((vp.scale_y - 150.0).abs() < EPSILON);
        assert_eq!(vp.origin, Complex::new(-2.0, -1.0));
        assert_eq!(vp.window, standard_window());
    }

    #[test]
    fn corners() {
        let vp = Viewport::new(&standard_window(), 300, 200).unwrap();
        assert_eq!(vp.pixel_to_complex(0, 0), Complex::new(-2.0, -1.0));

        // The far edge itself is one pixel past the last index.
        let last = vp.pixel_to_complex(299, 199);
        assert!((last.re - (1.0 - 0.01)).abs() < EPSILON);
        assert!((last.im - (1.0 - 0.01)).abs() < EPSILON);
    }

    #[test]
    fn round_trip_every_pixel() {
        let vp = Viewport::new(&standard_window(), 400, 300).unwrap();
        for py in 0..300 {
            for px in 0..400 {
                let c = vp.pixel_to_complex(px, py);
                assert_eq!(
                    vp.complex_to_pixel(c),
                    (px as i64, py as i64),
                    "pixel ({px}, {py}) did not round-trip"
                );
            }
        }
    }

    #[test]
    fn off_window_points_map_outside() {
        let vp = Viewport::new(&standard_window(), 300, 200).unwrap();
        let (px, py) = vp.complex_to_pixel(Complex::new(-3.0, 2.0));
        assert_eq!((px, py), (-100, 300));
    }

    #[test]
    fn zero_dimensions_rejected() {
        let w = standard_window();
        assert_eq!(
            Viewport::new(&w, 0, 10),
            Err(CoreError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(Viewport::new(&w, 10, 0).is_err());
    }

    #[test]
    fn zero_area_window_rejected() {
        assert!(PlaneWindow::new(0.0, 0.0, -1.0, 1.0).is_err());
        assert!(PlaneWindow::new(-1.0, 1.0, 2.0, 1.0).is_err());
        assert!(PlaneWindow::new(f64::NEG_INFINITY, 1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn subnormal_window_rejected_by_scale() {
        let w = PlaneWindow::new(0.0, 1e-320, 0.0, 1e-320).unwrap();
        assert!(matches!(
            Viewport::new(&w, 1000, 1000),
            Err(CoreError::DegenerateViewport { .. })
        ));
    }
}
