use quadbrot_core::{Complex, Fractal, Mandelbrot, NavCommand, ViewState, Viewport};

/// Evaluate every pixel of a view in a single pass and collect row-major counts.
fn evaluate_grid<F: Fractal>(fractal: &F, view: &ViewState, width: u32, height: u32) -> Vec<u32> {
    let window = view.window().unwrap();
    let viewport = Viewport::new(&window, width, height).unwrap();
    let mut counts = Vec::with_capacity((width * height) as usize);
    for py in 0..height {
        for px in 0..width {
            counts.push(fractal.iterate(viewport.pixel_to_complex(px, py)));
        }
    }
    counts
}

#[test]
fn default_view_has_inside_and_outside_points() {
    let mandelbrot = Mandelbrot::new(100).unwrap();
    let counts = evaluate_grid(&mandelbrot, &ViewState::default(), 120, 80);

    assert_eq!(counts.len(), 120 * 80);
    let interior = counts.iter().filter(|&&n| mandelbrot.is_interior(n)).count();
    assert!(interior > 0, "should have some interior points");
    assert!(interior < counts.len(), "should have some escaped points");
    assert!(counts.iter().all(|&n| n <= 100));
}

#[test]
fn evaluation_is_deterministic() {
    let mandelbrot = Mandelbrot::default();
    let view = ViewState::default();

    let run1 = evaluate_grid(&mandelbrot, &view, 64, 48);
    let run2 = evaluate_grid(&mandelbrot, &view, 64, 48);

    assert_eq!(run1, run2, "identical inputs must give identical counts");
}

#[test]
fn zooming_changes_the_picture_but_not_the_origin_point() {
    let mandelbrot = Mandelbrot::new(200).unwrap();
    let mut view = ViewState::default();
    let before = evaluate_grid(&mandelbrot, &view, 60, 40);
    for _ in 0..8 {
        view.apply(NavCommand::ZoomIn);
    }
    let after = evaluate_grid(&mandelbrot, &view, 60, 40);
    assert_ne!(before, after);

    // Centre (-0.5, 0) stays inside the set at every zoom level.
    let window = view.window().unwrap();
    let viewport = Viewport::new(&window, 60, 40).unwrap();
    let (cx, cy) = viewport.complex_to_pixel(window.center());
    let idx = cy as usize * 60 + cx as usize;
    assert_eq!(after[idx], 200);
}

#[test]
fn evaluate_point_agrees_with_the_fractal() {
    let mandelbrot = Mandelbrot::new(50).unwrap();
    assert_eq!(quadbrot_core::evaluate_point(Complex::ZERO, 50), 50);
    for c in [Complex::new(3.0, 0.0), Complex::new(-0.75, 0.1), Complex::new(0.3, 0.5)] {
        assert_eq!(quadbrot_core::evaluate_point(c, 50), mandelbrot.iterate(c));
    }
}
