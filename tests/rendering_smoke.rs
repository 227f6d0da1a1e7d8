//! Pixel-level checks of the grid-state-to-surface mapping.

use canvasgrid::{Color, GridCanvas, Pixmap, Surface};

#[test]
fn single_cell_fills_exactly_one_square() {
    let mut c = GridCanvas::new(Pixmap::new(0, 0), 10, 3, 3).expect("valid canvas");
    let red: Color = "#f00".parse().unwrap();
    c.set_square_color([1, 1], Some(red)).unwrap().draw();

    let surface = c.surface();
    assert_eq!(surface.width(), 30);
    assert_eq!(surface.height(), 30);
    for px in 0..30 {
        for py in 0..30 {
            let expected = if (10..20).contains(&px) && (10..20).contains(&py) {
                [255, 0, 0, 255]
            } else {
                [0, 0, 0, 0]
            };
            assert_eq!(surface.pixel(px, py), Some(expected), "pixel ({}, {})", px, py);
        }
    }
}

#[test]
fn draw_with_no_cells_set_touches_no_pixels() {
    let mut c = GridCanvas::new(Pixmap::new(0, 0), 10, 4, 4).expect("valid canvas");
    c.draw();
    assert!(c.surface().data().iter().all(|&b| b == 0));
}

#[test]
fn redraw_after_clear_leaves_no_stale_pixels() {
    let mut c = GridCanvas::new(Pixmap::new(0, 0), 10, 3, 3).expect("valid canvas");
    let red: Color = "#f00".parse().unwrap();
    let blue: Color = "#00f".parse().unwrap();

    c.set_square_color([0, 0], Some(red)).unwrap().draw();
    assert_eq!(c.surface().pixel(0, 0), Some([255, 0, 0, 255]));

    c.clear().set_square_color([2, 2], Some(blue)).unwrap().draw();
    assert_eq!(c.surface().pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(c.surface().pixel(25, 25), Some([0, 0, 255, 255]));
}

#[test]
fn draw_without_clear_keeps_previously_painted_squares() {
    let mut c = GridCanvas::new(Pixmap::new(0, 0), 10, 3, 3).expect("valid canvas");
    let red: Color = "#f00".parse().unwrap();
    let blue: Color = "#00f".parse().unwrap();

    c.set_square_color([0, 0], Some(red)).unwrap().draw();
    c.set_square_color([1, 0], Some(blue)).unwrap().draw();

    // The first square stays painted across the second draw.
    assert_eq!(c.surface().pixel(5, 5), Some([255, 0, 0, 255]));
    assert_eq!(c.surface().pixel(15, 5), Some([0, 0, 255, 255]));
}

#[test]
fn into_surface_returns_the_rendered_pixmap() {
    let mut c = GridCanvas::new(Pixmap::new(0, 0), 2, 2, 2).expect("valid canvas");
    c.set_square_color([1, 1], Some("#fff".parse().unwrap())).unwrap().draw();
    let pixmap = c.into_surface();
    assert_eq!(pixmap.pixel(3, 3), Some([255, 255, 255, 255]));
}
