use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use canvasgrid::{Color, GridCanvas, Pixmap};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// Render the reference checkerboard: a 4x4 grid of 8px squares with every
/// even-diagonal cell painted red.
fn render_checkerboard() -> Pixmap {
    let mut canvas = GridCanvas::new(Pixmap::new(0, 0), 8, 4, 4).expect("valid canvas");
    let red: Color = "#f00".parse().expect("valid color");
    for x in 0..4 {
        for y in 0..4 {
            if (x + y) % 2 == 0 {
                canvas.set_square_color([x, y], Some(red)).expect("in bounds");
            }
        }
    }
    canvas.draw();
    canvas.into_surface()
}

#[test]
fn golden_raster_matches_fixture() {
    let pixmap = render_checkerboard();
    let digest = hex::encode(Sha256::digest(pixmap.data()));

    let expected_path = golden_path("checkerboard.img");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
