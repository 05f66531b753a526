use ndarray::Array2;

use toolscope_core::crop::CropCenter;
use toolscope_core::focus::annulus_laplacian_variance;

fn center_of(plane: &Array2<f32>) -> CropCenter {
    CropCenter {
        x: plane.ncols() / 2,
        y: plane.nrows() / 2,
    }
}

/// Distance squared from the plane center.
fn d2(plane: &Array2<f32>, row: usize, col: usize) -> i64 {
    let c = center_of(plane);
    let dy = row as i64 - c.y as i64;
    let dx = col as i64 - c.x as i64;
    dx * dx + dy * dy
}

#[test]
fn test_flat_ring_scores_zero() {
    let plane = Array2::<f32>::from_elem((64, 64), 0.5);
    let score = annulus_laplacian_variance(&plane, center_of(&plane), 5, 10);
    assert!(score.abs() < 1e-10, "Flat ring should score ~0, got {score}");
}

#[test]
fn test_detail_outside_ring_is_ignored() {
    // Checkerboard only well outside r2; the ring itself stays flat.
    let mut plane = Array2::<f32>::from_elem((64, 64), 0.5);
    for row in 0..64 {
        for col in 0..64 {
            if d2(&plane, row, col) > 14 * 14 && (row + col) % 2 == 0 {
                plane[[row, col]] = 1.0;
            }
        }
    }

    let score = annulus_laplacian_variance(&plane, center_of(&plane), 5, 10);
    assert!(
        score.abs() < 1e-10,
        "Detail beyond r2 should not register, got {score}"
    );
}

#[test]
fn test_detail_inside_nozzle_is_ignored() {
    // Checkerboard only in the inner disk the nozzle occupies.
    let mut plane = Array2::<f32>::from_elem((64, 64), 0.5);
    for row in 0..64 {
        for col in 0..64 {
            if d2(&plane, row, col) < 4 * 4 && (row + col) % 2 == 0 {
                plane[[row, col]] = 1.0;
            }
        }
    }

    let score = annulus_laplacian_variance(&plane, center_of(&plane), 8, 16);
    assert!(
        score.abs() < 1e-10,
        "Detail inside r1 should not register, got {score}"
    );
}

#[test]
fn test_detail_in_ring_registers() {
    let mut plane = Array2::<f32>::from_elem((64, 64), 0.5);
    for row in 0..64 {
        for col in 0..64 {
            let d = d2(&plane, row, col);
            if (6 * 6..=12 * 12).contains(&d) && (row + col) % 2 == 0 {
                plane[[row, col]] = 1.0;
            }
        }
    }

    let score = annulus_laplacian_variance(&plane, center_of(&plane), 6, 12);
    assert!(score > 0.1, "Checkerboard ring should score high, got {score}");
}

#[test]
fn test_sharp_ring_beats_blurry_ring() {
    let mut sharp = Array2::<f32>::zeros((64, 64));
    let mut blurry = Array2::<f32>::zeros((64, 64));
    for row in 0..64 {
        for col in 0..64 {
            sharp[[row, col]] = if (row + col) % 2 == 0 { 1.0 } else { 0.0 };
            blurry[[row, col]] = (row as f32 + col as f32) / 128.0;
        }
    }

    let sharp_score = annulus_laplacian_variance(&sharp, center_of(&sharp), 5, 20);
    let blurry_score = annulus_laplacian_variance(&blurry, center_of(&blurry), 5, 20);

    assert!(
        sharp_score > blurry_score,
        "Sharp ring ({sharp_score}) should beat blurry ring ({blurry_score})"
    );
}

#[test]
fn test_degenerate_radii_score_zero() {
    let plane = Array2::<f32>::from_elem((32, 32), 0.5);
    let center = center_of(&plane);

    assert_eq!(annulus_laplacian_variance(&plane, center, 10, 10), 0.0);
    assert_eq!(annulus_laplacian_variance(&plane, center, 20, 10), 0.0);
}

#[test]
fn test_tiny_plane_scores_zero() {
    let plane = Array2::<f32>::from_elem((2, 2), 0.5);
    let center = CropCenter { x: 1, y: 1 };
    assert_eq!(annulus_laplacian_variance(&plane, center, 1, 2), 0.0);
}

#[test]
fn test_ring_outside_plane_scores_zero() {
    // Center sits in a corner and the ring lies past the borders.
    let plane = Array2::<f32>::from_elem((32, 32), 0.5);
    let center = CropCenter { x: 0, y: 0 };
    let score = annulus_laplacian_variance(&plane, center, 100, 200);
    assert_eq!(score, 0.0);
}
