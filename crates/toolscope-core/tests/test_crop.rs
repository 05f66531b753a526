use ndarray::Array2;

use toolscope_core::crop::{center_crop, CropCenter};
use toolscope_core::error::ToolscopeError;
use toolscope_core::snapshot::Snapshot;

#[allow(dead_code)]
mod common;

/// Snapshot whose red plane encodes each pixel's source coordinates,
/// so offsets are visible after cropping.
fn coordinate_snapshot(width: usize, height: usize) -> Snapshot {
    let mut plane = Array2::<f32>::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            plane[[row, col]] = (row * 1000 + col) as f32;
        }
    }
    Snapshot::new(plane.clone(), plane.clone(), plane)
}

#[test]
fn test_crop_is_centered_even_sizes() {
    let snap = coordinate_snapshot(16, 12);
    let (cropped, center) = center_crop(&snap, 8, 6).expect("crop");

    assert_eq!(cropped.width(), 8);
    assert_eq!(cropped.height(), 6);
    // Top-left of the viewport sits at (4, 3) in the source.
    assert_eq!(cropped.red[[0, 0]], (3 * 1000 + 4) as f32);
    assert_eq!(cropped.red[[5, 7]], (8 * 1000 + 11) as f32);
    assert_eq!(center, CropCenter { x: 4, y: 3 });
}

#[test]
fn test_crop_is_centered_odd_sizes() {
    let snap = coordinate_snapshot(9, 9);
    let (cropped, center) = center_crop(&snap, 5, 3).expect("crop");

    assert_eq!(cropped.width(), 5);
    assert_eq!(cropped.height(), 3);
    assert_eq!(cropped.red[[0, 0]], (3 * 1000 + 2) as f32);
    assert_eq!(center, CropCenter { x: 2, y: 1 });
}

#[test]
fn test_oversized_request_clamps_to_frame() {
    let snap = coordinate_snapshot(8, 6);
    let (cropped, center) = center_crop(&snap, 100, 100).expect("crop");

    assert_eq!(cropped.width(), 8);
    assert_eq!(cropped.height(), 6);
    assert_eq!(cropped.red[[0, 0]], 0.0);
    assert_eq!(center, CropCenter { x: 4, y: 3 });
}

#[test]
fn test_clamp_is_per_axis() {
    let snap = coordinate_snapshot(8, 12);
    let (cropped, center) = center_crop(&snap, 100, 4).expect("crop");

    assert_eq!(cropped.width(), 8);
    assert_eq!(cropped.height(), 4);
    // Width spans the full frame, height is still centered.
    assert_eq!(cropped.red[[0, 0]], (4 * 1000) as f32);
    assert_eq!(center, CropCenter { x: 4, y: 2 });
}

#[test]
fn test_zero_size_rejected() {
    let snap = common::flat_snapshot(8, 8, 0.5);
    let result = center_crop(&snap, 0, 50);

    assert!(
        matches!(
            result,
            Err(ToolscopeError::InvalidCrop {
                width: 0,
                height: 50
            })
        ),
        "Zero-width crop should be rejected"
    );
}

#[test]
fn test_all_planes_share_the_viewport() {
    let snap = coordinate_snapshot(10, 10);
    let (cropped, _) = center_crop(&snap, 4, 4).expect("crop");

    assert_eq!(cropped.red[[1, 2]], cropped.green[[1, 2]]);
    assert_eq!(cropped.red[[1, 2]], cropped.blue[[1, 2]]);
}
