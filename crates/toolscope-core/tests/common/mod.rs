use ndarray::Array2;

use toolscope_core::camera::SnapshotSource;
use toolscope_core::error::Result;
use toolscope_core::snapshot::Snapshot;

/// Build a snapshot with every channel set to the same constant.
pub fn flat_snapshot(width: usize, height: usize, value: f32) -> Snapshot {
    Snapshot::new(
        Array2::from_elem((height, width), value),
        Array2::from_elem((height, width), value),
        Array2::from_elem((height, width), value),
    )
}

/// Build a gray snapshot whose pixels alternate 0/1 in a checkerboard.
/// The sharpest image a camera could ever produce.
pub fn checker_snapshot(width: usize, height: usize) -> Snapshot {
    let mut plane = Array2::<f32>::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            plane[[row, col]] = if (row + col) % 2 == 0 { 1.0 } else { 0.0 };
        }
    }
    Snapshot::new(plane.clone(), plane.clone(), plane)
}

/// Encode a small valid PNG for feeding decoders and fake cameras.
pub fn tiny_png_bytes() -> Vec<u8> {
    flat_snapshot(4, 4, 0.5).encode_png().expect("encode png")
}

/// A camera that always hands back a clone of the same frame.
pub struct StaticCamera {
    pub frame: Snapshot,
}

impl SnapshotSource for StaticCamera {
    fn label(&self) -> String {
        "static test camera".to_string()
    }

    fn fetch(&self) -> Result<Snapshot> {
        Ok(self.frame.clone())
    }
}

/// A camera that always fails, for exercising error paths.
pub struct BrokenCamera;

impl SnapshotSource for BrokenCamera {
    fn label(&self) -> String {
        "broken test camera".to_string()
    }

    fn fetch(&self) -> Result<Snapshot> {
        Err(std::io::Error::other("camera unplugged").into())
    }
}
