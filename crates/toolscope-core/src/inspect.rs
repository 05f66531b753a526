use crate::camera::SnapshotSource;
use crate::crop::{center_crop, CropCenter};
use crate::error::Result;
use crate::focus::annulus_laplacian_variance;
use crate::overlay::{draw_circle, draw_focus_readout};
use crate::snapshot::Snapshot;

/// Result of one alignment inspection pass.
pub struct Inspection {
    /// Center-cropped frame with the guide rings and focus readout drawn in.
    pub snapshot: Snapshot,
    /// Laplacian variance inside the r1..r2 ring.
    pub variance: f64,
    /// Frame center the rings are drawn around.
    pub center: CropCenter,
}

/// Produce an annotated alignment view from one camera grab.
///
/// Grabs a frame, crops the `width` x `height` viewport out of its
/// center, scores focus inside the r1..r2 ring, then draws both guide
/// rings and the `var:` readout onto the crop.
pub fn inspect(
    source: &dyn SnapshotSource,
    width: u32,
    height: u32,
    r1: u32,
    r2: u32,
) -> Result<Inspection> {
    tracing::debug!(width, height, r1, r2, "Preparing alignment view");

    let frame = source.fetch()?;
    let (mut snapshot, center) = center_crop(&frame, width, height)?;

    let variance = annulus_laplacian_variance(&snapshot.luminance(), center, r1, r2);
    tracing::debug!(variance, "Focus scored");

    draw_circle(&mut snapshot, center, r1);
    draw_circle(&mut snapshot, center, r2);
    draw_focus_readout(&mut snapshot, variance);

    Ok(Inspection {
        snapshot,
        variance,
        center,
    })
}

/// Focus-score a single grab without cropping or annotating it.
///
/// Used by the focus sampler, which wants repeated raw scores rather
/// than an annotated image.
pub fn score_frame(frame: &Snapshot, r1: u32, r2: u32) -> f64 {
    let center = CropCenter {
        x: frame.width() / 2,
        y: frame.height() / 2,
    };
    annulus_laplacian_variance(&frame.luminance(), center, r1, r2)
}
