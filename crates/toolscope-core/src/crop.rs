use ndarray::s;

use crate::error::{Result, ToolscopeError};
use crate::snapshot::Snapshot;

/// Pixel coordinates of the frame center inside a cropped snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropCenter {
    pub x: usize,
    pub y: usize,
}

/// Cut a `width` x `height` viewport out of the middle of a snapshot.
///
/// A requested dimension larger than the source is clamped to the source
/// on that axis. Zero-sized requests are rejected. Returns the cropped
/// snapshot together with the center point the crop was taken around.
pub fn center_crop(snapshot: &Snapshot, width: u32, height: u32) -> Result<(Snapshot, CropCenter)> {
    if width == 0 || height == 0 {
        return Err(ToolscopeError::InvalidCrop { width, height });
    }

    let src_w = snapshot.width();
    let src_h = snapshot.height();

    // Oversized requests fall back to the full frame on that axis.
    let w = (width as usize).min(src_w);
    let h = (height as usize).min(src_h);

    // Top-left corner so the viewport sits centered on the frame.
    let x0 = src_w / 2 - w / 2;
    let y0 = src_h / 2 - h / 2;

    let cropped = Snapshot::new(
        snapshot.red.slice(s![y0..y0 + h, x0..x0 + w]).to_owned(),
        snapshot.green.slice(s![y0..y0 + h, x0..x0 + w]).to_owned(),
        snapshot.blue.slice(s![y0..y0 + h, x0..x0 + w]).to_owned(),
    );

    let center = CropCenter { x: w / 2, y: h / 2 };

    Ok((cropped, center))
}
