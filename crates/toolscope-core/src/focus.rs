use ndarray::Array2;

use crate::crop::CropCenter;

/// Compute Laplacian variance restricted to a ring around `center`.
/// Higher means sharper.
///
/// Convolves with the 3x3 Laplacian kernel:
///   0  1  0
///   1 -4  1
///   0  1  0
/// Only responses at pixels whose distance from `center` lies in
/// [r1, r2] contribute to the variance, so flat background outside the
/// ring and the tool nozzle inside it are both ignored.
///
/// Returns 0.0 when the ring is empty: degenerate radii (r1 >= r2), a
/// plane too small to convolve, or a ring that falls entirely outside
/// the plane.
pub fn annulus_laplacian_variance(
    data: &Array2<f32>,
    center: CropCenter,
    r1: u32,
    r2: u32,
) -> f64 {
    let (h, w) = data.dim();
    if h < 3 || w < 3 || r1 >= r2 {
        return 0.0;
    }

    let inner = (r1 as i64) * (r1 as i64);
    let outer = (r2 as i64) * (r2 as i64);

    // Walk only the ring's bounding box, kept one pixel inside the
    // border so the kernel always has its four neighbors.
    let r2u = r2 as usize;
    let row_lo = center.y.saturating_sub(r2u).max(1);
    let row_hi = (center.y + r2u).min(h - 2);
    let col_lo = center.x.saturating_sub(r2u).max(1);
    let col_hi = (center.x + r2u).min(w - 2);

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut count = 0u64;

    for row in row_lo..=row_hi {
        let dy = row as i64 - center.y as i64;
        for col in col_lo..=col_hi {
            let dx = col as i64 - center.x as i64;
            let d2 = dx * dx + dy * dy;
            if d2 < inner || d2 > outer {
                continue;
            }

            let lap = -4.0 * data[[row, col]] as f64
                + data[[row - 1, col]] as f64
                + data[[row + 1, col]] as f64
                + data[[row, col - 1]] as f64
                + data[[row, col + 1]] as f64;
            sum += lap;
            sum_sq += lap * lap;
            count += 1;
        }
    }

    if count < 2 {
        return 0.0;
    }

    let n = count as f64;
    let mean = sum / n;
    sum_sq / n - mean * mean
}
