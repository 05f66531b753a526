use crate::consts::{
    GLYPH_HEIGHT, GLYPH_SCALE, GLYPH_SPACING, GLYPH_WIDTH, OVERLAY_COLOR, READOUT_BASELINE_Y,
};
use crate::crop::CropCenter;
use crate::snapshot::Snapshot;

/// Set one pixel to the overlay color, ignoring out-of-frame coordinates.
fn put(snapshot: &mut Snapshot, x: i64, y: i64) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= snapshot.width() || y >= snapshot.height() {
        return;
    }
    snapshot.red[[y, x]] = OVERLAY_COLOR[0];
    snapshot.green[[y, x]] = OVERLAY_COLOR[1];
    snapshot.blue[[y, x]] = OVERLAY_COLOR[2];
}

/// Draw a one-pixel circle of the given radius around `center`.
///
/// Midpoint circle algorithm; pixels falling outside the frame are
/// silently dropped, so rings larger than the viewport degrade to arcs.
pub fn draw_circle(snapshot: &mut Snapshot, center: CropCenter, radius: u32) {
    let cx = center.x as i64;
    let cy = center.y as i64;

    let mut x = radius as i64;
    let mut y = 0i64;
    let mut err = 1 - x;

    while y <= x {
        put(snapshot, cx + x, cy + y);
        put(snapshot, cx - x, cy + y);
        put(snapshot, cx + x, cy - y);
        put(snapshot, cx - x, cy - y);
        put(snapshot, cx + y, cy + x);
        put(snapshot, cx - y, cy + x);
        put(snapshot, cx + y, cy - x);
        put(snapshot, cx - y, cy - x);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// 5x7 bitmap rows for the readout glyphs, top row first, bit 4 = left
/// column. Only the characters `var:{:.0}` formatting can produce.
fn glyph_rows(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'v' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'r' => [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10],
        ':' => [0x00, 0x04, 0x04, 0x00, 0x04, 0x04, 0x00],
        _ => return None,
    };
    Some(rows)
}

/// Stamp `text` with its top-left corner at (x, y).
///
/// Glyphs are scaled up `GLYPH_SCALE` times. Characters without a
/// bitmap still advance the cursor, like a space would.
pub fn draw_text(snapshot: &mut Snapshot, x: usize, y: usize, text: &str) {
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * GLYPH_SCALE;
    let mut cursor_x = x as i64;

    for c in text.chars() {
        if let Some(rows) = glyph_rows(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let base_x = cursor_x + (col * GLYPH_SCALE) as i64;
                    let base_y = y as i64 + (row * GLYPH_SCALE) as i64;
                    for sy in 0..GLYPH_SCALE as i64 {
                        for sx in 0..GLYPH_SCALE as i64 {
                            put(snapshot, base_x + sx, base_y + sy);
                        }
                    }
                }
            }
        }
        cursor_x += advance as i64;
    }
}

/// Stamp the `var:<n>` focus readout in the top-left corner.
pub fn draw_focus_readout(snapshot: &mut Snapshot, variance: f64) {
    let text = format!("var:{:.0}", variance);
    let top_y = READOUT_BASELINE_Y - GLYPH_HEIGHT * GLYPH_SCALE;
    draw_text(snapshot, 0, top_y, &text);
}
