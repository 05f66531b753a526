/// Default snapshot URL of the inspection camera (mjpg-streamer still endpoint).
pub const DEFAULT_CAMERA_URL: &str = "http://localhost:8080/?action=snapshot";

/// Default inner alignment ring radius in pixels, used when a request omits `r1`.
pub const DEFAULT_R1: u32 = 50;

/// Default outer alignment ring radius in pixels, used when a request omits `r2`.
pub const DEFAULT_R2: u32 = 100;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Overlay draw color as RGB plane values (machine-vision green).
pub const OVERLAY_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// Glyph cell width of the built-in overlay font, in pixels before scaling.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph cell height of the built-in overlay font, in pixels before scaling.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal gap between stamped glyphs, in pixels before scaling.
pub const GLYPH_SPACING: usize = 1;

/// Integer scale applied to overlay glyphs when stamping.
pub const GLYPH_SCALE: usize = 3;

/// Baseline row (from the crop top) for the focus readout text.
pub const READOUT_BASELINE_Y: usize = 30;
