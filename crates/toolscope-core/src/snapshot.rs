use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_PIXEL_THRESHOLD};
use crate::error::Result;

/// A decoded inspection-camera frame.
///
/// Channels are stored as separate planes, row-major, shape = (height, width),
/// with values in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub red: Array2<f32>,
    pub green: Array2<f32>,
    pub blue: Array2<f32>,
}

impl Snapshot {
    pub fn new(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> Self {
        Self { red, green, blue }
    }

    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }

    /// Decode an encoded still (JPEG, PNG, ...) into planes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        Ok(Self::from_rgb_image(&rgb))
    }

    /// Split an 8-bit RGB image into normalized planes.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let (w, h) = (w as usize, h as usize);

        let mut red = Array2::<f32>::zeros((h, w));
        let mut green = Array2::<f32>::zeros((h, w));
        let mut blue = Array2::<f32>::zeros((h, w));

        if h * w >= PARALLEL_PIXEL_THRESHOLD {
            let rows: Vec<(Vec<f32>, Vec<f32>, Vec<f32>)> = (0..h)
                .into_par_iter()
                .map(|row| {
                    let mut r = Vec::with_capacity(w);
                    let mut g = Vec::with_capacity(w);
                    let mut b = Vec::with_capacity(w);
                    for col in 0..w {
                        let pixel = img.get_pixel(col as u32, row as u32);
                        r.push(pixel.0[0] as f32 / 255.0);
                        g.push(pixel.0[1] as f32 / 255.0);
                        b.push(pixel.0[2] as f32 / 255.0);
                    }
                    (r, g, b)
                })
                .collect();

            for (row, (r, g, b)) in rows.into_iter().enumerate() {
                for (col, val) in r.into_iter().enumerate() {
                    red[[row, col]] = val;
                }
                for (col, val) in g.into_iter().enumerate() {
                    green[[row, col]] = val;
                }
                for (col, val) in b.into_iter().enumerate() {
                    blue[[row, col]] = val;
                }
            }
        } else {
            for row in 0..h {
                for col in 0..w {
                    let pixel = img.get_pixel(col as u32, row as u32);
                    red[[row, col]] = pixel.0[0] as f32 / 255.0;
                    green[[row, col]] = pixel.0[1] as f32 / 255.0;
                    blue[[row, col]] = pixel.0[2] as f32 / 255.0;
                }
            }
        }

        Self { red, green, blue }
    }

    /// Merge the planes back into an 8-bit RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        let h = self.height();
        let w = self.width();

        let mut img = RgbImage::new(w as u32, h as u32);
        for row in 0..h {
            for col in 0..w {
                let r = (self.red[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
                let g = (self.green[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
                let b = (self.blue[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
                img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
            }
        }

        img
    }

    /// Collapse to a single luminance plane (ITU-R BT.601 weights).
    pub fn luminance(&self) -> Array2<f32> {
        let (h, w) = self.red.dim();
        let mut data = Array2::<f32>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                data[[row, col]] = LUMINANCE_R * self.red[[row, col]]
                    + LUMINANCE_G * self.green[[row, col]]
                    + LUMINANCE_B * self.blue[[row, col]];
            }
        }

        data
    }

    /// Encode as an 8-bit RGB PNG in memory.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let img = self.to_rgb_image();
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}
