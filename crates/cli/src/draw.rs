//! Bitmap renders of `(subject, clip, result)` triples.
//!
//! Fixed 700×700 canvas, 30 px per unit, origin at the centre, axes with a tick
//! every unit in [-10, 10]. Only polygon edges are drawn: subject blue, clip
//! red, result orange. A result pixel landing on an already coloured polygon
//! pixel turns green, which marks result edges shared with an input.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use shclip::Point2;

pub const BITMAP_SIZE: u32 = 700;
pub const PX_PER_UNIT: f64 = 30.0;
pub const RANGE: i64 = 10;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const SUBJECT: Rgb<u8> = Rgb([0, 0, 255]);
pub const CLIP: Rgb<u8> = Rgb([255, 0, 0]);
pub const RESULT: Rgb<u8> = Rgb([255, 165, 0]);
pub const COMMON: Rgb<u8> = Rgb([0, 128, 0]);

const HALF: i64 = BITMAP_SIZE as i64 / 2;

#[inline]
fn to_px_x(x: f64) -> i64 {
    (HALF as f64 + x * PX_PER_UNIT) as i64
}

#[inline]
fn to_px_y(y: f64) -> i64 {
    (HALF as f64 - y * PX_PER_UNIT) as i64
}

struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn new() -> Self {
        Self {
            img: RgbImage::from_pixel(BITMAP_SIZE, BITMAP_SIZE, WHITE),
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if (0..BITMAP_SIZE as i64).contains(&x) && (0..BITMAP_SIZE as i64).contains(&y) {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    fn get(&self, x: i64, y: i64) -> Option<Rgb<u8>> {
        if (0..BITMAP_SIZE as i64).contains(&x) && (0..BITMAP_SIZE as i64).contains(&y) {
            Some(*self.img.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    fn axes(&mut self) {
        for i in 0..BITMAP_SIZE as i64 {
            self.put(i, HALF, BLACK);
            self.put(HALF, i, BLACK);
        }
        let step = PX_PER_UNIT as i64;
        for i in 0..=2 * RANGE {
            let at = HALF - RANGE * step + i * step;
            for j in -4..5 {
                self.put(at, HALF + j, BLACK);
                self.put(HALF + j, at, BLACK);
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb<u8>, blend: bool) {
        if !blend {
            self.put(x, y, color);
            return;
        }
        let Some(under) = self.get(x, y) else {
            return;
        };
        let shared = under == SUBJECT || under == CLIP || under == RESULT;
        self.put(x, y, if shared { COMMON } else { color });
    }

    fn edges(&mut self, polygon: &[Point2], color: Rgb<u8>, blend: bool) {
        let successors = polygon.iter().skip(1).chain(polygon.first());
        for (&p1, &p2) in polygon.iter().zip(successors) {
            if p1.x == p2.x {
                let (a, b) = min_max(to_px_y(p1.y), to_px_y(p2.y));
                for j in a..=b {
                    self.plot(to_px_x(p1.x), j, color, blend);
                }
            } else if p1.y == p2.y {
                let (a, b) = min_max(to_px_x(p1.x), to_px_x(p2.x));
                for j in a..=b {
                    self.plot(j, to_px_y(p1.y), color, blend);
                }
            } else {
                let (p1, p2) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };
                let slope = (p2.y - p1.y) / (p2.x - p1.x);
                let (x1, y1) = (to_px_x(p1.x), to_px_y(p1.y));
                for j in x1..=to_px_x(p2.x) {
                    let y = (y1 as f64 - slope * (j - x1) as f64) as i64;
                    self.plot(j, y, color, blend);
                }
            }
        }
    }
}

#[inline]
fn min_max(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Rasterize the three polygons; inputs first, result blended on top.
pub fn render(subject: &[Point2], clip: &[Point2], result: &[Point2]) -> RgbImage {
    let mut canvas = Canvas::new();
    canvas.axes();
    canvas.edges(subject, SUBJECT, false);
    canvas.edges(clip, CLIP, false);
    canvas.edges(result, RESULT, true);
    canvas.img
}

/// Render and write to `path`; the format follows the extension (`.bmp`).
pub fn save(path: &Path, subject: &[Point2], clip: &[Point2], result: &[Point2]) -> Result<()> {
    render(subject, clip, result)
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}
