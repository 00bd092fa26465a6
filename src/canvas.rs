// The canvas: an owned RGBA pixel buffer plus every drawing primitive.
// Visual vocabulary: gradient fill, straight lines, a decaying spiral,
// filled discs and rectangles. Effects (blur) live in fx.rs.
//
// Bounds policy, relied on everywhere: writing outside the buffer is a
// silent no-op and reading outside returns transparent black. Circle
// stamping near an edge and blur sampling past the border both lean on
// this instead of clamping their own coordinates.

use crate::types::{Bounds, Rgba};
use crate::vector::Vector;

/// How many line segments one spiral is made of.
const SPIRAL_SEGMENTS: usize = 10_000;

/// In-memory rectangular pixel buffer, row-major RGBA, stride = width * 4,
/// no padding. Created at a fixed size and never resized; every drawing call
/// mutates it in place. `Clone` deep-copies the pixels (no shared storage).
#[derive(Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>, // length = width * height * 4
}

impl Canvas {
    /// Allocate a canvas filled with transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width * height * 4],
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw bytes, for handing to an encoder.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the canvas and keep just the bytes (encoder hand-off without
    /// a copy).
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Write one pixel. Coordinates outside the canvas are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.bounds().contains(x, y) {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = color.a;
    }

    /// Read one pixel. Coordinates outside the canvas read as transparent
    /// black, never an error.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Rgba {
        if !self.bounds().contains(x, y) {
            return Rgba::TRANSPARENT;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }

    /// Fill the whole canvas with a red→right, green→down gradient over a
    /// constant blue. Visual: a classic UV test card. Overwrites every pixel,
    /// alpha included.
    pub fn draw_gradient(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                let col = Rgba {
                    r: (255 * x / self.width) as u8,
                    g: (255 * y / self.height) as u8,
                    b: 155,
                    a: 255,
                };
                self.set(x as i32, y as i32, col);
            }
        }
    }

    /// Draw a straight 1-pixel line from `from` to `to` by stepping one unit
    /// of distance per sample along the normalized delta.
    ///
    /// Two quirks are part of the output contract: the sample count rounds
    /// half-up (`(length + 0.5) as i32`) while each sampled coordinate
    /// truncates toward zero onto the pixel grid. Coincident endpoints are
    /// drawn as the single truncated pixel rather than dividing by zero.
    pub fn draw_line(&mut self, color: Rgba, from: Vector, to: Vector) {
        let delta = to - from;
        let length = delta.length();

        if length == 0.0 {
            self.set(from.x as i32, from.y as i32, color);
            return;
        }

        let x_step = delta.x / length;
        let y_step = delta.y / length;
        let limit = (length + 0.5) as i32;

        for i in 0..limit {
            let x = from.x + i as f64 * x_step;
            let y = from.y + i as f64 * y_step;
            self.set(x as i32, y as i32, color);
        }
    }

    /// Draw a decaying spiral centered on `center`.
    /// Visual: a polyline that circles outward-ish while its step shrinks,
    /// like a slowly tightening coil. The walk is a fixed 10000-segment
    /// simulation (start direction (0,5), +0.03 rad per step, ×0.999 decay),
    /// independent of canvas size.
    pub fn draw_spiral(&mut self, color: Rgba, center: Vector) {
        let points = spiral_points(center);
        for pair in points.windows(2) {
            self.draw_line(color, pair[0], pair[1]);
        }
    }

    /// Draw a filled disc by scanning the bounding box and keeping offsets
    /// with dx² + dy² <= radius². Radius 0 is the single center pixel; a
    /// negative radius makes the scan range empty and draws nothing.
    pub fn draw_circle(&mut self, color: Rgba, center: Vector, radius: i32) {
        for x in -radius..=radius {
            for y in -radius..=radius {
                if x * x + y * y <= radius * radius {
                    self.set(center.x as i32 + x, center.y as i32 + y, color);
                }
            }
        }
    }

    /// Draw a filled axis-aligned rectangle, corners inclusive, coordinates
    /// truncated to the grid. No corner normalization: if `from` is past
    /// `to` on either axis the range is empty and nothing is drawn.
    pub fn draw_rect(&mut self, color: Rgba, from: Vector, to: Vector) {
        for x in from.x as i32..=to.x as i32 {
            for y in from.y as i32..=to.y as i32 {
                self.set(x, y, color);
            }
        }
    }
}

/// The spiral walk itself: 10001 vertices, i.e. one start point plus one per
/// segment. Kept separate from the drawing so the path can be inspected
/// without a canvas.
fn spiral_points(center: Vector) -> Vec<Vector> {
    let mut dir = Vector::new(0.0, 5.0);
    let mut points = Vec::with_capacity(SPIRAL_SEGMENTS + 1);
    let mut last = center;
    points.push(last);

    for _ in 0..SPIRAL_SEGMENTS {
        last = last + dir;
        points.push(last);
        dir.rotate(0.03);
        dir.scale(0.999);
    }

    points
}
