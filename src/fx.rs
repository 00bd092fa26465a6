// FX: post-processing passes over a finished canvas.
// Visual outcome: blur softens the whole image; with a wide kernel it looks
// like frosted glass, with a narrow Gaussian just slightly fuzzy.

use crate::canvas::Canvas;
use crate::types::Rgba;

// ----------------------------- weight kernels -----------------------------

/// Blur weighting capability: map a pixel offset from the center to a
/// non-negative weight. The blur never checks non-negativity or that the
/// kernel sums to anything in particular — a kernel that sums to zero over
/// a whole neighborhood produces NaN channel averages, which the `as u8`
/// cast turns into black pixels. Garbage in, garbage out, but never a panic.
pub trait WeightFunction {
    fn weight(&self, dx: i32, dy: i32) -> f64;
}

/// Every offset weighs the same: a plain box average.
pub struct BoxWeight;

impl WeightFunction for BoxWeight {
    #[inline]
    fn weight(&self, _dx: i32, _dy: i32) -> f64 {
        1.0
    }
}

/// Radially symmetric Gaussian falloff, e^{ -r² / (2 sigma²) }.
/// Visual: soft blur that keeps most of the center pixel.
pub struct GaussianWeight {
    denom: f64, // 2 * sigma * sigma
}

impl GaussianWeight {
    pub fn new(sigma: f64) -> Self {
        Self {
            denom: 2.0 * sigma * sigma,
        }
    }
}

impl WeightFunction for GaussianWeight {
    #[inline]
    fn weight(&self, dx: i32, dy: i32) -> f64 {
        let r2 = (dx * dx + dy * dy) as f64;
        (-r2 / self.denom).exp()
    }
}

/// Linear cone falloff: full weight at the center, zero at `radius` and
/// beyond.
pub struct TriangleWeight {
    pub radius: f64,
}

impl WeightFunction for TriangleWeight {
    #[inline]
    fn weight(&self, dx: i32, dy: i32) -> f64 {
        let dist = ((dx * dx + dy * dy) as f64).sqrt();
        (1.0 - dist / self.radius).max(0.0)
    }
}

// --------------------------------- blur -----------------------------------

impl Canvas {
    /// Weighted box blur over the inclusive square neighborhood
    /// [x-radius, x+radius] × [y-radius, y+radius] of every pixel.
    ///
    /// The pass reads from a snapshot taken before any pixel is written, so
    /// already-blurred pixels never feed back into their neighbors.
    ///
    /// Neighbors past the canvas edge read as transparent black: they add
    /// nothing to the channel sums but their weight still counts, so borders
    /// come out darker than the interior. That bias is part of the output
    /// contract, not something to clamp away.
    ///
    /// Output alpha is always forced to fully opaque, whatever the inputs.
    pub fn blur<W: WeightFunction>(&mut self, radius: i32, weight: &W) {
        let source = self.clone();
        let bounds = self.bounds();

        for x in 0..bounds.width as i32 {
            for y in 0..bounds.height as i32 {
                let col = source.blur_pixel(x, y, radius, weight);
                self.set(x, y, col);
            }
        }
    }

    /// One output pixel of the blur: weighted average of the neighborhood,
    /// weights taken at offsets (i - x, j - y) from the center.
    fn blur_pixel<W: WeightFunction>(&self, x: i32, y: i32, radius: i32, weight: &W) -> Rgba {
        let mut weight_sum = 0.0f64;
        let (mut out_r, mut out_g, mut out_b) = (0.0f64, 0.0f64, 0.0f64);

        for i in x - radius..=x + radius {
            for j in y - radius..=y + radius {
                let w = weight.weight(i - x, j - y);
                let px = self.at(i, j);
                out_r += px.r as f64 * w;
                out_g += px.g as f64 * w;
                out_b += px.b as f64 * w;
                weight_sum += w;
            }
        }

        Rgba {
            r: (out_r / weight_sum) as u8,
            g: (out_g / weight_sum) as u8,
            b: (out_b / weight_sum) as u8,
            a: 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    const PAINT: Rgba = Rgba::opaque(200, 80, 40);

    fn uniform_canvas(size: usize) -> Canvas {
        let mut c = Canvas::new(size, size);
        c.draw_rect(
            PAINT,
            Vector::new(0.0, 0.0),
            Vector::new(size as f64 - 1.0, size as f64 - 1.0),
        );
        c
    }

    #[test]
    fn box_blur_keeps_interior_of_uniform_canvas() {
        let mut c = uniform_canvas(9);
        c.blur(1, &BoxWeight);

        // every neighbor of an interior pixel is in bounds and identical,
        // so the weighted average is the pixel itself
        for x in 1..8 {
            for y in 1..8 {
                assert_eq!(c.at(x, y), PAINT, "interior pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn box_blur_darkens_borders() {
        let mut c = uniform_canvas(9);
        c.blur(1, &BoxWeight);

        // a corner sees 4 in-bounds neighbors out of 9 weighted samples
        let corner = c.at(0, 0);
        assert_eq!(corner.r, (200.0f64 * 4.0 / 9.0) as u8);
        assert_eq!(corner.g, (80.0f64 * 4.0 / 9.0) as u8);
        assert_eq!(corner.b, (40.0f64 * 4.0 / 9.0) as u8);

        // an edge (non-corner) pixel sees 6 of 9
        let edge = c.at(4, 0);
        assert_eq!(edge.r, (200.0f64 * 6.0 / 9.0) as u8);
    }

    #[test]
    fn blur_forces_opaque_alpha() {
        let mut c = Canvas::new(5, 5);
        for x in 0..5 {
            for y in 0..5 {
                c.set(x, y, Rgba::new(100, 100, 100, 7));
            }
        }
        c.blur(1, &BoxWeight);
        for x in 0..5 {
            for y in 0..5 {
                assert_eq!(c.at(x, y).a, 255);
            }
        }
    }

    #[test]
    fn blur_reads_from_a_snapshot_not_its_own_output() {
        // one bright pixel on black: with feedback, blurred brightness would
        // smear cumulatively in scan order; from a snapshot, the four
        // neighbors of the spike all get the same value
        let mut c = Canvas::new(7, 7);
        c.set(3, 3, Rgba::opaque(90, 90, 90));
        c.blur(1, &BoxWeight);

        let up = c.at(3, 2);
        let down = c.at(3, 4);
        let left = c.at(2, 3);
        let right = c.at(4, 3);
        assert_eq!(up, down);
        assert_eq!(left, right);
        assert_eq!(up, left);
        assert_eq!(up.r, 10); // 90 / 9 samples
    }

    #[test]
    fn gaussian_peaks_at_center_and_is_symmetric() {
        let g = GaussianWeight::new(1.5);
        assert_eq!(g.weight(0, 0), 1.0);
        assert!(g.weight(1, 0) < g.weight(0, 0));
        assert_eq!(g.weight(2, 1), g.weight(-2, -1));
        assert_eq!(g.weight(1, 2), g.weight(2, 1));
    }

    #[test]
    fn triangle_weight_hits_zero_at_its_radius() {
        let t = TriangleWeight { radius: 3.0 };
        assert_eq!(t.weight(0, 0), 1.0);
        assert_eq!(t.weight(3, 0), 0.0);
        assert_eq!(t.weight(5, 5), 0.0); // clamped, never negative
        assert!(t.weight(1, 1) > 0.0);
    }

    #[test]
    fn gaussian_blur_keeps_interior_of_uniform_canvas() {
        let mut c = uniform_canvas(9);
        c.blur(2, &GaussianWeight::new(1.0));
        // float rounding plus the truncating cast may land one below
        let px = c.at(4, 4);
        assert!(px.r >= PAINT.r - 1 && px.r <= PAINT.r);
        assert!(px.g >= PAINT.g - 1 && px.g <= PAINT.g);
        assert!(px.b >= PAINT.b - 1 && px.b <= PAINT.b);
        assert_eq!(px.a, 255);
    }
}
