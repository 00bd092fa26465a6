// 2D point/direction with just enough arithmetic for the drawing routines.
// Add/Sub are pure (return a new vector); rotate/scale mutate in place so the
// spiral walk can step one direction vector cheaply.

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Multiply both components in place.
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }

    /// Rotate in place about the origin by `angle` radians (standard 2D
    /// rotation matrix, counter-clockwise for positive angles).
    #[inline]
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.x = x;
        self.y = y;
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn add_and_sub_leave_operands_alone() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a + b, Vector::new(4.0, 1.0));
        assert_eq!(a - b, Vector::new(-2.0, 3.0));
        // operands are Copy, originals untouched
        assert_eq!(a, Vector::new(1.0, 2.0));
    }

    #[test]
    fn length_of_3_4_is_5() {
        assert!(close(Vector::new(3.0, 4.0).length(), 5.0));
        assert!(close(Vector::new(0.0, 0.0).length(), 0.0));
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        let mut v = Vector::new(1.0, 0.0);
        v.rotate(std::f64::consts::FRAC_PI_2);
        assert!(close(v.x, 0.0));
        assert!(close(v.y, 1.0));
    }

    #[test]
    fn rotate_preserves_length_and_scale_shrinks_it() {
        let mut v = Vector::new(0.0, 5.0);
        v.rotate(0.03);
        assert!(close(v.length(), 5.0));
        v.scale(0.999);
        assert!(close(v.length(), 5.0 * 0.999));
    }
}
