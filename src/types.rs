// Core value types shared by the whole crate.

/// One RGBA pixel. Plain value type: 4 channels, 8 bits each, no identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Transparent black — also what a fresh canvas is filled with, and what
    /// reads outside the canvas return.
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color (a = 255).
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The rectangle a canvas covers. The origin is always (0,0), so the size is
/// the whole story.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,  // pixels per row
    pub height: usize, // rows
}

impl Bounds {
    /// True when (x, y) lands on a pixel inside the rectangle.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_rejects_every_side() {
        let b = Bounds { width: 4, height: 3 };
        assert!(b.contains(0, 0));
        assert!(b.contains(3, 2));
        assert!(!b.contains(-1, 0));
        assert!(!b.contains(0, -1));
        assert!(!b.contains(4, 0));
        assert!(!b.contains(0, 3));
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Rgba::TRANSPARENT, Rgba::new(0, 0, 0, 0));
        assert_eq!(Rgba::opaque(1, 2, 3).a, 255);
    }
}
