// soft-canvas: a small software 2D raster toolkit.
// You get a Canvas (an owned RGBA pixel buffer), a handful of drawing
// primitives (gradient, line, spiral, circle, rect), and a pluggable
// weighted blur. Encoding the finished buffer to a file is someone else's
// job — see main.rs for the hand-off to the `image` crate.

pub mod canvas;
pub mod error;
pub mod fx;
pub mod types;
pub mod vector;

pub use canvas::Canvas;
pub use error::Error;
pub use fx::{BoxWeight, GaussianWeight, TriangleWeight, WeightFunction};
pub use types::{Bounds, Rgba};
pub use vector::Vector;
