use std::fmt;

/// An RGBA colour with 8-bit channels and a float alpha, as used by canvas styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// CSS colour string, e.g. `rgba(0,0,0,0.2)`.
    ///
    /// # Example
    /// ```
    /// use rs_cube_stack::rendering::Rgba;
    ///
    /// assert_eq!(Rgba::new(0, 0, 0, 0.2).to_css(), "rgba(0,0,0,0.2)");
    /// ```
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Opaque handle to an image owned by the surface, with its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    pub fn new(id: usize, width: u32, height: u32) -> Self {
        TextureHandle { id, width, height }
    }
}

/// A 2D affine transform in canvas order:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f].iter().all(|v| v.is_finite())
    }
}

/// The raster target cubes are drawn onto.
///
/// Mirrors the small subset of a 2D canvas context the pipeline needs. Paths
/// are built in surface pixels; `fill_with_pattern` fills the current path
/// with a repeating texture whose texel space is mapped by `transform`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);

    fn fill_with_pattern(&mut self, texture: &TextureHandle, transform: &AffineTransform);
    fn stroke_path(&mut self, color: &Rgba);

    fn clear(&mut self);
    fn fill_rect(&mut self, color: &Rgba);

    fn center(&self) -> (f64, f64) {
        (self.width() as f64 / 2.0, self.height() as f64 / 2.0)
    }
}
