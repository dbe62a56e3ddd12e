//! Pixel Buffer

use crate::color::Pixel;
use crate::error::Error;
use crate::error::Result;

use std::ops::Index;
use std::ops::IndexMut;

/// Premultiplied pixel buffer
///
/// Data is stored in row-major order; each row occupies `stride` pixels,
/// of which the first `width` are visible. The default Bitmap is empty
/// and cannot be drawn into.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Bitmap {
    /// Pixel storage, at least stride * height
    data: Vec<Pixel>,
    /// Width in pixels
    width: usize,
    /// Height in pixels
    height: usize,
    /// Distance between rows, in pixels
    stride: usize,
    /// Hint that every pixel is opaque
    opaque: bool,
}

impl Bitmap {
    /// Create a new transparent bitmap of width * height
    ///
    ///     use scancanvas::{Bitmap,Pixel};
    ///     let bm = Bitmap::new(3, 2).unwrap();
    ///     assert_eq!(bm.get(2, 1), Pixel::zero());
    ///
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::from_pixels(width, height, width, vec![Pixel::zero(); width * height])
    }
    /// Wrap existing pixel storage with an explicit row stride
    pub fn from_pixels(width: usize, height: usize, stride: usize,
                       data: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if stride < width {
            return Err(Error::InvalidStride { width, stride });
        }
        let needed = stride * height;
        if data.len() < needed {
            return Err(Error::BufferTooSmall { len: data.len(), needed });
        }
        Ok(Self { data, width, height, stride, opaque: false })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Row stride in pixels
    pub fn stride(&self) -> usize {
        self.stride
    }
    /// Opacity hint
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }
    /// Set the opacity hint
    pub fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
    }
    /// True if storage can back a width * height image with this stride
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.stride >= self.width &&
            self.data.len() >= self.stride * self.height
    }
    /// Pixel at (x,y)
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self[(x, y)]
    }
    /// Set pixel at (x,y)
    pub fn set(&mut self, x: usize, y: usize, p: Pixel) {
        self[(x, y)] = p;
    }
    /// Visible pixels of row `y`
    pub fn row(&self, y: usize) -> &[Pixel] {
        debug_assert!(y < self.height);
        let i = y * self.stride;
        &self.data[i .. i + self.width]
    }
    /// Visible pixels of row `y`, mutable
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        debug_assert!(y < self.height);
        let i = y * self.stride;
        &mut self.data[i .. i + self.width]
    }
    /// Iterate over rows of visible pixels
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        (0 .. self.height).map(move |y| self.row(y))
    }
    /// Raw storage including any padding past `width`
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }
    /// Raw storage, mutable
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }
    /// Set every visible pixel to `p`
    pub fn fill(&mut self, p: Pixel) {
        for y in 0 .. self.height {
            self.row_mut(y).iter_mut().for_each(|v| *v = p);
        }
    }
}

impl Index<(usize,usize)> for Bitmap {
    type Output = Pixel;
    fn index(&self, index: (usize, usize)) -> &Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.stride + index.0]
    }
}
impl IndexMut<(usize,usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.stride + index.0]
    }
}
