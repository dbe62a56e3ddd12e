//! Filters

use crate::blend::BlendMode;
use crate::color::Color;
use crate::color::Pixel;
use crate::Filter;

/// Filter blending a fixed color onto each pixel
///
/// Equivalent to drawing `color` with `mode` onto the filtered pixels.
///
///     use scancanvas::{BlendFilter,BlendMode,Color,Filter,Pixel};
///     let f = BlendFilter::new(BlendMode::DestIn, Color::argb(0.0, 0.0, 0.0, 0.0));
///     let mut out = [Pixel::zero(); 1];
///     f.filter(&mut out, &[Pixel::pack_argb(255, 255, 255, 255)]);
///     assert_eq!(out[0], Pixel::zero());
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct BlendFilter {
    mode: BlendMode,
    src: Pixel,
}

impl BlendFilter {
    pub fn new(mode: BlendMode, color: Color) -> Self {
        Self { mode, src: color.to_pixel() }
    }
}

impl Filter for BlendFilter {
    fn preserves_alpha(&self) -> bool {
        false
    }
    fn filter(&self, output: &mut [Pixel], input: &[Pixel]) {
        let blend = self.mode.proc();
        for (o, i) in output.iter_mut().zip(input.iter()) {
            *o = blend(self.src, *i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_over_tints() {
        let f = BlendFilter::new(BlendMode::SrcOver, Color::argb(1.0, 0.0, 0.0, 1.0));
        let input = [Pixel::zero(), Pixel::pack_argb(255, 255, 0, 0)];
        let mut out = [Pixel::zero(); 2];
        f.filter(&mut out, &input);
        assert!(out.iter().all(|p| *p == Pixel::pack_argb(255, 0, 0, 255)));
        assert!(!f.preserves_alpha());
    }

    #[test]
    fn dest_passes_through() {
        let f = BlendFilter::new(BlendMode::Dest, Color::white());
        let input = [Pixel::pack_argb(10, 5, 4, 3); 3];
        let mut out = [Pixel::zero(); 3];
        f.filter(&mut out, &input);
        assert_eq!(out, input);
    }
}
