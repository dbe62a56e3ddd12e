//! Paint

use crate::blend::BlendMode;
use crate::color::Color;
use crate::Filter;
use crate::Shader;

use std::fmt;

/// How pixels are produced and combined for a draw
///
/// The color is used unless a shader is set. A filter, if set, post
/// processes the source pixels before they are blended.
///
///     use scancanvas::{BlendMode,Color,Paint};
///     let paint = Paint::new(Color::white()).with_blend_mode(BlendMode::Src);
///     assert_eq!(paint.blend_mode(), BlendMode::Src);
///     assert!(paint.shader().is_none());
///
#[derive(Copy,Clone)]
pub struct Paint<'a> {
    color: Color,
    shader: Option<&'a dyn Shader>,
    filter: Option<&'a dyn Filter>,
    blend_mode: BlendMode,
}

impl<'a> Default for Paint<'a> {
    fn default() -> Self {
        Self::new(Color::black())
    }
}

impl<'a> Paint<'a> {
    /// Create a new Paint with a flat color, drawn with SrcOver
    pub fn new(color: Color) -> Self {
        Self { color, shader: None, filter: None, blend_mode: BlendMode::SrcOver }
    }
    /// Create a new Paint taking its pixels from `shader`
    pub fn with_shader(shader: &'a dyn Shader) -> Self {
        let mut p = Self::default();
        p.shader = Some(shader);
        p
    }
    /// Set the blend mode, builder style
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }
    /// Set the filter, builder style
    pub fn with_filter(mut self, filter: &'a dyn Filter) -> Self {
        self.filter = Some(filter);
        self
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
    pub fn shader(&self) -> Option<&'a dyn Shader> {
        self.shader
    }
    pub fn set_shader(&mut self, shader: Option<&'a dyn Shader>) {
        self.shader = shader;
    }
    pub fn filter(&self) -> Option<&'a dyn Filter> {
        self.filter
    }
    pub fn set_filter(&mut self, filter: Option<&'a dyn Filter>) {
        self.filter = filter;
    }
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }
}

impl<'a> fmt::Debug for Paint<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Paint")
            .field("color", &self.color)
            .field("shader", &self.shader.is_some())
            .field("filter", &self.filter.is_some())
            .field("blend_mode", &self.blend_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::BlendFilter;

    #[test]
    fn defaults_and_setters() {
        let f = BlendFilter::new(BlendMode::Dest, Color::white());
        let mut p = Paint::default();
        assert_eq!(p.color(), Color::black());
        assert_eq!(p.blend_mode(), BlendMode::SrcOver);

        p.set_color(Color::white());
        p.set_blend_mode(BlendMode::Xor);
        p.set_filter(Some(&f));
        assert_eq!(p.color(), Color::white());
        assert_eq!(p.blend_mode(), BlendMode::Xor);
        assert!(p.filter().is_some());
        assert!(p.shader().is_none());
        p.set_filter(None);
        assert!(p.filter().is_none());
        assert_eq!(format!("{:?}", p),
                   "Paint { color: Color { a: 1.0, r: 1.0, g: 1.0, b: 1.0 }, shader: false, filter: false, blend_mode: Xor }");
    }
}
