//! Porter-Duff Compositing
//!
//! All operators work on premultiplied 8-bit channels with integer
//! arithmetic; products are divided by 255 and truncated.
//!
//! In the formulas below `s` and `d` are a source and destination channel
//! and `sa`, `da` the source and destination alpha. Every operator treats
//! alpha as just another channel.

use crate::color::Pixel;

/// Compositing operator
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum BlendMode {
    /// 0
    Clear,
    /// s
    Src,
    /// d
    Dest,
    /// s + (255 - sa) * d
    SrcOver,
    /// d + (255 - da) * s
    DestOver,
    /// s * da
    SrcIn,
    /// d * sa
    DestIn,
    /// s * (255 - da)
    SrcOut,
    /// d * (255 - sa)
    DestOut,
    /// s * da + (255 - sa) * d
    SrcATop,
    /// d * sa + (255 - da) * s
    DestATop,
    /// (255 - da) * s + (255 - sa) * d
    Xor,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SrcOver
    }
}

/// Function compositing a source pixel onto a destination pixel
pub type BlendProc = fn(Pixel, Pixel) -> Pixel;

impl BlendMode {
    /// Every operator, in declaration order
    pub const ALL : [BlendMode; 12] = [
        BlendMode::Clear, BlendMode::Src, BlendMode::Dest,
        BlendMode::SrcOver, BlendMode::DestOver,
        BlendMode::SrcIn, BlendMode::DestIn,
        BlendMode::SrcOut, BlendMode::DestOut,
        BlendMode::SrcATop, BlendMode::DestATop,
        BlendMode::Xor,
    ];
    /// Compositing function for this operator
    pub fn proc(self) -> BlendProc {
        match self {
            BlendMode::Clear    => clear,
            BlendMode::Src      => src,
            BlendMode::Dest     => dest,
            BlendMode::SrcOver  => src_over,
            BlendMode::DestOver => dest_over,
            BlendMode::SrcIn    => src_in,
            BlendMode::DestIn   => dest_in,
            BlendMode::SrcOut   => src_out,
            BlendMode::DestOut  => dest_out,
            BlendMode::SrcATop  => src_atop,
            BlendMode::DestATop => dest_atop,
            BlendMode::Xor      => xor,
        }
    }
    /// Composite `src` onto `dst`
    ///
    ///     use scancanvas::{BlendMode,Pixel};
    ///     let src = Pixel::pack_argb(255, 10, 20, 30);
    ///     let dst = Pixel::pack_argb(255, 1, 2, 3);
    ///     assert_eq!(BlendMode::SrcOver.blend(src, dst), src);
    ///     assert_eq!(BlendMode::DestOver.blend(src, dst), dst);
    ///
    pub fn blend(self, src: Pixel, dst: Pixel) -> Pixel {
        (self.proc())(src, dst)
    }
}

/// Apply `f(s, d, sa, da)` to each channel
#[inline]
fn channelwise<F>(src: Pixel, dst: Pixel, f: F) -> Pixel
    where F: Fn(u32, u32, u32, u32) -> u32
{
    let (sa, sr, sg, sb) = src.components();
    let (da, dr, dg, db) = dst.components();
    Pixel::pack_unchecked(f(sa, da, sa, da), f(sr, dr, sa, da),
                          f(sg, dg, sa, da), f(sb, db, sa, da))
}

fn clear(_: Pixel, _: Pixel) -> Pixel {
    Pixel::zero()
}
fn src(s: Pixel, _: Pixel) -> Pixel {
    s
}
fn dest(_: Pixel, d: Pixel) -> Pixel {
    d
}
fn src_over(s: Pixel, d: Pixel) -> Pixel {
    if s.a() == 255 {
        return s;
    }
    channelwise(s, d, |s, d, sa, _| s + (255 - sa) * d / 255)
}
fn dest_over(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |s, d, _, da| d + (255 - da) * s / 255)
}
fn src_in(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |s, _, _, da| s * da / 255)
}
fn dest_in(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |_, d, sa, _| d * sa / 255)
}
fn src_out(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |s, _, _, da| s * (255 - da) / 255)
}
fn dest_out(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |_, d, sa, _| d * (255 - sa) / 255)
}
fn src_atop(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |s, d, sa, da| (s * da + (255 - sa) * d) / 255)
}
fn dest_atop(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |s, d, sa, da| (d * sa + (255 - da) * s) / 255)
}
fn xor(s: Pixel, d: Pixel) -> Pixel {
    channelwise(s, d, |s, d, sa, da| ((255 - da) * s + (255 - sa) * d) / 255)
}
