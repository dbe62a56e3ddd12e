//! Reading and writing of image files
//!
//! Bitmaps are premultiplied; files are written and read as straight
//! (unpremultiplied) RGBA8 through the `image` crate.
//!
use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::error::Result;

use std::path::Path;

/// Read an image file into a premultiplied Bitmap
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Bitmap> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let data : Vec<_> = img.pixels()
        .map(|p| Pixel::premultiply(p[0], p[1], p[2], p[3]))
        .collect();
    let opaque = img.pixels().all(|p| p[3] == 255);
    let mut bm = Bitmap::from_pixels(w as usize, h as usize, w as usize, data)?;
    bm.set_opaque(opaque);
    Ok(bm)
}

/// Visible pixels of a Bitmap as straight RGBA8 bytes
pub fn to_rgba8(bitmap: &Bitmap) -> Vec<u8> {
    bitmap.rows()
        .flat_map(|row| row.iter().flat_map(|p| p.unpremultiply()))
        .collect()
}

/// Write a Bitmap to an image file, format chosen from the file extension
pub fn write_file<P: AsRef<Path>>(bitmap: &Bitmap, filename: P) -> Result<()> {
    let buf = to_rgba8(bitmap);
    image::save_buffer(filename, &buf,
                       bitmap.width() as u32, bitmap.height() as u32,
                       image::ColorType::Rgba8)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are reported through the `log` facade at debug level.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let b1 = read_file(f1)?;
    let b2 = read_file(f2)?;
    if b1.width() != b2.width() || b1.height() != b2.height() {
        log::debug!("img_diff: size {}x{} != {}x{}",
                    b1.width(), b1.height(), b2.width(), b2.height());
        return Ok(false);
    }
    let mut flag = true;
    for (y, (r1, r2)) in b1.rows().zip(b2.rows()).enumerate() {
        for (x, (p1, p2)) in r1.iter().zip(r2.iter()).enumerate() {
            if p1 != p2 {
                log::debug!("img_diff: [{},{}]: {:08x} {:08x}", x, y, p1.raw(), p2.raw());
                flag = false;
            }
        }
    }
    Ok(flag)
}
