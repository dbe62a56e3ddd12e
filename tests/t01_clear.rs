
extern crate scancanvas;
use scancanvas::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_pixels(bm: &Bitmap, want: Pixel) -> bool {
    bm.rows().all(|row| row.iter().all(|&p| p == want))
}

#[test]
fn t01_clear_transparent_and_opaque() {
    init();
    let mut bm = Bitmap::new(7, 5).unwrap();
    bm.fill(Pixel::pack_argb(255, 1, 2, 3));
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.clear(Color::transparent());
    }
    assert!(all_pixels(&bm, Pixel::zero()));
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.clear(Color::white());
    }
    assert!(all_pixels(&bm, Pixel::from_raw(0xFFFF_FFFF)));
}

#[test]
fn t01_clear_ignores_transform() {
    init();
    let mut bm = Bitmap::new(4, 4).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.scale(0.1, 0.1);
        canvas.rotate(0.7);
        canvas.clear(Color::black());
    }
    assert!(all_pixels(&bm, Color::black().to_pixel()));
}

#[test]
fn t01_clear_pins_color() {
    init();
    let mut bm = Bitmap::new(2, 2).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.clear(Color::argb(2.0, -1.0, 0.5, 3.0));
    }
    // 0.5 * 255 = 127.5 rounds up
    assert!(all_pixels(&bm, Pixel::pack_argb(255, 0, 128, 255)));
}

#[test]
fn t01_clear_leaves_stride_padding() {
    init();
    let pad = Pixel::from_raw(0x1234_5678);
    let mut bm = Bitmap::from_pixels(3, 2, 5, vec![pad; 10]).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.clear(Color::white());
    }
    for y in 0 .. 2 {
        for x in 0 .. 5 {
            let p = bm.pixels()[y * 5 + x];
            let want = if x < 3 { Pixel::from_raw(0xFFFF_FFFF) } else { pad };
            assert_eq!(p, want, "{} {}", x, y);
        }
    }
}

#[test]
fn t01_invalid_bitmap() {
    let mut bm = Bitmap::default();
    assert!(create_canvas(&mut bm).is_none());
}
