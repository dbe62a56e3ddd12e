
extern crate scancanvas;
use scancanvas::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn white() -> Pixel {
    Pixel::from_raw(0xFFFF_FFFF)
}

#[test]
fn t05_layer_bounds_outside_and_one_pixel_in() {
    init();
    let mut bm = Bitmap::new(10, 10).unwrap();
    let mut canvas = create_canvas(&mut bm).unwrap();

    // Bounds end exactly at the origin; drawing goes straight to the surface
    canvas.save_layer(Some(&Rect::xywh(-1000.0, -1000.0, 1000.0, 1000.0)), &Paint::default());
    canvas.clear(Color::white());
    canvas.restore();
    assert!(canvas.bitmap().rows().all(|r| r.iter().all(|p| *p == white())));

    canvas.clear(Color::transparent());

    // One pixel overlaps the surface
    canvas.save_layer(Some(&Rect::xywh(-1000.0, -1000.0, 1001.0, 1001.0)), &Paint::default());
    canvas.clear(Color::white());
    assert!(canvas.bitmap().rows().all(|r| r.iter().all(|p| *p == Pixel::zero())));
    canvas.restore();
    drop(canvas);

    for y in 0 .. 10 {
        for x in 0 .. 10 {
            let want = if (x, y) == (0, 0) { white() } else { Pixel::zero() };
            assert_eq!(bm.get(x, y), want, "{} {}", x, y);
        }
    }
}

#[test]
fn t05_unbounded_layer_covers_surface() {
    init();
    let mut bm = Bitmap::new(6, 4).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.save_layer(None, &Paint::default());
        canvas.fill_rect(&Rect::ltrb(0.0, 0.0, 6.0, 4.0), Color::argb(1.0, 0.0, 1.0, 0.0));
        canvas.restore();
    }
    let green = Pixel::pack_argb(255, 0, 255, 0);
    assert!(bm.rows().all(|r| r.iter().all(|p| *p == green)));
}

#[test]
fn t05_layer_blend_mode_on_restore() {
    init();
    let mut bm = Bitmap::new(4, 4).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.clear(Color::white());
        let clear = Paint::default().with_blend_mode(BlendMode::Clear);
        canvas.save_layer(Some(&Rect::ltrb(0.0, 0.0, 2.0, 2.0)), &clear);
        canvas.restore();
    }
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            let want = if x < 2 && y < 2 { Pixel::zero() } else { white() };
            assert_eq!(bm.get(x, y), want, "{} {}", x, y);
        }
    }
}

#[test]
fn t05_layer_filter_on_restore() {
    init();
    // DestIn with half alpha fades the whole layer
    let fade = BlendFilter::new(BlendMode::DestIn, Color::argb(0.5, 0.0, 0.0, 0.0));
    let mut bm = Bitmap::new(3, 3).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.save_layer(None, &Paint::default().with_filter(&fade));
        canvas.clear(Color::argb(1.0, 1.0, 0.0, 0.0));
        canvas.restore();
    }
    assert!(bm.rows().all(|r| r.iter().all(|p| *p == Pixel::pack_argb(128, 128, 0, 0))));
}

#[test]
fn t05_layer_isolates_group() {
    init();
    // Two overlapping half transparent rects drawn in a layer keep their
    // own blending, the layer is then composited once
    let mut bm = Bitmap::new(4, 1).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.save_layer(None, &Paint::default());
        let src = Paint::new(Color::argb(0.5, 1.0, 1.0, 1.0)).with_blend_mode(BlendMode::Src);
        canvas.draw_rect(&Rect::ltrb(0.0, 0.0, 3.0, 1.0), &src);
        canvas.draw_rect(&Rect::ltrb(1.0, 0.0, 4.0, 1.0), &src);
        canvas.restore();
    }
    let half = Pixel::pack_argb(128, 128, 128, 128);
    assert!(bm.row(0).iter().all(|p| *p == half), "{:?}", bm.row(0));
}

#[test]
fn t05_draws_in_layer_use_layer_origin() {
    init();
    let mut bm = Bitmap::new(8, 8).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.save_layer(Some(&Rect::ltrb(4.0, 4.0, 8.0, 8.0)), &Paint::default());
        // device (5,5) - (7,7), inside the layer
        canvas.fill_rect(&Rect::ltrb(5.0, 5.0, 7.0, 7.0), Color::white());
        // outside the layer, lost
        canvas.fill_rect(&Rect::ltrb(0.0, 0.0, 2.0, 2.0), Color::white());
        canvas.restore();
    }
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let want = if (5 .. 7).contains(&x) && (5 .. 7).contains(&y) { white() } else { Pixel::zero() };
            assert_eq!(bm.get(x, y), want, "{} {}", x, y);
        }
    }
}

#[test]
fn t05_layer_bounds_follow_transform() {
    init();
    let mut bm = Bitmap::new(8, 8).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.translate(2.0, 2.0);
        canvas.scale(2.0, 2.0);
        // device (2,2) - (6,6)
        canvas.save_layer(Some(&Rect::ltrb(0.0, 0.0, 2.0, 2.0)), &Paint::default());
        canvas.clear(Color::white());
        canvas.translate(100.0, 0.0);
        canvas.restore();
        // transform restored by the layer
        canvas.fill_rect(&Rect::ltrb(-1.0, -1.0, 0.0, 0.0), Color::white());
        assert_eq!(canvas.ctm(), Transform::translate(2.0, 2.0) * Transform::scale(2.0, 2.0));
    }
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let want = (x < 2 && y < 2) || ((2 .. 6).contains(&x) && (2 .. 6).contains(&y));
            assert_eq!(bm.get(x, y) != Pixel::zero(), want, "{} {}", x, y);
        }
    }
}
