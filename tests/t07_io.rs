
extern crate scancanvas;
use scancanvas::*;
use scancanvas::io::{img_diff, read_file, write_file};

use std::path::PathBuf;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tmp(name: &str) -> PathBuf {
    let mut dir = PathBuf::from("tests");
    dir.push("tmp");
    std::fs::create_dir_all(&dir).unwrap();
    dir.push(name);
    dir
}

fn scene() -> Bitmap {
    let mut bm = Bitmap::new(24, 16).unwrap();
    {
        let mut canvas = create_canvas(&mut bm).unwrap();
        canvas.clear(Color::white());
        canvas.fill_rect(&Rect::ltrb(2.0, 2.0, 10.0, 14.0), Color::argb(1.0, 0.2, 0.4, 0.8));
        let mut path = Path::new();
        path.add_circle(Point::new(16.0, 8.0), 6.0, Direction::Clockwise);
        canvas.draw_path(&path, &Paint::new(Color::argb(1.0, 1.0, 0.5, 0.0)));
    }
    bm
}

#[test]
fn t07_write_and_read_png() {
    init();
    let file = tmp("t07_write_and_read.png");
    let mut bm = Bitmap::new(3, 2).unwrap();
    bm.set(0, 0, Pixel::pack_argb(255, 10, 20, 30));
    bm.set(1, 0, Pixel::pack_argb(128, 128, 0, 0));
    bm.set(2, 1, Pixel::pack_argb(255, 255, 255, 255));
    write_file(&bm, &file).unwrap();

    let back = read_file(&file).unwrap();
    assert_eq!((back.width(), back.height()), (3, 2));
    assert_eq!(back.pixels(), bm.pixels());
    assert!(!back.is_opaque());
}

#[test]
fn t07_opaque_scene_round_trips() {
    init();
    let file = tmp("t07_scene.png");
    let bm = scene();
    write_file(&bm, &file).unwrap();
    let back = read_file(&file).unwrap();
    assert!(back.is_opaque());
    assert_eq!(back.pixels(), bm.pixels());
}

#[test]
fn t07_img_diff() {
    init();
    let a = tmp("t07_diff_a.png");
    let b = tmp("t07_diff_b.png");
    let c = tmp("t07_diff_c.png");
    let mut bm = scene();
    write_file(&bm, &a).unwrap();
    write_file(&bm, &b).unwrap();
    assert!(img_diff(&a, &b).unwrap());

    bm.set(5, 5, Pixel::zero());
    write_file(&bm, &b).unwrap();
    assert!(!img_diff(&a, &b).unwrap());

    write_file(&Bitmap::new(3, 3).unwrap(), &c).unwrap();
    assert!(!img_diff(&a, &c).unwrap());
}

#[test]
fn t07_errors() {
    init();
    match read_file(tmp("t07_does_not_exist.png")) {
        Err(Error::Image(_)) => {},
        other => panic!("expected an image error, got {:?}", other.map(|b| b.width())),
    }
    let bm = Bitmap::new(2, 2).unwrap();
    assert!(write_file(&bm, tmp("t07_unknown.format")).is_err());
}
