use super::*;

fn frame_2x1() -> Frame {
    Frame {
        width: 2,
        height: 1,
        data: vec![0x0B, 0x0D, 0x10, 0xC9, 0x4A, 0x42],
    }
}

#[test]
fn writes_readable_rgb_png() {
    let dir = std::env::temp_dir().join("threshold_cartography_png_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tiny.png");

    write_png(&frame_2x1(), &path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    let rgb = img.to_rgb8();
    assert_eq!(rgb.dimensions(), (2, 1));
    assert_eq!(rgb.get_pixel(1, 0).0, [0xC9, 0x4A, 0x42]);
}

#[test]
fn overwrites_existing_file() {
    let dir = std::env::temp_dir().join("threshold_cartography_png_overwrite");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.png");
    std::fs::write(&path, b"stale").unwrap();

    write_png(&frame_2x1(), &path).unwrap();
    assert_eq!(image::open(&path).unwrap().width(), 2);
}

#[test]
fn missing_directory_is_an_output_write_error() {
    let path = std::env::temp_dir()
        .join("threshold_cartography_no_such_dir")
        .join("nested")
        .join("out.png");
    let err = write_png(&frame_2x1(), &path).unwrap_err();
    assert!(matches!(err, PosterError::OutputWrite { .. }));
    assert!(!path.exists());
}

#[test]
fn short_buffer_is_rejected_before_touching_disk() {
    let dir = std::env::temp_dir().join("threshold_cartography_png_short");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("short.png");
    let _ = std::fs::remove_file(&path);

    let mut frame = frame_2x1();
    frame.data.pop();
    assert!(write_png(&frame, &path).is_err());
    assert!(!path.exists());
}
