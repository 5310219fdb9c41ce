/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use imglang_runtime::functions::{get_height, get_pixel, get_width, load_image, save_image};
use imglang_runtime::image::ImageBuffer;
use imglang_runtime::Color;
use nanorand::Rng;

fn setup_logger() {
    // other tests may have installed it already
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Trace)
        .init();
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("imglang-{}-{}", std::process::id(), name))
}

fn random_image(width: usize, height: usize, opaque: bool) -> ImageBuffer {
    let mut rand = nanorand::WyRand::new_seed((width * 31 + height) as u64);
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let alpha = if opaque { 255 } else { rand.generate::<u8>() };
            let color = Color::from_argb(
                alpha,
                rand.generate::<u8>(),
                rand.generate::<u8>(),
                rand.generate::<u8>()
            );
            image.set_pixel(x, y, color);
        }
    }
    image
}

fn round_trip(image: &ImageBuffer, name: &str) {
    let path = temp_path(name);

    save_image(Some(image), &path);
    assert!(path.is_file(), "{:?} was not written", path);

    let loaded = load_image(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(get_width(Some(&loaded)), image.width());
    assert_eq!(get_height(Some(&loaded)), image.height());

    for y in 0..image.height() {
        for x in 0..image.width() {
            assert_eq!(
                get_pixel(&loaded, x, y),
                get_pixel(image, x, y),
                "Pixel ({x}, {y}) differs after a round trip through {name}"
            );
        }
    }
}

#[test]
fn png_round_trip() {
    setup_logger();
    round_trip(&random_image(17, 9, false), "round-trip.png");
}

#[test]
fn qoi_round_trip() {
    setup_logger();
    round_trip(&random_image(8, 13, false), "round-trip.qoi");
}

#[test]
fn ppm_round_trip() {
    setup_logger();
    round_trip(&random_image(5, 4, true), "round-trip.ppm");
}

#[test]
fn unknown_extension_is_written_as_png() {
    setup_logger();
    round_trip(&random_image(4, 4, false), "round-trip.unknown");
}

#[test]
fn decode_only_extension_is_written_as_png() {
    setup_logger();
    round_trip(&random_image(6, 3, false), "round-trip.ff");
}

#[test]
fn documented_example_pixels_survive() {
    setup_logger();

    let mut image = ImageBuffer::new(3, 4);
    image.set_pixel(1, 1, Color::from_rgb(10, 20, 30));
    image.set_pixel(2, 3, Color::from_rgb(255, 0, 128));

    round_trip(&image, "example.png");
}

#[test]
fn open_reports_corrupt_files() {
    setup_logger();

    let path = temp_path("corrupt.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let strict = ImageBuffer::open(&path);
    let lenient = load_image(&path);
    let _ = std::fs::remove_file(&path);

    assert!(strict.is_err());
    assert_eq!(lenient.dimensions(), (100, 100));
}
