/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Free functions with the semantics scripts rely on
//!
//! These are thin, fail-soft wrappers around [`ImageBuffer`], usable
//! without setting up a [`Runtime`](crate::runtime::Runtime).
//! An absent image is `None`.
use std::path::Path;

pub use imglang_core::clamp;
use imglang_core::Color;
use log::trace;

use crate::codecs::{ImageCodec, ZuneCodec};
use crate::image::ImageBuffer;

/// Create a transparent image of the given dimensions
pub fn create_image(width: usize, height: usize) -> ImageBuffer {
    ImageBuffer::new(width, height)
}

/// Load an image, returning a blank 100x100 image if the file
/// does not exist or cannot be decoded
pub fn load_image<P: AsRef<Path>>(path: P) -> ImageBuffer {
    ImageBuffer::load(path)
}

/// Save an image, ignoring every failure
///
/// Saving `None` does nothing.
pub fn save_image<P: AsRef<Path>>(image: Option<&ImageBuffer>, path: P) {
    save_image_with_codec(image, path, &ZuneCodec::default())
}

/// Save an image with a specific codec, ignoring every failure
pub fn save_image_with_codec<P: AsRef<Path>, C: ImageCodec + ?Sized>(
    image: Option<&ImageBuffer>, path: P, codec: &C
) {
    let Some(image) = image else {
        return;
    };
    // scripts never observe a failed save
    if let Err(err) = image.save_with_codec(path.as_ref(), codec) {
        trace!("Ignoring failed save to {:?}, reason {:?}", path.as_ref(), err);
    }
}

/// Image width, `0` for an absent image
pub fn get_width(image: Option<&ImageBuffer>) -> usize {
    image.map_or(0, ImageBuffer::width)
}

/// Image height, `0` for an absent image
pub fn get_height(image: Option<&ImageBuffer>) -> usize {
    image.map_or(0, ImageBuffer::height)
}

/// Get the pixel at (x, y)
///
/// # Panics
/// If (x, y) lies outside the image
pub fn get_pixel(image: &ImageBuffer, x: usize, y: usize) -> Color {
    image.get_pixel(x, y)
}

/// Set the pixel at (x, y)
///
/// # Panics
/// If (x, y) lies outside the image
pub fn set_pixel(image: &mut ImageBuffer, x: usize, y: usize, color: Color) {
    image.set_pixel(x, y, color)
}

/// Create an opaque color, channels are not clamped
pub fn to_color(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r, g, b)
}
