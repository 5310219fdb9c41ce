/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - a fixed width and height
//!     - and a dense grid of [`Color`]s
//!         - stored in row-major order, `index = y * width + x`
//!
//! Dimensions are fixed for the lifetime of a buffer, there is
//! no resizing. Decoding and encoding is delegated to an
//! [`ImageCodec`].
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::Path;

use imglang_core::{Color, RuntimeOptions};
use log::{trace, warn};

use crate::codecs::{DecodedImage, ImageCodec, ZuneCodec, RGBA_COMPONENTS};
use crate::errors::RuntimeErrors;

/// An owned image of ARGB pixels
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<Color>
}

impl ImageBuffer {
    /// Create a new image with all pixels fully transparent black
    ///
    /// Zero-sized images are allowed, they simply have no pixels.
    ///
    /// # Panics
    /// If `width * height` overflows a [`usize`]
    pub fn new(width: usize, height: usize) -> ImageBuffer {
        let size = width
            .checked_mul(height)
            .expect("Image dimensions overflow usize");

        ImageBuffer {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; size]
        }
    }

    /// Create an image from interleaved `[R,G,B,A]` bytes
    ///
    /// # Returns
    /// - `Err(RuntimeErrors::DimensionsMisMatch)` if `pixels` does not hold
    ///   exactly `width * height` pixels
    pub fn from_rgba(width: usize, height: usize, pixels: &[u8]) -> Result<ImageBuffer, RuntimeErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(RGBA_COMPONENTS))
            .ok_or(RuntimeErrors::GenericStr("Image dimensions overflow usize"))?;

        if pixels.len() != expected {
            return Err(RuntimeErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let pixels = pixels
            .chunks_exact(RGBA_COMPONENTS)
            .map(|px| Color::from_rgba_array([px[0], px[1], px[2], px[3]]))
            .collect();

        Ok(ImageBuffer {
            width,
            height,
            pixels
        })
    }

    /// Open an image file using the default codec, propagating failures
    ///
    /// See [`load`](Self::load) for the fail-soft variant scripts use.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ImageBuffer, RuntimeErrors> {
        Self::open_with_codec(path, &ZuneCodec::default())
    }

    /// Open an image file with a specific codec, propagating failures
    ///
    /// # Returns
    /// - `Err(RuntimeErrors::FileNotFound)`: No regular file exists at `path`
    /// - `Err(RuntimeErrors::IoErrors)`: The path could not be inspected,
    ///   e.g a parent component is not a directory
    /// - `Err(_)`: Any error reported by the codec
    pub fn open_with_codec<P: AsRef<Path>, C: ImageCodec + ?Sized>(
        path: P, codec: &C
    ) -> Result<ImageBuffer, RuntimeErrors> {
        let path = path.as_ref();

        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(RuntimeErrors::FileNotFound(path.display().to_string()));
            }
            Err(err) => return Err(err.into())
        };
        if !metadata.is_file() {
            return Err(RuntimeErrors::FileNotFound(path.display().to_string()));
        }
        let DecodedImage {
            width,
            height,
            pixels
        } = codec.decode(path)?;

        ImageBuffer::from_rgba(width, height, &pixels)
    }

    /// Load an image, never failing
    ///
    /// If `path` is not a regular file, or the codec cannot decode it,
    /// a blank 100x100 image is returned instead.
    pub fn load<P: AsRef<Path>>(path: P) -> ImageBuffer {
        let options = RuntimeOptions::default();
        Self::load_with_codec(path, &ZuneCodec::new(&options), &options)
    }

    /// Load an image with a specific codec, never failing
    ///
    /// The fallback image dimensions come from `options`.
    pub fn load_with_codec<P: AsRef<Path>, C: ImageCodec + ?Sized>(
        path: P, codec: &C, options: &RuntimeOptions
    ) -> ImageBuffer {
        let path = path.as_ref();

        let blank = || ImageBuffer::new(options.get_fallback_width(), options.get_fallback_height());

        if !path.is_file() {
            trace!("No file at {:?}, using a blank image", path);
            return blank();
        }
        match Self::open_with_codec(path, codec) {
            Ok(image) => image,
            Err(err) => {
                warn!("Could not decode {:?}, using a blank image, reason {:?}", path, err);
                blank()
            }
        }
    }

    /// Save the image using the default codec
    ///
    /// The encoder is chosen from the file extension, unknown extensions are
    /// written as PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RuntimeErrors> {
        self.save_with_codec(path, &ZuneCodec::default())
    }

    /// Save the image with a specific codec
    pub fn save_with_codec<P: AsRef<Path>, C: ImageCodec + ?Sized>(
        &self, path: P, codec: &C
    ) -> Result<(), RuntimeErrors> {
        codec.encode(self.width, self.height, &self.to_rgba(), path.as_ref())
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Return the pixels as interleaved `[R,G,B,A]` bytes
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba_array()).collect()
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Get the pixel at (x, y)
    ///
    /// # Panics
    /// If (x, y) lies outside the image. Callers are expected
    /// to stay in bounds, see [`pixel`](Self::pixel) for a checked read
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        match self.pixel(x, y) {
            Some(color) => color,
            None => panic!(
                "Pixel ({x}, {y}) is outside an image of {}x{}",
                self.width, self.height
            )
        }
    }

    /// Set the pixel at (x, y)
    ///
    /// # Panics
    /// If (x, y) lies outside the image, see
    /// [`try_set_pixel`](Self::try_set_pixel) for a checked write
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if let Err(err) = self.try_set_pixel(x, y, color) {
            panic!("{}", err);
        }
    }

    /// Get the pixel at (x, y) or `None` if it lies outside the image
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at (x, y) or report that it lies outside the image
    #[inline]
    pub fn try_set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), RuntimeErrors> {
        match self.idx(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                Ok(())
            }
            None => Err(RuntimeErrors::OutOfBounds(
                x as i64,
                y as i64,
                self.width,
                self.height
            ))
        }
    }
}

impl Display for ImageBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image [Width={}, Height={}]", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;

    use imglang_core::{Color, RuntimeOptions};

    use super::ImageBuffer;
    use crate::codecs::{DecodedImage, ImageCodec};
    use crate::errors::RuntimeErrors;

    /// Codec that records how it was called and returns canned pixels
    struct MockCodec {
        decoded: Option<DecodedImage>,
        encoded: Cell<usize>
    }

    impl ImageCodec for MockCodec {
        fn decode(&self, _: &Path) -> Result<DecodedImage, RuntimeErrors> {
            self.decoded
                .clone()
                .ok_or(RuntimeErrors::GenericStr("corrupt"))
        }

        fn encode(&self, _: usize, _: usize, _: &[u8], _: &Path) -> Result<(), RuntimeErrors> {
            self.encoded.set(self.encoded.get() + 1);
            Err(RuntimeErrors::GenericStr("disk full"))
        }
    }

    fn this_file() -> &'static Path {
        // any regular file works, the mock never reads it
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/image.rs"))
    }

    #[test]
    fn new_image_is_transparent() {
        let image = ImageBuffer::new(3, 4);

        assert_eq!(image.dimensions(), (3, 4));
        assert_eq!(image.pixels().len(), 12);
        assert!(image.pixels().iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn zero_sized_images_are_valid() {
        let image = ImageBuffer::new(0, 7);

        assert_eq!(image.width(), 0);
        assert_eq!(image.height(), 7);
        assert!(image.pixels().is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut image = ImageBuffer::new(3, 4);
        image.set_pixel(1, 1, Color::from_rgb(10, 20, 30));

        let pixel = image.get_pixel(1, 1);
        assert_eq!((pixel.r(), pixel.g(), pixel.b(), pixel.a()), (10, 20, 30, 255));
        assert_eq!(image.get_pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn layout_is_row_major() {
        let mut image = ImageBuffer::new(3, 2);
        image.set_pixel(2, 0, Color::from_rgb(1, 1, 1));
        image.set_pixel(0, 1, Color::from_rgb(2, 2, 2));

        assert_eq!(image.pixels()[2], Color::from_rgb(1, 1, 1));
        assert_eq!(image.pixels()[3], Color::from_rgb(2, 2, 2));
    }

    #[test]
    fn checked_access_does_not_wrap_rows() {
        let mut image = ImageBuffer::new(3, 2);

        // (3, 0) would alias (0, 1) with naive indexing
        assert_eq!(image.pixel(3, 0), None);
        assert!(matches!(
            image.try_set_pixel(3, 0, Color::from_rgb(1, 2, 3)),
            Err(RuntimeErrors::OutOfBounds(3, 0, 3, 2))
        ));
        assert_eq!(image.get_pixel(0, 1), Color::TRANSPARENT);
    }

    #[test]
    #[should_panic]
    fn get_pixel_out_of_bounds_panics() {
        let image = ImageBuffer::new(3, 2);
        let _ = image.get_pixel(0, 2);
    }

    #[test]
    #[should_panic]
    fn set_pixel_out_of_bounds_panics() {
        let mut image = ImageBuffer::new(3, 2);
        image.set_pixel(5, 5, Color::from_rgb(0, 0, 0));
    }

    #[test]
    fn rgba_conversion() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let image = ImageBuffer::from_rgba(2, 1, &bytes).unwrap();

        assert_eq!(image.get_pixel(0, 0), Color::from_argb(4, 1, 2, 3));
        assert_eq!(image.get_pixel(1, 0), Color::from_argb(8, 5, 6, 7));
        assert_eq!(image.to_rgba(), bytes);
    }

    #[test]
    fn rgba_length_mismatch() {
        assert!(matches!(
            ImageBuffer::from_rgba(2, 2, &[0; 15]),
            Err(RuntimeErrors::DimensionsMisMatch(16, 15))
        ));
    }

    #[test]
    fn load_missing_file_gives_blank_image() {
        let image = ImageBuffer::load("nonexistent.png");

        assert_eq!(image.dimensions(), (100, 100));
    }

    #[test]
    fn load_fallback_size_comes_from_options() {
        let options = RuntimeOptions::default().set_fallback_dimensions(8, 9);
        let codec = MockCodec {
            decoded: None,
            encoded: Cell::new(0)
        };
        let image = ImageBuffer::load_with_codec("nonexistent.png", &codec, &options);

        assert_eq!(image.dimensions(), (8, 9));
    }

    #[test]
    fn open_missing_file_is_an_error() {
        assert!(matches!(
            ImageBuffer::open("nonexistent.png"),
            Err(RuntimeErrors::FileNotFound(_))
        ));
    }

    #[test]
    fn open_directory_is_not_found() {
        assert!(matches!(
            ImageBuffer::open(env!("CARGO_MANIFEST_DIR")),
            Err(RuntimeErrors::FileNotFound(_))
        ));
    }

    #[test]
    #[cfg(unix)]
    fn open_reports_unreadable_paths() {
        // a regular file used as a directory
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/image.rs/child.png");

        assert!(matches!(
            ImageBuffer::open(path),
            Err(RuntimeErrors::IoErrors(_))
        ));
        assert_eq!(ImageBuffer::load(path).dimensions(), (100, 100));
    }

    #[test]
    fn corrupt_file_falls_back_when_loading() {
        let codec = MockCodec {
            decoded: None,
            encoded: Cell::new(0)
        };
        let options = RuntimeOptions::default();

        assert!(ImageBuffer::open_with_codec(this_file(), &codec).is_err());

        let image = ImageBuffer::load_with_codec(this_file(), &codec, &options);
        assert_eq!(image.dimensions(), (100, 100));
    }

    #[test]
    fn load_copies_decoded_pixels() {
        let codec = MockCodec {
            decoded: Some(DecodedImage {
                width:  1,
                height: 2,
                pixels: vec![9, 8, 7, 255, 1, 2, 3, 255]
            }),
            encoded: Cell::new(0)
        };
        let image = ImageBuffer::load_with_codec(this_file(), &codec, &RuntimeOptions::default());

        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.get_pixel(0, 1), Color::from_rgb(1, 2, 3));
    }

    #[test]
    fn save_reports_codec_errors() {
        let codec = MockCodec {
            decoded: None,
            encoded: Cell::new(0)
        };
        let image = ImageBuffer::new(2, 2);

        assert!(image.save_with_codec("out.png", &codec).is_err());
        assert_eq!(codec.encoded.get(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(ImageBuffer::new(3, 4).to_string(), "Image [Width=3, Height=4]");
    }
}
