/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The codec collaborator
//!
//! Image buffers never parse files themselves, they hand a path to an
//! [`ImageCodec`] and get back interleaved `[R,G,B,A]` bytes, or hand
//! those bytes over to be written.
//!
//! [`ZuneCodec`] is the default implementation and uses `zune-image`,
//! which formats are available depends on the enabled features
//! (`png`, `ppm`, `qoi`, `bmp`, `farbfeld`, `jpeg`).
//!
//! # Note on conversions
//! - Decoded images are converted to 8 bit RGBA whatever their stored
//!   depth and colorspace, e.g a 16 bit grayscale PNG is scaled to 8 bits
//!   and expanded to four channels.
//! - Only the first frame of an animated image is kept.
use std::path::Path;

use imglang_core::RuntimeOptions;
use log::{debug, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_image::codecs::ImageFormat;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::errors::RuntimeErrors;

/// Number of bytes used by a single interleaved RGBA pixel
pub const RGBA_COMPONENTS: usize = 4;

/// Pixels handed back by a codec after decoding
///
/// The pixel bytes are owned, nothing in here borrows from
/// the decoder that produced them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedImage {
    pub width:  usize,
    pub height: usize,
    /// Interleaved `[R,G,B,A]` pixels in row-major order
    pub pixels: Vec<u8>
}

/// Decodes files into RGBA pixels and encodes RGBA pixels into files
pub trait ImageCodec {
    /// Decode the file at `path`
    ///
    /// # Returns
    /// - `Ok(DecodedImage)`: with `pixels.len() == width * height * 4`
    /// - `Err`: The file could not be read or is not a supported image
    fn decode(&self, path: &Path) -> Result<DecodedImage, RuntimeErrors>;

    /// Encode `pixels` (interleaved RGBA, row-major) to `path`
    ///
    /// The destination may be left partially written on failure
    fn encode(
        &self, width: usize, height: usize, pixels: &[u8], path: &Path
    ) -> Result<(), RuntimeErrors>;
}

/// Codec backed by the zune family of decoders and encoders
#[derive(Copy, Clone, Debug)]
pub struct ZuneCodec {
    options: DecoderOptions
}

impl Default for ZuneCodec {
    fn default() -> Self {
        ZuneCodec::new(&RuntimeOptions::default())
    }
}

impl ZuneCodec {
    /// Create a codec respecting the decode limits in `options`
    pub fn new(options: &RuntimeOptions) -> ZuneCodec {
        let options = DecoderOptions::default()
            .set_max_width(options.get_max_width())
            .set_max_height(options.get_max_height());

        ZuneCodec { options }
    }

    /// Pick an encoder from the file extension
    ///
    /// Files without an extension, or with one we have no encoder
    /// for (e.g `bmp` and `ff`, which zune only decodes), are written as PNG.
    pub fn format_for_path(path: &Path) -> ImageFormat {
        path.extension()
            .and_then(|ext| encoder_for_extension(&ext.to_string_lossy().to_ascii_lowercase()))
            .unwrap_or(ImageFormat::PNG)
    }
}

fn encoder_for_extension(extension: &str) -> Option<ImageFormat> {
    match extension {
        #[cfg(feature = "qoi")]
        "qoi" => Some(ImageFormat::QOI),
        #[cfg(feature = "ppm")]
        "ppm" | "pam" | "pgm" | "pbm" => Some(ImageFormat::PPM),
        #[cfg(feature = "jpeg")]
        "jpeg" | "jpg" => Some(ImageFormat::JPEG),
        _ => None
    }
}

impl ImageCodec for ZuneCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage, RuntimeErrors> {
        // the decoded image lives only inside this call
        let mut image = Image::open_with_options(path, self.options)?;

        if image.depth() != BitDepth::Eight {
            trace!("Converting {:?} from {:?} to 8 bits", path, image.depth());
            Depth::new(BitDepth::Eight).execute(&mut image)?;
        }
        if image.colorspace() != ColorSpace::RGBA {
            trace!("Converting {:?} from {:?} to RGBA", path, image.colorspace());
            ColorspaceConv::new(ColorSpace::RGBA).execute(&mut image)?;
        }
        let (width, height) = image.dimensions();

        let mut frames = image.flatten_to_u8();

        if frames.len() > 1 {
            debug!(
                "{:?} has {} frames, only the first one is used",
                path,
                frames.len()
            );
        }
        if frames.is_empty() {
            return Err(RuntimeErrors::GenericStr("Decoded image contains no frames"));
        }
        let pixels = frames.swap_remove(0);

        let expected = width * height * RGBA_COMPONENTS;

        if pixels.len() != expected {
            return Err(RuntimeErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(DecodedImage {
            width,
            height,
            pixels
        })
    }

    fn encode(
        &self, width: usize, height: usize, pixels: &[u8], path: &Path
    ) -> Result<(), RuntimeErrors> {
        if width == 0 || height == 0 {
            return Err(RuntimeErrors::GenericStr("Cannot encode an image with no pixels"));
        }
        let expected = width * height * RGBA_COMPONENTS;

        if pixels.len() != expected {
            return Err(RuntimeErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let format = ZuneCodec::format_for_path(path);

        trace!("Encoding {width}x{height} image to {:?} as {:?}", path, format);

        let image = Image::from_u8(pixels, width, height, ColorSpace::RGBA);
        image.save_to(path, format)?;

        Ok(())
    }
}
