/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible in the runtime
//!
//! Most runtime operations are fail-soft and never surface these,
//! they show up from the strict variants (e.g [`ImageBuffer::open`](crate::image::ImageBuffer::open))
//! and from builtin dispatch.
use std::fmt::{Debug, Display, Formatter};

use zune_image::errors::ImageErrors;

/// All errors that can occur inside the runtime
pub enum RuntimeErrors {
    /// The codec failed to decode or encode an image
    CodecErrors(ImageErrors),
    /// The file system could not be queried about a path
    IoErrors(std::io::Error),
    /// No file exists at the given path
    FileNotFound(String),
    /// Pixel buffer length does not match the dimensions,
    /// expected then found
    DimensionsMisMatch(usize, usize),
    /// A script asked for negative image dimensions or dimensions
    /// above the configured maximum
    InvalidDimensions(i64, i64),
    /// Pixel coordinates lie outside the image,
    /// `(x, y, width, height)`
    OutOfBounds(i64, i64, usize, usize),
    /// A color channel outside `0..=255`, channel name and value
    ChannelOutOfRange(&'static str, i64),
    /// No builtin with this name
    UnknownBuiltin(String),
    /// Builtin called with the wrong number of arguments,
    /// name, expected and found
    ArityMismatch(&'static str, usize, usize),
    /// Builtin argument has the wrong type,
    /// builtin, argument position, expected type and found type
    TypeMismatch(&'static str, usize, &'static str, &'static str),
    /// Member access on a value that does not have that member
    UnknownMember(&'static str, String),
    /// Generic errors
    GenericStr(&'static str)
}

impl Debug for RuntimeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CodecErrors(ref error) => {
                writeln!(f, "Codec error: {:?}", error)
            }
            Self::IoErrors(ref error) => {
                writeln!(f, "I/O error: {}", error)
            }
            Self::FileNotFound(ref path) => {
                writeln!(f, "No file found at {}", path)
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {} but found {}",
                    expected, found
                )
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid image dimensions {}x{}, dimensions cannot be negative or exceed the configured maximum",
                    width, height
                )
            }
            Self::OutOfBounds(x, y, width, height) => {
                writeln!(
                    f,
                    "Pixel ({}, {}) is outside an image of {}x{}",
                    x, y, width, height
                )
            }
            Self::ChannelOutOfRange(channel, value) => {
                writeln!(
                    f,
                    "Color channel {} has value {}, expected a value between 0 and 255",
                    channel, value
                )
            }
            Self::UnknownBuiltin(ref name) => {
                writeln!(f, "Unknown builtin function {}", name)
            }
            Self::ArityMismatch(name, expected, found) => {
                writeln!(
                    f,
                    "Builtin {} expects {} arguments but found {}",
                    name, expected, found
                )
            }
            Self::TypeMismatch(name, position, expected, found) => {
                writeln!(
                    f,
                    "Argument {} of {} should be {} but found {}",
                    position, name, expected, found
                )
            }
            Self::UnknownMember(type_name, ref member) => {
                writeln!(f, "Type {} has no member {}", type_name, member)
            }
            Self::GenericStr(err) => {
                writeln!(f, "{}", err)
            }
        }
    }
}

impl Display for RuntimeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RuntimeErrors {}

impl From<ImageErrors> for RuntimeErrors {
    fn from(from: ImageErrors) -> Self {
        RuntimeErrors::CodecErrors(from)
    }
}

impl From<std::io::Error> for RuntimeErrors {
    fn from(from: std::io::Error) -> Self {
        RuntimeErrors::IoErrors(from)
    }
}
