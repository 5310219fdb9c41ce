/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color information for a single pixel
//!
//! A color is four 8-bit channels, alpha, red, green and blue,
//! carried around by value.
use core::fmt::{Display, Formatter};

/// A single ARGB pixel value.
///
/// Colors have no identity, two colors with the same channels
/// are the same color.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color {
    a: u8,
    r: u8,
    g: u8,
    b: u8
}

impl Color {
    /// Fully transparent black, the contents of a freshly created image
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    /// Create an opaque color from its red, green and blue channels
    ///
    /// Alpha is fixed at `255`. Channels are taken as-is, callers
    /// wanting to fit wider values should pass them through
    /// [`clamp`](crate::clamp::clamp) first.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color::from_argb(255, r, g, b)
    }

    /// Create a color from all four channels
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Color {
        Color { a, r, g, b }
    }

    /// Create a color from an interleaved `[R,G,B,A]` pixel
    pub const fn from_rgba_array(pixel: [u8; 4]) -> Color {
        Color::from_argb(pixel[3], pixel[0], pixel[1], pixel[2])
    }

    /// Return the color as an interleaved `[R,G,B,A]` pixel,
    /// the layout image encoders expect
    pub const fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Alpha channel, `255` is fully opaque
    pub const fn a(self) -> u8 {
        self.a
    }
    /// Red channel
    pub const fn r(self) -> u8 {
        self.r
    }
    /// Green channel
    pub const fn g(self) -> u8 {
        self.g
    }
    /// Blue channel
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Look up a channel by the name scripts use for member access
    ///
    /// Accepts `r`, `g`, `b` and `a` in either case.
    ///
    /// # Returns
    /// - `Some(value)`: The channel value
    /// - `None`: The name is not a channel
    pub fn channel(self, name: &str) -> Option<u8> {
        if name.eq_ignore_ascii_case("r") {
            Some(self.r)
        } else if name.eq_ignore_ascii_case("g") {
            Some(self.g)
        } else if name.eq_ignore_ascii_case("b") {
            Some(self.b)
        } else if name.eq_ignore_ascii_case("a") {
            Some(self.a)
        } else {
            None
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Color [A={}, R={}, G={}, B={}]",
            self.a, self.r, self.g, self.b
        )
    }
}
