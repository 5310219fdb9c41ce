/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Builtin functions scripts can call
//!
//! A host interpreter resolves a call by name with [`Builtin::from_name`]
//! and runs it with [`Runtime::call`](crate::runtime::Runtime::call).
//!
//! | name           | arguments                   | returns |
//! |----------------|-----------------------------|---------|
//! | `load_image`   | string                      | image   |
//! | `save_image`   | image, string               | void    |
//! | `create_image` | int, int                    | image   |
//! | `get_width`    | image                       | int     |
//! | `get_height`   | image                       | int     |
//! | `get_pixel`    | image, int, int             | color   |
//! | `set_pixel`    | image, int, int, color      | void    |
//! | `to_color`     | int, int, int               | color   |
//! | `clamp`        | int, int, int               | int     |
//! | `write`        | any number of values        | void    |
//! | `read_int`     |                             | int     |
//! | `read_float`   |                             | float   |
use std::str::FromStr;

use imglang_core::Color;

use crate::errors::RuntimeErrors;
use crate::image::ImageBuffer;
use crate::value::Value;

/// All builtin functions
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Builtin {
    LoadImage,
    SaveImage,
    CreateImage,
    GetWidth,
    GetHeight,
    GetPixel,
    SetPixel,
    ToColor,
    Clamp,
    Write,
    ReadInt,
    ReadFloat
}

impl Builtin {
    /// Every builtin, in table order
    pub const ALL: [Builtin; 12] = [
        Builtin::LoadImage,
        Builtin::SaveImage,
        Builtin::CreateImage,
        Builtin::GetWidth,
        Builtin::GetHeight,
        Builtin::GetPixel,
        Builtin::SetPixel,
        Builtin::ToColor,
        Builtin::Clamp,
        Builtin::Write,
        Builtin::ReadInt,
        Builtin::ReadFloat
    ];

    /// Look up a builtin by its script name
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "load_image" => Some(Builtin::LoadImage),
            "save_image" => Some(Builtin::SaveImage),
            "create_image" => Some(Builtin::CreateImage),
            "get_width" => Some(Builtin::GetWidth),
            "get_height" => Some(Builtin::GetHeight),
            "get_pixel" => Some(Builtin::GetPixel),
            "set_pixel" => Some(Builtin::SetPixel),
            "to_color" => Some(Builtin::ToColor),
            "clamp" => Some(Builtin::Clamp),
            "write" => Some(Builtin::Write),
            "read_int" => Some(Builtin::ReadInt),
            "read_float" => Some(Builtin::ReadFloat),
            _ => None
        }
    }

    /// The name scripts use to call this builtin
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::LoadImage => "load_image",
            Builtin::SaveImage => "save_image",
            Builtin::CreateImage => "create_image",
            Builtin::GetWidth => "get_width",
            Builtin::GetHeight => "get_height",
            Builtin::GetPixel => "get_pixel",
            Builtin::SetPixel => "set_pixel",
            Builtin::ToColor => "to_color",
            Builtin::Clamp => "clamp",
            Builtin::Write => "write",
            Builtin::ReadInt => "read_int",
            Builtin::ReadFloat => "read_float"
        }
    }

    /// Number of arguments the builtin takes
    ///
    /// `None` for `write`, which takes any number
    pub const fn arity(self) -> Option<usize> {
        match self {
            Builtin::ReadInt | Builtin::ReadFloat => Some(0),
            Builtin::LoadImage | Builtin::GetWidth | Builtin::GetHeight => Some(1),
            Builtin::SaveImage | Builtin::CreateImage => Some(2),
            Builtin::GetPixel | Builtin::ToColor | Builtin::Clamp => Some(3),
            Builtin::SetPixel => Some(4),
            Builtin::Write => None
        }
    }

    /// Confirm `args` has the right number of arguments for this builtin
    pub fn check_arity(self, args: &[Value]) -> Result<(), RuntimeErrors> {
        match self.arity() {
            Some(expected) if expected != args.len() => Err(RuntimeErrors::ArityMismatch(
                self.name(),
                expected,
                args.len()
            )),
            _ => Ok(())
        }
    }
}

impl FromStr for Builtin {
    type Err = RuntimeErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::from_name(s).ok_or_else(|| RuntimeErrors::UnknownBuiltin(s.to_string()))
    }
}

fn mismatch(builtin: Builtin, position: usize, expected: &'static str, found: &Value) -> RuntimeErrors {
    RuntimeErrors::TypeMismatch(builtin.name(), position, expected, found.type_name())
}

/// Extract an int argument
pub(crate) fn int_arg(builtin: Builtin, args: &[Value], position: usize) -> Result<i32, RuntimeErrors> {
    match &args[position] {
        Value::Int(value) => Ok(*value),
        other => Err(mismatch(builtin, position, "int", other))
    }
}

/// Extract a string argument
pub(crate) fn text_arg(builtin: Builtin, args: &[Value], position: usize) -> Result<&str, RuntimeErrors> {
    match &args[position] {
        Value::Text(value) => Ok(value),
        other => Err(mismatch(builtin, position, "string", other))
    }
}

/// Extract a color argument
pub(crate) fn color_arg(builtin: Builtin, args: &[Value], position: usize) -> Result<Color, RuntimeErrors> {
    match &args[position] {
        Value::Color(value) => Ok(*value),
        other => Err(mismatch(builtin, position, "color", other))
    }
}

/// Extract an image argument which may hold no image
pub(crate) fn image_arg(
    builtin: Builtin, args: &[Value], position: usize
) -> Result<Option<&ImageBuffer>, RuntimeErrors> {
    match &args[position] {
        Value::Image(value) => Ok(value.as_ref()),
        other => Err(mismatch(builtin, position, "image", other))
    }
}

/// Extract an image argument for modification, an absent image is an error
pub(crate) fn image_arg_mut(
    builtin: Builtin, args: &mut [Value], position: usize
) -> Result<&mut ImageBuffer, RuntimeErrors> {
    match &mut args[position] {
        Value::Image(Some(value)) => Ok(value),
        Value::Image(None) => Err(RuntimeErrors::GenericStr("Cannot modify an absent image")),
        other => Err(mismatch(builtin, position, "image", other))
    }
}

/// Convert a script int to an image coordinate or dimension,
/// `None` if it is negative
pub(crate) fn to_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Convert a script int to a color channel
pub(crate) fn to_channel(channel: &'static str, value: i32) -> Result<u8, RuntimeErrors> {
    u8::try_from(value).map_err(|_| RuntimeErrors::ChannelOutOfRange(channel, i64::from(value)))
}

#[cfg(test)]
mod tests {
    use super::{to_channel, Builtin};
    use crate::errors::RuntimeErrors;
    use crate::value::Value;

    #[test]
    fn names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Builtin::from_name("blur"), None);
        assert_eq!(Builtin::from_name("LoadImage"), None);
        assert!(matches!(
            "blur".parse::<Builtin>(),
            Err(RuntimeErrors::UnknownBuiltin(_))
        ));
    }

    #[test]
    fn arity_checks() {
        assert!(Builtin::Clamp
            .check_arity(&[Value::Int(1), Value::Int(2), Value::Int(3)])
            .is_ok());
        assert!(matches!(
            Builtin::Clamp.check_arity(&[Value::Int(1)]),
            Err(RuntimeErrors::ArityMismatch("clamp", 3, 1))
        ));
        // write takes anything
        assert!(Builtin::Write.check_arity(&[]).is_ok());
        assert!(Builtin::Write.check_arity(&vec![Value::Void; 5]).is_ok());
    }

    #[test]
    fn channels() {
        assert_eq!(to_channel("r", 255).unwrap(), 255);
        assert!(matches!(
            to_channel("g", 256),
            Err(RuntimeErrors::ChannelOutOfRange("g", 256))
        ));
        assert!(matches!(
            to_channel("b", -1),
            Err(RuntimeErrors::ChannelOutOfRange("b", -1))
        ));
    }
}
