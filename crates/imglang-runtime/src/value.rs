/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Dynamic values passed between a host interpreter and the runtime
use imglang_core::Color;

use crate::console::Printable;
use crate::errors::RuntimeErrors;
use crate::image::ImageBuffer;

/// A script value
///
/// Images are optional, `Image(None)` is a script variable that
/// holds no image, which is different from an image with no pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Result of builtins that return nothing
    Void,
    Int(i32),
    Float(f64),
    Bool(bool),
    Text(String),
    Color(Color),
    Image(Option<ImageBuffer>)
}

impl Value {
    /// The script-level name of this value's type
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "string",
            Value::Color(_) => "color",
            Value::Image(_) => "image"
        }
    }

    /// Resolve `value.member`
    ///
    /// Colors expose their `r`, `g` and `b` channels as ints, in any case.
    pub fn member(&self, name: &str) -> Result<Value, RuntimeErrors> {
        match self {
            Value::Color(color) if !name.eq_ignore_ascii_case("a") => color
                .channel(name)
                .map(|c| Value::Int(i32::from(c)))
                .ok_or_else(|| RuntimeErrors::UnknownMember("color", name.to_string())),
            _ => Err(RuntimeErrors::UnknownMember(
                self.type_name(),
                name.to_string()
            ))
        }
    }

    /// Borrow the value as something the console can write
    ///
    /// `Void` and an absent image write nothing.
    pub fn as_printable(&self) -> Printable<'_> {
        match self {
            Value::Void | Value::Image(None) => Printable::Text(""),
            Value::Int(value) => Printable::Int(*value),
            Value::Float(value) => Printable::Float(*value),
            Value::Bool(value) => Printable::Bool(*value),
            Value::Text(value) => Printable::Text(value),
            Value::Color(color) => Printable::Any(color),
            Value::Image(Some(image)) => Printable::Any(image)
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<ImageBuffer> for Value {
    fn from(value: ImageBuffer) -> Self {
        Value::Image(Some(value))
    }
}

impl From<Option<ImageBuffer>> for Value {
    fn from(value: Option<ImageBuffer>) -> Self {
        Value::Image(value)
    }
}
