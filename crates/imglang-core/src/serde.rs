/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::color::Color;
use crate::options::RuntimeOptions;

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Color", 4)?;
        state.serialize_field("a", &self.a())?;
        state.serialize_field("r", &self.r())?;
        state.serialize_field("g", &self.g())?;
        state.serialize_field("b", &self.b())?;
        state.end()
    }
}

impl Serialize for RuntimeOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("RuntimeOptions", 5)?;
        state.serialize_field("fallback_width", &self.get_fallback_width())?;
        state.serialize_field("fallback_height", &self.get_fallback_height())?;
        state.serialize_field("max_width", &self.get_max_width())?;
        state.serialize_field("max_height", &self.get_max_height())?;
        state.serialize_field("emit_diagnostics", &self.get_emit_diagnostics())?;
        state.end()
    }
}
