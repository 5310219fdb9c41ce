/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The runtime a host interpreter talks to
//!
//! A [`Runtime`] bundles the options, the console and the codec, and
//! dispatches [`Builtin`] calls on dynamic [`Value`]s.
//!
//! Builtin calls are stricter than the typed API in two places, image
//! dimensions that are negative or above the configured maximum and out of
//! bounds pixel coordinates are reported as errors instead of panicking.
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use imglang_core::{clamp, Color, RuntimeOptions};
use log::debug;

use crate::builtins::{
    color_arg, image_arg, image_arg_mut, int_arg, text_arg, to_channel, to_index, Builtin
};
use crate::codecs::{ImageCodec, ZuneCodec};
use crate::console::Console;
use crate::errors::RuntimeErrors;
use crate::functions::save_image_with_codec;
use crate::image::ImageBuffer;
use crate::value::Value;

/// Runtime state for one script execution
pub struct Runtime<R: BufRead, W: Write, C: ImageCodec = ZuneCodec> {
    options: RuntimeOptions,
    console: Console<R, W>,
    codec:   C
}

impl Runtime<StdinLock<'static>, Stdout, ZuneCodec> {
    /// A runtime on the process standard input and output
    pub fn stdio() -> Self {
        Runtime::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Runtime<R, W, ZuneCodec> {
    /// Create a runtime with default options and the zune codec
    pub fn new(input: R, output: W) -> Self {
        Runtime::new_with_options(input, output, RuntimeOptions::default())
    }

    /// Create a runtime with the specified options and the zune codec
    pub fn new_with_options(input: R, output: W, options: RuntimeOptions) -> Self {
        Runtime::new_with_codec(input, output, ZuneCodec::new(&options), options)
    }
}

impl<R: BufRead, W: Write, C: ImageCodec> Runtime<R, W, C> {
    /// Create a runtime using a custom codec
    pub fn new_with_codec(input: R, output: W, codec: C, options: RuntimeOptions) -> Self {
        Runtime {
            options,
            console: Console::new_with_options(input, output, options),
            codec
        }
    }

    pub const fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Consume the runtime returning its console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Load an image, falling back to a blank image on failure
    pub fn load_image<P: AsRef<Path>>(&self, path: P) -> ImageBuffer {
        ImageBuffer::load_with_codec(path, &self.codec, &self.options)
    }

    /// Save an image, ignoring failures, `None` does nothing
    pub fn save_image<P: AsRef<Path>>(&self, image: Option<&ImageBuffer>, path: P) {
        save_image_with_codec(image, path, &self.codec)
    }

    /// Call a builtin by its script name
    pub fn call_by_name(&mut self, name: &str, args: &mut [Value]) -> Result<Value, RuntimeErrors> {
        let builtin = name.parse::<Builtin>()?;
        self.call(builtin, args)
    }

    /// Run a builtin
    ///
    /// `set_pixel` modifies the image held in `args[0]` in place.
    ///
    /// # Returns
    /// - `Ok(Value)`: The builtin's result, `Value::Void` for builtins
    ///   that return nothing
    /// - `Err`: Wrong number or type of arguments, negative or oversized dimensions,
    ///   out of bounds coordinates or channels outside `0..=255`
    pub fn call(&mut self, builtin: Builtin, args: &mut [Value]) -> Result<Value, RuntimeErrors> {
        builtin.check_arity(args)?;

        debug!("Calling builtin {}", builtin.name());

        let result = match builtin {
            Builtin::LoadImage => {
                let path = text_arg(builtin, args, 0)?;
                Value::Image(Some(self.load_image(path)))
            }
            Builtin::SaveImage => {
                let image = image_arg(builtin, args, 0)?;
                let path = text_arg(builtin, args, 1)?;
                self.save_image(image, path);
                Value::Void
            }
            Builtin::CreateImage => {
                let width = int_arg(builtin, args, 0)?;
                let height = int_arg(builtin, args, 1)?;

                match (to_index(width), to_index(height)) {
                    (Some(w), Some(h))
                        if w <= self.options.get_max_width()
                            && h <= self.options.get_max_height() =>
                    {
                        Value::Image(Some(ImageBuffer::new(w, h)))
                    }
                    _ => {
                        return Err(RuntimeErrors::InvalidDimensions(
                            i64::from(width),
                            i64::from(height)
                        ))
                    }
                }
            }
            Builtin::GetWidth => {
                let image = image_arg(builtin, args, 0)?;
                Value::Int(dimension_to_int(image.map_or(0, ImageBuffer::width)))
            }
            Builtin::GetHeight => {
                let image = image_arg(builtin, args, 0)?;
                Value::Int(dimension_to_int(image.map_or(0, ImageBuffer::height)))
            }
            Builtin::GetPixel => {
                let x = int_arg(builtin, args, 1)?;
                let y = int_arg(builtin, args, 2)?;
                let image = image_arg(builtin, args, 0)?
                    .ok_or(RuntimeErrors::GenericStr("get_pixel called on an absent image"))?;

                let pixel = to_index(x)
                    .zip(to_index(y))
                    .and_then(|(px, py)| image.pixel(px, py));

                match pixel {
                    Some(color) => Value::Color(color),
                    None => return Err(out_of_bounds(x, y, image))
                }
            }
            Builtin::SetPixel => {
                let x = int_arg(builtin, args, 1)?;
                let y = int_arg(builtin, args, 2)?;
                let color = color_arg(builtin, args, 3)?;
                let image = image_arg_mut(builtin, args, 0)?;

                match to_index(x).zip(to_index(y)) {
                    Some((px, py)) => image.try_set_pixel(px, py, color)?,
                    None => return Err(out_of_bounds(x, y, image))
                }
                Value::Void
            }
            Builtin::ToColor => {
                let r = to_channel("r", int_arg(builtin, args, 0)?)?;
                let g = to_channel("g", int_arg(builtin, args, 1)?)?;
                let b = to_channel("b", int_arg(builtin, args, 2)?)?;

                Value::Color(Color::from_rgb(r, g, b))
            }
            Builtin::Clamp => {
                let value = int_arg(builtin, args, 0)?;
                let min = int_arg(builtin, args, 1)?;
                let max = int_arg(builtin, args, 2)?;

                Value::Int(clamp(value, min, max))
            }
            Builtin::Write => {
                for arg in args.iter() {
                    self.console.write(arg.as_printable());
                }
                Value::Void
            }
            Builtin::ReadInt => Value::Int(self.console.read_int()),
            Builtin::ReadFloat => Value::Float(self.console.read_float())
        };
        Ok(result)
    }
}

fn out_of_bounds(x: i32, y: i32, image: &ImageBuffer) -> RuntimeErrors {
    RuntimeErrors::OutOfBounds(i64::from(x), i64::from(y), image.width(), image.height())
}

/// Script ints are 32 bit, dimensions that do not fit saturate
fn dimension_to_int(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
