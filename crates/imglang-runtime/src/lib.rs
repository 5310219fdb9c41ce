/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Runtime support for imglang scripts
//!
//! This crate backs the builtins of a small image processing language,
//! it provides
//!
//! - [`ImageBuffer`](image::ImageBuffer), an owned grid of colors that can be
//!   created, loaded, saved and read or written pixel by pixel
//! - [`Console`](console::Console), reading ints and floats from lines of input
//!   and writing values back
//! - [`Runtime`](runtime::Runtime), dispatching builtin calls by name for a
//!   host interpreter
//!
//! # Fail-soft behaviour
//! Scripts are meant to keep running when something goes wrong
//!
//! - Loading a missing or undecodable file gives a blank 100x100 image
//! - Saving never reports failure, saving an absent image does nothing
//! - Reading a malformed number writes a diagnostic and gives zero
//!
//! Strict variants that do report errors exist for hosts that want them,
//! e.g [`ImageBuffer::open`](image::ImageBuffer::open).
//!
//! # Example
//! ```no_run
//! use imglang_runtime::functions::*;
//!
//! let mut image = load_image("input.png");
//!
//! for y in 0..get_height(Some(&image)) {
//!     for x in 0..get_width(Some(&image)) {
//!         let px = get_pixel(&image, x, y);
//!         let r = clamp(i32::from(px.r()) + 40, 0, 255) as u8;
//!         set_pixel(&mut image, x, y, to_color(r, px.g(), px.b()));
//!     }
//! }
//! save_image(Some(&image), "output.png");
//! ```
//!
//! # Features
//! - `png`, `ppm`, `qoi`, `bmp`, `farbfeld`, `jpeg`: image formats the default
//!   codec can read, all enabled by default. `bmp` and `farbfeld` are read only,
//!   saving to those extensions writes PNG
//! - `serde-support`: serializing colors and options
pub use imglang_core::{clamp, Color, RuntimeOptions};

pub mod builtins;
pub mod codecs;
pub mod console;
pub mod errors;
pub mod functions;
pub mod image;
pub mod runtime;
pub mod value;
