/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core value types shared by the imglang runtime
//!
//! This crate provides the small pieces every other
//! imglang crate agrees on
//!
//! It currently contains
//!
//! - An opaque-by-default ARGB [`Color`](color::Color) value type
//! - The integer [`clamp`](clamp::clamp) used by scripts before building colors
//! - [`RuntimeOptions`](options::RuntimeOptions) that configure fallbacks and limits
//!
//! The crate has no dependency on any image codec and is `#[no_std]`
//! unless the `std` feature is enabled.
//!
//! # Features
//!  - `std`: Link to the standard library.
//!
//!  - `serde`: Enables serializing of colors and options
//!
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod clamp;
pub mod color;
pub mod options;
pub mod serde;

pub use crate::clamp::clamp;
pub use crate::color::Color;
pub use crate::options::RuntimeOptions;
