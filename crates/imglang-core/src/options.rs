/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global runtime options

/// Options respected by the runtime
///
/// Construct with [`RuntimeOptions::default`] and adjust with the
/// `set_*` builders.
///
/// ```
/// use imglang_core::RuntimeOptions;
/// let options = RuntimeOptions::default()
///     .set_fallback_dimensions(64, 32)
///     .set_emit_diagnostics(false);
///
/// assert_eq!(options.get_fallback_width(), 64);
/// assert!(!options.get_emit_diagnostics());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RuntimeOptions {
    /// Width of the blank image returned when loading
    /// a file that does not exist or cannot be decoded
    ///
    /// - Default value: 100
    fallback_width:   usize,
    /// Height of the blank image returned when loading
    /// a file that does not exist or cannot be decoded
    ///
    /// - Default value: 100
    fallback_height:  usize,
    /// Maximum width the decoder will accept
    ///
    /// - Default value: 16384
    max_width:        usize,
    /// Maximum height the decoder will accept
    ///
    /// - Default value: 16384
    max_height:       usize,
    /// Whether console reads write a diagnostic line to the
    /// output when they substitute a default value
    ///
    /// - Default value: true
    emit_diagnostics: bool
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            fallback_width:   100,
            fallback_height:  100,
            max_width:        1 << 14,
            max_height:       1 << 14,
            emit_diagnostics: true
        }
    }
}

impl RuntimeOptions {
    /// Get the width of the blank image used when loading fails
    pub const fn get_fallback_width(&self) -> usize {
        self.fallback_width
    }

    /// Get the height of the blank image used when loading fails
    pub const fn get_fallback_height(&self) -> usize {
        self.fallback_height
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder
    /// should not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true if console reads report substituted defaults
    pub const fn get_emit_diagnostics(&self) -> bool {
        self.emit_diagnostics
    }

    /// Set the dimensions of the blank image used when loading fails
    ///
    /// # Arguments
    ///
    /// * `width`: The fallback width
    /// * `height`: The fallback height
    ///
    /// returns: RuntimeOptions
    pub fn set_fallback_dimensions(mut self, width: usize, height: usize) -> Self {
        self.fallback_width = width;
        self.fallback_height = height;
        self
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether console reads write a diagnostic when
    /// they fall back to a default value
    pub fn set_emit_diagnostics(mut self, yes: bool) -> Self {
        self.emit_diagnostics = yes;
        self
    }
}
