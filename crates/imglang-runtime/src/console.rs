/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Console input and output for scripts
//!
//! Reads never fail, a line that cannot be parsed is reported on the
//! output and replaced by zero. Writes never add separators.
//!
//! # Textual forms
//! Values are written with their Rust [`Display`] form
//!
//! - booleans are `true` and `false`
//! - floats use the shortest form that round-trips, with no forced
//!   fraction, i.e `1.0` is written as `1` and `0.1` as `0.1`
use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};

use imglang_core::RuntimeOptions;
use log::warn;

/// Written when [`Console::read_int`] substitutes zero
pub const INVALID_INT_MESSAGE: &str = "Invalid number, defaulting to 0";
/// Written when [`Console::read_float`] substitutes zero
pub const INVALID_FLOAT_MESSAGE: &str = "Invalid float number, defaulting to 0.0";

/// A value that can be written to the console
#[derive(Copy, Clone)]
pub enum Printable<'a> {
    Text(&'a str),
    Int(i32),
    Float(f64),
    Bool(bool),
    /// Anything else, written using its `Display` implementation
    Any(&'a dyn Display)
}

impl<'a> From<&'a str> for Printable<'a> {
    fn from(value: &'a str) -> Self {
        Printable::Text(value)
    }
}

impl From<i32> for Printable<'_> {
    fn from(value: i32) -> Self {
        Printable::Int(value)
    }
}

impl From<f64> for Printable<'_> {
    fn from(value: f64) -> Self {
        Printable::Float(value)
    }
}

impl From<bool> for Printable<'_> {
    fn from(value: bool) -> Self {
        Printable::Bool(value)
    }
}

/// Line oriented console over an input source and an output sink
pub struct Console<R: BufRead, W: Write> {
    input:   R,
    output:  W,
    options: RuntimeOptions
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console reading the process standard input and
    /// writing to its standard output
    pub fn stdio() -> Self {
        Console::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with default options
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console::new_with_options(input, output, RuntimeOptions::default())
    }

    /// Create a console with the specified options
    pub fn new_with_options(input: R, output: W, options: RuntimeOptions) -> Console<R, W> {
        Console {
            input,
            output,
            options
        }
    }

    /// Read one line and parse it as a base 10 integer
    ///
    /// Surrounding whitespace is ignored and a leading sign is accepted.
    /// On any failure, be it a malformed number, overflow, end of input or an
    /// I/O error, a diagnostic line is written to the output and `0` is returned
    pub fn read_int(&mut self) -> i32 {
        match self.read_line().and_then(|line| line.trim().parse::<i32>().ok()) {
            Some(value) => value,
            None => {
                self.diagnostic(INVALID_INT_MESSAGE);
                0
            }
        }
    }

    /// Read one line and parse it as a floating point number
    ///
    /// The decimal separator is always `.`, whatever the host locale is.
    /// Group separators are not accepted, `3,14` is malformed.
    /// Failures are handled like [`read_int`](Self::read_int), returning `0.0`
    pub fn read_float(&mut self) -> f64 {
        match self.read_line().and_then(|line| line.trim().parse::<f64>().ok()) {
            Some(value) => value,
            None => {
                self.diagnostic(INVALID_FLOAT_MESSAGE);
                0.0
            }
        }
    }

    /// Write a value's textual form with no trailing separator
    ///
    /// Failures to write are logged and otherwise ignored
    pub fn write<'a, P: Into<Printable<'a>>>(&mut self, value: P) {
        let result = match value.into() {
            Printable::Text(text) => write!(self.output, "{text}"),
            Printable::Int(value) => write!(self.output, "{value}"),
            Printable::Float(value) => write!(self.output, "{value}"),
            Printable::Bool(value) => write!(self.output, "{value}"),
            Printable::Any(value) => write!(self.output, "{value}")
        };
        if let Err(err) = result.and_then(|_| self.output.flush()) {
            warn!("Could not write to console output, reason {}", err);
        }
    }

    /// Return a reference to the output sink
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console returning the input source and the output sink
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read a single line, `None` on end of input or I/O errors
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();

        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                warn!("Could not read console input, reason {}", err);
                None
            }
        }
    }

    fn diagnostic(&mut self, message: &str) {
        warn!("{}", message);

        if self.options.get_emit_diagnostics() {
            if let Err(err) = writeln!(self.output, "{message}").and_then(|_| self.output.flush()) {
                warn!("Could not write console diagnostic, reason {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use imglang_core::{Color, RuntimeOptions};

    use super::{Console, Printable, INVALID_FLOAT_MESSAGE, INVALID_INT_MESSAGE};

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn read_int_parses_a_line() {
        let mut c = console("42\n");

        assert_eq!(c.read_int(), 42);
        assert_eq!(output(&c), "");
    }

    #[test]
    fn read_int_accepts_signs_and_whitespace() {
        let mut c = console("  -17 \r\n+5\n");

        assert_eq!(c.read_int(), -17);
        assert_eq!(c.read_int(), 5);
    }

    #[test]
    fn read_int_recovers_from_garbage() {
        let mut c = console("abc\n");

        assert_eq!(c.read_int(), 0);
        assert_eq!(output(&c), format!("{INVALID_INT_MESSAGE}\n"));
    }

    #[test]
    fn read_int_recovers_from_empty_overflow_and_eof() {
        let mut c = console("\n99999999999\n");

        assert_eq!(c.read_int(), 0);
        assert_eq!(c.read_int(), 0);
        // end of input
        assert_eq!(c.read_int(), 0);
        assert_eq!(output(&c), format!("{INVALID_INT_MESSAGE}\n").repeat(3));
    }

    #[test]
    fn read_int_continues_after_failure() {
        let mut c = console("x\n7\n");

        assert_eq!(c.read_int(), 0);
        assert_eq!(c.read_int(), 7);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn read_float_uses_a_dot() {
        let mut c = console("3.14\n");

        assert_eq!(c.read_float(), 3.14);
        assert_eq!(output(&c), "");
    }

    #[test]
    fn read_float_rejects_a_comma() {
        let mut c = console("3,14\n");

        assert_eq!(c.read_float(), 0.0);
        assert_eq!(output(&c), format!("{INVALID_FLOAT_MESSAGE}\n"));
    }

    #[test]
    fn read_float_accepts_integers_and_exponents() {
        let mut c = console("2\n-1.5e3\n");

        assert_eq!(c.read_float(), 2.0);
        assert_eq!(c.read_float(), -1500.0);
    }

    #[test]
    fn read_float_recovers_on_eof() {
        let mut c = console("");

        assert_eq!(c.read_float(), 0.0);
        assert_eq!(output(&c), format!("{INVALID_FLOAT_MESSAGE}\n"));
    }

    #[test]
    fn diagnostics_can_be_silenced() {
        let options = RuntimeOptions::default().set_emit_diagnostics(false);
        let mut c = Console::new_with_options(Cursor::new(b"abc\n".to_vec()), Vec::new(), options);

        assert_eq!(c.read_int(), 0);
        assert!(c.output().is_empty());
    }

    #[test]
    fn write_has_no_separators() {
        let mut c = console("");

        c.write("x=");
        c.write(3);
        c.write(" ");
        c.write(1.5);
        c.write(" ");
        c.write(true);
        c.write(false);

        assert_eq!(output(&c), "x=3 1.5 truefalse");
    }

    #[test]
    fn write_float_forms() {
        let mut c = console("");

        c.write(1.0);
        c.write(",");
        c.write(0.1);
        c.write(",");
        c.write(-2.25);

        assert_eq!(output(&c), "1,0.1,-2.25");
    }

    #[test]
    fn write_any_uses_display() {
        let mut c = console("");
        let color = Color::from_rgb(1, 2, 3);

        c.write(Printable::Any(&color));

        assert_eq!(output(&c), "Color [A=255, R=1, G=2, B=3]");
    }
}
