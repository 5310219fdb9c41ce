/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integer clamping used by scripts before building colors

/// Clamp `value` into `[min, max]`
///
/// Returns `min` if `value < min`, `max` if `value > max`,
/// otherwise `value` unchanged.
///
/// The result is only meaningful when `min <= max`. Unlike
/// [`i32::clamp`] this does not panic when the bounds are swapped,
/// the lower bound is simply checked first.
///
/// # Example
/// ```
/// use imglang_core::clamp;
/// assert_eq!(clamp(300, 0, 255), 255);
/// assert_eq!(clamp(-4, 0, 255), 0);
/// assert_eq!(clamp(17, 0, 255), 17);
/// ```
#[inline]
pub const fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}
