/// Restricts `x` to `[lo, hi]` inclusive.
pub const fn clamp(x: i32, lo: i32, hi: i32) -> i32 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Affine remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Equal input bounds yield `out_min` rather than dividing by zero.
/// The fractional remainder truncates toward zero.
pub const fn remap(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }

    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 1.8 + 32.0
}
