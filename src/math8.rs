use embassy_time::Duration;

/// Linear interpolation between two levels by elapsed time
///
/// Exact at both ends, truncating in between. Moves one level per
/// `duration / |b - a|`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn lerp_by_time(a: u8, b: u8, elapsed: Duration, duration: Duration) -> u8 {
    let total = duration.as_millis();
    let done = elapsed.as_millis();
    if total == 0 || done >= total {
        return b;
    }
    let delta = b as i64 - a as i64;
    let offset = delta * done as i64 / total as i64;
    (a as i64 + offset) as u8
}

/// Rescale `value` from `0..=in_max` to `0..=out_max`, truncating
#[allow(clippy::cast_possible_truncation)]
pub const fn rescale(value: u16, in_max: u16, out_max: u8) -> u8 {
    if in_max == 0 {
        return 0;
    }
    let value = if value > in_max { in_max } else { value };
    (value as u32 * out_max as u32 / in_max as u32) as u8
}
