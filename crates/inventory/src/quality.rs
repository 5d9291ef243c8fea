//! Quality bounds and the clamped step helpers the daily rules are built on.
//!
//! Clamping only ever applies to a rule's own movement. A value that starts out
//! of range (e.g. 60 on an appreciating item) is not pulled back into range by a
//! rule that would push it further out; it is simply left alone.

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// Quality carried by legendary items. Never enforced, only conventional.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Raise `quality` by `steps`, stopping at [`MAX_QUALITY`].
///
/// Same net effect as `steps` consecutive `if quality < 50 { quality += 1 }`.
pub fn raise(quality: i32, steps: i32) -> i32 {
    if quality >= MAX_QUALITY {
        return quality;
    }
    quality.saturating_add(steps).min(MAX_QUALITY)
}

/// Lower `quality` by `steps`, stopping at [`MIN_QUALITY`].
///
/// Same net effect as `steps` consecutive `if quality > 0 { quality -= 1 }`.
pub fn lower(quality: i32, steps: i32) -> i32 {
    if quality <= MIN_QUALITY {
        return quality;
    }
    quality.saturating_sub(steps).max(MIN_QUALITY)
}

/// Subtract `amount` and floor the final result at [`MIN_QUALITY`].
pub fn floor_sub(quality: i32, amount: i32) -> i32 {
    quality.saturating_sub(amount).max(MIN_QUALITY)
}
