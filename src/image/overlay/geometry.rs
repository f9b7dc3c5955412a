//! Aspect-ratio math shared by the overlay modes.

/// Scale to an exact target width, height following proportionally (floor).
pub(super) fn fit_width(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    debug_assert!(width > 0);
    let new_height = (u64::from(height) * u64::from(target_width) / u64::from(width)) as u32;
    (target_width, new_height)
}

/// Shrink dimensions to fit inside the bounds, preserving aspect ratio.
///
/// Returns `None` when the dimensions already fit; callers keep the original
/// image bit-identical in that case.
pub(super) fn shrink_to_fit(
    width: u32,
    height: u32,
    bound_width: u32,
    bound_height: u32,
) -> Option<(u32, u32)> {
    if width <= bound_width && height <= bound_height {
        return None;
    }

    let aspect = f64::from(width) / f64::from(height);
    let bound_aspect = f64::from(bound_width) / f64::from(bound_height);

    if aspect > bound_aspect {
        // Wider relative to the bounds: constrain by width.
        let new_width = bound_width;
        let new_height = (f64::from(new_width) / aspect) as u32;
        Some((new_width, new_height))
    } else {
        let new_height = bound_height;
        let new_width = (f64::from(new_height) * aspect) as u32;
        Some((new_width, new_height))
    }
}

/// Top-left offset that centers `inner` on `outer` (floor division).
pub(super) fn center_offset(
    outer_width: u32,
    outer_height: u32,
    inner_width: u32,
    inner_height: u32,
) -> (i64, i64) {
    (
        (i64::from(outer_width) - i64::from(inner_width)) / 2,
        (i64::from(outer_height) - i64::from(inner_height)) / 2,
    )
}
