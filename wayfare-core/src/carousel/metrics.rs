//! Pure paging geometry. All offsets are non-positive: `0` shows the first
//! item at the left edge, more negative values scroll further right.

use std::ops::Range;

/// `ceil(item_count / visible_count)`, never less than one page.
pub fn total_pages(item_count: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return 1;
    }
    item_count.div_ceil(visible_count).max(1)
}

/// Lowest offset allowed: `-(step * item_count - step * visible_count)`,
/// or `0` when everything fits in one viewport.
pub fn min_offset(step: f32, item_count: usize, visible_count: usize) -> f32 {
    let hidden = item_count.saturating_sub(visible_count);
    -(step.max(0.0) * hidden as f32)
}

/// Offset at which `page` comes to rest. Paging jumps by whole windows, but
/// the last page is pulled back so the viewport never scrolls past the final
/// item.
pub fn resting_offset(
    page: usize,
    visible_count: usize,
    step: f32,
    item_count: usize,
) -> f32 {
    let raw = -(page.saturating_mul(visible_count) as f32) * step.max(0.0);
    raw.clamp(min_offset(step, item_count, visible_count), 0.0)
}

/// Distance a released drag must exceed to change page.
pub fn drag_threshold(step: f32, fraction: f32) -> f32 {
    step.max(0.0) * fraction
}

/// Apply rubber-band resistance to an offset that overshoots `[min, 0]`.
pub fn elastic_offset(raw: f32, min: f32, resistance: f32) -> f32 {
    if raw > 0.0 {
        raw * resistance
    } else if raw < min {
        min + (raw - min) * resistance
    } else {
        raw
    }
}

/// Item indices that intersect the viewport at `offset`, including partially
/// visible items during motion.
pub fn visible_range(
    offset: f32,
    step: f32,
    visible_count: usize,
    item_count: usize,
) -> Range<usize> {
    if item_count == 0 {
        return 0..0;
    }
    if step <= 0.0 {
        return 0..visible_count.min(item_count);
    }
    let scrolled = (-offset).max(0.0);
    let start = ((scrolled / step).floor() as usize).min(item_count);
    let viewport_end = scrolled + step * visible_count as f32;
    let end = ((viewport_end / step).ceil() as usize).min(item_count);
    start..end.max(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one() {
        assert_eq!(total_pages(7, 3), 3);
        assert_eq!(total_pages(6, 3), 2);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(10, 1), 10);
    }

    #[test]
    fn total_pages_matches_ceiling_over_a_grid() {
        for n in 0..40usize {
            for v in 1..8usize {
                let expected = ((n as f64) / (v as f64)).ceil().max(1.0) as usize;
                assert_eq!(total_pages(n, v), expected, "n={n} v={v}");
            }
        }
    }

    #[test]
    fn last_page_is_pulled_back_to_final_item() {
        // 7 items, 3 visible, step 100: page 2 would be -600, bounded at -400
        assert_eq!(resting_offset(0, 3, 100.0, 7), 0.0);
        assert_eq!(resting_offset(1, 3, 100.0, 7), -300.0);
        assert_eq!(resting_offset(2, 3, 100.0, 7), -400.0);
    }

    #[test]
    fn resting_offset_stays_within_bounds() {
        for n in 0..20usize {
            for page in 0..10usize {
                let offset = resting_offset(page, 3, 124.0, n);
                assert!(offset <= 0.0);
                assert!(offset >= min_offset(124.0, n, 3));
            }
        }
    }

    #[test]
    fn short_sequences_never_scroll() {
        assert_eq!(min_offset(100.0, 2, 3), 0.0);
        assert_eq!(resting_offset(1, 3, 100.0, 2), 0.0);
    }

    #[test]
    fn elastic_offset_resists_overshoot_only() {
        assert_eq!(elastic_offset(-50.0, -400.0, 0.5), -50.0);
        assert_eq!(elastic_offset(40.0, -400.0, 0.5), 20.0);
        assert_eq!(elastic_offset(-500.0, -400.0, 0.5), -450.0);
    }

    #[test]
    fn visible_range_covers_partial_items_while_moving() {
        assert_eq!(visible_range(0.0, 100.0, 3, 7), 0..3);
        assert_eq!(visible_range(-150.0, 100.0, 3, 7), 1..5);
        assert_eq!(visible_range(-400.0, 100.0, 3, 7), 4..7);
        assert_eq!(visible_range(0.0, 0.0, 3, 2), 0..2);
        assert_eq!(visible_range(0.0, 100.0, 3, 0), 0..0);
    }
}
