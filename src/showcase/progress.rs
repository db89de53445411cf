//! Maps the position of the showcase region inside the viewport to a
//! continuous progress value and the feature index it selects.
//!
//! Everything here is a pure function of the geometry so it can be
//! evaluated from any event source (scroll, resize, mount).

/// Keeps the largest progress value strictly below the feature count so
/// that it still floors to the last valid index.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Bounding box of the showcase region relative to the viewport, in CSS
/// pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The sticky panel is pinned: the region starts at or above the
    /// viewport top and ends at or below the viewport bottom.
    pub fn is_pinned(&self) -> bool {
        self.top <= 0.0 && self.bottom() >= self.viewport_height
    }

    pub fn scrolled(&self) -> f64 {
        self.top.abs()
    }

    pub fn max_scroll(&self) -> f64 {
        self.height - self.viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub value: f64,
    pub index: usize,
}

impl Progress {
    pub const START: Progress = Progress { value: 0.0, index: 0 };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressMapper {
    feature_count: usize,
    epsilon: f64,
}

impl ProgressMapper {
    /// `epsilon` outside `(0, 1)` would let the ceiling floor to the wrong
    /// index, so it is replaced by [`DEFAULT_EPSILON`].
    pub fn new(feature_count: usize, epsilon: f64) -> Self {
        let epsilon = if epsilon > 0.0 && epsilon < 1.0 {
            epsilon
        } else {
            DEFAULT_EPSILON
        };
        Self { feature_count, epsilon }
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// `None` while the region is not pinned; the caller keeps its state.
    pub fn map(&self, geometry: &ScrollGeometry) -> Option<Progress> {
        if !geometry.is_pinned() {
            return None;
        }
        Some(self.progress_for(geometry.scrolled(), geometry.max_scroll()))
    }

    /// Each feature owns an equal `max_scroll / N` slice of the scroll
    /// distance. Degenerate or non-finite input yields [`Progress::START`].
    pub fn progress_for(&self, scrolled: f64, max_scroll: f64) -> Progress {
        let count = self.feature_count;
        if count == 0 || !scrolled.is_finite() || !max_scroll.is_finite() || max_scroll <= 0.0 {
            return Progress::START;
        }

        let per_feature = max_scroll / count as f64;
        if per_feature <= 0.0 {
            return Progress::START;
        }
        let ceiling = count as f64 - self.epsilon;
        let value = (scrolled / per_feature).clamp(0.0, ceiling);

        Progress {
            value,
            index: (value.floor() as usize).min(count - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mapper() -> ProgressMapper {
        ProgressMapper::new(5, DEFAULT_EPSILON)
    }

    #[test]
    fn halfway_through_five_features_lands_on_the_third() {
        let progress = mapper().progress_for(1600.0, 3200.0);
        assert_eq!(progress.value, 2.5);
        assert_eq!(progress.index, 2);
    }

    #[test]
    fn start_and_end_of_region() {
        assert_eq!(mapper().progress_for(0.0, 3200.0), Progress::START);

        let end = mapper().progress_for(3200.0, 3200.0);
        assert_eq!(end.index, 4);
        assert!((end.value - 4.99).abs() < 1e-9);
    }

    #[test]
    fn degenerate_region_clamps_to_zero() {
        assert_eq!(mapper().progress_for(100.0, 0.0), Progress::START);
        assert_eq!(mapper().progress_for(100.0, -250.0), Progress::START);
        assert_eq!(mapper().progress_for(f64::NAN, 3200.0), Progress::START);
        assert_eq!(mapper().progress_for(100.0, f64::INFINITY), Progress::START);
    }

    #[test]
    fn empty_catalog_never_divides() {
        let empty = ProgressMapper::new(0, DEFAULT_EPSILON);
        assert_eq!(empty.progress_for(500.0, 3200.0), Progress::START);
    }

    #[test]
    fn invalid_epsilon_is_replaced() {
        for bad in [0.0, 1.5, -0.2, f64::NAN] {
            assert_eq!(ProgressMapper::new(5, bad), mapper());
        }
        let coarse = ProgressMapper::new(5, 0.5);
        assert_eq!(coarse.progress_for(3200.0, 3200.0).value, 4.5);
    }

    #[test]
    fn unpinned_region_produces_no_update() {
        // region still below the fold
        let before = ScrollGeometry { top: 120.0, height: 4000.0, viewport_height: 800.0 };
        assert_eq!(mapper().map(&before), None);

        // region scrolled past: bottom above the viewport bottom
        let after = ScrollGeometry { top: -3500.0, height: 4000.0, viewport_height: 800.0 };
        assert_eq!(mapper().map(&after), None);
    }

    #[test]
    fn pinned_region_maps_through() {
        let geometry = ScrollGeometry { top: -1600.0, height: 4000.0, viewport_height: 800.0 };
        assert!(geometry.is_pinned());
        assert_eq!(mapper().map(&geometry).map(|p| p.index), Some(2));
    }

    #[test]
    fn region_shorter_than_viewport_is_never_pinned() {
        let geometry = ScrollGeometry { top: 0.0, height: 600.0, viewport_height: 800.0 };
        assert_eq!(mapper().map(&geometry), None);
    }

    #[test]
    fn region_exactly_one_viewport_tall_clamps() {
        let geometry = ScrollGeometry { top: 0.0, height: 800.0, viewport_height: 800.0 };
        assert_eq!(mapper().map(&geometry), Some(Progress::START));
    }

    proptest! {
        #[test]
        fn index_is_monotonic_in_scroll(
            max_scroll in 1.0f64..20_000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let first = mapper().progress_for(lo * max_scroll, max_scroll);
            let second = mapper().progress_for(hi * max_scroll, max_scroll);
            prop_assert!(first.index <= second.index);
            prop_assert!(first.value <= second.value);
        }

        #[test]
        fn progress_stays_in_range(
            count in 1usize..12,
            scrolled in -1.0e6f64..1.0e6,
            max_scroll in -1.0e6f64..1.0e6,
        ) {
            let mapper = ProgressMapper::new(count, DEFAULT_EPSILON);
            let progress = mapper.progress_for(scrolled, max_scroll);
            prop_assert!(progress.value.is_finite());
            prop_assert!(progress.value >= 0.0);
            prop_assert!(progress.value < count as f64);
            prop_assert!(progress.index < count);
            prop_assert_eq!(progress.index, progress.value.floor() as usize);
        }

        #[test]
        fn non_positive_max_scroll_is_start(scrolled in 0.0f64..1.0e5, max_scroll in -1.0e5f64..=0.0) {
            prop_assert_eq!(mapper().progress_for(scrolled, max_scroll), Progress::START);
        }
    }
}
