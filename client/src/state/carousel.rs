//! Slide window for the gallery slider and testimonials carousel.
//!
//! `index` is the first visible slide; `per_view` slides are visible at once.
//! Manual navigation clamps at either end, autoplay rewinds to the start after
//! the last page.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::ops::Range;

/// Viewport breakpoint: at `min_width` px and wider, show `per_view` slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub per_view: usize,
}

/// Slides-per-view for `width`, using the widest matching breakpoint.
#[must_use]
pub fn slides_per_view(width: u32, base: usize, breakpoints: &[Breakpoint]) -> usize {
    breakpoints
        .iter()
        .filter(|bp| width >= bp.min_width)
        .max_by_key(|bp| bp.min_width)
        .map_or(base, |bp| bp.per_view)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize, per_view: usize) -> Self {
        Self { len, per_view: per_view.max(1), index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Last valid value of `index`.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// Number of pagination dots.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.len == 0 { 0 } else { self.max_index() + 1 }
    }

    #[must_use]
    pub fn visible(&self) -> Range<usize> {
        self.index..(self.index + self.per_view).min(self.len)
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.max_index());
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn go_to(&mut self, page: usize) {
        self.index = page.min(self.max_index());
    }

    /// Timer-driven advance. Wraps to the first page after the last.
    pub fn autoplay_tick(&mut self) {
        if self.can_next() {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }

    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
        self.index = self.index.min(self.max_index());
    }

    /// Resize for a viewport `width` px wide.
    pub fn fit_width(&mut self, width: u32, base: usize, breakpoints: &[Breakpoint]) {
        self.set_per_view(slides_per_view(width, base, breakpoints));
    }

    /// Track offset as a percentage of one slide width, for `translateX`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * 100.0 / self.per_view as f64
    }
}
