use super::*;

const GALLERY_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { min_width: 640, per_view: 2 },
    Breakpoint { min_width: 1024, per_view: 3 },
];

// =============================================================
// slides_per_view
// =============================================================

#[test]
fn slides_per_view_uses_base_below_first_breakpoint() {
    assert_eq!(slides_per_view(375, 1, GALLERY_BREAKPOINTS), 1);
}

#[test]
fn slides_per_view_picks_widest_matching_breakpoint() {
    assert_eq!(slides_per_view(640, 1, GALLERY_BREAKPOINTS), 2);
    assert_eq!(slides_per_view(1023, 1, GALLERY_BREAKPOINTS), 2);
    assert_eq!(slides_per_view(1440, 1, GALLERY_BREAKPOINTS), 3);
}

#[test]
fn slides_per_view_ignores_breakpoint_order() {
    let reversed = [GALLERY_BREAKPOINTS[1], GALLERY_BREAKPOINTS[0]];
    assert_eq!(slides_per_view(1200, 1, &reversed), 3);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn new_carousel_starts_at_zero() {
    let c = Carousel::new(6, 3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.visible(), 0..3);
    assert!(!c.can_prev());
    assert!(c.can_next());
}

#[test]
fn page_count_accounts_for_per_view() {
    assert_eq!(Carousel::new(6, 1).page_count(), 6);
    assert_eq!(Carousel::new(6, 3).page_count(), 4);
    assert_eq!(Carousel::new(2, 3).page_count(), 1);
    assert_eq!(Carousel::new(0, 1).page_count(), 0);
}

#[test]
fn next_clamps_at_last_page() {
    let mut c = Carousel::new(4, 2);
    c.next();
    c.next();
    c.next();
    assert_eq!(c.index(), 2);
    assert_eq!(c.visible(), 2..4);
    assert!(!c.can_next());
}

#[test]
fn prev_clamps_at_first_page() {
    let mut c = Carousel::new(4, 1);
    c.prev();
    assert_eq!(c.index(), 0);
}

#[test]
fn go_to_clamps_page() {
    let mut c = Carousel::new(6, 2);
    c.go_to(3);
    assert_eq!(c.index(), 3);
    c.go_to(99);
    assert_eq!(c.index(), 4);
}

#[test]
fn autoplay_rewinds_after_last_page() {
    let mut c = Carousel::new(3, 1);
    c.autoplay_tick();
    c.autoplay_tick();
    assert_eq!(c.index(), 2);
    c.autoplay_tick();
    assert_eq!(c.index(), 0);
}

#[test]
fn autoplay_with_everything_visible_stays_put() {
    let mut c = Carousel::new(2, 3);
    c.autoplay_tick();
    assert_eq!(c.index(), 0);
    assert_eq!(c.visible(), 0..2);
}

#[test]
fn widening_view_reclamps_index() {
    let mut c = Carousel::new(6, 1);
    c.go_to(5);
    c.set_per_view(3);
    assert_eq!(c.index(), 3);
    assert_eq!(c.visible(), 3..6);
}

#[test]
fn zero_per_view_is_treated_as_one() {
    let c = Carousel::new(4, 0);
    assert_eq!(c.per_view(), 1);
}

#[test]
fn offset_percent_tracks_index() {
    let mut c = Carousel::new(6, 2);
    c.go_to(2);
    assert!((c.offset_percent() - 100.0).abs() < f64::EPSILON);
}

// =============================================================
// Viewport fitting
// =============================================================

#[test]
fn first_render_ignores_viewport_width() {
    // Server and hydrating client must agree on the dot count.
    let first = Carousel::new(6, 1);
    assert_eq!(first.per_view(), 1);
    assert_eq!(first.page_count(), 6);
}

#[test]
fn fit_width_applies_breakpoint_after_first_render() {
    let mut c = Carousel::new(6, 1);
    c.go_to(5);
    c.fit_width(1280, 1, GALLERY_BREAKPOINTS);
    assert_eq!(c.per_view(), 3);
    assert_eq!(c.page_count(), 4);
    assert_eq!(c.index(), 3);
}

#[test]
fn fit_width_below_breakpoints_returns_to_base() {
    let mut c = Carousel::new(6, 1);
    c.fit_width(1280, 1, GALLERY_BREAKPOINTS);
    c.fit_width(320, 1, GALLERY_BREAKPOINTS);
    assert_eq!(c.per_view(), 1);
    assert_eq!(c.page_count(), 6);
}
