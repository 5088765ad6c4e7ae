//! End-to-end checks of the navigation bar's state logic, driven the way the
//! component drives it: mount, resize, scroll ticks, clicks and hovers.

use app::{
    nav_items,
    navigation::{
        NavItem, NavLayout, NavState, NavTarget, SectionBounds, ViewportClass,
        compute_active_section, tracks_scroll,
    },
};

/// Sections laid out back to back, each `height` tall.
fn stacked_sections(ids: &[&str], height: f64) -> Vec<SectionBounds> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| SectionBounds::new(*id, index as f64 * height, height))
        .collect()
}

#[test]
fn test_scrolling_through_the_landing_page() {
    let items = nav_items();
    let sections = stacked_sections(&["home", "features", "pricing", "contact"], 900.0);
    let layout = NavLayout::default();
    let mut state = NavState::default();
    state.mount(Some(1280.0), &layout);

    let expected = [
        (0.0, "Home"),
        (799.0, "Home"),
        (800.0, "Features"),
        (1700.0, "Pricing"),
        (2600.0, "Contact"),
        (1000.0, "Features"),
    ];
    for (scroll_y, name) in expected {
        state.follow_scroll(&items, &sections, scroll_y, &layout);
        assert_eq!(state.active, name, "scroll_y = {scroll_y}");
    }
}

#[test]
fn test_active_section_matches_unique_containing_span() {
    let sections = stacked_sections(&["a", "b", "c", "d", "e"], 250.0);
    let layout = NavLayout::default();

    for scroll_y in (0..1400).step_by(37) {
        let effective = layout.effective_scroll(f64::from(scroll_y));
        let containing: Vec<&str> = sections
            .iter()
            .filter(|section| effective >= section.top && effective < section.top + section.height)
            .map(|section| section.id.as_str())
            .collect();
        assert!(containing.len() <= 1);
        assert_eq!(
            compute_active_section(&sections, effective),
            containing.first().copied()
        );
    }
}

#[test]
fn test_page_without_sections_only_moves_on_click() {
    let items = nav_items();
    let layout = NavLayout::default();
    let mut state = NavState::new("Privacy");

    assert!(!tracks_scroll(&items, 0));
    assert!(!state.follow_scroll(&items, &[], 400.0, &layout));
    assert_eq!(state.active, "Privacy");

    let target = state.select(&items[1]);
    assert_eq!(state.active, "Features");
    assert_eq!(target, NavTarget::Anchor("features".to_owned()));
}

#[test]
fn test_click_wins_over_scroll_position() {
    let items = nav_items();
    let sections = stacked_sections(&["home", "features", "pricing", "contact"], 900.0);
    let layout = NavLayout::default();
    let mut state = NavState::default();

    state.follow_scroll(&items, &sections, 0.0, &layout);
    assert_eq!(state.active, "Home");

    let pricing = items
        .iter()
        .find(|item| item.name == "Pricing")
        .expect("pricing item");
    state.select(pricing);
    assert_eq!(state.active, "Pricing");

    // The next scroll tick reflects where the page actually is.
    state.follow_scroll(&items, &sections, 1900.0, &layout);
    assert_eq!(state.active, "Pricing");
}

#[test]
fn test_external_item_navigates() {
    let items = nav_items();
    let mut state = NavState::default();

    let privacy = items.last().expect("privacy item");
    assert_eq!(state.select(privacy), NavTarget::External("/privacy".to_owned()));
    assert_eq!(state.active, "Privacy");
}

#[test]
fn test_resize_switches_render_mode_at_breakpoint() {
    let layout = NavLayout::default();
    let mut state = NavState::default();

    state.mount(Some(500.0), &layout);
    assert_eq!(state.viewport, ViewportClass::Narrow);
    assert!(!state.viewport.shows_labels());

    state.resize(1024.0, &layout);
    assert_eq!(state.viewport, ViewportClass::Wide);
    assert!(state.viewport.shows_labels());
}

#[test]
fn test_custom_layout_moves_breakpoint_and_lookahead() {
    let layout = NavLayout {
        narrow_breakpoint: 1024.0,
        scroll_lookahead: 0.0,
        anchor_offset: 0.0,
    };
    let items = vec![
        NavItem::new("One", "#one", icondata::FiHome),
        NavItem::new("Two", "#two", icondata::FiStar),
    ];
    let sections = stacked_sections(&["one", "two"], 500.0);
    let mut state = NavState::new("One");

    state.mount(Some(900.0), &layout);
    assert_eq!(state.viewport, ViewportClass::Narrow);

    state.follow_scroll(&items, &sections, 450.0, &layout);
    assert_eq!(state.active, "One");
    state.follow_scroll(&items, &sections, 500.0, &layout);
    assert_eq!(state.active, "Two");
}

#[test]
fn test_hover_and_leave() {
    let mut state = NavState::default();
    state.hover("Pricing");
    assert!(state.shows_hover("Pricing"));

    state.hover("Home");
    assert!(!state.shows_hover("Home"));
    assert!(!state.shows_hover("Pricing"));

    state.leave();
    assert_eq!(state.hovered, None);
}
