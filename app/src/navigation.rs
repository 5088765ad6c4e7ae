//! Pure state logic behind the navigation bar.
//!
//! Nothing in this module touches the DOM. The bar component measures the page,
//! feeds the measurements in here, and renders whatever [`NavState`] says. That
//! keeps the scroll-to-section mapping testable without a browser.

use core::fmt;

use icondata::Icon;

/// Name highlighted before any scroll position or click has picked an item.
pub const DEFAULT_ACTIVE: &str = "Home";

/// Viewports narrower than this many logical pixels only show icon glyphs.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Added to the raw scroll offset so the fixed bar does not hide the section
/// heading it is tracking.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Space kept free above an anchor target after a smooth scroll.
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

/// Rendered size of an item's icon glyph.
pub const ICON_SIZE_PX: u32 = 18;

/// Stroke weight of an item's icon glyph.
pub const ICON_STROKE_WIDTH: f64 = 2.5;

/// A single entry of the navigation bar.
#[derive(Clone, Debug)]
pub struct NavItem {
    pub name: String,
    pub url: String,
    pub icon: Icon,
}

impl NavItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon,
        }
    }

    /// Where following this item leads.
    #[must_use]
    pub fn target(&self) -> NavTarget {
        NavTarget::parse(&self.url)
    }

    /// Whether the url points at an in-page section.
    #[must_use]
    pub fn is_anchor(&self) -> bool {
        self.url.starts_with('#')
    }
}

/// Destination of a navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// An element id on the current page, without the leading `#`.
    Anchor(String),
    /// Anything else; followed with a full page navigation.
    External(String),
}

impl NavTarget {
    #[must_use]
    pub fn parse(url: &str) -> Self {
        url.strip_prefix('#').map_or_else(
            || Self::External(url.to_owned()),
            |id| Self::Anchor(id.to_owned()),
        )
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anchor(id) => write!(f, "#{id}"),
            Self::External(url) => f.write_str(url),
        }
    }
}

/// Vertical extent of one `section[id]` element, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Width-dependent rendering mode of the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    #[must_use]
    pub fn classify(width: f64, layout: &NavLayout) -> Self {
        if width < layout.narrow_breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// Wide viewports show text labels, narrow ones show icons.
    #[must_use]
    pub const fn shows_labels(self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// Pixel tuning of the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLayout {
    pub narrow_breakpoint: f64,
    pub scroll_lookahead: f64,
    pub anchor_offset: f64,
}

impl NavLayout {
    /// Raw scroll offset shifted by the lookahead.
    #[must_use]
    pub fn effective_scroll(&self, scroll_y: f64) -> f64 {
        scroll_y + self.scroll_lookahead
    }
}

impl Default for NavLayout {
    fn default() -> Self {
        Self {
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
            scroll_lookahead: SCROLL_LOOKAHEAD_PX,
            anchor_offset: ANCHOR_SCROLL_OFFSET_PX,
        }
    }
}

/// Returns the id of the first section, in document order, whose span contains
/// `effective_y`.
#[must_use]
pub fn compute_active_section(sections: &[SectionBounds], effective_y: f64) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.contains(effective_y))
        .map(|section| section.id.as_str())
}

/// Maps the section under `effective_y` to the item linking to it.
///
/// `None` when no section contains the position or when the section found has
/// no matching `#id` item.
#[must_use]
pub fn resolve_active_item<'a>(
    items: &'a [NavItem],
    sections: &[SectionBounds],
    effective_y: f64,
) -> Option<&'a str> {
    let id = compute_active_section(sections, effective_y)?;
    items
        .iter()
        .find(|item| item.url.strip_prefix('#') == Some(id))
        .map(|item| item.name.as_str())
}

/// Scroll tracking is only worth a listener when something can be tracked.
#[must_use]
pub fn tracks_scroll(items: &[NavItem], section_count: usize) -> bool {
    section_count > 0 && items.iter().any(NavItem::is_anchor)
}

/// Display state of the bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub mounted: bool,
    pub hovered: Option<String>,
    pub active: String,
    pub viewport: ViewportClass,
}

impl NavState {
    pub fn new(default_active: impl Into<String>) -> Self {
        Self {
            mounted: false,
            hovered: None,
            active: default_active.into(),
            viewport: ViewportClass::default(),
        }
    }

    /// Records the browser measurements taken on mount and opens the render gate.
    pub fn mount(&mut self, width: Option<f64>, layout: &NavLayout) {
        if let Some(width) = width {
            self.resize(width, layout);
        }
        self.mounted = true;
    }

    /// Reclassifies the viewport. Returns whether the class changed.
    pub fn resize(&mut self, width: f64, layout: &NavLayout) -> bool {
        let viewport = ViewportClass::classify(width, layout);
        let changed = viewport != self.viewport;
        self.viewport = viewport;
        changed
    }

    /// Applies one scroll tick. Returns whether the active item changed.
    ///
    /// When nothing matches the active item is left alone; the default only
    /// seeds the state.
    pub fn follow_scroll(
        &mut self,
        items: &[NavItem],
        sections: &[SectionBounds],
        scroll_y: f64,
        layout: &NavLayout,
    ) -> bool {
        let Some(name) = resolve_active_item(items, sections, layout.effective_scroll(scroll_y))
        else {
            return false;
        };
        if self.active == name {
            return false;
        }
        name.clone_into(&mut self.active);
        true
    }

    /// Marks `item` active regardless of scroll position and returns where the
    /// click should lead.
    pub fn select(&mut self, item: &NavItem) -> NavTarget {
        item.name.clone_into(&mut self.active);
        item.target()
    }

    /// Replaces the active item with a new default.
    pub fn reset_active(&mut self, default_active: &str) {
        default_active.clone_into(&mut self.active);
    }

    pub fn hover(&mut self, name: &str) {
        self.hovered = Some(name.to_owned());
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        self.active == name
    }

    /// Hover highlight, which the active item never receives.
    #[must_use]
    pub fn shows_hover(&self, name: &str) -> bool {
        self.hovered.as_deref() == Some(name) && !self.is_active(name)
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE)
    }
}
