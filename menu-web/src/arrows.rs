//! Scroll-arrow state for the category strip.
//!
//! The strip scrolls horizontally. In a right-to-left layout `scrollLeft`
//! runs from `0` down to `-max`, so the distance travelled is always taken as
//! `|scrollLeft|` and the direction decides which arrow moves "forward".

/// Opacity applied to an arrow that cannot scroll any further.
pub const DIMMED_OPACITY: &str = "0.3";

/// Sub-pixel slack when comparing scroll positions against the strip edges.
const EDGE_TOLERANCE: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StripDirection {
    Ltr,
    #[default]
    Rtl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

impl ArrowSide {
    /// Signed `scrollLeft` change for one press of this arrow.
    pub fn scroll_delta(self, step: f64) -> f64 {
        match self {
            ArrowSide::Left => -step,
            ArrowSide::Right => step,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ArrowSide::Left => "❮",
            ArrowSide::Right => "❯",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ArrowSide::Left => "nav-arrow left",
            ArrowSide::Right => "nav-arrow right",
        }
    }
}

/// Raw scroll measurements of the strip element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StripMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl StripMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowState {
    /// Both arrows are hidden when the strip content fits its viewport.
    pub hidden: bool,
    pub left_dimmed: bool,
    pub right_dimmed: bool,
}

impl ArrowState {
    pub fn measure(direction: StripDirection, metrics: StripMetrics) -> Self {
        let max_scroll = metrics.max_scroll();
        let travelled = metrics.scroll_left.abs();

        let at_start = travelled <= EDGE_TOLERANCE;
        let at_end = travelled >= max_scroll - EDGE_TOLERANCE;

        let (left_dimmed, right_dimmed) = match direction {
            StripDirection::Ltr => (at_start, at_end),
            StripDirection::Rtl => (at_end, at_start),
        };

        Self {
            hidden: max_scroll <= 0.0,
            left_dimmed,
            right_dimmed,
        }
    }

    pub fn is_dimmed(&self, side: ArrowSide) -> bool {
        match side {
            ArrowSide::Left => self.left_dimmed,
            ArrowSide::Right => self.right_dimmed,
        }
    }

    /// Inline style for one arrow button.
    pub fn style(&self, side: ArrowSide) -> String {
        let opacity = if self.is_dimmed(side) { DIMMED_OPACITY } else { "1" };
        let visibility = if self.hidden { "hidden" } else { "visible" };
        format!("opacity: {opacity}; visibility: {visibility};")
    }
}
