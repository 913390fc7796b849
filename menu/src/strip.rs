// geometry of the horizontally scrollable category strip
//
// all values are css pixels as reported by the dom; scroll_left may be negative for
// right-to-left strips, so the edge checks only look at its magnitude

use serde::{Deserialize, Serialize};

// distance from a scroll extreme that still counts as being at that extreme
pub const EDGE_TOLERANCE: f64 = 5.0;

// how far one press of an edge button moves the strip
pub const STRIP_STEP: f64 = 150.0;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    #[default]
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripStep {
    // toward the first tab
    Backward,
    // toward the last tab
    Forward,
}

impl StripStep {
    // physical horizontal delta for a scroll_by() call
    //
    // in a right-to-left strip the first tab sits at the right edge, so moving back toward it
    // means a positive delta
    pub fn delta(self, direction: Direction) -> f64 {
        match (self, direction) {
            (StripStep::Backward, Direction::Ltr) => -STRIP_STEP,
            (StripStep::Forward, Direction::Ltr) => STRIP_STEP,
            (StripStep::Backward, Direction::Rtl) => STRIP_STEP,
            (StripStep::Forward, Direction::Rtl) => -STRIP_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StripMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TabGeometry {
    pub offset_left: f64,
    pub width: f64,
}

// whether there is hidden content on either side of the strip; drives the two overlay buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollEdges {
    pub backward: bool,
    pub forward: bool,
}

impl ScrollEdges {
    pub fn from_metrics(metrics: StripMetrics) -> Self {
        let offset = metrics.scroll_left.abs();

        let at_start = offset < EDGE_TOLERANCE;
        let at_end = offset + metrics.client_width >= metrics.scroll_width - EDGE_TOLERANCE;

        ScrollEdges {
            backward: !at_start,
            forward: !at_end,
        }
    }
}

// scroll_left that puts the middle of the tab in the middle of the strip
pub fn centered_offset(tab: TabGeometry, strip_width: f64) -> f64 {
    tab.offset_left - strip_width / 2.0 + tab.width / 2.0
}
