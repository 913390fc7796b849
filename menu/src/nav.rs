// navigation sync
//
// three things have to agree: where the page is scrolled to, which tab in the category strip is
// highlighted, and the active section used for rendering.  two independent triggers change the
// active section -- the user clicking a tab, and the intersection observer reporting a section
// crossing the sticky header -- and they would fight each other while a smooth scroll started by
// a click is still moving the page past the intermediate sections.
//
// so the controller has two modes.  a click switches to ProgrammaticScroll and hands out a
// SettleToken; the caller arms a single timer for SETTLE_DELAY_MS and passes the token back to
// settle() when it fires.  observer reports are dropped until then.  every click replaces the
// token, so an old timer that was not cancelled in time cannot end the newer scroll early.

use tracing::{Level, debug, instrument, trace};

use crate::strip::{Direction, StripMetrics, StripStep, TabGeometry, centered_offset};

// height of the sticky header + category strip
pub const STICKY_OFFSET: f64 = 80.0;

// a programmatic scroll lands this far past the sticky line, so that the line falls inside the
// target section rather than exactly on its border
pub const ANCHOR_NUDGE: f64 = 5.0;

// the lower part of the viewport that does not count as "in view"
pub const BOTTOM_EXCLUSION: f64 = 0.4;

// how long observer reports stay suppressed after a click
pub const SETTLE_DELAY_MS: u32 = 1000;

// the dom, as far as navigation is concerned
//
// lookups return None when the element is not (yet) mounted; callers treat that as a no-op
pub trait Viewport {
    // document-relative top edge of a section anchor
    fn section_top(&self, id: &str) -> Option<f64>;

    fn scroll_page_to(&mut self, top: f64);

    fn strip_metrics(&self) -> Option<StripMetrics>;

    fn tab_geometry(&self, id: &str) -> Option<TabGeometry>;

    fn scroll_strip_to(&mut self, left: f64);

    fn scroll_strip_by(&mut self, delta: f64);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMode {
    #[default]
    Tracking,
    ProgrammaticScroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleToken(u64);

// a single entry of an intersection observer batch
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub intersecting: bool,
    // viewport-relative top edge of the section when the entry was recorded
    pub top: f64,
}

// the band of the viewport in which a section counts as the current one
//
// it starts under the sticky header and stops short of the bottom BOTTOM_EXCLUSION of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservationZone {
    pub top_inset: f64,
    pub bottom_exclusion: f64,
}

impl Default for ObservationZone {
    fn default() -> Self {
        ObservationZone {
            top_inset: STICKY_OFFSET,
            bottom_exclusion: BOTTOM_EXCLUSION,
        }
    }
}

impl ObservationZone {
    // the same zone in IntersectionObserver rootMargin syntax
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_inset,
            self.bottom_exclusion * 100.0
        )
    }

    // whether a section spanning [top, bottom) in viewport coordinates intersects the zone
    #[cfg(test)]
    pub(crate) fn contains(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let zone_top = self.top_inset;
        let zone_bottom = viewport_height * (1.0 - self.bottom_exclusion);

        zone_top < zone_bottom && top < zone_bottom && bottom > zone_top
    }
}

// where the page has to scroll so that the section sits right under the sticky header
pub fn page_target(section_top: f64) -> f64 {
    section_top - STICKY_OFFSET + ANCHOR_NUDGE
}

#[derive(Clone, Debug)]
pub struct NavSync {
    keys: Vec<String>,
    active: Option<String>,
    mode: NavMode,
    generation: u64,
}

impl NavSync {
    pub fn new(keys: Vec<String>) -> Self {
        NavSync {
            keys,
            active: None,
            mode: NavMode::Tracking,
            generation: 0,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn knows(&self, id: &str) -> bool {
        self.keys.iter().any(|key| key == id)
    }

    // a tab click (or anything acting like one)
    //
    // returns the token the caller must hand back to settle() after SETTLE_DELAY_MS, or None if
    // the target could not be found, in which case nothing changed
    #[instrument(level=Level::DEBUG, skip(self, view))]
    pub fn navigate<V: Viewport>(&mut self, id: &str, view: &mut V) -> Option<SettleToken> {
        if !self.knows(id) {
            debug!("ignoring navigation to unknown section");
            return None;
        }

        let Some(top) = view.section_top(id) else {
            debug!("section anchor is not mounted");
            return None;
        };

        self.generation += 1;
        self.mode = NavMode::ProgrammaticScroll;
        self.active = Some(id.to_owned());

        view.scroll_page_to(page_target(top));
        center_tab(id, view);

        debug!(generation = self.generation, "entered programmatic scroll");
        Some(SettleToken(self.generation))
    }

    // end of the suppression window; stale tokens are ignored
    pub fn settle(&mut self, token: SettleToken) -> bool {
        if self.mode != NavMode::ProgrammaticScroll || token.0 != self.generation {
            trace!(token = token.0, generation = self.generation, "ignoring stale settle");
            return false;
        }

        self.mode = NavMode::Tracking;
        debug!("back to tracking");
        true
    }

    // one intersection observer batch
    //
    // when several sections report as intersecting at once, the topmost one wins; returns whether
    // the active section changed
    // the section an observer batch would activate; None when the batch is suppressed or would
    // leave the active section where it is
    pub fn pending<'a>(&self, entries: &'a [Intersection]) -> Option<&'a str> {
        if self.mode == NavMode::ProgrammaticScroll {
            trace!(entries = entries.len(), "observer batch suppressed");
            return None;
        }

        let mut winner: Option<&Intersection> = None;
        for entry in entries
            .iter()
            .filter(|entry| entry.intersecting && self.knows(&entry.id))
        {
            match winner {
                Some(best) if best.top < entry.top => {}
                _ => winner = Some(entry),
            }
        }

        winner
            .map(|entry| entry.id.as_str())
            .filter(|id| !self.is_active(id))
    }

    pub fn observe<V: Viewport>(&mut self, entries: &[Intersection], view: &mut V) -> bool {
        let Some(winner) = self.pending(entries) else {
            return false;
        };

        debug!(section = %winner, "observer moved active section");
        self.active = Some(winner.to_owned());
        center_tab(winner, view);
        true
    }
}

// scroll the strip so the tab for id sits in its middle; skipped when either is not mounted
pub fn center_tab<V: Viewport>(id: &str, view: &mut V) {
    let Some(strip) = view.strip_metrics() else {
        return;
    };

    let Some(tab) = view.tab_geometry(id) else {
        return;
    };

    view.scroll_strip_to(centered_offset(tab, strip.client_width));
}

// an edge button press
pub fn step_strip<V: Viewport>(step: StripStep, direction: Direction, view: &mut V) {
    if view.strip_metrics().is_none() {
        return;
    }

    view.scroll_strip_by(step.delta(direction));
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    pub const VIEWPORT_HEIGHT: f64 = 800.0;

    // a page made of stacked sections plus a strip of equally wide tabs
    //
    // scrolls land instantly, which is what the browser converges to after the smooth animation
    #[derive(Debug)]
    pub struct FakeViewport {
        pub sections: Vec<(String, f64, f64)>,
        pub page_scroll: f64,
        pub tabs: HashMap<String, TabGeometry>,
        pub strip: Option<StripMetrics>,
        pub strip_scrolls: Vec<f64>,
    }

    impl FakeViewport {
        pub fn new(ids: &[&str]) -> Self {
            let mut sections = Vec::new();
            let mut tabs = HashMap::new();
            let mut top = 300.0;

            for (idx, id) in ids.iter().enumerate() {
                sections.push((id.to_string(), top, 1200.0));
                top += 1200.0;

                tabs.insert(
                    id.to_string(),
                    TabGeometry {
                        offset_left: idx as f64 * 120.0,
                        width: 110.0,
                    },
                );
            }

            FakeViewport {
                sections,
                page_scroll: 0.0,
                tabs,
                strip: Some(StripMetrics {
                    scroll_left: 0.0,
                    scroll_width: ids.len() as f64 * 120.0,
                    client_width: 300.0,
                }),
                strip_scrolls: Vec::new(),
            }
        }

        pub fn viewport_top(&self, id: &str) -> Option<f64> {
            self.section_top(id).map(|top| top - self.page_scroll)
        }

        // what the observer would report for the current scroll position
        pub fn intersections(&self) -> Vec<Intersection> {
            let zone = ObservationZone::default();

            self.sections
                .iter()
                .map(|(id, top, height)| {
                    let top = top - self.page_scroll;
                    Intersection {
                        id: id.clone(),
                        intersecting: zone.contains(top, top + height, VIEWPORT_HEIGHT),
                        top,
                    }
                })
                .collect()
        }
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.sections
                .iter()
                .find(|(section, _, _)| section == id)
                .map(|(_, top, _)| *top)
        }

        fn scroll_page_to(&mut self, top: f64) {
            self.page_scroll = top.max(0.0);
        }

        fn strip_metrics(&self) -> Option<StripMetrics> {
            self.strip
        }

        fn tab_geometry(&self, id: &str) -> Option<TabGeometry> {
            self.tabs.get(id).copied()
        }

        fn scroll_strip_to(&mut self, left: f64) {
            if let Some(strip) = self.strip.as_mut() {
                strip.scroll_left = left;
                self.strip_scrolls.push(left);
            }
        }

        fn scroll_strip_by(&mut self, delta: f64) {
            if let Some(strip) = self.strip.as_mut() {
                strip.scroll_left += delta;
                self.strip_scrolls.push(strip.scroll_left);
            }
        }
    }

    // stands in for the event loop timer: one pending settle, replaced on every schedule
    #[derive(Debug, Default)]
    pub struct SimClock {
        pub now: u64,
        pending: Option<(u64, SettleToken)>,
    }

    impl SimClock {
        pub fn schedule(&mut self, token: Option<SettleToken>) {
            if let Some(token) = token {
                self.pending = Some((self.now + u64::from(SETTLE_DELAY_MS), token));
            }
        }

        pub fn advance(&mut self, ms: u64, nav: &mut NavSync) {
            self.now += ms;

            if let Some((due, token)) = self.pending {
                if due <= self.now {
                    self.pending = None;
                    nav.settle(token);
                }
            }
        }
    }

    pub const IDS: [&str; 5] = ["pizza", "grill", "sandwiches", "crepes", "additions"];

    fn setup() -> (NavSync, FakeViewport, SimClock) {
        let keys = IDS.iter().map(|id| id.to_string()).collect();
        (NavSync::new(keys), FakeViewport::new(&IDS), SimClock::default())
    }

    fn entry(id: &str, intersecting: bool, top: f64) -> Intersection {
        Intersection {
            id: id.to_owned(),
            intersecting,
            top,
        }
    }

    #[test]
    fn navigation_activates_immediately_for_every_section() {
        for id in IDS {
            let (mut nav, mut view, _) = setup();
            view.page_scroll = 2000.0;

            assert!(nav.navigate(id, &mut view).is_some());
            assert_eq!(nav.active(), Some(id));
            assert_eq!(nav.mode(), NavMode::ProgrammaticScroll);
        }
    }

    #[test]
    fn observer_is_suppressed_during_programmatic_scroll() {
        let (mut nav, mut view, mut clock) = setup();

        clock.schedule(nav.navigate("crepes", &mut view));

        assert!(!nav.observe(&[entry("grill", true, 90.0)], &mut view));
        assert!(!nav.observe(&[entry("sandwiches", true, 100.0)], &mut view));
        assert_eq!(nav.active(), Some("crepes"));

        clock.advance(999, &mut nav);
        assert_eq!(nav.mode(), NavMode::ProgrammaticScroll);
        assert!(!nav.observe(&[entry("grill", true, 90.0)], &mut view));
        assert_eq!(nav.active(), Some("crepes"));
    }

    #[test]
    fn pending_reports_only_real_changes() {
        let (mut nav, mut view, mut clock) = setup();
        let batch = [entry("grill", true, 90.0), entry("pizza", false, -400.0)];

        assert_eq!(nav.pending(&batch), Some("grill"));
        assert!(nav.observe(&batch, &mut view));

        // same winner again
        assert_eq!(nav.pending(&batch), None);
        assert_eq!(nav.pending(&[entry("grill", false, 90.0)]), None);

        clock.schedule(nav.navigate("crepes", &mut view));
        assert_eq!(nav.pending(&[entry("sandwiches", true, 100.0)]), None);

        clock.advance(1000, &mut nav);
        assert_eq!(nav.pending(&[entry("sandwiches", true, 100.0)]), Some("sandwiches"));
    }

    #[test]
    fn tracking_resumes_after_settle_delay() {
        let (mut nav, mut view, mut clock) = setup();

        clock.schedule(nav.navigate("grill", &mut view));
        clock.advance(1000, &mut nav);
        assert_eq!(nav.mode(), NavMode::Tracking);

        assert!(nav.observe(&[entry("sandwiches", true, 120.0)], &mut view));
        assert_eq!(nav.active(), Some("sandwiches"));
    }

    #[test]
    fn repeated_navigation_restarts_the_window() {
        let (mut nav, mut view, mut clock) = setup();

        clock.schedule(nav.navigate("grill", &mut view));
        clock.advance(600, &mut nav);
        clock.schedule(nav.navigate("crepes", &mut view));
        clock.advance(600, &mut nav);

        // 1200ms after the first click but only 600ms after the second
        assert_eq!(nav.mode(), NavMode::ProgrammaticScroll);

        clock.advance(400, &mut nav);
        assert_eq!(nav.mode(), NavMode::Tracking);
    }

    #[test]
    fn stale_token_does_not_end_newer_scroll() {
        let (mut nav, mut view, _) = setup();

        let first = nav.navigate("grill", &mut view).unwrap();
        let second = nav.navigate("crepes", &mut view).unwrap();

        assert!(!nav.settle(first));
        assert_eq!(nav.mode(), NavMode::ProgrammaticScroll);
        assert!(nav.settle(second));
        assert!(!nav.settle(second));
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let (mut nav, mut view, _) = setup();
        view.sections.retain(|(id, _, _)| id != "crepes");

        assert_eq!(nav.navigate("crepes", &mut view), None);
        assert_eq!(nav.navigate("desserts", &mut view), None);
        assert_eq!(nav.active(), None);
        assert_eq!(nav.mode(), NavMode::Tracking);
        assert_eq!(view.page_scroll, 0.0);
    }

    #[test]
    fn unmounted_strip_skips_centering() {
        let (mut nav, mut view, _) = setup();
        view.strip = None;

        assert!(nav.navigate("crepes", &mut view).is_some());
        assert_eq!(nav.active(), Some("crepes"));
        assert!(view.strip_scrolls.is_empty());
    }

    #[test]
    fn active_change_centers_the_tab() {
        let (mut nav, mut view, _) = setup();

        nav.observe(&[entry("sandwiches", true, 100.0)], &mut view);

        // tab at 240..350 in a 300 wide strip
        assert_eq!(view.strip_scrolls, vec![145.0]);
    }

    #[test]
    fn topmost_intersecting_entry_wins() {
        let (mut nav, mut view, _) = setup();

        let batch = [
            entry("crepes", true, 300.0),
            entry("grill", false, -900.0),
            entry("sandwiches", true, 85.0),
        ];
        assert!(nav.observe(&batch, &mut view));
        assert_eq!(nav.active(), Some("sandwiches"));
    }

    #[test]
    fn unchanged_section_does_not_recenter() {
        let (mut nav, mut view, _) = setup();

        assert!(nav.observe(&[entry("grill", true, 100.0)], &mut view));
        assert!(!nav.observe(&[entry("grill", true, 90.0)], &mut view));
        assert!(!nav.observe(&[entry("pizza", false, -1000.0)], &mut view));
        assert_eq!(view.strip_scrolls.len(), 1);
    }

    #[test]
    fn clicking_third_tab_aligns_section_under_header() {
        let (mut nav, mut view, mut clock) = setup();

        // reading the first section
        assert!(nav.observe(&view.intersections(), &mut view));
        assert_eq!(nav.active(), Some("pizza"));

        clock.schedule(nav.navigate("sandwiches", &mut view));
        assert_eq!(nav.active(), Some("sandwiches"));
        assert_eq!(
            view.viewport_top("sandwiches"),
            Some(STICKY_OFFSET - ANCHOR_NUDGE)
        );

        // intermediate reports while scrolling past grill are ignored
        assert!(!nav.observe(&[entry("grill", true, 100.0)], &mut view));

        clock.advance(1000, &mut nav);

        // once settled the observer agrees with the click
        nav.observe(&view.intersections(), &mut view);
        assert_eq!(nav.active(), Some("sandwiches"));
    }

    #[test]
    fn zone_matches_root_margin() {
        let zone = ObservationZone::default();

        assert_eq!(zone.root_margin(), "-80px 0px -40% 0px");

        // zone is 80..480 for an 800px viewport
        assert!(zone.contains(75.0, 1275.0, 800.0));
        assert!(zone.contains(400.0, 900.0, 800.0));
        assert!(!zone.contains(480.0, 900.0, 800.0));
        assert!(!zone.contains(-500.0, 80.0, 800.0));
    }

    #[test]
    fn step_requires_mounted_strip() {
        let (_, mut view, _) = setup();

        step_strip(StripStep::Forward, Direction::Rtl, &mut view);
        assert_eq!(view.strip.unwrap().scroll_left, -150.0);

        view.strip = None;
        step_strip(StripStep::Forward, Direction::Rtl, &mut view);
        assert_eq!(view.strip_scrolls.len(), 1);
    }
}
