// the page's view state
//
// one store for everything the page mutates at runtime: the navigation controller, the theme,
// the call popover and the strip edge indicators.  only the theme is ever persisted.

use tracing::{Level, instrument};

use crate::{
    contact::CallMenu,
    nav::{Intersection, NavSync, SettleToken, Viewport, center_tab, step_strip},
    strip::{Direction, ScrollEdges, StripStep},
    theme::{PreferenceStore, Theme, ThemeController},
};

#[derive(Debug)]
pub struct ViewState<S: PreferenceStore> {
    pub nav: NavSync,
    pub theme: ThemeController<S>,
    pub call_menu: CallMenu,
    pub edges: ScrollEdges,
    direction: Direction,
}

impl<S: PreferenceStore> ViewState<S> {
    pub fn new(keys: Vec<String>, direction: Direction, store: S) -> Self {
        ViewState {
            nav: NavSync::new(keys),
            theme: ThemeController::load(store),
            call_menu: CallMenu::default(),
            edges: ScrollEdges::default(),
            direction,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    #[instrument(level=Level::DEBUG, skip(self, view))]
    pub fn navigate<V: Viewport>(&mut self, id: &str, view: &mut V) -> Option<SettleToken> {
        let token = self.nav.navigate(id, view)?;

        // centering moved the strip
        self.refresh_edges(view);
        Some(token)
    }

    pub fn settle(&mut self, token: SettleToken) -> bool {
        self.nav.settle(token)
    }

    pub fn observe<V: Viewport>(&mut self, entries: &[Intersection], view: &mut V) -> bool {
        let changed = self.nav.observe(entries, view);

        if changed {
            self.refresh_edges(view);
        }
        changed
    }

    // the edge indicators the strip currently calls for, when they differ from the shown ones
    pub fn pending_edges<V: Viewport>(&self, view: &V) -> Option<ScrollEdges> {
        let metrics = view.strip_metrics()?;
        let edges = ScrollEdges::from_metrics(metrics);

        (edges != self.edges).then_some(edges)
    }

    // strip scrolled or window resized; leaves the edges alone when the strip is not mounted
    pub fn refresh_edges<V: Viewport>(&mut self, view: &V) -> bool {
        match self.pending_edges(view) {
            Some(edges) => {
                self.edges = edges;
                true
            }
            None => false,
        }
    }

    pub fn step_strip<V: Viewport>(&mut self, step: StripStep, view: &mut V) {
        step_strip(step, self.direction, view);
        self.refresh_edges(view);
    }

    // keep the highlighted tab visible after the strip changed size
    pub fn recenter<V: Viewport>(&mut self, view: &mut V) {
        if let Some(active) = self.nav.active().map(str::to_owned) {
            center_tab(&active, view);
        }
        self.refresh_edges(view);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }
}
