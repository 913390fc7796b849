pub mod dom;
pub mod labels;
pub mod observer;
pub mod storage;
pub mod style;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use menu_core::{
    haptics::Haptic,
    nav::SETTLE_DELAY_MS,
    view::ViewState,
};

use dom::{DomViewport, haptic};
use storage::LocalPreferences;

pub type PageState = ViewState<LocalPreferences>;

// the one way to start a programmatic scroll, shared by the strip tabs and the action bar
//
// the settle timer is held in a signal so that a new click replaces (and thereby cancels)
// the previous one instead of stacking another
#[derive(Clone, Copy)]
pub struct Navigator {
    view: Signal<PageState>,
    settle: Signal<Option<Timeout>>,
}

impl Navigator {
    pub fn new(view: Signal<PageState>, settle: Signal<Option<Timeout>>) -> Self {
        Navigator { view, settle }
    }

    pub fn go(mut self, id: &str) {
        haptic(Haptic::Navigate);

        let token = self.view.write().navigate(id, &mut DomViewport::new());

        if let Some(token) = token {
            let mut view = self.view;
            let task = Timeout::new(SETTLE_DELAY_MS, move || {
                view.write().settle(token);
            });
            self.settle.set(Some(task));
        }
    }
}

// strip scroll frames arrive continuously; only a flipped indicator is worth a write
pub fn sync_edges(mut view: Signal<PageState>) {
    let pending = view.peek().pending_edges(&DomViewport::new());

    if let Some(edges) = pending {
        view.write().edges = edges;
    }
}
