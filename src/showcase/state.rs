use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use super::progress::{ProgressMapper, ScrollGeometry};

/// The two producers of showcase state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShowcaseAction {
    /// Fresh geometry from the scroll observer.
    Scrolled(ScrollGeometry),
    Select(usize),
    Previous,
    Next,
}

/// Which feature the page is showing.
///
/// After a scroll update `active_index == floor(scroll_progress)`. A
/// navigation action overrides both fields and holds only until the next
/// pinned scroll update recomputes them.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    pub active_index: usize,
    pub scroll_progress: f64,
    mapper: ProgressMapper,
}

impl InteractionState {
    pub fn new(mapper: ProgressMapper) -> Self {
        Self {
            active_index: 0,
            scroll_progress: 0.0,
            mapper,
        }
    }

    pub fn feature_count(&self) -> usize {
        self.mapper.feature_count()
    }

    pub fn apply(&mut self, action: ShowcaseAction) {
        match action {
            ShowcaseAction::Scrolled(geometry) => self.on_scroll(&geometry),
            ShowcaseAction::Select(index) => self.select(index),
            ShowcaseAction::Previous => self.previous(),
            ShowcaseAction::Next => self.next(),
        }
    }

    /// Recomputes from geometry; leaves state untouched while the region
    /// is not pinned.
    pub fn on_scroll(&mut self, geometry: &ScrollGeometry) {
        let Some(progress) = self.mapper.map(geometry) else {
            return;
        };
        if progress.index != self.active_index {
            debug!("scroll: feature {} -> {}", self.active_index, progress.index);
        }
        self.active_index = progress.index;
        self.scroll_progress = progress.value;
    }

    pub fn select(&mut self, index: usize) {
        if index >= self.feature_count() {
            warn!("ignoring selection of feature {} (catalog has {})", index, self.feature_count());
            return;
        }
        if index != self.active_index {
            debug!("navigation: feature {} -> {}", self.active_index, index);
        }
        self.active_index = index;
        self.scroll_progress = index as f64;
    }

    pub fn previous(&mut self) {
        let count = self.feature_count();
        if count == 0 {
            return;
        }
        let index = if self.active_index > 0 {
            self.active_index - 1
        } else {
            count - 1
        };
        self.select(index);
    }

    pub fn next(&mut self) {
        let count = self.feature_count();
        if count == 0 {
            return;
        }
        let index = if self.active_index + 1 < count {
            self.active_index + 1
        } else {
            0
        };
        self.select(index);
    }
}

impl Reducible for InteractionState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
