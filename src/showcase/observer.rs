use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::progress::ScrollGeometry;
use super::state::{InteractionState, ShowcaseAction};

const RESIZE_SETTLE_MS: u32 = 150;

/// Reads the showcase region's bounding rect against the viewport.
pub fn read_geometry(region: &NodeRef) -> Option<ScrollGeometry> {
    let element = region.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport_height = window()?.inner_height().ok()?.as_f64()?;
    Some(ScrollGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}

fn evaluate(region: &NodeRef, dispatcher: &UseReducerDispatcher<InteractionState>) {
    match read_geometry(region) {
        Some(geometry) => dispatcher.dispatch(ShowcaseAction::Scrolled(geometry)),
        None => debug!("showcase region not mounted, skipping update"),
    }
}

type Slot<H> = Rc<RefCell<Option<H>>>;

/// Fills `slot` with a handle from `schedule` unless one is already pending.
///
/// `schedule` gets a weak reference for its callback to clear the slot with,
/// so a pending handle never keeps its own slot alive.
fn schedule_once<H>(slot: &Slot<H>, schedule: impl FnOnce(Weak<RefCell<Option<H>>>) -> H) -> bool {
    if slot.borrow().is_some() {
        return false;
    }
    let handle = schedule(Rc::downgrade(slot));
    *slot.borrow_mut() = Some(handle);
    true
}

fn release<H>(slot: &Weak<RefCell<Option<H>>>) {
    if let Some(slot) = slot.upgrade() {
        slot.borrow_mut().take();
    }
}

/// Keeps the showcase state in step with the page position.
///
/// Scroll events are coalesced to one evaluation per animation frame,
/// resizes are evaluated once the window settles, and the mapping runs
/// once on mount so a restored scroll position is reflected immediately.
#[hook]
pub fn use_showcase_observer(region: NodeRef, dispatcher: UseReducerDispatcher<InteractionState>) {
    {
        let region = region.clone();
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                // Initial check
                evaluate(&region, &dispatcher);
                || ()
            },
            (),
        );
    }

    // Dropping the handle cancels a frame that has not fired yet.
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    {
        let region = region.clone();
        let dispatcher = dispatcher.clone();
        use_event_with_window("scroll", move |_: Event| {
            let region = region.clone();
            let dispatcher = dispatcher.clone();
            schedule_once(&frame, move |pending| {
                request_animation_frame(move |_| {
                    release(&pending);
                    evaluate(&region, &dispatcher);
                })
            });
        });
    }

    let settle = use_mut_ref(|| None::<Timeout>);
    use_event_with_window("resize", move |_: Event| {
        let region = region.clone();
        let dispatcher = dispatcher.clone();
        // Replacing the handle drops, and so cancels, the previous timeout.
        *settle.borrow_mut() = Some(Timeout::new(RESIZE_SETTLE_MS, move || {
            evaluate(&region, &dispatcher);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Handle {
        cancelled: Rc<Cell<usize>>,
        _slot: Weak<RefCell<Option<Handle>>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn handle(cancelled: &Rc<Cell<usize>>, slot: Weak<RefCell<Option<Handle>>>) -> Handle {
        Handle { cancelled: cancelled.clone(), _slot: slot }
    }

    #[test]
    fn bursts_schedule_a_single_frame() {
        let cancelled = Rc::new(Cell::new(0));
        let slot: Slot<Handle> = Rc::new(RefCell::new(None));
        let mut pending = None;

        assert!(schedule_once(&slot, |weak| {
            pending = Some(weak.clone());
            handle(&cancelled, weak)
        }));
        assert!(!schedule_once(&slot, |weak| handle(&cancelled, weak)));
        assert!(!schedule_once(&slot, |weak| handle(&cancelled, weak)));

        // frame fires
        release(&pending.take().unwrap());
        assert!(slot.borrow().is_none());
        assert!(schedule_once(&slot, |weak| handle(&cancelled, weak)));
    }

    #[test]
    fn dropping_the_slot_cancels_the_pending_frame() {
        let cancelled = Rc::new(Cell::new(0));
        let slot: Slot<Handle> = Rc::new(RefCell::new(None));
        schedule_once(&slot, |weak| handle(&cancelled, weak));
        assert_eq!(cancelled.get(), 0);

        drop(slot);
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn release_after_unmount_is_harmless() {
        let cancelled = Rc::new(Cell::new(0));
        let slot: Slot<Handle> = Rc::new(RefCell::new(None));
        let mut pending = None;
        schedule_once(&slot, |weak| {
            pending = Some(weak.clone());
            handle(&cancelled, weak)
        });
        drop(slot);
        release(&pending.unwrap());
        assert_eq!(cancelled.get(), 1);
    }
}
