//! Browser wiring for the pointer tracker: document moves in, CSS variables out.

use crate::constants::*;
use crate::cursor::TrailDots;
use crate::dom::{self, EventListener};
use crate::host::{BrowserScheduler, Dispatch};
use crate::style;
use instant::Instant;
use motion_core::ambient::{self, AmbientOffset, AmbientReader};
use motion_core::{Capabilities, MotionConfig, PointerSample, PointerTracker, TaskId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes ambient offsets to custom properties on `<html>`; the only reader the
/// page itself needs, background layers consume the properties from CSS.
struct CssSink {
    root: web::HtmlElement,
    reader: AmbientReader,
    seen: u64,
}

impl CssSink {
    fn flush(&mut self) {
        let Some((version, offset)) = self.reader.changed_since(self.seen) else {
            return;
        };
        self.seen = version;
        write_vars(&self.root, &offset);
    }
}

fn write_vars(root: &web::HtmlElement, o: &AmbientOffset) {
    dom::set_style(root, VAR_MOUSE_X, &style::px(o.mouse_x));
    dom::set_style(root, VAR_MOUSE_Y, &style::px(o.mouse_y));
    dom::set_style(root, VAR_PARALLAX_X, &style::px(o.parallax_x));
    dom::set_style(root, VAR_PARALLAX_Y, &style::px(o.parallax_y));
    dom::set_style(root, VAR_NORMALIZED_X, &style::unitless(o.normalized_x));
    dom::set_style(root, VAR_NORMALIZED_Y, &style::unitless(o.normalized_y));
}

pub struct AmbientBinding {
    tracker: Rc<RefCell<PointerTracker>>,
    scheduler: BrowserScheduler,
    _listener: EventListener,
}

impl AmbientBinding {
    /// `None` when pointer effects are gated or the document has no root element.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
        config: &MotionConfig,
    ) -> Option<Self> {
        let root = dom::root_element(document)?;
        let (writer, reader) = ambient::channel();
        let tracker = Rc::new(RefCell::new(PointerTracker::activate(
            capabilities,
            config,
            writer,
        )?));

        let origin = Instant::now();
        let sink = RefCell::new(CssSink {
            root,
            reader,
            seen: 0,
        });
        let trail_dots = TrailDots::find(document);
        let weak = Rc::downgrade(&tracker);
        let frame_window = window.clone();
        let dispatch: Dispatch = Rc::new(move |sched: &mut BrowserScheduler, task: TaskId| {
            let Some(tracker) = weak.upgrade() else {
                return;
            };
            let viewport = dom::viewport_size(&frame_window);
            let now = origin.elapsed();
            let mut tracker = tracker.borrow_mut();
            let moved = tracker.on_frame(task, viewport).is_some();
            if moved {
                sink.borrow_mut().flush();
            }
            if !moved && !tracker.on_fade_frame(task, now) {
                return;
            }
            // repaint until the last dot has expired
            if let Some(dots) = &trail_dots {
                dots.render(tracker.trail(), now);
                tracker.schedule_fade(sched, now);
            }
        });
        let scheduler = BrowserScheduler::new(window.clone(), dispatch);

        let move_tracker = tracker.clone();
        let mut move_scheduler = scheduler.clone();
        let listener = EventListener::passive(document, "mousemove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let sample =
                PointerSample::new(ev.client_x() as f32, ev.client_y() as f32, origin.elapsed());
            move_tracker.borrow_mut().pointer_move(&mut move_scheduler, sample);
        });

        log::info!("[ambient] tracking pointer");
        Some(Self {
            tracker,
            scheduler,
            _listener: listener,
        })
    }
}

impl Drop for AmbientBinding {
    fn drop(&mut self) {
        self.tracker.borrow_mut().teardown(&mut self.scheduler);
        self.scheduler.cancel_all();
    }
}
