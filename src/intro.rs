//! Reactor ignition overlay: renders the sequencer's phase into the intro markup.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::host::{BrowserScheduler, Dispatch};
use crate::style;
use motion_core::{Capabilities, IntroSchedule, IntroSequencer, TaskId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Overlay {
    document: web::Document,
    root: web::HtmlElement,
    dots: Vec<web::HtmlElement>,
}

impl Overlay {
    fn render(&self, seq: &IntroSequencer) {
        let phase = seq.phase();
        _ = self.root.set_attribute("data-phase", phase.as_str());
        dom::set_style(
            &self.root,
            VAR_REACTOR_INTENSITY,
            &style::unitless(phase.intensity()),
        );
        dom::set_text(&self.document, INTRO_HEADLINE_ID, phase.headline());
        dom::set_text(&self.document, INTRO_SUBTEXT_ID, phase.subtext());
        dom::toggle_class(&self.root, CLASS_EXITING, seq.is_exiting());

        if let Some(ignite) = self.document.get_element_by_id(INTRO_IGNITE_ID) {
            dom::toggle_class(&ignite, CLASS_HIDDEN, !seq.shows_ignite_prompt());
        }
        if let Some(progress) = self.document.get_element_by_id(INTRO_PROGRESS_ID) {
            dom::toggle_class(&progress, CLASS_HIDDEN, !seq.shows_progress());
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::toggle_class(dot, CLASS_LIT, phase.progress_lit(i));
        }
        if phase.is_terminal() {
            self.hide();
        }
    }

    fn hide(&self) {
        dom::toggle_class(&self.root, CLASS_HIDDEN, true);
        // fallback for pages without the stylesheet
        dom::set_style(&self.root, "display", "none");
    }
}

pub struct IntroBinding {
    sequencer: Rc<RefCell<IntroSequencer>>,
    scheduler: BrowserScheduler,
    _listeners: Vec<EventListener>,
}

impl IntroBinding {
    /// Mount the overlay and run the startup bypass check.
    ///
    /// Without overlay markup there is nothing to gate, so `on_complete` runs
    /// immediately and no binding is returned.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
        schedule: IntroSchedule,
        on_complete: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let Some(root) = dom::html_by_id(document, INTRO_ROOT_ID) else {
            log::warn!("[intro] no #{} element, skipping intro", INTRO_ROOT_ID);
            on_complete();
            return None;
        };
        let overlay = Rc::new(Overlay {
            document: document.clone(),
            root,
            dots: dom::html_all(document, INTRO_PROGRESS_DOT_SELECTOR),
        });
        let sequencer = Rc::new(RefCell::new(IntroSequencer::new(schedule, move || {
            log::info!("[intro] complete");
            on_complete();
        })));

        let weak = Rc::downgrade(&sequencer);
        let timer_overlay = overlay.clone();
        let dispatch: Dispatch = Rc::new(move |sched: &mut BrowserScheduler, task: TaskId| {
            let Some(sequencer) = weak.upgrade() else {
                return;
            };
            let entered = sequencer.borrow_mut().on_timer(sched, task);
            if let Some(phase) = entered {
                log::debug!("[intro] phase {}", phase.as_str());
                timer_overlay.render(&sequencer.borrow());
            }
        });
        let mut scheduler = BrowserScheduler::new(window.clone(), dispatch);

        let mut listeners = Vec::with_capacity(2);
        {
            let sequencer = sequencer.clone();
            let overlay = overlay.clone();
            let mut scheduler = scheduler.clone();
            listeners.extend(dom::on_click(document, INTRO_IGNITE_ID, move || {
                let started = sequencer.borrow_mut().ignite(&mut scheduler);
                if started {
                    log::info!("[intro] ignition");
                    overlay.render(&sequencer.borrow());
                }
            }));
        }
        {
            let sequencer = sequencer.clone();
            let overlay = overlay.clone();
            let mut scheduler = scheduler.clone();
            listeners.extend(dom::on_click(document, INTRO_SKIP_ID, move || {
                let skipped = sequencer.borrow_mut().skip(&mut scheduler);
                if skipped {
                    overlay.render(&sequencer.borrow());
                }
            }));
        }

        sequencer.borrow_mut().start(capabilities, &mut scheduler);
        overlay.render(&sequencer.borrow());

        Some(Self {
            sequencer,
            scheduler,
            _listeners: listeners,
        })
    }
}

impl Drop for IntroBinding {
    fn drop(&mut self) {
        self.sequencer.borrow_mut().teardown(&mut self.scheduler);
        self.scheduler.cancel_all();
    }
}
