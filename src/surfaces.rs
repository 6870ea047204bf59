//! Content surfaces: tilting cards, scroll-linked sections and typed headlines.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::host::{BrowserScheduler, Dispatch};
use crate::overrides;
use crate::style;
use glam::Vec2;
use instant::Instant;
use motion_core::constants::{DEFAULT_SCROLL_OFFSET_PX, DEFAULT_SCROLL_SPEED};
use motion_core::tilt::{self, CardTilt};
use motion_core::typewriter::Typewriter;
use motion_core::{Capabilities, FrameSlot, Scheduler, TaskId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_tilt(el: &web::HtmlElement, t: CardTilt) {
    dom::set_style(el, "transform", &style::card_transform(t.rotate_x_deg, t.rotate_y_deg));
    dom::set_style(el, VAR_LIGHT_X, &style::percent(t.light_x_pct));
    dom::set_style(el, VAR_LIGHT_Y, &style::percent(t.light_y_pct));
}

fn attr_number(el: &web::Element, name: &str) -> Option<f32> {
    el.get_attribute(name)
        .as_deref()
        .and_then(overrides::parse_number)
        .filter(|v| v.is_finite())
}

fn attr_millis(el: &web::Element, name: &str) -> Option<Duration> {
    attr_number(el, name)
        .filter(|ms| *ms >= 0.0)
        .map(|ms| Duration::from_millis(ms as u64))
}

struct Card {
    el: web::HtmlElement,
    window: web::Window,
    capabilities: Capabilities,
    frame: FrameSlot<Vec2>,
}

impl Card {
    fn on_frame(&mut self, task: TaskId) {
        let Some(pointer) = self.frame.fire(task) else {
            return;
        };
        let r = self.el.get_bounding_client_rect();
        let t = tilt::card_tilt(
            pointer,
            Vec2::new(r.left() as f32, r.top() as f32),
            Vec2::new(r.width() as f32, r.height() as f32),
            self.capabilities,
            dom::viewport_size(&self.window).x,
        );
        apply_tilt(&self.el, t);
    }
}

/// A `[data-tilt]` card. Moves are coalesced to one tilt per frame; leaving resets
/// immediately.
pub struct TiltBinding {
    card: Rc<RefCell<Card>>,
    scheduler: BrowserScheduler,
    _listeners: [EventListener; 2],
}

impl TiltBinding {
    fn mount(window: &web::Window, el: web::HtmlElement, capabilities: Capabilities) -> Self {
        let card = Rc::new(RefCell::new(Card {
            el: el.clone(),
            window: window.clone(),
            capabilities,
            frame: FrameSlot::default(),
        }));

        let weak = Rc::downgrade(&card);
        let dispatch: Dispatch = Rc::new(move |_: &mut BrowserScheduler, task: TaskId| {
            if let Some(card) = weak.upgrade() {
                card.borrow_mut().on_frame(task);
            }
        });
        let scheduler = BrowserScheduler::new(window.clone(), dispatch);

        let movement = {
            let card = card.clone();
            let mut scheduler = scheduler.clone();
            EventListener::passive(&el, "mousemove", move |ev: web::Event| {
                let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                card.borrow_mut().frame.submit(&mut scheduler, pointer);
            })
        };
        let leave = {
            let card = card.clone();
            let mut scheduler = scheduler.clone();
            EventListener::new(&el, "mouseleave", move |_| {
                let mut card = card.borrow_mut();
                card.frame.cancel(&mut scheduler);
                apply_tilt(&card.el, CardTilt::REST);
            })
        };
        Self {
            card,
            scheduler,
            _listeners: [movement, leave],
        }
    }

    pub fn mount_all(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
    ) -> Vec<Self> {
        if !capabilities.allows_animation() {
            return Vec::new();
        }
        dom::html_all(document, TILT_SELECTOR)
            .into_iter()
            .map(|el| Self::mount(window, el, capabilities))
            .collect()
    }
}

impl Drop for TiltBinding {
    fn drop(&mut self) {
        self.card.borrow_mut().frame.cancel(&mut self.scheduler);
        self.scheduler.cancel_all();
    }
}

struct Section {
    el: web::HtmlElement,
    offset: f32,
    speed: f32,
}

struct ScrollState {
    window: web::Window,
    sections: Vec<Section>,
    capabilities: Capabilities,
    frame: FrameSlot<()>,
}

impl ScrollState {
    fn layout(&self) {
        let viewport = dom::viewport_size(&self.window);
        for s in &self.sections {
            let r = s.el.get_bounding_client_rect();
            let progress = tilt::scroll_progress(r.top() as f32, r.height() as f32, viewport.y);
            let y = tilt::scroll_parallax_y(
                progress,
                s.offset,
                s.speed,
                self.capabilities,
                viewport.x,
            );
            dom::set_style(&s.el, "transform", &format!("translateY({})", style::px(y)));
        }
    }
}

/// `[data-scroll-parallax]` sections, re-laid out at most once per frame while
/// scrolling or resizing.
pub struct ScrollBinding {
    state: Rc<RefCell<ScrollState>>,
    scheduler: BrowserScheduler,
    _listeners: [EventListener; 2],
}

impl ScrollBinding {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
    ) -> Option<Self> {
        if !capabilities.allows_animation() {
            return None;
        }
        let sections: Vec<Section> = dom::html_all(document, SCROLL_PARALLAX_SELECTOR)
            .into_iter()
            .map(|el| Section {
                offset: attr_number(&el, ATTR_SCROLL_OFFSET).unwrap_or(DEFAULT_SCROLL_OFFSET_PX),
                speed: attr_number(&el, ATTR_SCROLL_SPEED).unwrap_or(DEFAULT_SCROLL_SPEED),
                el,
            })
            .collect();
        if sections.is_empty() {
            return None;
        }
        let state = Rc::new(RefCell::new(ScrollState {
            window: window.clone(),
            sections,
            capabilities,
            frame: FrameSlot::default(),
        }));

        let weak = Rc::downgrade(&state);
        let dispatch: Dispatch = Rc::new(move |_: &mut BrowserScheduler, task: TaskId| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            if state.frame.fire(task).is_some() {
                state.layout();
            }
        });
        let scheduler = BrowserScheduler::new(window.clone(), dispatch);

        let relayout = |kind: &'static str| {
            let state = state.clone();
            let mut scheduler = scheduler.clone();
            EventListener::passive(window, kind, move |_| {
                let mut state = state.borrow_mut();
                if !state.frame.is_pending() {
                    state.frame.submit(&mut scheduler, ());
                }
            })
        };
        let listeners = [relayout("scroll"), relayout("resize")];
        state.borrow().layout();
        log::debug!("[scroll] {} sections bound", state.borrow().sections.len());

        Some(Self {
            state,
            scheduler,
            _listeners: listeners,
        })
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        self.state.borrow_mut().frame.cancel(&mut self.scheduler);
        self.scheduler.cancel_all();
    }
}

struct Typing {
    el: web::HtmlElement,
    typewriter: Typewriter,
    started: Instant,
    timer: Option<TaskId>,
}

impl Typing {
    fn tick(&mut self, scheduler: &mut dyn Scheduler) {
        let elapsed = self.started.elapsed();
        self.el.set_text_content(Some(self.typewriter.visible(elapsed)));
        let complete = self.typewriter.is_complete(elapsed);
        dom::toggle_class(&self.el, CLASS_TYPING, !complete);
        self.timer = self
            .typewriter
            .next_reveal(elapsed)
            .map(|wait| scheduler.set_timeout(wait));
    }
}

/// One `[data-typewriter]` element; its markup text is revealed character by character.
pub struct TypewriterBinding {
    typing: Rc<RefCell<Typing>>,
    scheduler: BrowserScheduler,
}

impl TypewriterBinding {
    fn mount(window: &web::Window, el: web::HtmlElement, capabilities: Capabilities) -> Self {
        let text = el.text_content().unwrap_or_default();
        let delay = attr_millis(&el, ATTR_TYPEWRITER_DELAY).unwrap_or_default();
        let mut typewriter = Typewriter::new(text, delay, capabilities);
        if let Some(speed) = attr_millis(&el, ATTR_TYPEWRITER_SPEED) {
            typewriter = typewriter.with_interval(speed);
        }
        let typing = Rc::new(RefCell::new(Typing {
            el,
            typewriter,
            started: Instant::now(),
            timer: None,
        }));

        let weak = Rc::downgrade(&typing);
        let dispatch: Dispatch = Rc::new(move |sched: &mut BrowserScheduler, task: TaskId| {
            let Some(typing) = weak.upgrade() else {
                return;
            };
            let mut typing = typing.borrow_mut();
            if typing.timer == Some(task) {
                typing.tick(sched);
            }
        });
        let mut scheduler = BrowserScheduler::new(window.clone(), dispatch);
        typing.borrow_mut().tick(&mut scheduler);
        Self { typing, scheduler }
    }

    pub fn mount_all(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
    ) -> Vec<Self> {
        dom::html_all(document, TYPEWRITER_SELECTOR)
            .into_iter()
            .map(|el| Self::mount(window, el, capabilities))
            .collect()
    }
}

impl Drop for TypewriterBinding {
    fn drop(&mut self) {
        if let Some(task) = self.typing.borrow_mut().timer.take() {
            self.scheduler.cancel(task);
        }
        self.scheduler.cancel_all();
    }
}
