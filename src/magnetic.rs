//! Browser wiring for `[data-magnetic]` elements.

use crate::constants::{MAGNETIC_INTENSITY_ATTR, MAGNETIC_SELECTOR};
use crate::dom::{self, EventListener};
use crate::host::{BrowserScheduler, Dispatch};
use crate::overrides;
use crate::style;
use glam::Vec2;
use motion_core::magnetic::MagnetUpdate;
use motion_core::{Capabilities, MagnetTarget, MagneticController, MotionConfig, TaskId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(el: &web::HtmlElement, update: MagnetUpdate) {
    if let Some(easing) = update.easing {
        dom::set_style(el, "transition", &style::transform_transition(easing.duration_ms()));
    }
    dom::set_style(el, "transform", &style::translate3d(update.translate));
}

/// Live rectangle of `el`, or `None` once it has left the document.
fn live_target(el: &web::HtmlElement) -> Option<MagnetTarget> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(MagnetTarget::from_rect(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

/// One magnetic element. Dropping it detaches every listener and cancels any
/// pending frame.
pub struct MagnetBinding {
    controller: Rc<RefCell<MagneticController>>,
    scheduler: BrowserScheduler,
    _listeners: [EventListener; 3],
}

impl MagnetBinding {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        el: web::HtmlElement,
        capabilities: Capabilities,
        config: &MotionConfig,
    ) -> Option<Self> {
        let intensity = el
            .get_attribute(MAGNETIC_INTENSITY_ATTR)
            .as_deref()
            .and_then(overrides::parse_number)
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(config.magnetic_intensity);
        let controller =
            MagneticController::new(capabilities, intensity, config.magnetic_max_px);
        if !controller.is_enabled() {
            return None;
        }
        let controller = Rc::new(RefCell::new(controller));
        dom::set_style(&el, "will-change", "transform");

        let weak = Rc::downgrade(&controller);
        let frame_el = el.clone();
        let dispatch: Dispatch = Rc::new(move |_: &mut BrowserScheduler, task: TaskId| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let update = controller.borrow_mut().on_frame(task);
            if let Some(update) = update {
                apply(&frame_el, update);
            }
        });
        let scheduler = BrowserScheduler::new(window.clone(), dispatch);

        let enter = {
            let controller = controller.clone();
            let el2 = el.clone();
            EventListener::new(&el, "mouseenter", move |_| {
                let update = controller.borrow_mut().pointer_enter();
                if let Some(update) = update {
                    apply(&el2, update);
                }
            })
        };
        let leave = {
            let controller = controller.clone();
            let mut scheduler = scheduler.clone();
            let el2 = el.clone();
            EventListener::new(&el, "mouseleave", move |_| {
                let update = controller.borrow_mut().pointer_leave(&mut scheduler);
                if let Some(update) = update {
                    apply(&el2, update);
                }
            })
        };
        let movement = {
            let controller = controller.clone();
            let mut scheduler = scheduler.clone();
            EventListener::passive(document, "mousemove", move |ev: web::Event| {
                let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let mut controller = controller.borrow_mut();
                if !controller.is_hovering() {
                    return;
                }
                let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                controller.pointer_move(&mut scheduler, pointer, live_target(&el));
            })
        };

        Some(Self {
            controller,
            scheduler,
            _listeners: [enter, leave, movement],
        })
    }

    /// Bind every magnetic element currently in the document.
    pub fn mount_all(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
        config: &MotionConfig,
    ) -> Vec<Self> {
        let bindings: Vec<Self> = dom::html_all(document, MAGNETIC_SELECTOR)
            .into_iter()
            .filter_map(|el| Self::mount(window, document, el, capabilities, config))
            .collect();
        log::info!("[magnetic] {} elements bound", bindings.len());
        bindings
    }
}

impl Drop for MagnetBinding {
    fn drop(&mut self) {
        self.controller.borrow_mut().teardown(&mut self.scheduler);
        self.scheduler.cancel_all();
    }
}
