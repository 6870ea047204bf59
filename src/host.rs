//! Browser implementation of [`motion_core::Scheduler`].
//!
//! Frames map to `requestAnimationFrame` and timers to `setTimeout`. Each fired task is
//! routed to the owning binding's dispatch function together with a scheduler handle,
//! so the binding can re-arm from inside the callback.

use fnv::FnvHashMap;
use motion_core::{Scheduler, TaskId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Dispatch = Rc<dyn Fn(&mut BrowserScheduler, TaskId)>;

#[derive(Clone, Copy)]
enum Handle {
    Frame(i32),
    Timer(i32),
}

struct Pending {
    handle: Handle,
    closure: Closure<dyn FnMut()>,
}

struct Inner {
    window: web::Window,
    next_id: u64,
    pending: FnvHashMap<TaskId, Pending>,
    // Closures that already fired. Kept until the next fire because the most
    // recent one may still be on the stack.
    spent: Vec<Closure<dyn FnMut()>>,
    dispatch: Dispatch,
}

impl Inner {
    fn cancel_handle(&self, handle: Handle) {
        match handle {
            Handle::Frame(h) => _ = self.window.cancel_animation_frame(h),
            Handle::Timer(h) => self.window.clear_timeout_with_handle(h),
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let handles: Vec<Handle> = self.pending.drain().map(|(_, p)| p.handle).collect();
        for handle in handles {
            self.cancel_handle(handle);
        }
        for closure in self.spent.drain(..) {
            closure.forget();
        }
    }
}

#[derive(Clone)]
pub struct BrowserScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl BrowserScheduler {
    pub fn new(window: web::Window, dispatch: Dispatch) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                window,
                next_id: 0,
                pending: FnvHashMap::default(),
                spent: Vec::new(),
                dispatch,
            })),
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Cancel everything still outstanding.
    pub fn cancel_all(&mut self) {
        let mut inner = self.inner.borrow_mut();
        let drained: Vec<Pending> = inner.pending.drain().map(|(_, p)| p).collect();
        for p in drained {
            inner.cancel_handle(p.handle);
        }
    }

    fn schedule(
        &mut self,
        arm: impl FnOnce(&web::Window, &js_sys::Function) -> Option<Handle>,
    ) -> TaskId {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            TaskId(inner.next_id)
        };
        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move || fire(&weak, id)) as Box<dyn FnMut()>);
        let mut inner = self.inner.borrow_mut();
        match arm(&inner.window, closure.as_ref().unchecked_ref()) {
            Some(handle) => {
                inner.pending.insert(id, Pending { handle, closure });
            }
            None => log::warn!("[host] could not schedule task {:?}", id),
        }
        id
    }
}

fn fire(weak: &Weak<RefCell<Inner>>, id: TaskId) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let dispatch = {
        let mut guard = inner.borrow_mut();
        guard.spent.clear();
        match guard.pending.remove(&id) {
            Some(p) => guard.spent.push(p.closure),
            None => return,
        }
        guard.dispatch.clone()
    };
    let mut handle = BrowserScheduler { inner };
    dispatch(&mut handle, id);
}

impl Scheduler for BrowserScheduler {
    fn request_frame(&mut self) -> TaskId {
        self.schedule(|window, f| window.request_animation_frame(f).ok().map(Handle::Frame))
    }

    fn set_timeout(&mut self, delay: Duration) -> TaskId {
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        self.schedule(|window, f| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(f, ms)
                .ok()
                .map(Handle::Timer)
        })
    }

    fn cancel(&mut self, task: TaskId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(p) = inner.pending.remove(&task) {
            inner.cancel_handle(p.handle);
        }
    }
}
