#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod ambient;
mod config;
mod constants;
mod cursor;
mod dom;
mod host;
mod intro;
mod magnetic;
mod overrides;
mod style;
mod surfaces;

use ambient::AmbientBinding;
use intro::IntroBinding;
use magnetic::MagnetBinding;
use motion_core::{Capabilities, MotionConfig};
use surfaces::{ScrollBinding, TiltBinding, TypewriterBinding};

/// Effects that start once the intro has released the page.
struct Interactions {
    _ambient: Option<AmbientBinding>,
    _magnets: Vec<MagnetBinding>,
    _cards: Vec<TiltBinding>,
    _sections: Option<ScrollBinding>,
    _headlines: Vec<TypewriterBinding>,
}

impl Interactions {
    fn mount(
        window: &web::Window,
        document: &web::Document,
        capabilities: Capabilities,
        config: &MotionConfig,
    ) -> Self {
        Self {
            _ambient: AmbientBinding::mount(window, document, capabilities, config),
            _magnets: MagnetBinding::mount_all(window, document, capabilities, config),
            _cards: TiltBinding::mount_all(window, document, capabilities),
            _sections: ScrollBinding::mount(window, document, capabilities),
            _headlines: TypewriterBinding::mount_all(window, document, capabilities),
        }
    }
}

struct App {
    _intro: Option<IntroBinding>,
    _interactions: Rc<RefCell<Option<Interactions>>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn reveal_main(document: &web::Document) {
    if let Some(main) = document.get_element_by_id(constants::MAIN_CONTENT_ID) {
        dom::toggle_class(&main, constants::CLASS_HIDDEN, false);
        _ = main.remove_attribute("aria-hidden");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = config::log_level(dom::window_document().as_ref());
    console_log::init_with_level(level).ok();
    log::info!("starklabs-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let capabilities = config::capabilities(&window);
    let motion = config::load(&document);
    log::info!(
        "[env] reduced_motion={} coarse_pointer={}",
        capabilities.reduced_motion,
        capabilities.coarse_pointer
    );

    let schedule = motion.intro;
    let interactions: Rc<RefCell<Option<Interactions>>> = Rc::new(RefCell::new(None));
    let on_complete = {
        let interactions = interactions.clone();
        let window = window.clone();
        let document = document.clone();
        move || {
            reveal_main(&document);
            let mounted = Interactions::mount(&window, &document, capabilities, &motion);
            *interactions.borrow_mut() = Some(mounted);
        }
    };

    let intro = IntroBinding::mount(&window, &document, capabilities, schedule, on_complete);

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _intro: intro,
            _interactions: interactions,
        });
    });
    Ok(())
}
