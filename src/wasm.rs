use std::cell::RefCell;
use std::rc::Rc;

use navslide_ui::{Host, NavToggle, SharedDocument, ToggleError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::config::{AppConfig, CONFIG_ELEMENT_ID, ConfigError};
use crate::web::{WebAnimator, WebDocument, WebScheduler};

thread_local! {
    static TOGGLE: RefCell<Option<Rc<RefCell<NavToggle>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        web_sys::console::error_1(&"navslide: no window".into());
        return;
    };
    let Some(document) = window.document() else {
        web_sys::console::error_1(&"navslide: no document".into());
        return;
    };

    let loaded = load_config(&document);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("navslide: logger not installed: {}", e).into());
    }
    match loaded {
        Ok(Some(_)) => log::info!("Loaded configuration from #{}", CONFIG_ELEMENT_ID),
        Ok(None) => log::debug!("No #{} element, using defaults", CONFIG_ELEMENT_ID),
        Err(e) => log::warn!("Ignoring invalid configuration: {}", e),
    }

    match bind(window, document, config) {
        Ok(toggle) => TOGGLE.with(|slot| *slot.borrow_mut() = Some(toggle)),
        Err(ToggleError::ElementNotFound { selector }) => {
            log::debug!("{} not on this page, navigation toggle not bound", selector);
        }
        Err(e) => log::warn!("Failed to bind navigation toggle: {}", e),
    }
}

/// Open the navigation if it is closed. Returns whether anything happened.
#[wasm_bindgen]
pub fn open_navigation() -> bool {
    with_toggle(|toggle| toggle.open())
}

/// Close the navigation if it is open. Returns whether anything happened.
#[wasm_bindgen]
pub fn close_navigation() -> bool {
    with_toggle(|toggle| toggle.close())
}

/// Same as clicking the trigger. Returns `false` if the panel is gone.
#[wasm_bindgen]
pub fn toggle_navigation() -> bool {
    with_toggle(|toggle| toggle.activate())
}

fn with_toggle(f: impl FnOnce(&mut NavToggle) -> bool) -> bool {
    let toggle = TOGGLE.with(|slot| slot.borrow().clone());
    match toggle {
        Some(toggle) => match toggle.try_borrow_mut() {
            Ok(mut toggle) => f(&mut toggle),
            Err(_) => false,
        },
        None => false,
    }
}

/// Read the inline JSON config, if the page has one.
fn load_config(document: &web_sys::Document) -> Result<Option<AppConfig>, ConfigError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    AppConfig::from_json(&json).map(Some)
}

fn bind(
    window: web_sys::Window,
    document: web_sys::Document,
    config: AppConfig,
) -> Result<Rc<RefCell<NavToggle>>, ToggleError> {
    let toggle_config = config.toggle;
    let web_document = Rc::new(RefCell::new(WebDocument::new(document)));
    let shared: SharedDocument = web_document.clone();

    let host = Host::new(
        shared.clone(),
        Rc::new(WebAnimator::new(window.clone(), shared, toggle_config.easing)),
        Rc::new(WebScheduler::new()),
    );

    let trigger = toggle_config.trigger.clone();
    let toggle = NavToggle::bind(toggle_config, host)?
        .on_toggle(|state| log::info!("🧭 Navigation {}", state.name()));
    let toggle = Rc::new(RefCell::new(toggle));

    let handler = toggle.clone();
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        match handler.try_borrow_mut() {
            Ok(mut toggle) => {
                toggle.activate();
            }
            Err(_) => log::warn!("toggle busy, click ignored"),
        }
    }) as Box<dyn FnMut(Event)>);

    for element in web_document.borrow().elements(&trigger) {
        if let Err(e) =
            element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for clicks on {}: {:?}", trigger, e);
        }
    }
    on_click.forget(); // Leak the closure to keep it alive

    log::info!("Navigation toggle bound to {}", trigger);
    Ok(toggle)
}
