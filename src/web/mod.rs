//! Browser entry points for the shelf page.
//!
//! This is the only module that touches the DOM. It maps browser events to
//! [`Event`]s, feeds them to [`handle_event`] and executes the returned
//! actions, the same split the core uses everywhere else.
//!
//! # Wiring
//!
//! | Source                   | Event                  |
//! |--------------------------|------------------------|
//! | `#searchInput` `input`   | [`Event::SearchInput`] |
//! | `#sortSelect` `change`   | [`Event::SortChanged`] |
//! | `#dateSelect` `change`   | [`Event::DateChanged`] |
//! | `window` `load`          | [`Event::PageLoaded`]  |
//! | `window` `scroll`        | [`Event::Scrolled`]    |
//!
//! Missing controls are skipped; the rest of the page still works.
//!
//! `changeDate(date)` is also exported for inline `onchange` handlers. The two
//! date wirings are alternatives: a `#dateSelect` whose `onchange` calls
//! `changeDate` gets no `change` listener.

mod executor;
mod page;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement};

use crate::app::navigation::{date_change_actions, inline_date_handler, resolve_mode};
use crate::app::{handle_event, AppState, Event};
use crate::domain::Result;
use crate::observability::init_tracing;

use executor::execute_all;
use page::{dom_error, load_config, read_location, DomCards, Page};

/// Page state plus the DOM it drives.
struct Shelf {
    state: RefCell<AppState>,
    page: Page,
}

impl Shelf {
    fn dispatch(&self, event: &Event) {
        let result = handle_event(&mut self.state.borrow_mut(), event);
        match result {
            Ok(actions) => execute_all(&self.page, &actions),
            Err(e) => tracing::warn!(error = %e, "error handling event"),
        }
    }

    fn search_debounce_ms(&self) -> u32 {
        self.state.borrow().config.search_debounce_ms
    }
}

/// Module start hook.
///
/// Installs the panic hook, reads configuration, starts tracing and mounts
/// the page once the document has been parsed.
///
/// # Errors
///
/// Fails if there is no window or document, or a listener cannot be attached.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let config = load_config(&document);
    init_tracing(&config);

    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| {
            if let Err(e) = mount() {
                tracing::error!(error = %e, "failed to mount shelf page");
            }
        })
        .map_err(to_js)?;
        Ok(())
    } else {
        mount().map_err(to_js)
    }
}

/// Handles a date picked outside the `#dateSelect` listener.
///
/// Reloads with `?date=` in dynamic mode, or shows the static-mode notice.
/// An empty date does nothing.
///
/// # Errors
///
/// Fails if the page location cannot be read or navigation is refused.
#[wasm_bindgen(js_name = changeDate)]
pub fn change_date(date: &str) -> std::result::Result<(), JsValue> {
    let page = Page::mount().map_err(to_js)?;
    let config = load_config(&page.document);
    let location = read_location(&page.window).map_err(to_js)?;
    let mode = resolve_mode(config.mode, &location);

    execute_all(&page, &date_change_actions(date, mode, &location));
    Ok(())
}

fn mount() -> Result<()> {
    let _span = tracing::debug_span!("mount").entered();

    let page = Page::mount()?;
    let config = load_config(&page.document);
    let location = page.location()?;
    let state = crate::initialize(&config, &DomCards(&page.cards), location);

    let shelf = Rc::new(Shelf {
        state: RefCell::new(state),
        page,
    });

    attach_search(&shelf)?;
    attach_sort(&shelf)?;
    attach_date(&shelf)?;
    attach_window(&shelf)?;

    Ok(())
}

fn attach_search(shelf: &Rc<Shelf>) -> Result<()> {
    let Some(input) = shelf
        .page
        .document
        .get_element_by_id("searchInput")
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        tracing::debug!("no #searchInput, search disabled");
        return Ok(());
    };

    let pending: Rc<Cell<Option<i32>>> = Rc::default();
    let handle = Rc::clone(shelf);
    let field = input.clone();

    listen(&input, "input", move |_| {
        let query = field.value();
        let quiet_ms = handle.search_debounce_ms();
        if quiet_ms == 0 {
            handle.dispatch(&Event::SearchInput { query });
            return;
        }

        let window = &handle.page.window;
        if let Some(timer) = pending.take() {
            window.clear_timeout_with_handle(timer);
        }

        let deferred = Rc::clone(&handle);
        let callback = Closure::once_into_js(move || {
            deferred.dispatch(&Event::SearchInput { query });
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            i32::try_from(quiet_ms).unwrap_or(i32::MAX),
        ) {
            Ok(timer) => pending.set(Some(timer)),
            Err(e) => tracing::warn!(error = %dom_error(e), "failed to schedule search"),
        }
    })
}

fn attach_sort(shelf: &Rc<Shelf>) -> Result<()> {
    let Some(select) = find_select(shelf, "sortSelect") else {
        tracing::debug!("no #sortSelect, sorting disabled");
        return Ok(());
    };

    let handle = Rc::clone(shelf);
    let field = select.clone();
    listen(&select, "change", move |_| {
        handle.dispatch(&Event::SortChanged { criterion: field.value() });
    })
}

fn attach_date(shelf: &Rc<Shelf>) -> Result<()> {
    let Some(select) = find_select(shelf, "dateSelect") else {
        return Ok(());
    };
    if inline_date_handler(select.get_attribute("onchange").as_deref()) {
        tracing::debug!("#dateSelect calls changeDate inline, not attaching listener");
        return Ok(());
    }

    let handle = Rc::clone(shelf);
    let field = select.clone();
    listen(&select, "change", move |_| {
        handle.dispatch(&Event::DateChanged { date: field.value() });
    })
}

fn attach_window(shelf: &Rc<Shelf>) -> Result<()> {
    let window = shelf.page.window.clone();

    let loaded = Rc::clone(shelf);
    let page_loaded = move || {
        let featured_cards = loaded.page.featured.len();
        loaded.dispatch(&Event::PageLoaded { featured_cards });
    };
    if shelf.page.document.ready_state() == "complete" {
        page_loaded();
    } else {
        listen(&window, "load", move |_| page_loaded())?;
    }

    let scrolled = Rc::clone(shelf);
    listen(&window, "scroll", move |_| match scrolled.page.window.scroll_y() {
        Ok(offset_y) => scrolled.dispatch(&Event::Scrolled { offset_y }),
        Err(e) => tracing::debug!(error = %dom_error(e), "scroll offset unavailable"),
    })
}

fn find_select(shelf: &Shelf, id: &str) -> Option<HtmlSelectElement> {
    shelf
        .page
        .document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
}

/// Attaches `handler` for the page lifetime.
fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

fn to_js(error: crate::ShelfError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
