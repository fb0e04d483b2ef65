//! Executes [`Action`]s against the DOM.
//!
//! Every DOM call can fail in principle. Failures are logged and the remaining
//! actions still run, so one bad node never stalls the rest of the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::page::{dom_error, Page};
use crate::app::{Action, RevealTarget};
use crate::domain::Result;

/// Runs actions in order, logging each failure.
pub fn execute_all(page: &Page, actions: &[Action]) {
    for action in actions {
        if let Err(e) = execute_action(page, action) {
            tracing::warn!(error = %e, action = ?action, "action failed");
        }
    }
}

/// Applies a single action to the page.
///
/// # Errors
///
/// Returns [`ShelfError::Dom`](crate::ShelfError::Dom) when the browser
/// rejects a DOM call.
pub fn execute_action(page: &Page, action: &Action) -> Result<()> {
    match action {
        Action::ShowCard { node, display } => {
            let Some(card) = page.card(*node) else {
                tracing::debug!(node = node.index(), "show for unknown card");
                return Ok(());
            };
            let style = card.style();
            if display.is_empty() {
                style.remove_property("display").map_err(dom_error)?;
            } else {
                style.set_property("display", display).map_err(dom_error)?;
            }
        }
        Action::HideCard { node } => {
            if let Some(card) = page.card(*node) {
                card.style().set_property("display", "none").map_err(dom_error)?;
            }
        }
        Action::ShowNoResults(show) => {
            if let Some(indicator) = &page.no_results {
                let value = if *show { "block" } else { "none" };
                indicator.style().set_property("display", value).map_err(dom_error)?;
            }
        }
        Action::Reorder(order) => {
            let Some(grid) = &page.grid else {
                tracing::debug!("no .books-grid, skipping reorder");
                return Ok(());
            };
            for node in order {
                if let Some(card) = page.card(*node) {
                    grid.append_child(card).map_err(dom_error)?;
                }
            }
        }
        Action::Navigate { url } => {
            tracing::info!(url = %url, "navigating");
            page.window.location().set_href(url).map_err(dom_error)?;
        }
        Action::ShowNotice { message } => match &page.date_notice {
            Some(notice) => notice.set_text_content(Some(message.as_str())),
            None => page.window.alert_with_message(message).map_err(dom_error)?,
        },
        Action::SetLastUpdated { text } => {
            if let Some(label) = &page.last_update {
                label.set_text_content(Some(text.as_str()));
            }
        }
        Action::Reveal { target, delay_ms } => {
            let card = match target {
                RevealTarget::Featured(i) => page.featured.get(*i),
                RevealTarget::Book(node) => page.card(*node),
            };
            if let Some(card) = card {
                schedule_reveal(page, card.clone(), *delay_ms)?;
            }
        }
        Action::SetHeaderScrolled(scrolled) => {
            if let Some(header) = &page.header {
                let classes = header.class_list();
                if *scrolled {
                    classes.add_1("scrolled").map_err(dom_error)?;
                } else {
                    classes.remove_1("scrolled").map_err(dom_error)?;
                }
            }
        }
    }
    Ok(())
}

fn schedule_reveal(page: &Page, card: HtmlElement, delay_ms: u32) -> Result<()> {
    let reveal = Closure::once_into_js(move || {
        let style = card.style();
        if let Err(e) = style
            .set_property("opacity", "1")
            .and_then(|()| style.set_property("transform", "translateY(0)"))
        {
            tracing::warn!(error = %dom_error(e), "reveal failed");
        }
    });

    page.window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            reveal.unchecked_ref::<js_sys::Function>(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .map_err(dom_error)?;
    Ok(())
}
