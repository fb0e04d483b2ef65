//! Date-driven navigation.
//!
//! The listing page is rendered per scrape date. In a dynamic deployment a date
//! change reloads the page from the backend with a `date` query parameter; in a
//! static deployment there is no backend, so the page only acknowledges the
//! choice and relabels itself.

use super::actions::Action;
use super::modes::DeploymentMode;
use chrono::NaiveDate;
use url::form_urlencoded;

/// The parts of `window.location` the page cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, e.g. `https:` or `file:`.
    pub protocol: String,
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
}

impl PageLocation {
    #[must_use]
    pub fn new(protocol: &str, pathname: &str, search: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            pathname: pathname.to_string(),
            search: search.to_string(),
        }
    }

    /// Builds the URL that renders the listing for `date`.
    ///
    /// Keeps the current path and replaces the query with a single
    /// form-urlencoded `date` parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfview::app::navigation::PageLocation;
    ///
    /// let here = PageLocation::new("https:", "/", "?date=2024-01-08");
    /// assert_eq!(here.date_url("2024-01-01"), "/?date=2024-01-01");
    /// ```
    #[must_use]
    pub fn date_url(&self, date: &str) -> String {
        let path = if self.pathname.is_empty() { "/" } else { self.pathname.as_str() };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("date", date)
            .finish();
        format!("{path}?{query}")
    }

    fn is_file(&self) -> bool {
        self.protocol.eq_ignore_ascii_case("file:")
    }

    fn has_query(&self) -> bool {
        !self.search.trim_start_matches('?').is_empty()
    }
}

/// Decides whether the page runs in static or dynamic mode.
///
/// An explicitly configured mode always wins. Without one, the page falls
/// back to sniffing its location: a `file:` URL or an empty query string is
/// treated as static.
///
/// # Examples
///
/// ```
/// use shelfview::app::modes::DeploymentMode;
/// use shelfview::app::navigation::{resolve_mode, PageLocation};
///
/// let fresh = PageLocation::new("https:", "/", "");
/// assert_eq!(resolve_mode(None, &fresh), DeploymentMode::Static);
/// assert_eq!(resolve_mode(Some(DeploymentMode::Dynamic), &fresh), DeploymentMode::Dynamic);
/// ```
#[must_use]
pub fn resolve_mode(configured: Option<DeploymentMode>, location: &PageLocation) -> DeploymentMode {
    if let Some(mode) = configured {
        return mode;
    }

    let mode = if location.is_file() || !location.has_query() {
        DeploymentMode::Static
    } else {
        DeploymentMode::Dynamic
    };
    tracing::debug!(
        protocol = %location.protocol,
        has_query = location.has_query(),
        mode = ?mode,
        "deployment mode inferred from location"
    );
    mode
}

/// Actions for a date picked in the date selector.
///
/// Returns no actions for an empty date. Dates are not validated: a value
/// that is not `YYYY-MM-DD` is logged and still used as-is.
#[must_use]
pub fn date_change_actions(date: &str, mode: DeploymentMode, location: &PageLocation) -> Vec<Action> {
    let date = date.trim();
    if date.is_empty() {
        tracing::debug!("empty date, ignoring");
        return vec![];
    }

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
    if parsed.is_none() {
        tracing::warn!(date = %date, "date is not in YYYY-MM-DD form");
    }

    match mode {
        DeploymentMode::Dynamic => {
            let url = location.date_url(date);
            tracing::info!(url = %url, "navigating to dated listing");
            vec![Action::Navigate { url }]
        }
        DeploymentMode::Static => {
            let shown = parsed.map_or_else(
                || date.to_string(),
                |d| d.format("%Y년 %-m월 %-d일").to_string(),
            );
            tracing::info!(date = %date, "static deployment, acknowledging date only");
            vec![
                Action::ShowNotice {
                    message: format!(
                        "{shown} 데이터를 선택했습니다. 정적 페이지에서는 표시된 도서 목록이 바뀌지 않습니다."
                    ),
                },
                Action::SetLastUpdated {
                    text: format!("{date} 데이터"),
                },
            ]
        }
    }
}

/// Whether a date selector's inline `onchange` already calls `changeDate`.
///
/// The exported `changeDate` and the selector's `change` listener are
/// alternative wirings. When the markup uses the former, the listener must
/// stay detached or every pick is handled twice.
///
/// # Examples
///
/// ```
/// use shelfview::app::navigation::inline_date_handler;
///
/// assert!(inline_date_handler(Some("changeDate(this.value)")));
/// assert!(!inline_date_handler(None));
/// ```
#[must_use]
pub fn inline_date_handler(onchange: Option<&str>) -> bool {
    onchange.is_some_and(|handler| handler.contains("changeDate"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_date_handler_detection() {
        assert!(inline_date_handler(Some("  changeDate(this.value); ")));
        assert!(!inline_date_handler(Some("trackPick(this.value)")));
        assert!(!inline_date_handler(Some("")));
        assert!(!inline_date_handler(None));
    }

    #[test]
    fn test_query_string_means_dynamic() {
        let location = PageLocation::new("https:", "/", "?date=2024-01-08");
        assert_eq!(resolve_mode(None, &location), DeploymentMode::Dynamic);
    }

    #[test]
    fn test_file_protocol_means_static() {
        let location = PageLocation::new("file:", "/srv/index.html", "?date=2024-01-08");
        assert_eq!(resolve_mode(None, &location), DeploymentMode::Static);
    }

    #[test]
    fn test_bare_question_mark_is_empty_query() {
        let location = PageLocation::new("https:", "/", "?");
        assert_eq!(resolve_mode(None, &location), DeploymentMode::Static);
    }

    #[test]
    fn test_dynamic_navigates_with_date() {
        let location = PageLocation::new("https:", "/", "?date=2024-01-08");
        let actions = date_change_actions("2024-01-01", DeploymentMode::Dynamic, &location);
        assert_eq!(
            actions,
            vec![Action::Navigate { url: "/?date=2024-01-01".to_string() }]
        );
    }

    #[test]
    fn test_dynamic_keeps_path_and_encodes_value() {
        let location = PageLocation::new("https:", "/books", "?date=x");
        let actions = date_change_actions("2024 01", DeploymentMode::Dynamic, &location);
        assert_eq!(
            actions,
            vec![Action::Navigate { url: "/books?date=2024+01".to_string() }]
        );
    }

    #[test]
    fn test_empty_date_is_noop() {
        let location = PageLocation::new("https:", "/", "?date=2024-01-08");
        assert!(date_change_actions("", DeploymentMode::Dynamic, &location).is_empty());
        assert!(date_change_actions("  ", DeploymentMode::Static, &location).is_empty());
    }

    #[test]
    fn test_static_shows_notice_and_relabels() {
        let location = PageLocation::new("file:", "/index.html", "");
        let actions = date_change_actions("2024-03-07", DeploymentMode::Static, &location);
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            Action::ShowNotice { message } => assert!(message.starts_with("2024년 3월 7일")),
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(
            actions[1],
            Action::SetLastUpdated { text: "2024-03-07 데이터".to_string() }
        );
    }

    #[test]
    fn test_static_unparseable_date_shown_verbatim() {
        let location = PageLocation::default();
        let actions = date_change_actions("지난주", DeploymentMode::Static, &location);
        match &actions[0] {
            Action::ShowNotice { message } => assert!(message.starts_with("지난주 ")),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
