use serde_json::Value;

/// Heading printed above the data card.
pub const CARD_HEADING: &str = "Data from Backend:";

/// What the display currently holds.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    /// Nothing fetched yet; renders as `null`.
    Empty,
    Loaded(Value),
    /// The fetch failed; data stays `null` and the message is shown apart.
    Failed(String),
}

impl ViewState {
    pub fn data(&self) -> Option<&Value> {
        match self {
            ViewState::Loaded(value) => Some(value),
            ViewState::Empty | ViewState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            ViewState::Empty | ViewState::Loaded(_) => None,
        }
    }

    /// The data pretty-printed with two-space indentation, or `null`.
    pub fn data_json(&self) -> String {
        self.data()
            .and_then(|value| serde_json::to_string_pretty(value).ok())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Render the view as an HTML fragment.
    pub fn render_html(&self, title: &str) -> String {
        let mut html = String::new();
        html.push_str(&format!("<h1>{}</h1>\n", escape_text(title)));
        html.push_str("<div class=\"card\">\n");
        html.push_str(&format!("  <h2>{}</h2>\n", CARD_HEADING));
        html.push_str(&format!("  <pre>{}</pre>\n", escape_text(&self.data_json())));
        if let Some(message) = self.error() {
            html.push_str(&format!(
                "  <p class=\"error\">{}</p>\n",
                escape_text(message)
            ));
        }
        html.push_str("</div>\n");
        html
    }
}

/// Escape text placed inside an element body.
fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
