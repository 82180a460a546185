//! Plain-text views
//!
//! Each view owns references into the data it renders and produces a
//! `String`; the binary decides where it goes. Color is optional and
//! degrades to plain text.

mod dashboard;
mod detail;
mod list;
mod lookup;

pub use dashboard::DashboardView;
pub use detail::DetailView;
pub use list::ListView;
pub use lookup::LookupView;

use unicode_width::UnicodeWidthStr;

use crate::domain::value_objects::ConnectionStatus;

pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const BOLD: &str = "\x1b[1m";
pub(crate) const DIM: &str = "\x1b[2m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const YELLOW: &str = "\x1b[33m";

pub(crate) fn paint(text: &str, code: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Status label in its conventional color (green/red/yellow)
pub(crate) fn status_label(status: ConnectionStatus, supports_color: bool) -> String {
    let code = match status {
        ConnectionStatus::Active => GREEN,
        ConnectionStatus::Inactive => RED,
        ConnectionStatus::Pending => YELLOW,
    };
    paint(&status.to_string(), code, supports_color)
}

/// Pad `text` to `width` display columns, truncating over-long values
pub(crate) fn pad(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width > width {
        let mut out = String::new();
        let mut used = 0;
        for c in text.chars() {
            let w = UnicodeWidthStr::width(c.to_string().as_str());
            if used + w + 1 > width {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
        out.push_str(&" ".repeat(width - used));
        return out;
    }
    format!("{text}{}", " ".repeat(width - text_width))
}
