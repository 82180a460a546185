//! Public self-service lookup result
//!
//! Shown without authentication, so it sticks to what a subscriber already
//! knows about their own account: status, plan, price, and renewal date.

use crate::domain::entities::Customer;

use super::{paint, status_label, BOLD, DIM};

pub struct LookupView<'a> {
    matches: &'a [Customer],
    query: &'a str,
}

impl<'a> LookupView<'a> {
    pub fn new(matches: &'a [Customer], query: &'a str) -> Self {
        Self { matches, query }
    }

    pub fn render(&self, supports_color: bool) -> String {
        if self.matches.is_empty() {
            return format!(
                "No account found for '{}'. Check your account or contact number.\n",
                self.query
            );
        }

        let mut out = String::new();
        for c in self.matches {
            out.push_str(&format!(
                "{}  {}\n",
                paint(&c.name, BOLD, supports_color),
                status_label(c.connection_status, supports_color)
            ));
            out.push_str(&format!(
                "  {} {}\n",
                paint("Account:     ", DIM, supports_color),
                c.account_id
            ));
            out.push_str(&format!(
                "  {} {} (RS {:.2}/month)\n",
                paint("Plan:        ", DIM, supports_color),
                c.provider,
                c.effective_price()
            ));
            out.push_str(&format!(
                "  {} {}\n\n",
                paint("Next renewal:", DIM, supports_color),
                c.renewal_date.format("%Y-%m-%d")
            ));
        }
        out
    }
}
