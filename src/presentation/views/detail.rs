//! Customer detail: full record plus purchase history

use crate::domain::entities::Customer;

use super::{paint, status_label, BOLD, DIM};

pub struct DetailView<'a> {
    customer: &'a Customer,
}

impl<'a> DetailView<'a> {
    pub fn new(customer: &'a Customer) -> Self {
        Self { customer }
    }

    pub fn render(&self, supports_color: bool) -> String {
        let c = self.customer;
        let mut out = String::new();

        out.push_str(&format!(
            "{}  {}\n\n",
            paint(&c.name, BOLD, supports_color),
            status_label(c.connection_status, supports_color)
        ));

        let field = |label: &str, value: &str| {
            format!("  {} {}\n", paint(&format!("{label:<18}"), DIM, supports_color), value)
        };

        out.push_str(&field("Account ID", &c.account_id));
        out.push_str(&field("Contact", &c.contact_number));
        out.push_str(&field("City", &c.city));
        out.push_str(&field("Email", c.email.as_deref().unwrap_or("N/A")));
        out.push_str(&field("Provider", &c.provider.to_string()));
        out.push_str(&field(
            "Monthly price",
            &format!(
                "RS {:.2}{}",
                c.effective_price(),
                if c.subscription_price.is_some() {
                    " (custom)"
                } else {
                    ""
                }
            ),
        ));
        out.push_str(&field(
            "Suggested tiers",
            &c.provider
                .price_tiers()
                .map(|p| format!("RS {p:.2}"))
                .join(" / "),
        ));
        out.push_str(&field(
            "Installed",
            &c.installation_date.format("%Y-%m-%d").to_string(),
        ));
        out.push_str(&field(
            "Next renewal",
            &c.renewal_date.format("%Y-%m-%d").to_string(),
        ));

        out.push_str(&format!(
            "\n{}\n",
            paint("Purchase & Payment History", BOLD, supports_color)
        ));
        if c.purchase_history.is_empty() {
            out.push_str(&paint("  No payments recorded.\n", DIM, supports_color));
        } else {
            for p in &c.purchase_history {
                out.push_str(&format!(
                    "  {}  {:<24} RS {:>8.2}  {}\n",
                    p.date.format("%Y-%m-%d"),
                    p.description,
                    p.amount,
                    p.payment_mode
                ));
            }
            out.push_str(&format!(
                "  {} RS {:.2}\n",
                paint("Total paid:", DIM, supports_color),
                c.total_paid()
            ));
        }
        out
    }
}
