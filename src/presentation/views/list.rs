//! Customer list table

use crate::domain::entities::Customer;
use crate::domain::value_objects::StatusFilter;

use super::{pad, paint, status_label, BOLD, DIM};

const NAME_W: usize = 24;
const ACCOUNT_W: usize = 12;
const CONTACT_W: usize = 14;
const CITY_W: usize = 14;

pub struct ListView<'a> {
    customers: &'a [Customer],
    filter: StatusFilter,
}

impl<'a> ListView<'a> {
    pub fn new(customers: &'a [Customer], filter: StatusFilter) -> Self {
        Self { customers, filter }
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();
        out.push_str(&paint(
            &format!("All Customers ({})", self.filter),
            BOLD,
            supports_color,
        ));
        out.push('\n');

        if self.customers.is_empty() {
            out.push_str(&paint(
                "\nNo customers found for this filter.\n",
                DIM,
                supports_color,
            ));
            return out;
        }

        out.push_str(&paint(
            &format!(
                "{} {} {} {} Status\n",
                pad("Name", NAME_W),
                pad("Account ID", ACCOUNT_W),
                pad("Contact", CONTACT_W),
                pad("City", CITY_W),
            ),
            DIM,
            supports_color,
        ));

        for customer in self.customers {
            out.push_str(&format!(
                "{} {} {} {} {}\n",
                pad(&customer.name, NAME_W),
                pad(&customer.account_id, ACCOUNT_W),
                pad(&customer.contact_number, CONTACT_W),
                pad(&customer.city, CITY_W),
                status_label(customer.connection_status, supports_color),
            ));
        }
        out
    }
}
