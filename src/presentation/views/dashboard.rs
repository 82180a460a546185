//! Admin dashboard: the three stat cards as text

use crate::domain::entities::RosterStats;

use super::{paint, BOLD, DIM, GREEN};

pub struct DashboardView {
    stats: RosterStats,
}

impl DashboardView {
    pub fn new(stats: RosterStats) -> Self {
        Self { stats }
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();
        out.push_str(&paint("Admin Dashboard", BOLD, supports_color));
        out.push_str("\n\n");
        out.push_str(&format!(
            "  {}  {}\n",
            paint("Total Customers:     ", DIM, supports_color),
            self.stats.total
        ));
        out.push_str(&format!(
            "  {}  {}\n",
            paint("Active Subscriptions:", DIM, supports_color),
            paint(&self.stats.active.to_string(), GREEN, supports_color)
        ));
        out.push_str(&format!(
            "  {}  RS {:.2}\n",
            paint("Total Revenue:       ", DIM, supports_color),
            self.stats.revenue
        ));
        out
    }
}
