//! Sales reporting value objects.

use std::fmt;

use crate::constants::{CURRENCY_SYMBOL, SALES_REPORT_LABEL};

/// Aggregate sales across every product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesReport {
    pub total: f64,
}

/// Renders as `Total Sales: ₹1234.50`.
impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding +0.0 turns -0.0 into 0.0
        let total = self.total + 0.0;
        write!(f, "{}: {}{:.2}", SALES_REPORT_LABEL, CURRENCY_SYMBOL, total)
    }
}
