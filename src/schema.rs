//! The sample e-commerce database the generated queries target.
//!
//! Nothing here is ever queried: the tables exist only as a description that
//! the model is told to write SQL against, and that the UI shows next to the
//! form.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl fmt::Display for Table {
    /// Renders as `**name** (col, col, ...)`, the form used in the prompt.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** ({})", self.name, self.columns.join(", "))
    }
}

pub const SAMPLE_SCHEMA: &[Table] = &[
    Table {
        name: "customers",
        columns: &["id", "name", "email", "country", "created_at"],
    },
    Table {
        name: "products",
        columns: &["id", "name", "category", "price", "stock_quantity"],
    },
    Table {
        name: "orders",
        columns: &["id", "customer_id", "order_date", "total_amount", "status"],
    },
    Table {
        name: "order_items",
        columns: &["id", "order_id", "product_id", "quantity", "unit_price"],
    },
];

pub const EXAMPLE_QUERIES: &[&str] = &[
    "Show all customers from USA",
    "Find total sales for each product category",
    "List top 5 customers by order value",
    "Show products with low stock (less than 10)",
    "Get orders placed in the last 30 days",
];

/// One line per table, separated by blank lines.
pub fn describe(tables: &[Table]) -> String {
    tables
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
