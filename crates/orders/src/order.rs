use serde::{Deserialize, Serialize};

/// Subtotal at or above this threshold discounts the whole order.
pub const DISCOUNT_THRESHOLD: u64 = 5000;

/// Fraction taken off once the threshold is crossed.
pub const DISCOUNT_RATE: f64 = 0.40;

/// One ordered item/variant, recorded as its display label.
///
/// There is no quantity field: ordering the same item twice produces two
/// lines with the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderLine(String);

impl OrderLine {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order lifecycle as observed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Empty,
    InProgress,
    Completed,
}

/// The current cart: ordered lines, running subtotal, completion flag.
///
/// The subtotal is the sum of each line's price *at the time it was added*;
/// later menu edits do not touch existing lines. Fields are private so the
/// only mutation paths are the session's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
    subtotal: u64,
    completed: bool,
}

impl Order {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rehydrate from a persisted record.
    pub fn from_parts(lines: Vec<OrderLine>, subtotal: u64, completed: bool) -> Self {
        Self {
            lines,
            subtotal,
            completed,
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.subtotal == 0
    }

    pub fn status(&self) -> OrderStatus {
        if self.completed {
            OrderStatus::Completed
        } else if self.is_empty() {
            OrderStatus::Empty
        } else {
            OrderStatus::InProgress
        }
    }

    /// Discount-adjusted total and whether the discount applied.
    ///
    /// Cliff function: crossing the threshold discounts the *entire* order,
    /// not just the excess. Exactly at the threshold triggers it.
    pub fn discounted_total(&self) -> (f64, bool) {
        if self.subtotal >= DISCOUNT_THRESHOLD {
            (self.subtotal as f64 * (1.0 - DISCOUNT_RATE), true)
        } else {
            (self.subtotal as f64, false)
        }
    }

    pub(crate) fn push_line(&mut self, line: OrderLine, price: u64) {
        self.lines.push(line);
        self.subtotal += price;
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}
