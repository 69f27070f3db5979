use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cafepos_core::{PosError, PosResult};
use cafepos_ledger::RevenueLedger;
use cafepos_menu::{title_case, MenuStore, Size};

use crate::order::{Order, OrderLine, OrderStatus};
use crate::store::OrderStore;

/// Payment method chosen at checkout. Recorded on the receipt for display;
/// no processing happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Upi,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// What `finalize` hands back for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Discount-adjusted final total, in minor units (fractional after a
    /// discount).
    pub total: f64,
    pub discount_applied: bool,
    pub payment_method: PaymentMethod,
    pub completed_at: DateTime<Utc>,
}

/// Single-session checkout state machine.
///
/// Owns the in-progress order and the store it writes through to; the menu
/// and the revenue ledger are passed in by the caller, since admin
/// operations use them independently of any session. Lifecycle:
/// `Empty → InProgress → Completed`, with `start_new` resetting from any
/// state.
///
/// Mutations are staged on a copy and committed only after the store accepts
/// them, so a failed save leaves in-memory state unchanged.
#[derive(Debug)]
pub struct OrderSession<S: OrderStore> {
    order: Order,
    store: S,
}

impl<S: OrderStore> OrderSession<S> {
    /// Start with an empty order. Call [`resume_from_store`] to pick up a
    /// persisted one.
    ///
    /// [`resume_from_store`]: OrderSession::resume_from_store
    pub fn new(store: S) -> Self {
        Self {
            order: Order::empty(),
            store,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn status(&self) -> OrderStatus {
        self.order.status()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted record, if any, into an otherwise empty session.
    ///
    /// This is the only cross-invocation continuity mechanism. Reports
    /// whether anything was resumed; a session that already holds lines or a
    /// completed order is left alone.
    pub fn resume_from_store(&mut self) -> PosResult<bool> {
        if self.order.status() != OrderStatus::Empty {
            return Ok(false);
        }
        match self.store.load()? {
            Some(order) => {
                info!(
                    subtotal = order.subtotal(),
                    completed = order.is_completed(),
                    "resumed previous order"
                );
                self.order = order;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop the current order and its persisted record.
    pub fn start_new(&mut self) -> PosResult<()> {
        self.store.delete()?;
        self.order = Order::empty();
        debug!("order reset");
        Ok(())
    }

    /// Order one item at its current menu price and persist immediately.
    ///
    /// The price is captured now and never re-validated; an admin edit after
    /// this point does not change the line. Every successful add overwrites
    /// the persisted record with the full current order.
    pub fn add_line(&mut self, menu: &MenuStore, item: &str, size: Option<Size>) -> PosResult<()> {
        if self.order.is_completed() {
            return Err(PosError::OrderCompleted);
        }
        let price = menu.get_price(item, size)?;
        let label = match size {
            Some(size) => format!("{} ({})", title_case(item), size.label()),
            None => title_case(item),
        };

        let mut next = self.order.clone();
        next.push_line(OrderLine::new(label), price);
        self.store.save(&next)?;
        self.order = next;
        debug!(item, price, subtotal = self.order.subtotal(), "line added");
        Ok(())
    }

    /// Discount-adjusted total for the current order.
    pub fn compute_discounted_total(&self) -> (f64, bool) {
        self.order.discounted_total()
    }

    /// Complete the order: apply the discount, persist, credit revenue.
    ///
    /// Fails with `EmptyOrder` when nothing was ordered. Revenue is credited
    /// exactly once, on the `InProgress → Completed` transition; finalizing
    /// an already-completed order (or one resumed as completed) re-reports
    /// the receipt without crediting again.
    pub fn finalize(
        &mut self,
        payment_method: PaymentMethod,
        ledger: &mut RevenueLedger,
    ) -> PosResult<Receipt> {
        if self.order.is_empty() {
            return Err(PosError::EmptyOrder);
        }

        let (total, discount_applied) = self.order.discounted_total();
        if !self.order.is_completed() {
            let mut completed = self.order.clone();
            completed.mark_completed();
            self.store.save(&completed)?;
            self.order = completed;
            ledger.credit(total);
            info!(total, discount_applied, %payment_method, "order completed");
        }

        Ok(Receipt {
            total,
            discount_applied,
            payment_method,
            completed_at: Utc::now(),
        })
    }
}
