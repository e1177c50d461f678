//! # POS State
//!
//! The register's single mutable session: cart, stock, movement log, receipt
//! history and expenses, plus the coordinator that issues receipt ids.
//!
//! ## Thread Safety
//! Wrapped in `Arc<Mutex<T>>` so a host shell can share it across callbacks.
//! Every command takes the lock once and never holds it across another lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PosState                                                               │
//! │  └── Arc<Mutex<Session>>                                                │
//! │        ├── transaction: TransactionState                                │
//! │        │     ├── order      (OrderBuilder)                              │
//! │        │     ├── stock      (StockBook)                                 │
//! │        │     ├── movements  (MovementLog, most recent first)            │
//! │        │     └── receipts   (ReceiptHistory, most recent first)         │
//! │        ├── coordinator: TransactionCoordinator                          │
//! │        └── expenses: Vec<Expense> (most recent first)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use cafe_core::checkout::ReceiptIdGenerator;
use cafe_core::coordinator::{TransactionCoordinator, TransactionState};
use cafe_core::stock::StockBook;
use cafe_core::{Expense, TaxRate};

/// Everything a register session mutates.
#[derive(Debug, Default)]
pub struct Session {
    pub transaction: TransactionState,
    pub coordinator: TransactionCoordinator,
    pub expenses: Vec<Expense>,
}

/// Shared POS session state.
#[derive(Debug, Clone, Default)]
pub struct PosState {
    session: Arc<Mutex<Session>>,
}

impl PosState {
    /// New session with random receipt ids.
    pub fn new(default_tax_rate: TaxRate, stock: StockBook) -> Self {
        Self::from_session(Session {
            transaction: TransactionState::new(default_tax_rate, stock),
            coordinator: TransactionCoordinator::default(),
            expenses: Vec::new(),
        })
    }

    /// New session whose receipts take ids from `ids`.
    pub fn with_ids(
        default_tax_rate: TaxRate,
        stock: StockBook,
        ids: Box<dyn ReceiptIdGenerator>,
    ) -> Self {
        Self::from_session(Session {
            transaction: TransactionState::new(default_tax_rate, stock),
            coordinator: TransactionCoordinator::with_ids(ids),
            expenses: Vec::new(),
        })
    }

    fn from_session(session: Session) -> Self {
        PosState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// A poisoned lock is recovered: every mutation the session allows
    /// leaves it consistent.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = pos.with_session(|s| s.transaction.order.totals());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// pos.with_session_mut(|s| s.transaction.order.add_item(&item));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
