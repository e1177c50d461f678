//! # State Module
//!
//! Register state, split by concern so each command asks only for what it
//! touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   PosState   │  │ CatalogState │  │  SettingsState   │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Catalog     │  │  RwLock<         │              │
//! │  │    Session   │  │  (menu)      │  │    ConfigState   │              │
//! │  │  >>          │  │              │  │  >               │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • PosState: exclusive access per command                              │
//! │  • CatalogState: read-only after startup                               │
//! │  • SettingsState: read-mostly; default tax is writable                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod pos;

pub use catalog::CatalogState;
pub use config::{ConfigState, SettingsState};
pub use pos::{PosState, Session};
