//! # Cafe Register Library
//!
//! The register session that sits between the display surfaces and
//! `cafe-core`: state containers, configuration, one command per operator
//! action, and logging.
//!
//! ## Module Organization
//! ```text
//! cafe_register/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── pos.rs      ◄─── Session (cart, stock, history) behind a Mutex
//! │   ├── catalog.rs  ◄─── Menu
//! │   └── config.rs   ◄─── Store profile, currency, default tax
//! ├── commands/       ◄─── Operator actions
//! ├── seed.rs         ◄─── Starting menu and stock
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()          RUST_LOG, default "info,cafe=debug"        │
//! │  2. ConfigState::from_env() CAFE_STORE_NAME, CAFE_TAX_RATE, ...         │
//! │  3. Register::bootstrap()   seed menu + stock, empty cart at default tax│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CatalogState, ConfigState, PosState, SettingsState};

/// The three state objects a host shell manages.
#[derive(Debug)]
pub struct Register {
    pub pos: PosState,
    pub catalog: CatalogState,
    pub settings: SettingsState,
}

impl Register {
    /// Seeds a register from `config`: the house menu, opening stock and an
    /// empty cart at the configured default tax.
    pub fn bootstrap(config: ConfigState) -> Self {
        let catalog = CatalogState::new(seed::default_menu());
        let pos = PosState::new(config.default_tax_rate, seed::initial_stock());

        info!(
            store = %config.store_name,
            menu_items = catalog.catalog().len(),
            default_tax = %config.default_tax_rate.percent(),
            "Register ready"
        );

        Register {
            pos,
            catalog,
            settings: SettingsState::new(config),
        }
    }

    /// [`bootstrap`](Self::bootstrap) with configuration from the environment.
    pub fn from_env() -> Self {
        Self::bootstrap(ConfigState::from_env())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cafe=trace` - Show trace for cafe crates only
/// - Default: INFO, DEBUG for cafe crates
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,cafe=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
