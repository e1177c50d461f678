//! # Config Commands
//!
//! Commands for the settings screen.

use cafe_core::validation::validate_tax_percent;
use cafe_core::TaxRate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, PosState, SettingsState};

/// Gets the current application configuration.
///
/// ## When Used
/// - Startup (store profile, currency formatting)
/// - Receipt printing
pub fn get_config(settings: &SettingsState) -> ConfigState {
    debug!("get_config command");
    settings.snapshot()
}

/// Changes the default tax rate (a percentage).
///
/// The new rate pre-fills orders started after the current one; the order
/// in progress keeps whatever rate it has.
pub fn set_default_tax(
    settings: &SettingsState,
    pos: &PosState,
    percent: Decimal,
) -> Result<ConfigState, ApiError> {
    debug!(%percent, "set_default_tax command");
    validate_tax_percent(percent)?;

    let rate = TaxRate::from_percent(percent);
    settings.set_default_tax_rate(rate);
    pos.with_session_mut(|s| s.transaction.order.set_default_tax_rate(rate));

    info!(%percent, "Default tax rate changed");
    Ok(settings.snapshot())
}
