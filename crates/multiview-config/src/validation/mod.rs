//! Full configuration validation.
//!
//! Validates numeric ranges and string fields. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::schema::MultiviewConfig;
use multiview_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MultiviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    misc::validate_session(&mut errors, config);
    misc::validate_share(&mut errors, config);
    misc::validate_player(&mut errors, config);
    misc::validate_schedule(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
