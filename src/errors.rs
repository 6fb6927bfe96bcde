//! Error types for badge configuration.
//!
//! Every variant is an invalid-argument failure: it is raised while a shape,
//! layout spec or gravity is being built, never while drawing.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised when badge configuration is rejected
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum BadgeError {
    #[error("invalid scale {value}: {reason}")]
    #[diagnostic(
        code(badger::config::invalid_scale),
        help("scale is relative to the canvas and must lie in [0, 1]")
    )]
    InvalidScale { value: f32, reason: NumericError },

    #[error("invalid aspect ratio {value}: {reason}")]
    #[diagnostic(
        code(badger::config::invalid_aspect_ratio),
        help("aspect ratio is width / height and must be a finite value above 0")
    )]
    InvalidAspectRatio { value: f32, reason: NumericError },

    #[error("invalid radius factor {value}: {reason}")]
    #[diagnostic(
        code(badger::config::invalid_radius_factor),
        help("radius factor is a fraction of half the shorter side and must lie in [0, 1]")
    )]
    InvalidRadiusFactor { value: f32, reason: NumericError },

    #[error("invalid gravity `{input}`: {message}")]
    #[diagnostic(
        code(badger::config::invalid_gravity),
        help("combine flags with `|`, e.g. `right|top` or `end|center_vertical`")
    )]
    InvalidGravity { input: String, message: String },
}

impl BadgeError {
    pub(crate) fn gravity(input: &str, message: impl Into<String>) -> Self {
        BadgeError::InvalidGravity {
            input: input.to_string(),
            message: message.into(),
        }
    }
}
