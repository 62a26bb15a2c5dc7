use thiserror::Error;

/// Errors emitted while configuring panel geometry.
#[derive(Debug, Error, PartialEq)]
pub enum PanelError {
    #[error("panel width must be positive and finite, got {0}")]
    InvalidWidth(f32),
}
