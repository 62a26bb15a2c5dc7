use std::time::Duration;

use crate::error::PanelError;
use crate::overlay::overlay_opacity;

/// Duration of the settle animation requested after every resting change.
pub const PANEL_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Default width of the slide-out panel.
pub const DEFAULT_PANEL_WIDTH: f32 = 280.0;

/// Logical side-panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Closing,
    Open,
}

impl PanelState {
    /// Return whether the state is a momentary, gesture-driven one.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    fn resting_offset(self, panel_width: f32) -> Option<f32> {
        match self {
            Self::Open => Some(0.0),
            Self::Closed => Some(-panel_width),
            Self::Opening | Self::Closing => None,
        }
    }
}

/// Easing curve used by the host for panel animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto eased progress.
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Animated layout pass requested from the host after a settle.
///
/// The logical geometry is already final when this is issued; the values
/// here only describe how the host should get there visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAnimation {
    pub from_offset: f32,
    pub to_offset: f32,
    pub from_opacity: f32,
    pub to_opacity: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl PanelAnimation {
    /// Interpolate `(offset, opacity)` at linear progress in `[0, 1]`.
    pub fn sample(&self, progress: f32) -> (f32, f32) {
        let t = self.easing.apply(progress);
        (
            self.from_offset + (self.to_offset - self.from_offset) * t,
            self.from_opacity + (self.to_opacity - self.from_opacity) * t,
        )
    }
}

/// Side-panel state holder.
///
/// Two write paths exist: [`SidePanel::set_state`] snaps geometry to the
/// resting value of a logical state, while [`SidePanel::apply_live_offset`]
/// moves the geometry during a drag without touching the state.
#[derive(Debug, Clone)]
pub struct SidePanel {
    state: PanelState,
    offset: f32,
    opacity: f32,
    width: f32,
}

impl Default for SidePanel {
    fn default() -> Self {
        Self::closed(DEFAULT_PANEL_WIDTH)
    }
}

impl SidePanel {
    /// Create a closed panel of the given width.
    pub fn new(width: f32) -> Result<Self, PanelError> {
        validate_width(width)?;

        Ok(Self::closed(width))
    }

    fn closed(width: f32) -> Self {
        Self {
            state: PanelState::Closed,
            offset: -width,
            opacity: overlay_opacity(-width, width),
            width,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Current horizontal displacement (`0` open, `-width` closed).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current overlay opacity derived from the offset.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Open the panel immediately, requesting an animated layout pass.
    pub fn request_open(&mut self) -> Option<PanelAnimation> {
        self.set_state(PanelState::Open)
    }

    /// Close the panel immediately, requesting an animated layout pass.
    pub fn request_close(&mut self) -> Option<PanelAnimation> {
        self.set_state(PanelState::Closed)
    }

    /// Change the logical state.
    ///
    /// Resting states snap offset and overlay and return exactly one
    /// animation request. Transitioning states leave geometry untouched.
    pub(crate) fn set_state(
        &mut self,
        state: PanelState,
    ) -> Option<PanelAnimation> {
        let previous = self.state;
        self.state = state;
        log::debug!("side panel state {previous:?} -> {state:?}");

        let target = state.resting_offset(self.width)?;
        let from_offset = self.offset;
        let from_opacity = self.opacity;

        self.offset = target;
        self.opacity = overlay_opacity(target, self.width);

        Some(PanelAnimation {
            from_offset,
            to_offset: self.offset,
            from_opacity,
            to_opacity: self.opacity,
            duration: PANEL_ANIMATION_DURATION,
            easing: Easing::EaseOut,
        })
    }

    /// Move the panel during a drag.
    ///
    /// Offsets outside `[-width, 0]` are rejected and the last valid offset
    /// is kept. Returns whether the offset was applied.
    pub(crate) fn apply_live_offset(&mut self, offset: f32) -> bool {
        if !(-self.width..=0.0).contains(&offset) {
            return false;
        }

        self.offset = offset;
        self.opacity = overlay_opacity(offset, self.width);
        true
    }

    /// Rescale geometry to a new panel width, keeping the logical state.
    pub fn resize(&mut self, width: f32) -> Result<(), PanelError> {
        validate_width(width)?;
        self.width = width;
        self.offset = match self.state.resting_offset(width) {
            Some(offset) => offset,
            None => self.offset.clamp(-width, 0.0),
        };
        self.opacity = overlay_opacity(self.offset, width);
        Ok(())
    }
}

fn validate_width(width: f32) -> Result<(), PanelError> {
    if width > 0.0 && width.is_finite() {
        Ok(())
    } else {
        Err(PanelError::InvalidWidth(width))
    }
}
