use iced::Point;
use serde::{Deserialize, Serialize};

use crate::panel::{PanelAnimation, PanelState, SidePanel};

/// Width of the edge strips where a drag may start without a visible handle.
pub const INVISIBLE_SWIPE_ZONE_WIDTH: f32 = 40.0;

/// Fraction of the width a panel must still be hidden by when released
/// mid-opening for it to fall back closed.
const OPENING_CLOSE_RATIO: f32 = 0.75;
/// Fraction of the width a panel must already be hidden by when released
/// mid-closing for it to finish closing.
const CLOSING_CLOSE_RATIO: f32 = 0.25;

/// Device class; the right-edge strip is only claimed on phones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    #[default]
    Phone,
    Tablet,
}

/// One sample of a continuous horizontal drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSample {
    Began,
    /// Horizontal translation since the drag started.
    Changed {
        translation_x: f32,
    },
    Ended,
}

/// Whether a drag starting at some position is claimed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureDecision {
    Accept,
    Decline,
}

impl GestureDecision {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Tunables for drag recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub swipe_zone_width: f32,
    pub form_factor: FormFactor,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_zone_width: INVISIBLE_SWIPE_ZONE_WIDTH,
            form_factor: FormFactor::default(),
        }
    }
}

/// Turns drag samples into panel transitions.
///
/// The interpreter only reacts to `Changed`/`Ended` while the panel is
/// transitioning, so a programmatic open or close (which never passes
/// through a transitioning state) makes stray samples inert.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Decide whether a drag starting at `start` belongs to the panel.
    pub fn should_begin(
        &self,
        panel: &mut SidePanel,
        start: Point,
        view_width: f32,
    ) -> GestureDecision {
        if panel.state() == PanelState::Open {
            let _ = panel.set_state(PanelState::Closing);
            return GestureDecision::Accept;
        }

        let x = start.x.trunc();
        let zone = self.config.swipe_zone_width;

        if x <= zone {
            let _ = panel.set_state(PanelState::Opening);
            return GestureDecision::Accept;
        }

        // The right strip is reserved for a companion drawer; claim the drag
        // so it does not leak to content, but leave the panel alone.
        if x >= view_width.trunc() - zone
            && self.config.form_factor == FormFactor::Phone
        {
            return GestureDecision::Accept;
        }

        GestureDecision::Decline
    }

    /// Feed one sample. Returns the settle animation when the drag resolves.
    pub fn handle_sample(
        &self,
        panel: &mut SidePanel,
        sample: GestureSample,
    ) -> Option<PanelAnimation> {
        if !panel.state().is_transitioning() {
            return None;
        }

        match sample {
            GestureSample::Began => None,
            GestureSample::Changed { translation_x } => {
                let origin = if panel.state() == PanelState::Closing {
                    0.0
                } else {
                    -panel.width()
                };
                let _ = panel.apply_live_offset(origin + translation_x);
                None
            },
            GestureSample::Ended => {
                let target =
                    settle_target(panel.state(), panel.offset(), panel.width());
                panel.set_state(target)
            },
        }
    }

    /// Two recognizers never run at once.
    pub fn should_recognize_simultaneously(&self) -> bool {
        false
    }
}

/// Resting state a released drag snaps to.
///
/// The thresholds are asymmetric: while opening the panel falls back closed
/// only if it is still more than 75% hidden, while closing it finishes
/// closing once it is more than 25% hidden.
pub fn settle_target(
    state: PanelState,
    origin_x: f32,
    panel_width: f32,
) -> PanelState {
    let should_close = (state == PanelState::Opening
        && origin_x < -OPENING_CLOSE_RATIO * panel_width)
        || (state != PanelState::Opening
            && origin_x < -CLOSING_CLOSE_RATIO * panel_width);

    if should_close {
        PanelState::Closed
    } else {
        PanelState::Open
    }
}
