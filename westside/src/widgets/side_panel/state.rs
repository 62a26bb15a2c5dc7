use iced::time::Instant;
use iced::{Point, Size};
use westside_panel::{
    Container, ContainerEffect, GestureSample, PanelAnimation, PanelState,
};

use crate::screens::AppScreen;

/// Pointer travel below which a press and release count as a tap.
const TAP_SLOP: f32 = 4.0;

/// Drag accepted by the gesture interpreter.
#[derive(Debug, Clone, Copy)]
struct DragState {
    start: Point,
    started_open: bool,
}

/// Settle animation currently being played.
#[derive(Debug, Clone, Copy)]
struct RunningAnimation {
    animation: PanelAnimation,
    started_at: Instant,
    frame: (f32, f32),
}

/// Side panel widget state: the container plus pointer tracking.
#[derive(Debug)]
pub(super) struct SidePanelState {
    container: Container<AppScreen>,
    pointer: Point,
    drag: Option<DragState>,
    animation: Option<RunningAnimation>,
}

impl SidePanelState {
    pub(super) fn new(container: Container<AppScreen>) -> Self {
        Self {
            container,
            pointer: Point::ORIGIN,
            drag: None,
            animation: None,
        }
    }

    pub(super) fn container(&self) -> &Container<AppScreen> {
        &self.container
    }

    pub(super) fn container_mut(&mut self) -> &mut Container<AppScreen> {
        &mut self.container
    }

    pub(super) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Offset and overlay opacity to draw this frame.
    pub(super) fn presented_geometry(&self) -> (f32, f32) {
        match &self.animation {
            Some(running) => running.frame,
            None => {
                let panel = self.container.panel();
                (panel.offset(), panel.opacity())
            },
        }
    }

    pub(super) fn appeared(&mut self) -> Vec<ContainerEffect> {
        self.container.view_will_appear();
        self.container.view_did_appear()
    }

    pub(super) fn resized(&mut self, size: Size) -> Vec<ContainerEffect> {
        self.drag = None;
        self.container.view_will_transition(size)
    }

    pub(super) fn pointer_moved(
        &mut self,
        position: Point,
    ) -> Vec<ContainerEffect> {
        self.pointer = position;
        match self.drag {
            Some(drag) => self.container.gesture_sample(GestureSample::Changed {
                translation_x: position.x - drag.start.x,
            }),
            None => Vec::new(),
        }
    }

    pub(super) fn pointer_pressed(&mut self) -> Vec<ContainerEffect> {
        if self.drag.is_some() {
            return Vec::new();
        }

        let decision = self.container.gesture_should_begin(self.pointer);
        if !decision.is_accepted() {
            return Vec::new();
        }

        let started_open =
            self.container.panel().state() == PanelState::Closing;
        self.animation = None;
        self.drag = Some(DragState {
            start: self.pointer,
            started_open,
        });
        self.container.gesture_sample(GestureSample::Began)
    }

    pub(super) fn pointer_released(&mut self) -> Vec<ContainerEffect> {
        let Some(drag) = self.drag.take() else {
            return Vec::new();
        };

        let travel = (self.pointer.x - drag.start.x).abs();
        let on_overlay = drag.start.x > self.container.panel().width();
        if drag.started_open && on_overlay && travel < TAP_SLOP {
            // Overlay tap: settle back to Open, then close animated.
            let _ = self.container.gesture_sample(GestureSample::Ended);
            return self.container.close_menu();
        }

        self.container.gesture_sample(GestureSample::Ended)
    }

    pub(super) fn start_animation(
        &mut self,
        animation: PanelAnimation,
        now: Instant,
    ) {
        self.animation = Some(RunningAnimation {
            animation,
            started_at: now,
            frame: animation.sample(0.0),
        });
    }

    /// Advance the running animation; returns `false` once it finished.
    pub(super) fn tick(&mut self, now: Instant) -> bool {
        let Some(running) = self.animation.as_mut() else {
            return false;
        };

        let duration = running.animation.duration.as_secs_f32();
        let elapsed =
            now.saturating_duration_since(running.started_at).as_secs_f32();
        let progress = if duration > 0.0 {
            elapsed / duration
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.animation = None;
            return false;
        }

        running.frame = running.animation.sample(progress);
        true
    }
}
