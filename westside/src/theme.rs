use iced::Color;

/// Fixed palette used by every view in the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    pub(crate) primary: Color,
    pub(crate) on_primary: Color,
    pub(crate) background: Color,
    pub(crate) panel_background: Color,
    pub(crate) text: Color,
    pub(crate) muted_text: Color,
    pub(crate) selection: Color,
    pub(crate) error: Color,
    pub(crate) overlay: Color,
}

pub(crate) const PALETTE: Palette = Palette {
    primary: westside_panel::PRIMARY_COLOR,
    on_primary: Color::WHITE,
    background: Color::WHITE,
    panel_background: Color::from_rgb(0.16, 0.18, 0.21),
    text: Color::from_rgb(0.12, 0.12, 0.12),
    muted_text: Color::from_rgb(0.45, 0.45, 0.45),
    selection: Color::from_rgb(0.25, 0.29, 0.34),
    error: Color::from_rgb(0.75, 0.16, 0.16),
    overlay: Color::BLACK,
};

/// Overlay color for a given dimming factor.
pub(crate) fn overlay_color(opacity: f32) -> Color {
    Color {
        a: opacity,
        ..PALETTE.overlay
    }
}
