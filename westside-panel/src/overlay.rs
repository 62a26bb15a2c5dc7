/// Overlay opacity reached when the panel is fully open.
pub const MAX_OVERLAY_OPACITY: f32 = 0.75;

/// Map a panel offset onto the dimming overlay opacity.
///
/// The mapping is linear: `0.0` (open) yields [`MAX_OVERLAY_OPACITY`] and
/// `-panel_width` (closed) yields `0.0`. Values outside that range are
/// clamped, and a non-positive width always yields `0.0`.
pub fn overlay_opacity(offset: f32, panel_width: f32) -> f32 {
    if panel_width <= 0.0 || !panel_width.is_finite() {
        return 0.0;
    }

    (MAX_OVERLAY_OPACITY / panel_width * offset + MAX_OVERLAY_OPACITY)
        .clamp(0.0, MAX_OVERLAY_OPACITY)
}
