use gridview_types::ViewMode;

/// Reconcile the persisted user preference with the viewport width.
///
/// The effective render mode is cards whenever the viewport is narrower
/// than the mobile breakpoint, or whenever the user prefers cards. The
/// preference itself never changes here; only an explicit toggle updates
/// it, so widening the viewport again restores whatever the user chose.
pub fn resolve_view_mode(preference: ViewMode, viewport_width: u32, mobile_breakpoint: u32) -> ViewMode {
    if viewport_width < mobile_breakpoint {
        ViewMode::Cards
    } else {
        preference
    }
}
