//! UI collaborator contract.
//!
//! The pixel-level renderer is out of scope; the engine drives it through
//! this narrow surface to reflect per-item pass/fail state and the
//! heartbeat indicator.

/// Fill color for an item's state rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColor {
    Green,
    Red,
    /// The panel's background color, used for the heartbeat "off" phase
    Background,
}

/// Target of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshScope {
    Item(u16),
    All,
}

/// Display collaborator driven by the protocol engine.
pub trait UiPanel {
    /// Update an item's fill color and/or text. `None` leaves that aspect
    /// unchanged.
    fn set_item_state(&mut self, item_id: u16, color: Option<ItemColor>, text: Option<&str>);

    /// Request a redraw of one item or the whole panel.
    fn refresh(&mut self, scope: RefreshScope);
}
