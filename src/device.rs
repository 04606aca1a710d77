//! Device-check collaborator contract.
//!
//! The actual hardware test logic (mapping a group/device address to a
//! pass/fail or measured value) lives behind this trait; the protocol
//! engine only forwards requests and maps the tri-state outcome onto ack
//! codes.

use crate::error::Result;
use crate::types::{CheckOutcome, Request};

/// Hardware test collaborator. Implementations must tolerate being called
/// repeatedly and rapidly: the startup scan polls every configured item,
/// then every inbound check request lands here.
pub trait DeviceCheck {
    /// One-time hardware initialization before the startup scan.
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Run the check addressed by `request`. The result string feeds the
    /// response's 6-byte result field; category-specific formatting
    /// (PASS/FAIL text vs. numeric value) is decided here, not by the
    /// dispatcher.
    fn check(&mut self, request: &Request) -> CheckOutcome;
}
