//! # JIG Protocol Library
//!
//! A Rust client engine for the point-to-point serial test protocol used to
//! drive a hardware production-test fixture (JIG). A controller sends
//! fixed-width ASCII command frames over the serial link; this crate decodes
//! them, triggers a per-item hardware check, and answers with a fixed-width
//! ASCII result frame, while toggling a liveness indicator once a second.
//!
//! ## Features
//!
//! - Fixed-width frame codec with sentinel-byte validation
//! - Streaming pattern matcher that resynchronizes on line noise
//! - Request dispatch with tri-state pass/fail/indeterminate acks
//! - Heartbeat scheduler with an injectable clock
//! - Pluggable device-check and display collaborators
//!
//! ## Example
//!
//! ```no_run
//! use jig_protocol::{
//!     CheckOutcome, CheckStatus, DeviceCheck, ItemColor, JigClient, RefreshScope, Request,
//!     UiLayout, UiPanel,
//! };
//!
//! struct MyFixture;
//!
//! impl DeviceCheck for MyFixture {
//!     fn check(&mut self, _request: &Request) -> CheckOutcome {
//!         CheckOutcome::new(CheckStatus::Pass, "1")
//!     }
//! }
//!
//! struct MyPanel;
//!
//! impl UiPanel for MyPanel {
//!     fn set_item_state(&mut self, _: u16, _: Option<ItemColor>, _: Option<&str>) {}
//!     fn refresh(&mut self, _: RefreshScope) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let layout = UiLayout::load("ui.json")?;
//!     let mut client = JigClient::new("/dev/ttyS2", layout, MyFixture, MyPanel)?;
//!     client.run()?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod heartbeat;
pub mod matcher;
pub mod types;
pub mod ui;

pub use client::JigClient;
pub use config::{ItemLayout, UiLayout};
pub use device::DeviceCheck;
pub use error::{JigError, Result};
pub use heartbeat::Heartbeat;
pub use matcher::PatternMatcher;
pub use types::*;
pub use ui::{ItemColor, RefreshScope, UiPanel};
