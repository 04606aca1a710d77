//! JIG client engine: serial setup, startup scan, and the main loop.

use std::io::{Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use serialport::SerialPort;
use tracing::{debug, info, warn};

use crate::config::{ItemLayout, UiLayout};
use crate::constants::*;
use crate::device::DeviceCheck;
use crate::dispatch::handle_request;
use crate::error::Result;
use crate::frame::{
    decode_request, encode_response, is_recognized_command, is_structurally_valid,
};
use crate::heartbeat::Heartbeat;
use crate::matcher::PatternMatcher;
use crate::types::{AckCode, CheckOutcome, CheckStatus, Command, Request, Response};
use crate::ui::{ItemColor, RefreshScope, UiPanel};

/// Protocol engine for one fixture client.
///
/// Single-threaded and cooperative: the loop services the heartbeat, polls
/// for at most one complete inbound frame, and answers it, every cycle.
pub struct JigClient<D: DeviceCheck, U: UiPanel> {
    port: Box<dyn SerialPort>,
    matcher: PatternMatcher,
    heartbeat: Heartbeat,
    layout: UiLayout,
    device: D,
    ui: U,
}

impl<D: DeviceCheck, U: UiPanel> JigClient<D, U> {
    /// Open the serial link (1.5 Mbaud, 8N1) and build a client around it.
    pub fn new(port_name: &str, layout: UiLayout, device: D, ui: U) -> Result<Self> {
        let port = serialport::new(port_name, BAUD_RATE)
            .timeout(Duration::from_millis(READ_TIMEOUT_MS))
            .open()?;
        Ok(Self::with_port(port, layout, device, ui))
    }

    /// Build a client around an already-open port.
    pub fn with_port(port: Box<dyn SerialPort>, layout: UiLayout, device: D, ui: U) -> Self {
        let mut matcher = PatternMatcher::new();
        matcher.add_slot(REQUEST_BYTES, is_structurally_valid, is_recognized_command);
        JigClient {
            port,
            matcher,
            heartbeat: Heartbeat::default(),
            layout,
            device,
            ui,
        }
    }

    /// Startup sequence: hardware init, one synthetic info request per
    /// configured item to paint the initial panel state, then an
    /// unprompted Ready frame telling the controller we are initialized.
    pub fn startup(&mut self) -> Result<()> {
        self.device.setup()?;
        self.ui.refresh(RefreshScope::All);

        let items: Vec<ItemLayout> = self.layout.items.clone();
        info!("startup scan over {} configured items", items.len());
        for item in &items {
            let request = Request::info(item.item_id, item.group_id, item.device_id);
            let outcome = self.device.check(&request);
            self.paint_item(item, &outcome);
        }
        self.ui.refresh(RefreshScope::All);

        self.send_response(&Response::ready())?;
        info!("client initialized, ready frame sent");
        Ok(())
    }

    /// Run forever: startup, then one [`Self::run_once`] cycle every loop
    /// delay. Cycle errors are logged and the loop keeps going; nothing
    /// that happens on the wire is fatal.
    pub fn run(&mut self) -> Result<()> {
        self.startup()?;
        loop {
            if let Err(err) = self.run_once() {
                warn!("loop cycle error: {err}");
            }
            thread::sleep(Duration::from_micros(LOOP_DELAY_US));
        }
    }

    /// One cooperative cycle: heartbeat first, then at most one inbound
    /// frame through decode, dispatch, encode, and back out the port.
    pub fn run_once(&mut self) -> Result<()> {
        if let Some(phase) = self.heartbeat.tick(Instant::now()) {
            let color = if phase {
                ItemColor::Green
            } else {
                ItemColor::Background
            };
            self.ui.set_item_state(ALIVE_ITEM_ID, Some(color), None);
            if phase {
                self.ui.refresh(RefreshScope::All);
            }
        }

        if let Some(frame) = self.poll_frame()? {
            match decode_request(&frame) {
                Ok(request) => {
                    let response = handle_request(&request, &mut self.device);
                    if request.command == Command::Check {
                        self.reflect_response(&request, &response);
                    }
                    self.send_response(&response)?;
                }
                // Silent drop on the wire; the controller retries.
                Err(err) => warn!("dropping inbound frame: {err}"),
            }
        }
        Ok(())
    }

    /// Non-blocking poll: feed pending bytes into the matcher and return
    /// at most one captured frame. Further buffered frames wait for
    /// subsequent cycles.
    fn poll_frame(&mut self) -> Result<Option<Vec<u8>>> {
        let mut byte = [0u8; 1];
        while self.port.bytes_to_read()? > 0 {
            self.port.read_exact(&mut byte)?;
            self.matcher.push(byte[0]);
            if let Some(frame) = self.matcher.take_frame() {
                debug!("captured {} byte frame", frame.len());
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    fn send_response(&mut self, response: &Response) -> Result<()> {
        self.port.write_all(&encode_response(response))?;
        // Keeps an attached console readable between frames.
        self.port.write_all(b"\n\r")?;
        Ok(())
    }

    /// Paint one item from a startup-scan outcome.
    fn paint_item(&mut self, item: &ItemLayout, outcome: &CheckOutcome) {
        let color = match outcome.status {
            _ if item.info_only => None,
            CheckStatus::Pass => Some(ItemColor::Green),
            CheckStatus::Fail | CheckStatus::Indeterminate => Some(ItemColor::Red),
        };
        self.ui
            .set_item_state(item.item_id, color, Some(&outcome.result));
    }

    /// Reflect a serviced check request on the panel.
    fn reflect_response(&mut self, request: &Request, response: &Response) {
        let info_only = self
            .layout
            .find(request.item_id)
            .map(|item| item.info_only)
            .unwrap_or(false);
        let color = match response.ack {
            _ if info_only => None,
            AckCode::Pass => Some(ItemColor::Green),
            AckCode::Fail | AckCode::Bad => Some(ItemColor::Red),
            AckCode::Ready => None,
        };
        let text = String::from_utf8_lossy(&response.result).into_owned();
        self.ui
            .set_item_state(request.item_id, color, Some(&text));
        self.ui.refresh(RefreshScope::Item(request.item_id));
    }
}
