//! Protocol constants for the JIG fixture serial link.
//!
//! This module defines all the constants used by the JIG test protocol,
//! including frame sizes, command and ack bytes, and timing parameters.

/// Frame start sentinel
pub const FRAME_START: u8 = b'@';

/// Frame end sentinel
pub const FRAME_END: u8 = b'#';

/// Request frame size, controller to client (start, cmd, item, group, device,
/// action, extra, end)
pub const REQUEST_BYTES: usize = 19;

/// Response frame size, client to controller (start, ack, item, result, end)
pub const RESPONSE_BYTES: usize = 13;

/// Width of the response result field
pub const RESULT_BYTES: usize = 6;

/// Check-item command: run a hardware check on the addressed item
pub const CMD_CHECK: u8 = b'C';

/// Ping command: controller requests a resynchronization handshake
pub const CMD_PING: u8 = b'P';

/// Ready ack, sent at startup and in answer to a ping
pub const ACK_READY: u8 = b'R';

/// Pass ack
pub const ACK_PASS: u8 = b'O';

/// Fail ack
pub const ACK_FAIL: u8 = b'E';

/// Bad/indeterminate ack
pub const ACK_BAD: u8 = b'B';

/// Write sub-op action byte
pub const ACTION_WRITE: u8 = b'W';

/// Read sub-op action byte
pub const ACTION_READ: u8 = b'R';

/// Info sub-op action byte, used for the startup scan
pub const ACTION_INFO: u8 = b'I';

/// Serial baud rate (1.5 Mbaud, 8N1)
pub const BAUD_RATE: u32 = 1_500_000;

/// Serial read timeout in milliseconds (reads are gated on `bytes_to_read`,
/// so this only bounds a read that races a buffer flush)
pub const READ_TIMEOUT_MS: u64 = 10;

/// Interval between liveness indicator toggles in milliseconds
pub const HEARTBEAT_INTERVAL_MS: u64 = 1000;

/// Sleep between main loop cycles in microseconds
pub const LOOP_DELAY_US: u64 = 500;

/// UI item id reserved for the liveness indicator
pub const ALIVE_ITEM_ID: u16 = 0;
