use crate::constants::*;

/// Command byte vocabulary understood by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run a hardware check on the addressed item
    Check,
    /// Controller-forced resynchronization handshake
    Ping,
}

impl Command {
    /// Classify a raw command byte. Returns `None` for anything outside
    /// the `{C, P}` vocabulary.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_CHECK => Some(Command::Check),
            CMD_PING => Some(Command::Ping),
            _ => None,
        }
    }

    /// The wire representation of this command.
    pub fn as_byte(self) -> u8 {
        match self {
            Command::Check => CMD_CHECK,
            Command::Ping => CMD_PING,
        }
    }
}

/// Single-character response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckCode {
    /// `R`: client initialized / answering a ping
    Ready,
    /// `O`: check passed
    Pass,
    /// `E`: check failed
    Fail,
    /// `B`: check result indeterminate
    Bad,
}

impl AckCode {
    /// The wire representation of this ack.
    pub fn as_byte(self) -> u8 {
        match self {
            AckCode::Ready => ACK_READY,
            AckCode::Pass => ACK_PASS,
            AckCode::Fail => ACK_FAIL,
            AckCode::Bad => ACK_BAD,
        }
    }
}

/// Tri-state outcome reported by the device-check collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Indeterminate,
}

/// Result of a single device check: the tri-state status plus the raw
/// result text destined for the response's 6-byte result field.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub result: String,
}

impl CheckOutcome {
    pub fn new(status: CheckStatus, result: impl Into<String>) -> Self {
        CheckOutcome {
            status,
            result: result.into(),
        }
    }
}

/// Decoded request frame.
///
/// All fields are transient, stack-scoped per protocol exchange; nothing
/// here outlives a single request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub command: Command,
    /// Addressed UI element, 0..=9999
    pub item_id: u16,
    /// Hardware category, 0..=99
    pub group_id: u8,
    /// Sub-index within the category, 0..=999
    pub device_id: u16,
    /// Sub-op byte (write/read/info), carried verbatim
    pub action: u8,
    /// Opaque payload, carried verbatim
    pub extra: [u8; RESULT_BYTES],
}

impl Request {
    /// Synthetic info request used by the startup scan.
    pub fn info(item_id: u16, group_id: u8, device_id: u16) -> Self {
        Request {
            command: Command::Check,
            item_id,
            group_id,
            device_id,
            action: ACTION_INFO,
            extra: [b'0'; RESULT_BYTES],
        }
    }
}

/// Response frame prior to encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub ack: AckCode,
    /// Echoes the request item id
    pub item_id: u16,
    /// Exactly 6 bytes, already padded
    pub result: [u8; RESULT_BYTES],
}

impl Response {
    /// The fixed Ready response (`@R0000000000#` once encoded), sent at
    /// startup and in answer to every ping.
    pub fn ready() -> Self {
        Response {
            ack: AckCode::Ready,
            item_id: 0,
            result: [b'0'; RESULT_BYTES],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_vocabulary() {
        assert_eq!(Command::from_byte(b'C'), Some(Command::Check));
        assert_eq!(Command::from_byte(b'P'), Some(Command::Ping));
        assert_eq!(Command::from_byte(b'X'), None);
        assert_eq!(Command::Check.as_byte(), b'C');
        assert_eq!(Command::Ping.as_byte(), b'P');
    }

    #[test]
    fn ack_bytes() {
        assert_eq!(AckCode::Ready.as_byte(), b'R');
        assert_eq!(AckCode::Pass.as_byte(), b'O');
        assert_eq!(AckCode::Fail.as_byte(), b'E');
        assert_eq!(AckCode::Bad.as_byte(), b'B');
    }

    #[test]
    fn ready_response_shape() {
        let resp = Response::ready();
        assert_eq!(resp.ack, AckCode::Ready);
        assert_eq!(resp.item_id, 0);
        assert_eq!(&resp.result, b"000000");
    }
}
