//! Frame codec and acceptor predicates.
//!
//! Pure conversions between raw fixed-width ASCII frames and the structured
//! [`Request`]/[`Response`] values, plus the two stateless predicates the
//! byte-stream matcher uses to decide whether a candidate window is worth
//! capturing.
//!
//! Request layout (19 bytes):
//! `@` cmd item(4) group(2) device(3) action extra(6) `#`
//!
//! Response layout (13 bytes):
//! `@` ack item(4) result(6) `#`

use tracing::warn;

use crate::constants::*;
use crate::error::{JigError, Result};
use crate::types::{Command, Request, Response};

// Request field offsets.
const OFF_COMMAND: usize = 1;
const OFF_ITEM: usize = 2;
const OFF_GROUP: usize = 6;
const OFF_DEVICE: usize = 8;
const OFF_ACTION: usize = 11;
const OFF_EXTRA: usize = 12;

// Response field offsets.
const OFF_ACK: usize = 1;
const OFF_RESP_ITEM: usize = 2;
const OFF_RESULT: usize = 6;

/// Decode a 19-byte request frame.
///
/// Fails with [`JigError::MalformedFrame`] on wrong length or missing
/// sentinels, [`JigError::InvalidField`] on non-digit characters in a
/// numeric field, and [`JigError::UnrecognizedCommand`] on a command byte
/// outside `{C, P}`. The action and extra fields are carried verbatim.
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    if bytes.len() != REQUEST_BYTES {
        return Err(JigError::MalformedFrame(format!(
            "length {}, expected {}",
            bytes.len(),
            REQUEST_BYTES
        )));
    }
    if bytes[0] != FRAME_START || bytes[REQUEST_BYTES - 1] != FRAME_END {
        return Err(JigError::MalformedFrame(format!(
            "sentinels {:?}/{:?}",
            bytes[0] as char,
            bytes[REQUEST_BYTES - 1] as char
        )));
    }

    let command = Command::from_byte(bytes[OFF_COMMAND])
        .ok_or(JigError::UnrecognizedCommand(bytes[OFF_COMMAND]))?;
    let item_id = parse_decimal(&bytes[OFF_ITEM..OFF_GROUP], "item id")? as u16;
    let group_id = parse_decimal(&bytes[OFF_GROUP..OFF_DEVICE], "group id")? as u8;
    let device_id = parse_decimal(&bytes[OFF_DEVICE..OFF_ACTION], "device id")? as u16;

    let mut extra = [0u8; RESULT_BYTES];
    extra.copy_from_slice(&bytes[OFF_EXTRA..OFF_EXTRA + RESULT_BYTES]);

    Ok(Request {
        command,
        item_id,
        group_id,
        device_id,
        action: bytes[OFF_ACTION],
        extra,
    })
}

/// Encode a request frame, used for the startup scan's synthetic requests.
///
/// Out-of-range ids saturate at their field maximum (9999/99/999) rather
/// than truncating digits.
pub fn encode_request(req: &Request) -> [u8; REQUEST_BYTES] {
    let mut buf = [0u8; REQUEST_BYTES];
    buf[0] = FRAME_START;
    buf[OFF_COMMAND] = req.command.as_byte();
    write_decimal(&mut buf[OFF_ITEM..OFF_GROUP], req.item_id as u32);
    write_decimal(&mut buf[OFF_GROUP..OFF_DEVICE], req.group_id as u32);
    write_decimal(&mut buf[OFF_DEVICE..OFF_ACTION], req.device_id as u32);
    buf[OFF_ACTION] = req.action;
    buf[OFF_EXTRA..OFF_EXTRA + RESULT_BYTES].copy_from_slice(&req.extra);
    buf[REQUEST_BYTES - 1] = FRAME_END;
    buf
}

/// Encode a 13-byte response frame. Item ids above 9999 saturate.
pub fn encode_response(resp: &Response) -> [u8; RESPONSE_BYTES] {
    let mut buf = [0u8; RESPONSE_BYTES];
    buf[0] = FRAME_START;
    buf[OFF_ACK] = resp.ack.as_byte();
    write_decimal(&mut buf[OFF_RESP_ITEM..OFF_RESULT], resp.item_id as u32);
    buf[OFF_RESULT..OFF_RESULT + RESULT_BYTES].copy_from_slice(&resp.result);
    buf[RESPONSE_BYTES - 1] = FRAME_END;
    buf
}

/// Fit a raw result string into the fixed 6-byte result field:
/// right-justified with `'0'` fill, over-long input keeps its first 6 bytes.
pub fn pad_result(result: &[u8]) -> [u8; RESULT_BYTES] {
    let mut field = [b'0'; RESULT_BYTES];
    if result.len() >= RESULT_BYTES {
        field.copy_from_slice(&result[..RESULT_BYTES]);
    } else {
        field[RESULT_BYTES - result.len()..].copy_from_slice(result);
    }
    field
}

/// Structural predicate for the byte-stream matcher: the candidate window
/// carries both sentinels at the expected positions. Checked before the
/// command byte so garbage is discarded cheaply.
pub fn is_structurally_valid(window: &[u8]) -> bool {
    window.len() == REQUEST_BYTES
        && window[0] == FRAME_START
        && window[REQUEST_BYTES - 1] == FRAME_END
}

/// Command predicate for the byte-stream matcher: true only for `{C, P}`.
/// Anything else is logged and rejected so the matcher resynchronizes on
/// the next incoming byte instead of stalling.
pub fn is_recognized_command(window: &[u8]) -> bool {
    match window.get(OFF_COMMAND) {
        Some(&byte) if Command::from_byte(byte).is_some() => true,
        Some(&byte) => {
            warn!("unknown command {:?}", byte as char);
            false
        }
        None => false,
    }
}

fn parse_decimal(field: &[u8], name: &'static str) -> Result<u32> {
    let mut value = 0u32;
    for &byte in field {
        if !byte.is_ascii_digit() {
            return Err(JigError::InvalidField {
                field: name,
                value: String::from_utf8_lossy(field).into_owned(),
            });
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Ok(value)
}

fn write_decimal(field: &mut [u8], value: u32) {
    let max = 10u32.pow(field.len() as u32) - 1;
    let mut value = value.min(max);
    for slot in field.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
