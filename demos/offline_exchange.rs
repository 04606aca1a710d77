//! Walk a request through the protocol engine without any hardware:
//! raw bytes -> pattern matcher -> codec -> dispatcher -> response bytes.

use jig_protocol::constants::REQUEST_BYTES;
use jig_protocol::frame::{
    decode_request, encode_response, is_recognized_command, is_structurally_valid,
};
use jig_protocol::{
    dispatch, CheckOutcome, CheckStatus, DeviceCheck, PatternMatcher, Request,
};

struct EchoFixture;

impl DeviceCheck for EchoFixture {
    fn check(&mut self, request: &Request) -> CheckOutcome {
        if request.group_id == 5 {
            CheckOutcome::new(CheckStatus::Pass, "PASS")
        } else {
            CheckOutcome::new(CheckStatus::Pass, request.device_id.to_string())
        }
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let mut matcher = PatternMatcher::new();
    matcher.add_slot(REQUEST_BYTES, is_structurally_valid, is_recognized_command);
    let mut fixture = EchoFixture;

    // Line noise, an unknown command, then two real frames.
    let stream: Vec<u8> = [
        b"...noise...".as_slice(),
        b"@X000505000I001000#",
        b"@C000505000I001000#",
        b"@P000000000R000000#",
    ]
    .concat();

    for byte in stream {
        matcher.push(byte);
        if let Some(frame) = matcher.take_frame() {
            println!("captured: {}", String::from_utf8_lossy(&frame));
            match decode_request(&frame) {
                Ok(request) => {
                    let response = dispatch::handle_request(&request, &mut fixture);
                    let bytes = encode_response(&response);
                    println!("answer:   {}", String::from_utf8_lossy(&bytes));
                }
                Err(err) => println!("dropped:  {err}"),
            }
        }
    }
}
