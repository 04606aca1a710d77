//! Request dispatcher: decoded request in, response out.

use tracing::debug;

use crate::device::DeviceCheck;
use crate::frame::pad_result;
use crate::types::{AckCode, CheckStatus, Command, Request, Response};

/// Route one decoded request.
///
/// A ping short-circuits to the fixed Ready response so the controller can
/// force a resynchronization handshake at any time; the device-check
/// collaborator is not consulted. A check request invokes the collaborator
/// and maps its tri-state status onto the ack code (pass `O`, fail `E`,
/// indeterminate `B`), forwarding the result text verbatim.
pub fn handle_request(request: &Request, device: &mut dyn DeviceCheck) -> Response {
    match request.command {
        Command::Ping => {
            debug!("ping from controller, answering ready");
            Response::ready()
        }
        Command::Check => {
            let outcome = device.check(request);
            let ack = match outcome.status {
                CheckStatus::Pass => AckCode::Pass,
                CheckStatus::Fail => AckCode::Fail,
                CheckStatus::Indeterminate => AckCode::Bad,
            };
            debug!(
                item = request.item_id,
                group = request.group_id,
                device = request.device_id,
                result = %outcome.result,
                "check complete, ack {:?}",
                ack
            );
            Response {
                ack,
                item_id: request.item_id,
                result: pad_result(outcome.result.as_bytes()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{decode_request, encode_response};
    use crate::types::CheckOutcome;

    /// Collaborator double that records calls and replays a canned outcome.
    struct ScriptedDevice {
        outcome: CheckOutcome,
        calls: Vec<Request>,
    }

    impl ScriptedDevice {
        fn new(status: CheckStatus, result: &str) -> Self {
            ScriptedDevice {
                outcome: CheckOutcome::new(status, result),
                calls: Vec::new(),
            }
        }
    }

    impl DeviceCheck for ScriptedDevice {
        fn check(&mut self, request: &Request) -> CheckOutcome {
            self.calls.push(*request);
            self.outcome.clone()
        }
    }

    #[test]
    fn ping_answers_ready_without_device_call() {
        let mut device = ScriptedDevice::new(CheckStatus::Pass, "1");
        let req = decode_request(b"@P123499123Wabcdef#").unwrap();
        let resp = handle_request(&req, &mut device);
        assert_eq!(&encode_response(&resp), b"@R0000000000#");
        assert!(device.calls.is_empty());
    }

    #[test]
    fn check_pass_maps_to_o_ack() {
        let mut device = ScriptedDevice::new(CheckStatus::Pass, "1");
        let req = decode_request(b"@C000505000I001000#").unwrap();
        let resp = handle_request(&req, &mut device);
        assert_eq!(&encode_response(&resp), b"@O0005000001#");

        let seen = &device.calls[0];
        assert_eq!(seen.item_id, 5);
        assert_eq!(seen.group_id, 5);
        assert_eq!(seen.device_id, 0);
        assert_eq!(seen.action, b'I');
    }

    #[test]
    fn check_fail_maps_to_e_ack() {
        let mut device = ScriptedDevice::new(CheckStatus::Fail, "0");
        let req = decode_request(b"@C001002003R000000#").unwrap();
        let resp = handle_request(&req, &mut device);
        assert_eq!(resp.ack, AckCode::Fail);
        assert_eq!(resp.item_id, 10);
        assert_eq!(&resp.result, b"000000");
    }

    #[test]
    fn check_indeterminate_maps_to_b_ack() {
        let mut device = ScriptedDevice::new(CheckStatus::Indeterminate, "");
        let req = decode_request(b"@C001002003R000000#").unwrap();
        let resp = handle_request(&req, &mut device);
        assert_eq!(resp.ack, AckCode::Bad);
    }

    #[test]
    fn result_text_is_forwarded_verbatim() {
        let mut device = ScriptedDevice::new(CheckStatus::Pass, "PASS");
        let req = decode_request(b"@C000101001W000000#").unwrap();
        let resp = handle_request(&req, &mut device);
        assert_eq!(&resp.result, b"00PASS");
    }
}
