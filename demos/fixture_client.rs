//! Run a fixture client against a real serial port with stub collaborators.
//!
//! Usage: fixture_client [PORT] [LAYOUT.json]
//!
//! Defaults to /dev/ttyS2 and a small built-in layout. The stub device
//! passes everything and reports the device id as the measured value; the
//! stub panel logs state changes to the console.

use jig_protocol::{
    CheckOutcome, CheckStatus, DeviceCheck, ItemColor, ItemLayout, JigClient, RefreshScope,
    Request, UiLayout, UiPanel,
};

struct StubFixture;

impl DeviceCheck for StubFixture {
    fn check(&mut self, request: &Request) -> CheckOutcome {
        CheckOutcome::new(CheckStatus::Pass, request.device_id.to_string())
    }
}

struct ConsolePanel;

impl UiPanel for ConsolePanel {
    fn set_item_state(&mut self, item_id: u16, color: Option<ItemColor>, text: Option<&str>) {
        println!("item {item_id:4}: color {color:?}, text {text:?}");
    }

    fn refresh(&mut self, scope: RefreshScope) {
        println!("refresh {scope:?}");
    }
}

fn builtin_layout() -> UiLayout {
    UiLayout {
        items: vec![
            ItemLayout {
                item_id: 5,
                group_id: 5,
                device_id: 0,
                info_only: false,
            },
            ItemLayout {
                item_id: 10,
                group_id: 2,
                device_id: 1,
                info_only: true,
            },
        ],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let port = args.next().unwrap_or_else(|| "/dev/ttyS2".to_string());
    let layout = match args.next() {
        Some(path) => UiLayout::load(path)?,
        None => builtin_layout(),
    };

    let mut client = JigClient::new(&port, layout, StubFixture, ConsolePanel)?;
    client.run()?;
    Ok(())
}
