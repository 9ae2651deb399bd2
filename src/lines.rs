use std::time::Duration;

use serialport::SerialPort;

use crate::phy::Level;

/// The two output lines feeding the dongle, plus the time source that paces
/// them.
///
/// Both halves live on one trait so the whole timed sequence can run against
/// a recorder in tests, without real hardware or real sleeps.
pub trait ControlLines {
    type Error;

    /// Drives both lines to the given levels. A failure here is fatal to the
    /// message in progress; the transmitter will not retry.
    fn set(&mut self, rts: Level, dtr: Level) -> Result<(), Self::Error>;

    /// Holds the current levels for `duration`.
    fn wait(&mut self, duration: Duration);
}

/// Control lines of a real serial port.
///
/// The dongle plugs straight into a DB9 connector: RTS on pin 7, DTR on
/// pin 4, ground on pin 5. No data is ever written to the port; the baud
/// rate below only satisfies the open call.
pub struct SerialLines {
    port: Box<dyn SerialPort>,
}

impl SerialLines {
    pub fn open(path: &str) -> Result<Self, serialport::Error> {
        let port = serialport::new(path, 9600).open()?;
        Ok(Self { port })
    }

    /// Wraps an already-opened port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl ControlLines for SerialLines {
    type Error = serialport::Error;

    fn set(&mut self, rts: Level, dtr: Level) -> Result<(), Self::Error> {
        self.port.write_request_to_send(rts == Level::High)?;
        self.port.write_data_terminal_ready(dtr == Level::High)?;
        Ok(())
    }

    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
