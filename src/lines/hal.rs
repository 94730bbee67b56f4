//! Line driver backed by embedded-hal output pins.

use embedded_hal::digital::OutputPin;
use heapless::FnvIndexMap;
use tracing::warn;

use crate::error::LineError;

use super::{LineDriver, LineId, LineMode, PinState};

/// Maximum number of pins a [`HalLines`] can hold.
pub const MAX_LINES: usize = 32;

struct HalLine<P> {
    pin: P,
    configured: bool,
}

/// Line driver over a set of embedded-hal 1.0 `OutputPin`s.
///
/// Each pin is attached under the [`LineId`] it has in the active numbering.
/// A line must be configured before it is written, and
/// [`release_all`](LineDriver::release_all) drives every configured line low
/// before forgetting its configuration.
pub struct HalLines<P>
where
    P: OutputPin,
{
    lines: FnvIndexMap<LineId, HalLine<P>, MAX_LINES>,
}

impl<P> Default for HalLines<P>
where
    P: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> HalLines<P>
where
    P: OutputPin,
{
    /// Create a driver with no pins attached.
    pub fn new() -> Self {
        Self {
            lines: FnvIndexMap::new(),
        }
    }

    /// Attach a pin under a line identifier.
    ///
    /// Returns the pin previously attached under `id`, or gives `pin` back
    /// as `Err` if [`MAX_LINES`] pins are already attached.
    pub fn attach(&mut self, id: LineId, pin: P) -> Result<Option<P>, P> {
        let line = HalLine {
            pin,
            configured: false,
        };
        match self.lines.insert(id, line) {
            Ok(previous) => Ok(previous.map(|l| l.pin)),
            Err((_, rejected)) => Err(rejected.pin),
        }
    }

    /// Builder-style [`attach`](Self::attach).
    ///
    /// A pin rejected because [`MAX_LINES`] are already attached is logged and
    /// dropped; building a motor on that line then fails with
    /// [`LineError::Unavailable`].
    pub fn with_line(mut self, id: LineId, pin: P) -> Self {
        if self.attach(id, pin).is_err() {
            warn!(
                line = %id,
                max = MAX_LINES,
                "no room for another pin, line left unattached"
            );
        }
        self
    }

    /// Check if a pin is attached for a line.
    pub fn has_line(&self, id: LineId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Check if a line is configured as an output.
    pub fn is_configured(&self, id: LineId) -> bool {
        self.lines.get(&id).map(|l| l.configured).unwrap_or(false)
    }
}

impl<P> LineDriver for HalLines<P>
where
    P: OutputPin + Send,
{
    fn configure_line(&mut self, id: LineId, mode: LineMode) -> Result<(), LineError> {
        let line = self.lines.get_mut(&id).ok_or(LineError::Unavailable(id))?;
        match mode {
            LineMode::Output => line.configured = true,
        }
        Ok(())
    }

    fn write_line(&mut self, id: LineId, level: PinState) -> Result<(), LineError> {
        let line = self.lines.get_mut(&id).ok_or(LineError::Unavailable(id))?;
        if !line.configured {
            return Err(LineError::NotConfigured(id));
        }
        line.pin
            .set_state(level)
            .map_err(|_| LineError::WriteFailed(id))
    }

    fn release_all(&mut self) -> Result<(), LineError> {
        let mut failed = false;
        for (id, line) in self.lines.iter_mut().filter(|(_, l)| l.configured) {
            if line.pin.set_low().is_err() {
                warn!(line = id.0, "failed to drive line low on release");
                failed = true;
            }
            line.configured = false;
        }

        if failed {
            Err(LineError::ReleaseFailed)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    #[test]
    fn test_write_requires_configure() {
        let pin = PinMock::new(&[]);
        let mut done = pin.clone();
        let mut lines = HalLines::new().with_line(LineId(7), pin);

        assert_eq!(
            lines.write_line(LineId(7), PinState::High),
            Err(LineError::NotConfigured(LineId(7)))
        );
        done.done();
    }

    #[test]
    fn test_unknown_line_unavailable() {
        let mut lines: HalLines<PinMock> = HalLines::new();

        assert_eq!(
            lines.configure_line(LineId(7), LineMode::Output),
            Err(LineError::Unavailable(LineId(7)))
        );
        assert_eq!(
            lines.write_line(LineId(7), PinState::Low),
            Err(LineError::Unavailable(LineId(7)))
        );
    }

    #[test]
    fn test_writes_reach_pin() {
        let pin = PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]);
        let mut done = pin.clone();
        let mut lines = HalLines::new().with_line(LineId(11), pin);

        lines.configure_line(LineId(11), LineMode::Output).unwrap();
        assert!(lines.is_configured(LineId(11)));
        lines.write_line(LineId(11), PinState::High).unwrap();
        lines.write_line(LineId(11), PinState::Low).unwrap();
        done.done();
    }

    struct NullPin;

    impl embedded_hal::digital::ErrorType for NullPin {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for NullPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_attach_beyond_capacity() {
        let mut lines = (0..MAX_LINES as u8).fold(HalLines::new(), |lines, id| {
            lines.with_line(LineId(id), NullPin)
        });
        assert!(lines.attach(LineId(0), NullPin).is_ok());

        assert!(lines.attach(LineId(200), NullPin).is_err());
        let mut lines = lines.with_line(LineId(201), NullPin);

        assert!(!lines.has_line(LineId(201)));
        assert_eq!(
            lines.configure_line(LineId(201), LineMode::Output),
            Err(LineError::Unavailable(LineId(201)))
        );
    }

    #[test]
    fn test_release_drives_configured_low() {
        let configured = PinMock::new(&[PinTransaction::set(State::Low)]);
        let idle = PinMock::new(&[]);
        let mut configured_done = configured.clone();
        let mut idle_done = idle.clone();
        let mut lines = HalLines::new()
            .with_line(LineId(7), configured)
            .with_line(LineId(11), idle);

        lines.configure_line(LineId(7), LineMode::Output).unwrap();
        lines.release_all().unwrap();

        assert!(!lines.is_configured(LineId(7)));
        // nothing left to release
        lines.release_all().unwrap();
        configured_done.done();
        idle_done.done();
    }
}
