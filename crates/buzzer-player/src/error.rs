//! Error types for the driver
//!
//! The quiz box is statically wired and every hardware operation is expected
//! to succeed, but the embedded-hal seams are fallible, so failures from the
//! backend are propagated rather than swallowed. Backends with infallible
//! pins (including the simulated one) collapse these to `Infallible`.

use core::fmt::Debug;

/// Errors surfaced by player operations.
///
/// Generic over the shield expander's error type and the native pins' error
/// type so the underlying hardware error is preserved for matching.
#[derive(Debug)]
pub enum Error<XE, PE> {
    /// The shield GPIO expander reported a failure.
    Shield(XE),
    /// A native pin (digital, analog, or lamp) reported a failure.
    Pin(PE),
}

impl<XE: Debug, PE: Debug> core::fmt::Display for Error<XE, PE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Shield(e) => write!(f, "shield GPIO error: {e:?}"),
            Error::Pin(e) => write!(f, "native pin error: {e:?}"),
        }
    }
}

impl<XE: Debug, PE: Debug> core::error::Error for Error<XE, PE> {}

/// A shield channel index outside the expander's `0..8` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidChannel(pub u8);

impl core::fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid shield channel {}: expander has channels 0-7", self.0)
    }
}

impl core::error::Error for InvalidChannel {}
