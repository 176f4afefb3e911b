/// Physical pins of the Flipper Zero GPIO header.
mod pins;
pub use pins::*;

/// The supported ways of wiring an accessory to the header.
mod connection;
pub use connection::*;

/// Pins, roles and metadata used by each connection kind.
mod profile;
pub use profile::*;

/// Box drawing shared by the renderers.
mod frame;

/// Boxed pinout diagram for a single connection kind.
mod pinout;
pub use pinout::*;

/// Point-to-point wiring instructions for a single connection kind.
mod wiring;
pub use wiring::*;

/// Boxed listing of every pin plus usage notes.
mod reference;
pub use reference::*;

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A connection selector did not name one of the known kinds.
    UnknownConnectionKind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownConnectionKind(value) => {
                write!(f, "unknown connection kind: {}", value)
            }
        }
    }
}

impl std::error::Error for Error {}
