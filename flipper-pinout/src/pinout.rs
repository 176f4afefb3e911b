use crate::frame::Frame;
use crate::{profile, ConnectionKind, PinRef, UNKNOWN_PIN};

/// Box width used when the caller has no preference.
pub const DEFAULT_WIDTH: usize = 60;

/// Top view of the 18 pin GPIO header. Same for every connection kind.
pub const HEADER_ART: [&str; 7] = [
    "Flipper Zero GPIO",
    "┌─────────────────────────────────┐",
    "│    1  3  5  7  9 11 13 15 17    │",
    "│    o  o  o  o  o  o  o  o  o    │",
    "│    o  o  o  o  o  o  o  o  o    │",
    "│    2  4  6  8 10 12 14 16 18    │",
    "└─────────────────────────────────┘",
];

/// Boxed diagram of the header and the pins `kind` uses.
///
/// Rows are drawn in the profile's order. `width` should fit the widest
/// row; narrower boxes still contain everything but lose their alignment.
pub fn render_boxed_pinout(kind: ConnectionKind, width: usize) -> String {
    log::debug!("rendering {} pinout, width {}", kind, width);

    let profile = profile(kind);
    let mut frame = Frame::new(width);

    frame.centered(&format!("Flipper Zero {} Pinout", kind.title()));
    frame.centered(profile.description);
    frame.divider();

    for line in HEADER_ART.iter() {
        frame.centered(line);
    }
    frame.divider();

    frame.centered("Pin assignments");
    frame.divider();

    for &(pin, role) in profile.pins {
        let row = match pin {
            PinRef::Physical(number) => format!(
                " Pin {:2}: {:<10} → {}",
                number,
                role,
                pin.label().unwrap_or(UNKNOWN_PIN)
            ),
            PinRef::Named(name) => format!(" {}: {}", name, role),
        };
        frame.left(&row);
    }
    frame.divider();

    for (heading, value) in profile.metadata.entries() {
        frame.left(&format!(" {}: {}", heading, value));
    }

    frame.finish()
}
