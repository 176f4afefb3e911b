use crate::{lookup_pin, ConnectionKind, UNKNOWN_PIN};

/// A pin used by a connection: a header pin or a line with no header position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PinRef {
    Physical(u8),
    Named(&'static str),
}

impl PinRef {
    /// Catalog label for header pins, `None` for named lines.
    pub fn label(self) -> Option<&'static str> {
        match self {
            PinRef::Physical(number) => {
                Some(lookup_pin(u32::from(number)).unwrap_or(UNKNOWN_PIN))
            }
            PinRef::Named(_) => None,
        }
    }
}

/// Extra facts shown under the pin list. Rendered in field order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ProfileMetadata {
    pub baudrate: Option<&'static str>,
    pub voltage: Option<&'static str>,
    pub protocol: Option<&'static str>,
    pub note: Option<&'static str>,
}

impl ProfileMetadata {
    const EMPTY: ProfileMetadata = ProfileMetadata {
        baudrate: None,
        voltage: None,
        protocol: None,
        note: None,
    };

    /// Populated fields as (heading, value), in display order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let fields = [
            ("Baudrate", self.baudrate),
            ("Voltage", self.voltage),
            ("Protocol", self.protocol),
            ("Note", self.note),
        ];

        fields
            .iter()
            .filter_map(|&(heading, value)| value.map(|v| (heading, v)))
            .collect()
    }
}

#[derive(Debug, PartialEq)]
pub struct ConnectionProfile {
    /// Pins and their role, in the order they are drawn.
    pub pins: &'static [(PinRef, &'static str)],
    pub description: &'static str,
    pub metadata: ProfileMetadata,
}

static UART: ConnectionProfile = ConnectionProfile {
    pins: &[
        (PinRef::Physical(6), "TX"),
        (PinRef::Physical(7), "RX"),
        (PinRef::Physical(1), "VCC"),
        (PinRef::Physical(16), "GND"),
    ],
    description: "Standard UART connection",
    metadata: ProfileMetadata {
        baudrate: Some("115200"),
        ..ProfileMetadata::EMPTY
    },
};

static FTDI: ConnectionProfile = ConnectionProfile {
    pins: &[
        (PinRef::Physical(6), "TXD"),
        (PinRef::Physical(7), "RXD"),
        (PinRef::Physical(1), "VCC"),
        (PinRef::Physical(16), "GND"),
    ],
    description: "FTDI USB-serial adapter",
    metadata: ProfileMetadata {
        voltage: Some("3.3V"),
        ..ProfileMetadata::EMPTY
    },
};

static DIRECT: ConnectionProfile = ConnectionProfile {
    pins: &[
        (PinRef::Physical(8), "GPIO1"),
        (PinRef::Physical(9), "GPIO2"),
        (PinRef::Physical(12), "GPIO3"),
        (PinRef::Physical(1), "VCC"),
        (PinRef::Physical(16), "GND"),
    ],
    description: "Direct GPIO connection",
    metadata: ProfileMetadata {
        note: Some("For custom hardware"),
        ..ProfileMetadata::EMPTY
    },
};

static USB: ConnectionProfile = ConnectionProfile {
    pins: &[
        (PinRef::Physical(18), "5V"),
        (PinRef::Physical(16), "GND"),
        (PinRef::Named("USB_D+"), "Data+"),
        (PinRef::Named("USB_D-"), "Data-"),
    ],
    description: "USB connection",
    metadata: ProfileMetadata {
        protocol: Some("USB 2.0 Full Speed"),
        ..ProfileMetadata::EMPTY
    },
};

/// The fixed profile of a connection kind.
pub fn profile(kind: ConnectionKind) -> &'static ConnectionProfile {
    match kind {
        ConnectionKind::Uart => &UART,
        ConnectionKind::Ftdi => &FTDI,
        ConnectionKind::Direct => &DIRECT,
        ConnectionKind::Usb => &USB,
    }
}
