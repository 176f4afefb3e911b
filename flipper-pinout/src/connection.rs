use crate::Error;
use core::fmt;
use core::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Plain 3.3V serial to another device.
    Uart,
    /// Serial through an FTDI USB adapter.
    Ftdi,
    /// Bare GPIO lines to custom hardware.
    Direct,
    /// The USB-C port.
    Usb,
}

impl ConnectionKind {
    pub(crate) fn all() -> [ConnectionKind; 4] {
        [
            ConnectionKind::Uart,
            ConnectionKind::Ftdi,
            ConnectionKind::Direct,
            ConnectionKind::Usb,
        ]
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ConnectionKind::Uart => "uart",
            ConnectionKind::Ftdi => "ftdi",
            ConnectionKind::Direct => "direct",
            ConnectionKind::Usb => "usb",
        }
    }

    /// Upper case name used in headings.
    pub fn title(self) -> &'static str {
        match self {
            ConnectionKind::Uart => "UART",
            ConnectionKind::Ftdi => "FTDI",
            ConnectionKind::Direct => "DIRECT",
            ConnectionKind::Usb => "USB",
        }
    }
}

/// All kinds in their canonical order.
pub fn list_connection_kinds() -> [ConnectionKind; 4] {
    ConnectionKind::all()
}

/// Comma separated names of every kind, for help and error output.
pub fn connection_kind_names() -> String {
    ConnectionKind::all()
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConnectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        ConnectionKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::UnknownConnectionKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        assert_eq!(
            list_connection_kinds(),
            [
                ConnectionKind::Uart,
                ConnectionKind::Ftdi,
                ConnectionKind::Direct,
                ConnectionKind::Usb
            ]
        );
        assert_eq!(connection_kind_names(), "uart, ftdi, direct, usb");
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("uart".parse::<ConnectionKind>(), Ok(ConnectionKind::Uart));
        assert_eq!("FTDI".parse::<ConnectionKind>(), Ok(ConnectionKind::Ftdi));
        assert_eq!("Direct".parse::<ConnectionKind>(), Ok(ConnectionKind::Direct));
        assert_eq!("uSb".parse::<ConnectionKind>(), Ok(ConnectionKind::Usb));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "xyz".parse::<ConnectionKind>(),
            Err(Error::UnknownConnectionKind("xyz".into()))
        );
        assert_eq!(
            "full".parse::<ConnectionKind>(),
            Err(Error::UnknownConnectionKind("full".into()))
        );
    }

    #[test]
    fn name_round_trips() {
        for kind in ConnectionKind::all().iter() {
            assert_eq!(kind.to_string().parse::<ConnectionKind>(), Ok(*kind));
            assert_eq!(kind.title(), kind.name().to_ascii_uppercase());
        }
    }
}
