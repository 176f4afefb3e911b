use crate::ConnectionKind;

const UART: &[&str] = &[
    "Flipper Zero    ←→    UART Device",
    "Pin 6 (TX)      ←→    RX",
    "Pin 7 (RX)      ←→    TX",
    "Pin 1 (VCC)     ←→    VCC (3.3V)",
    "Pin 16 (GND)    ←→    GND",
    "",
    "Baudrate: 115200, 8N1",
];

const FTDI: &[&str] = &[
    "Flipper Zero    ←→    FTDI Adapter    ←→    USB",
    "Pin 6 (TX)      ←→    RXD",
    "Pin 7 (RX)      ←→    TXD",
    "Pin 1 (VCC)     ←→    VCC (3.3V)",
    "Pin 16 (GND)    ←→    GND",
    "",
    "⚠️  Set the FTDI adapter to 3.3V!",
];

const DIRECT: &[&str] = &[
    "Flipper Zero    ←→    Custom Hardware",
    "Pin 8 (PC1)     ←→    GPIO Input/Output",
    "Pin 9 (PC0)     ←→    GPIO Input/Output",
    "Pin 12 (PA15)   ←→    GPIO Input/Output",
    "Pin 1 (VCC)     ←→    Power (3.3V)",
    "Pin 16 (GND)    ←→    Ground",
    "",
    "⚠️  GPIO level: 3.3V max!",
];

const USB: &[&str] = &[
    "Flipper Zero USB-C    ←→    Host Device",
    "USB D+               ←→    Data+",
    "USB D-               ←→    Data-",
    "5V (Pin 18)         ←→    USB Power",
    "GND (Pin 16)        ←→    USB Ground",
    "",
    "USB 2.0 Full Speed (12 Mbps)",
];

/// Point-to-point wiring between the Flipper and the device on the other end.
pub fn render_wiring_diagram(kind: ConnectionKind) -> String {
    log::debug!("rendering {} wiring diagram", kind);

    let body = match kind {
        ConnectionKind::Uart => UART,
        ConnectionKind::Ftdi => FTDI,
        ConnectionKind::Direct => DIRECT,
        ConnectionKind::Usb => USB,
    };

    let mut lines = vec![
        format!("{} wiring diagram:", kind.title()),
        "=".repeat(50),
    ];
    lines.extend(body.iter().map(|line| line.to_string()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairings(diagram: &str) -> Vec<(String, String)> {
        diagram
            .lines()
            .skip(3)
            .filter_map(|line| {
                let mut sides = line.split("←→");
                let left = sides.next()?.trim().to_string();
                let right = sides.next()?.trim().to_string();
                Some((left, right))
            })
            .collect()
    }

    #[test]
    fn uart() {
        let diagram = render_wiring_diagram(ConnectionKind::Uart);

        assert!(diagram.starts_with("UART wiring diagram:\n"));
        assert_eq!(
            pairings(&diagram),
            vec![
                ("Pin 6 (TX)".to_string(), "RX".to_string()),
                ("Pin 7 (RX)".to_string(), "TX".to_string()),
                ("Pin 1 (VCC)".to_string(), "VCC (3.3V)".to_string()),
                ("Pin 16 (GND)".to_string(), "GND".to_string()),
            ]
        );
        assert!(diagram.contains("115200"));
        assert!(diagram.contains("8N1"));
    }

    #[test]
    fn ftdi_goes_through_adapter() {
        let diagram = render_wiring_diagram(ConnectionKind::Ftdi);

        assert!(diagram.contains("FTDI Adapter"));
        assert_eq!(pairings(&diagram).len(), 4);
        assert!(diagram.ends_with("3.3V!"));
    }

    #[test]
    fn direct_has_three_gpio_lines() {
        let diagram = render_wiring_diagram(ConnectionKind::Direct);

        assert_eq!(diagram.matches("GPIO Input/Output").count(), 3);
        assert_eq!(pairings(&diagram).len(), 5);
        assert!(diagram.contains("3.3V max"));
    }

    #[test]
    fn usb_speed() {
        let diagram = render_wiring_diagram(ConnectionKind::Usb);

        assert_eq!(pairings(&diagram).len(), 4);
        assert!(diagram.contains("\n5V (Pin 18)         ←→    USB Power\n"));
        assert!(diagram.contains("\nGND (Pin 16)        ←→    USB Ground\n"));
        assert!(diagram.ends_with("USB 2.0 Full Speed (12 Mbps)"));
    }
}
