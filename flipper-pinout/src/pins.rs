/// Label used wherever a pin number has no catalog entry.
pub const UNKNOWN_PIN: &str = "Unknown";

/// One numbered contact on the GPIO header.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhysicalPin {
    pub number: u8,
    pub label: &'static str,
}

const fn pin(number: u8, label: &'static str) -> PhysicalPin {
    PhysicalPin { number, label }
}

/// Every header pin, in ascending pin order.
pub const PINS: [PhysicalPin; 18] = [
    pin(1, "VCC (3.3V)"),
    pin(2, "PA7 (SPI_MOSI)"),
    pin(3, "PA6 (SPI_MISO)"),
    pin(4, "PA4 (SPI_SCK)"),
    pin(5, "PB3 (SPI_CS)"),
    pin(6, "PB2 (USART_TX)"),
    pin(7, "PC3 (USART_RX)"),
    pin(8, "PC1 (GPIO)"),
    pin(9, "PC0 (GPIO)"),
    pin(10, "PB8 (I2C_SCL)"),
    pin(11, "PB9 (I2C_SDA)"),
    pin(12, "PA15 (GPIO)"),
    pin(13, "PA14 (SWCLK)"),
    pin(14, "PA13 (SWDIO)"),
    pin(15, "RESET"),
    pin(16, "GND"),
    pin(17, "3V3 (Power Out)"),
    pin(18, "5V (USB Power)"),
];

/// Catalog label of a header pin, `None` if the number is not on the header.
pub fn lookup_pin(number: u32) -> Option<&'static str> {
    let found = PINS
        .iter()
        .find(|p| u32::from(p.number) == number)
        .map(|p| p.label);

    if found.is_none() {
        log::debug!("pin {} is not in the catalog", number);
    }

    found
}
