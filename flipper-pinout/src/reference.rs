use crate::frame::Frame;
use crate::PINS;

const REFERENCE_WIDTH: usize = 58;

const NOTES: [&str; 4] = [
    "• GPIO voltage: 3.3V (NOT 5V tolerant!)",
    "• Max. current per pin: 20mA",
    "• Use the SWD pins for debugging",
    "• VCC is a 3.3V output (max. 100mA)",
];

/// Every header pin in order, followed by electrical notes.
pub fn render_full_reference() -> String {
    let mut frame = Frame::new(REFERENCE_WIDTH);

    frame.centered("Flipper Zero GPIO Complete Pin Reference");
    frame.divider();

    for pin in PINS.iter() {
        frame.left(&format!(" Pin {:2}: {}", pin.number, pin.label));
    }
    frame.divider();

    frame.left("Important notes:");
    for note in NOTES.iter() {
        frame.left(note);
    }

    frame.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_pin_once_in_order() {
        let reference = render_full_reference();

        let numbers: Vec<u8> = reference
            .lines()
            .filter_map(|line| line.strip_prefix("║ Pin "))
            .map(|rest| rest[..2].trim().parse().unwrap())
            .collect();

        assert_eq!(numbers, (1..=18).collect::<Vec<u8>>());
    }

    #[test]
    fn labels_and_notes() {
        let reference = render_full_reference();

        assert!(reference.contains(" Pin 13: PA14 (SWCLK)"));
        assert!(reference.contains(" Pin 18: 5V (USB Power)"));
        for note in NOTES.iter() {
            assert!(reference.contains(note));
        }
    }

    #[test]
    fn box_is_closed() {
        let reference = render_full_reference();
        let lines: Vec<&str> = reference.lines().collect();

        assert!(lines[0].starts_with('╔'));
        assert!(lines[lines.len() - 1].ends_with('╝'));
        for line in lines {
            assert_eq!(line.chars().count(), REFERENCE_WIDTH + 2);
        }
    }
}
