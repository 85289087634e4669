// Board wiring

// GPIO 21 sits on physical pin 40 of the 40-pin header; move the LED by
// changing this alone.
pub const LED_PIN: u32 = 21;

/// Half-period of the blink in milliseconds: the LED is on for this long,
/// then off for this long.
pub const BLINK_INTERVAL_MS: u32 = 500;
