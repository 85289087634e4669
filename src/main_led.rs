use crate::config::{BLINK_INTERVAL_MS, LED_PIN};
use crate::soc::clock::sleep_ms;
use crate::soc::gpio::{
    gpio_clear, gpio_set_func, gpio_set_pull, gpio_toggle, GpioError, GPIO_FUNC, GPIO_PULL,
};

/// One-time board setup: route the LED pin to plain GPIO output with the
/// pull resistor disabled, and drive it low so the first toggle turns the
/// LED on.
pub fn user_init() -> Result<(), GpioError> {
    gpio_set_func(LED_PIN, GPIO_FUNC::OUTPUT)?;
    gpio_set_pull(LED_PIN, GPIO_PULL::NONE)?;
    gpio_clear(LED_PIN)?;

    Ok(())
}

/// One blink half-period: invert the LED, then wait.
pub fn main_loop() -> Result<(), GpioError> {
    gpio_toggle(LED_PIN)?;
    sleep_ms(BLINK_INTERVAL_MS);

    Ok(())
}
