use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::soc::register::{
    read_reg_gpio_fsel, read_reg_gpio_lev, read_reg_gpio_pup_pdn, write_reg_gpio_clr,
    write_reg_gpio_fsel, write_reg_gpio_pup_pdn, write_reg_gpio_set,
};
use crate::{BIT, BIT_MASK_LEN};

/// Number of GPIO lines on the BCM2711 (pins 0-57).
pub const GPIO_PIN_COUNT: u32 = 58;

// Field packing per register family. Function select packs 10 pins of
// 3 bits each into a word (top 2 bits unused); pull control packs 16 pins
// of 2 bits; set/clear/level are one bit per pin, one bank per 32 pins.
const FSEL_PINS_PER_REG: u32 = 10;
const FSEL_BITS_PER_PIN: u32 = 3;
const PULL_PINS_PER_REG: u32 = 16;
const PULL_BITS_PER_PIN: u32 = 2;
const PINS_PER_BANK: u32 = 32;

/// Function select codes for a GPIO pin.
///
/// Each pin is routed to plain input, plain output, or one of six
/// alternate peripheral functions. The 3-bit hardware codes for the
/// alternate functions are not sequential; the values below are fixed by
/// the chip and must not be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum GPIO_FUNC {
    INPUT = 0,
    OUTPUT = 1,
    ALT0 = 4,
    ALT1 = 5,
    ALT2 = 6,
    ALT3 = 7,
    ALT4 = 3,
    ALT5 = 2,
}

/// Internal pull resistor codes for a GPIO pin.
///
/// Code 3 is reserved by the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum GPIO_PULL {
    NONE = 0,
    UP = 1,
    DOWN = 2,
}

/// Errors reported by the GPIO driver. Every operation validates its
/// inputs before the first register access, so a failed call has touched
/// no hardware state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpioError {
    /// Pin index beyond the last GPIO line of the chip.
    PinOutOfRange(u32),
    /// A readable field held a bit pattern with no defined meaning.
    ReservedFieldValue(u32),
}

fn check_pin(pin: u32) -> Result<(), GpioError> {
    if pin >= GPIO_PIN_COUNT {
        return Err(GpioError::PinOutOfRange(pin));
    }

    Ok(())
}

/// Selects the function of a GPIO pin.
///
/// # Parameters
///
/// * `pin` - The GPIO pin number (0-57)
/// * `func` - The function code to program
///
/// # Algorithm
///
/// 1. Locate the function select register: `GPFSELn`, `n = pin / 10`
/// 2. Clear the pin's 3-bit field at bit offset `(pin % 10) * 3`
/// 3. Or in the new function code and write the word back
///
/// # Notes
///
/// * Ten pins share each word, so this is a read-modify-write; the other
///   nine fields are written back unchanged
/// * The new function takes effect immediately and persists until the
///   next write or chip reset
/// * The read and write are not atomic; callers running concurrently must
///   serialize access to pins sharing a word
#[cfg_attr(test, mry::mry)]
pub fn gpio_set_func(pin: u32, func: GPIO_FUNC) -> Result<(), GpioError> {
    check_pin(pin)?;

    let reg_offset = (pin / FSEL_PINS_PER_REG) << 2;
    let shift = (pin % FSEL_PINS_PER_REG) * FSEL_BITS_PER_PIN;

    let mut val = read_reg_gpio_fsel(reg_offset);
    val &= !(BIT_MASK_LEN!(FSEL_BITS_PER_PIN) << shift);
    val |= (func as u32) << shift;
    write_reg_gpio_fsel(val, reg_offset);

    Ok(())
}

/// Configures the internal pull resistor of a GPIO pin.
///
/// Same read-modify-write shape as [`gpio_set_func`], against the
/// 2-bits-per-pin pull control bank (16 pins per word).
#[cfg_attr(test, mry::mry)]
pub fn gpio_set_pull(pin: u32, pull: GPIO_PULL) -> Result<(), GpioError> {
    check_pin(pin)?;

    let reg_offset = (pin / PULL_PINS_PER_REG) << 2;
    let shift = (pin % PULL_PINS_PER_REG) * PULL_BITS_PER_PIN;

    let mut val = read_reg_gpio_pup_pdn(reg_offset);
    val &= !(BIT_MASK_LEN!(PULL_BITS_PER_PIN) << shift);
    val |= (pull as u32) << shift;
    write_reg_gpio_pup_pdn(val, reg_offset);

    Ok(())
}

/// Drives a GPIO pin high.
///
/// The set registers are write-1-to-set: zero bits are ignored by the
/// hardware, so a single write of the pin's bit suffices and no other pin
/// is disturbed. No read-modify-write takes place.
///
/// Only has a visible effect on pins configured as `OUTPUT`.
#[cfg_attr(test, mry::mry)]
pub fn gpio_set(pin: u32) -> Result<(), GpioError> {
    check_pin(pin)?;

    write_reg_gpio_set(BIT!(pin % PINS_PER_BANK), (pin / PINS_PER_BANK) << 2);

    Ok(())
}

/// Drives a GPIO pin low, through the write-1-to-clear register bank.
/// Symmetric to [`gpio_set`].
#[cfg_attr(test, mry::mry)]
pub fn gpio_clear(pin: u32) -> Result<(), GpioError> {
    check_pin(pin)?;

    write_reg_gpio_clr(BIT!(pin % PINS_PER_BANK), (pin / PINS_PER_BANK) << 2);

    Ok(())
}

/// Reads the current electrical level of a GPIO pin. Returns 0 or 1.
///
/// Valid for both input- and output-configured pins; no side effects.
#[cfg_attr(test, mry::mry)]
pub fn gpio_read(pin: u32) -> Result<u32, GpioError> {
    check_pin(pin)?;

    let val = read_reg_gpio_lev((pin / PINS_PER_BANK) << 2);

    Ok((val >> (pin % PINS_PER_BANK)) & 1)
}

/// Inverts the output level of a GPIO pin.
///
/// The level read and the set/clear write are two separate register
/// accesses; a concurrent writer to the same pin can interleave between
/// them.
#[cfg_attr(test, mry::mry)]
pub fn gpio_toggle(pin: u32) -> Result<(), GpioError> {
    if gpio_read(pin)? != 0 {
        gpio_clear(pin)
    } else {
        gpio_set(pin)
    }
}

/// Reads back the function a GPIO pin is currently routed to.
#[cfg_attr(test, mry::mry)]
pub fn gpio_get_func(pin: u32) -> Result<GPIO_FUNC, GpioError> {
    check_pin(pin)?;

    let reg_offset = (pin / FSEL_PINS_PER_REG) << 2;
    let shift = (pin % FSEL_PINS_PER_REG) * FSEL_BITS_PER_PIN;

    let code = (read_reg_gpio_fsel(reg_offset) >> shift) & BIT_MASK_LEN!(FSEL_BITS_PER_PIN);
    GPIO_FUNC::from_u32(code).ok_or(GpioError::ReservedFieldValue(code))
}

/// Reads back the pull resistor state of a GPIO pin.
///
/// The hardware code `0b11` is reserved and reported as an error rather
/// than mapped to a pull mode.
#[cfg_attr(test, mry::mry)]
pub fn gpio_get_pull(pin: u32) -> Result<GPIO_PULL, GpioError> {
    check_pin(pin)?;

    let reg_offset = (pin / PULL_PINS_PER_REG) << 2;
    let shift = (pin % PULL_PINS_PER_REG) * PULL_BITS_PER_PIN;

    let code = (read_reg_gpio_pup_pdn(reg_offset) >> shift) & BIT_MASK_LEN!(PULL_BITS_PER_PIN);
    GPIO_PULL::from_u32(code).ok_or(GpioError::ReservedFieldValue(code))
}
