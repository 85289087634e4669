#![allow(non_camel_case_types)]

use crate::main_led::{main_loop, user_init};

pub mod common;
pub mod config;
pub mod main_led;
pub mod soc;

/// Firmware entry point, jumped to from the boot stub once the core is out
/// of reset and a stack exists.
///
/// A driver error at this level means the board configuration itself is
/// broken (a pin constant outside the chip's range), so it is fatal.
#[no_mangle]
pub fn main_entrypoint() -> i32 {
    user_init().expect("LED pin setup failed");

    loop {
        main_loop().expect("GPIO access failed");
    }
}
