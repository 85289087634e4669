/// Physical address of the memory-mapped peripheral window.
///
/// In the default "low peripheral" mode the BCM2711 exposes the legacy
/// 0x7Ennnnnn peripheral bus at 0xFE000000; with the full 35-bit address
/// map it moves to 0x4_7E000000 (`full-address-map` feature).
#[cfg(not(feature = "full-address-map"))]
pub const PERIPHERAL_BASE: usize = 0xFE00_0000;
#[cfg(feature = "full-address-map")]
pub const PERIPHERAL_BASE: usize = 0x4_7E00_0000;

/// Byte offset of the GPIO register block within the peripheral window.
pub const GPIO_BASE: usize = 0x0020_0000;

/// Byte offset of the free-running system timer block.
pub const ST_BASE: usize = 0x0000_3000;

#[macro_export]
macro_rules! regrw {
    ( $x:ident, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>]() -> $s {
                unsafe {
                    core::ptr::read_volatile((PERIPHERAL_BASE + $a) as *mut $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s) {
                unsafe {
                    core::ptr::write_volatile((PERIPHERAL_BASE + $a) as *mut $s, value)
                }
            }
        }
    };
}

// Accessors for a bank of identical registers; `i` is the byte offset of
// the register within the bank.
#[macro_export]
macro_rules! regrw_idx {
    ( $x:ident, $a:expr, $s:ty ) => {
        paste::paste! {
            #[cfg_attr(test, mry::mry)]
            pub fn [<read_ $x>](i: u32) -> $s {
                unsafe {
                    core::ptr::read_volatile((PERIPHERAL_BASE + $a + i as usize) as *mut $s)
                }
            }

            #[cfg_attr(test, mry::mry)]
            pub fn [<write_ $x>](value: $s, i: u32) {
                unsafe {
                    core::ptr::write_volatile((PERIPHERAL_BASE + $a + i as usize) as *mut $s, value)
                }
            }
        }
    };
}

/****************************************************
 gpio regs: begin  GPIO_BASE + 0x00
 *****************************************************/
regrw_idx!(reg_gpio_fsel, GPIO_BASE + 0x00, u32); // GPFSEL0..5, 10 pins x 3 bits
regrw_idx!(reg_gpio_set, GPIO_BASE + 0x1c, u32); // GPSET0..1, write-1-to-set
regrw_idx!(reg_gpio_clr, GPIO_BASE + 0x28, u32); // GPCLR0..1, write-1-to-clear
regrw_idx!(reg_gpio_lev, GPIO_BASE + 0x34, u32); // GPLEV0..1, read-only
regrw_idx!(reg_gpio_pup_pdn, GPIO_BASE + 0xe4, u32); // GPIO_PUP_PDN_CNTRL_REG0..3, 16 pins x 2 bits

/****************************************************
 system timer regs: begin  ST_BASE
 *****************************************************/
regrw!(reg_st_clo, ST_BASE + 0x04, u32); // free-running counter, low word
