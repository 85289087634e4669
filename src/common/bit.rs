#[macro_export]
macro_rules! BIT {
    ( $x:expr ) => {
        1 << $x
    };
}

// BIT_MASK_LEN!(3) == 0b111
#[macro_export]
macro_rules! BIT_MASK_LEN {
    ( $x:expr ) => {
        BIT!($x) - 1
    };
}
