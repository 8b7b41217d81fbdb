/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// A trailing format string adds context to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?})", v),
        }
    };
    ($e:expr, $($ctx:tt)+) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?}), {}", v, format_args!($($ctx)+)),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={e}"),
        }
    };
    ($e:expr, $($ctx:tt)+) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={e}, {}", format_args!($($ctx)+)),
        }
    };
}
