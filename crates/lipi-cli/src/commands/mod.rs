pub mod scheme_ops;
pub mod search_ops;
pub mod translit_ops;

/// Print the error and exit(1) on `Err`, otherwise unwrap the value.
#[macro_export]
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
