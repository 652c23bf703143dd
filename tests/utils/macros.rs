#[macro_export]
macro_rules! assert_result {
    ($some:expr) => {
        if let Err(err) = &$some {
            panic!("{}", err)
        }
    };
}

#[macro_export]
macro_rules! assert_error {
    ($some:expr, $variant:path) => {
        match &$some {
            Err($variant(_)) => (),
            Err(err) => panic!("unexpected error: {}", err),
            Ok(_) => panic!("expected an error"),
        }
    };
}
