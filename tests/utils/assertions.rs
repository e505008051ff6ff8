/// Assert a `try_*` client call failed with the given contract error.
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected_error:expr) => {
        match $result {
            Err(Ok(code)) => assert_eq!(code, $expected_error, "Contract error code mismatch"),
            Err(Err(status)) => panic!("Expected contract error, got host error {:?}", status),
            Ok(_) => panic!("Expected contract error but succeeded"),
        }
    };
}

/// Assert value is within range (inclusive)
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!(
            $value >= $min && $value <= $max,
            "Value {} not in range [{}, {}]",
            $value,
            $min,
            $max
        )
    };
}
