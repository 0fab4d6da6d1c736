#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_grammar::{
    pct_enc::{decode, pct_encode, table},
    EncodeErrorKind,
};

fuzz_target!(|data: &[u8]| {
    let mut buf = String::new();
    match pct_encode(data, table::UNRESERVED, &mut buf) {
        Ok(()) => {
            assert!(std::str::from_utf8(data).is_ok());
            assert_eq!(decode(&buf).unwrap(), data);
        }
        Err(e) => {
            // Everything before the error is kept and decodes to the valid prefix.
            let (valid, rest) = data.split_at(e.index());
            assert!(std::str::from_utf8(valid).is_ok());
            assert_eq!(decode(&buf).unwrap(), valid);

            let err = std::str::from_utf8(rest).unwrap_err();
            assert_eq!(err.valid_up_to(), 0);
            assert_eq!(
                e.kind() == EncodeErrorKind::Incomplete,
                err.error_len().is_none()
            );
        }
    }
});
