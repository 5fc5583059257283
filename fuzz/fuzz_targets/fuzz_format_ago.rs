#![no_main]

use libfuzzer_sys::fuzz_target;
use trans_i18n::RelativeTimeFormatter;

fuzz_target!(|data: &[u8]| {
    let Ok(bytes) = <[u8; 8]>::try_from(data) else {
        return;
    };
    let seconds = f64::from_le_bytes(bytes);

    // Any f64, including NaN and infinities, must produce a label.
    let label = RelativeTimeFormatter::english().format_ago(seconds);
    assert!(!label.is_empty());
});
