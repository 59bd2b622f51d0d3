#![no_main]

use libfuzzer_sys::fuzz_target;
use loose_version::LooseVersion;

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;
    let left = LooseVersion::new(a);
    let right = LooseVersion::new(b);

    assert_eq!(left.to_string(), a);
    if let (Ok(forward), Ok(backward)) = (left.compare(&right), right.compare(&left)) {
        assert_eq!(forward, backward.reverse());
        assert_eq!(left.compare(b), Ok(forward));
    }
});
