#![no_main]

use libfuzzer_sys::fuzz_target;
use modbuild::BuildArgs;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let args = BuildArgs::parse(input);
        for path in args.module_paths() {
            assert!(!path.is_empty());
            assert!(!path.contains(';'));
        }
    }
});
