#![no_main]

use libfuzzer_sys::fuzz_target;
use modbuild::domain::entities::ModuleDescriptor;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(descriptor) = ModuleDescriptor::from_json(content) {
            let _ = descriptor.private_references();
        }
    }
});
