#![no_main]

use libfuzzer_sys::fuzz_target;
use modbuild::domain::entities::DependencyContext;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(context) = DependencyContext::from_json(content) {
            for library in context.compile_libraries() {
                let _ = library.package_relative_path();
                let _ = context.find_library(&library.name);
            }
        }
    }
});
