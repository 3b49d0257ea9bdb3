#![no_main]

use jvm_member_signature::jvm::JvmMemberSignature;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(signature) = data.parse::<JvmMemberSignature>() {
        assert_eq!(signature.to_string(), data);
    }
});
