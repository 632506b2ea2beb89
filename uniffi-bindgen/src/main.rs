// Generates the Swift and Kotlin bindings for `webshell_core`:
//   cargo run -p uniffi-bindgen -- generate --library target/debug/libwebshell_core.so \
//     --language kotlin --out-dir android/app/src/main/java
fn main() {
    uniffi::uniffi_bindgen_main()
}
