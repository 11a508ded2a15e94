/// Step-output adapter for the CI orchestrator.
///
/// Emits a plain `key=value` line on stdout; each run produces exactly one,
/// reporting the generated archive file name under the `name` key.
pub fn emit(key: &str, value: &str) {
    println!("{}={}", key, value);
}
