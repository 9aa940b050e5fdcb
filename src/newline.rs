/// Enforce Unix newlines on the given string.
///
/// Every Windows-style `\r\n` terminator becomes a single `\n`. The
/// transform is pure and idempotent; text that is already Unix-terminated
/// comes back unchanged.
pub fn to_unix_newline(input: &str) -> String {
    input.replace("\r\n", "\n")
}
