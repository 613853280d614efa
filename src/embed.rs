//! Turn a binary file into a C/C++ `char` array definition.
use anyhow::Result;
use std::fmt::Write;

/// Returns true if `name` can be used as a C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Render `bytes` as `char <symbol>[] = {0x.., ..., 0x00};`.
///
/// The array is NUL-terminated so it can be read as a C string.
pub fn byte_array_source(symbol: &str, bytes: &[u8]) -> Result<String> {
    if !is_c_identifier(symbol) {
        anyhow::bail!("{:?} is not a valid C identifier", symbol);
    }

    // "0xff, " is at most 6 bytes per input byte
    let mut out = String::with_capacity(bytes.len() * 6 + symbol.len() + 24);
    write!(out, "char {}[] = {{", symbol)?;
    for b in bytes {
        write!(out, "{:#x}, ", b)?;
    }
    out.push_str("0x00};\n");
    Ok(out)
}
