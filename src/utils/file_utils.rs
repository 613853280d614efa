use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join("griddiff_test_file_utils.txt");
        write_text(&path, "x.\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"x.\n");
    }

    #[test]
    fn test_read_missing_names_path() {
        let path = std::env::temp_dir().join("griddiff_test_file_utils_missing.bin");
        let _ = fs::remove_file(&path);
        let err = read_file(&path).unwrap_err();
        assert!(format!("{err}").contains("griddiff_test_file_utils_missing.bin"));
    }
}
