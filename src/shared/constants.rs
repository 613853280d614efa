pub const APP_NAME: &str = "griddiff";

pub const GRIDDIFF_CONFIG_FILE: &str = "griddiff.config";
pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const MEMBER_SYMBOL: char = 'x';
pub const OUTSIDE_SYMBOL: char = '.';

pub const DEFAULT_EMBED_SYMBOL: &str = "LINKER_SCRIPT";

pub const USAGE_LINES: &[&str] = &[
    "Usage: griddiff input_file1 input_file2 output_file",
    "Compares input_file1 to input_file2 and creates a difference image. input_file2 is",
    "treated as the 'right' input data.",
    "",
    "Other commands: compare, render, embed (see `griddiff --help`).",
];
