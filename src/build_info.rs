//! Build information module
//!
//! Compile-time build number and timestamp, plus the stderr startup banner
//! shared by both binaries.

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("WORKSHOPS_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("WORKSHOPS_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Const function to parse u64 at compile time
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub name: &'static str,
    pub program: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    /// Build info for the named binary
    pub fn for_program(program: &'static str) -> Self {
        Self {
            name: NAME,
            program,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

/// Print the startup banner to stderr so stdout carries only program output
pub fn print_startup_banner(program: &'static str) {
    let info = BuildInfo::for_program(program);
    eprintln!("===============================================");
    eprintln!("  {} ({})", info.program, info.name);
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("42"), Some(42));
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("4x"), None);
        assert_eq!(parse_u64(""), None);
    }

    #[test]
    fn test_build_info_for_program() {
        let info = BuildInfo::for_program("product_report");
        assert_eq!(info.program, "product_report");
        assert_eq!(info.name, "workshops");
        assert_eq!(info.version, VERSION);
    }
}
