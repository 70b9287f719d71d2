use std::env;
use std::path::PathBuf;

/// Get the path to the Specgen directory (~/.specgen)
pub fn specgen_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".specgen")
    } else {
        // Fall back to dirs crate for normal usage
        dirs::home_dir()
            .expect("Unable to get home directory")
            .join(".specgen")
    }
}

/// Get the path to the default SQLite database (~/.specgen/specgen.db)
pub fn database_file() -> PathBuf {
    specgen_dir().join("specgen.db")
}
