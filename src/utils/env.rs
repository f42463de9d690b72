// src/utils/env.rs
use log::{debug, info};

/// Loads variables from a `.env` file in the working directory (or a parent).
/// Variables already present in the environment are left untouched; a
/// missing file is not an error.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded ({}); using system environment", e),
    }
}

/// Loads variables from an explicit file path, with the same rules as
/// [`load_env`].
pub fn load_env_from_file(file_path: &str) {
    match dotenv::from_filename(file_path) {
        Ok(_) => info!("Loaded environment from {}", file_path),
        Err(e) => debug!(
            "Could not load env file '{}': {}. Proceeding with system environment variables.",
            file_path, e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    #[test]
    fn test_load_env_from_file_does_not_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "HQ_COUNTRY_TEST_NEW=from_file").unwrap();
        writeln!(file, "HQ_COUNTRY_TEST_EXISTING=from_file").unwrap();
        env::set_var("HQ_COUNTRY_TEST_EXISTING", "from_env");

        load_env_from_file(file.path().to_str().unwrap());

        assert_eq!(env::var("HQ_COUNTRY_TEST_NEW").unwrap(), "from_file");
        assert_eq!(env::var("HQ_COUNTRY_TEST_EXISTING").unwrap(), "from_env");

        // Cleanup
        env::remove_var("HQ_COUNTRY_TEST_NEW");
        env::remove_var("HQ_COUNTRY_TEST_EXISTING");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        load_env_from_file("/definitely/not/here/.env");
    }
}
