//! Reading the server configuration from the environment.

use std::env::{self, VarError};

use crate::Error;

/// The environment variable holding the path to the SQLite database file.
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

/// Get the database path from the environment variable `env_key`.
///
/// The server cannot do anything useful without a database, so callers
/// should treat an error as fatal and refuse to start.
///
/// # Errors
/// Returns [Error::MissingConfig] if the variable is not set, is empty, or is
/// not valid unicode.
///
/// # Examples
///
/// ```
/// use finance_tracker::read_database_path;
///
/// assert!(read_database_path("FINANCE_DOC_TEST_DB").is_err());
///
/// unsafe { std::env::set_var("FINANCE_DOC_TEST_DB", "finance.db"); }
/// assert_eq!(read_database_path("FINANCE_DOC_TEST_DB").unwrap(), "finance.db");
/// # unsafe { std::env::remove_var("FINANCE_DOC_TEST_DB"); }
/// ```
pub fn read_database_path(env_key: &str) -> Result<String, Error> {
    match env::var(env_key) {
        Ok(path) if !path.trim().is_empty() => Ok(path),
        Ok(_) => {
            tracing::error!("The environment variable '{env_key}' is set but empty.");
            Err(Error::MissingConfig(env_key.to_owned()))
        }
        Err(VarError::NotPresent) => {
            tracing::error!("The environment variable '{env_key}' must be set.");
            Err(Error::MissingConfig(env_key.to_owned()))
        }
        Err(error) => {
            tracing::error!(
                "An error occurred retrieving the environment variable '{}': {}",
                env_key,
                error
            );
            Err(Error::MissingConfig(env_key.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, config::read_database_path};

    #[test]
    fn missing_variable_is_an_error() {
        let key = "FINANCE_TRACKER_TEST_MISSING_DB_PATH";

        assert_eq!(
            read_database_path(key),
            Err(Error::MissingConfig(key.to_owned()))
        );
    }

    #[test]
    fn empty_variable_is_an_error() {
        let key = "FINANCE_TRACKER_TEST_EMPTY_DB_PATH";
        unsafe { std::env::set_var(key, "  ") };

        let result = read_database_path(key);

        unsafe { std::env::remove_var(key) };
        assert_eq!(result, Err(Error::MissingConfig(key.to_owned())));
    }

    #[test]
    fn reads_path_when_set() {
        let key = "FINANCE_TRACKER_TEST_SET_DB_PATH";
        unsafe { std::env::set_var(key, "/tmp/finance.db") };

        let result = read_database_path(key);

        unsafe { std::env::remove_var(key) };
        assert_eq!(result, Ok("/tmp/finance.db".to_owned()));
    }
}
