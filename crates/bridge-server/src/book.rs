//! Address book file loading.

use std::path::Path;

use tracing::warn;

/// Read `(phone, email)` pairs from the `[users]` section of an INI file.
///
/// A missing or unreadable file yields an empty book with a warning; the
/// server still starts and reports the empty directory on the status
/// route. Entries are returned sorted by phone number so later
/// duplicate-handling is deterministic.
pub fn load_address_book(path: &Path) -> Vec<(String, String)> {
    let settings = match config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Ini))
        .build()
    {
        Ok(settings) => settings,
        Err(error) => {
            warn!(path = %path.display(), %error, "Failed to read address book, starting with an empty one");
            return Vec::new();
        }
    };

    let users = match settings.get_table("users") {
        Ok(users) => users,
        Err(error) => {
            warn!(path = %path.display(), %error, "Address book has no [users] section");
            return Vec::new();
        }
    };

    let mut entries: Vec<(String, String)> = users
        .into_iter()
        .filter_map(|(phone, value)| match value.into_string() {
            Ok(email) => Some((phone, email)),
            Err(error) => {
                warn!(entry = %phone, %error, "Skipping non-string address book value");
                None
            }
        })
        .collect();

    entries.sort();
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_book(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".cfg").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_users_section() {
        let file = write_book(
            "[users]\n+14155551212 = alice@example.com\n+14155551213 = bob@example.com\n",
        );

        let entries = load_address_book(file.path());

        assert_eq!(
            entries,
            vec![
                ("+14155551212".to_string(), "alice@example.com".to_string()),
                ("+14155551213".to_string(), "bob@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_file_yields_empty_book() {
        assert!(load_address_book(Path::new("/nonexistent/address-book.cfg")).is_empty());
    }

    #[test]
    fn test_missing_users_section_yields_empty_book() {
        let file = write_book("[other]\nkey = value\n");
        assert!(load_address_book(file.path()).is_empty());
    }
}
