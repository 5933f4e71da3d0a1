//! Driver type.

use serde::Serialize;

/// A competitor in a season.
///
/// Built either from an API response or from the static snapshot tables.
/// `number` is kept as text because that is how both sources carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Driver {
    /// Three-letter code, conventionally uppercase (e.g. "VER").
    pub abbr: String,
    /// Family name. Uppercase when it comes from the static tables.
    pub name: String,
    /// Car number.
    pub number: String,
}

impl Driver {
    pub fn new(abbr: impl Into<String>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            abbr: abbr.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Whether `query` names this driver, by family name or by code.
    ///
    /// Comparison ignores case. An empty query matches nothing, so a
    /// driver without a code is not found by "".
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        let query = query.to_uppercase();
        query == self.name.to_uppercase() || query == self.abbr.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verstappen() -> Driver {
        Driver::new("VER", "Verstappen", "33")
    }

    #[test]
    fn matches_name_any_case() {
        let driver = verstappen();
        assert!(driver.matches("Verstappen"));
        assert!(driver.matches("VERSTAPPEN"));
        assert!(driver.matches("verstappen"));
    }

    #[test]
    fn matches_abbr_any_case() {
        let driver = verstappen();
        assert!(driver.matches("VER"));
        assert!(driver.matches("ver"));
        assert!(driver.matches("vEr"));
    }

    #[test]
    fn rejects_partial_and_number() {
        let driver = verstappen();
        assert!(!driver.matches("VERS"));
        assert!(!driver.matches("VE"));
        assert!(!driver.matches("33"));
        assert!(!driver.matches(""));
    }

    #[test]
    fn empty_query_skips_driver_without_code() {
        let driver = Driver::new("", "Fangio", "");
        assert!(!driver.matches(""));
        assert!(driver.matches("fangio"));
    }
}
