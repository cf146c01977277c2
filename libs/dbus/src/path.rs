//! Bus object path resolution.

/// Base object path for secrets signals.
pub const DBUS_PATH: &str = "/org/credbus/secrets";

/// Object path for an event kind under the given base path.
///
/// `-` separators become `_`, since D-Bus object path elements only allow
/// `[A-Za-z0-9_]`. Pure function of the kind; empty or already-namespaced
/// kinds are an upstream contract this does not validate.
#[must_use]
pub fn signal_path(base: &str, kind: &str) -> String {
    format!("{}/{}", base, kind.replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_separators_become_underscores() {
        assert_eq!(
            signal_path("/org/example/secrets", "credential-issued"),
            "/org/example/secrets/credential_issued"
        );
    }

    #[test]
    fn test_same_kind_same_path() {
        assert_eq!(
            signal_path(DBUS_PATH, "credential-issued"),
            signal_path(DBUS_PATH, "credential-issued")
        );
    }

    // Kinds that differ only in their separator character collide in path
    // space. Registry interface names stay distinct, so routing is
    // unaffected, but kind naming upstream must avoid this.
    #[test]
    fn test_separator_variants_collide() {
        assert_eq!(
            signal_path(DBUS_PATH, "credential-issued"),
            signal_path(DBUS_PATH, "credential_issued")
        );
    }
}
