//! Named handles to driver-registered custom scales.

/// A custom scaling curve registered with the driver.
///
/// The driver stores scales in its configuration database and channels
/// refer to them by name only; this handle wraps that name. Attribute
/// getters return the stored name wrapped in a `Scale`, and setters unwrap
/// it when forwarding. An empty name means "no custom scale".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: String,
}

impl Scale {
    /// A handle to the scale registered under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The "no custom scale" handle.
    pub fn none() -> Self {
        Self {
            name: String::new(),
        }
    }

    /// The driver-side name of this scale.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this handle names a scale at all.
    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_wraps_name() {
        let scale = Scale::new("psi_from_volts");
        assert_eq!(scale.name(), "psi_from_volts");
        assert!(!scale.is_none());
        assert!(Scale::none().is_none());
    }
}
