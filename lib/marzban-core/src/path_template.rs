//! Endpoint path templates.

use std::collections::BTreeSet;

/// A path template with `{name}` placeholders, e.g. `/api/user/{username}`.
///
/// The template is also stored in request extensions so middleware can
/// report the pattern rather than the resolved path.
///
/// # Example
///
/// ```
/// use marzban_core::PathTemplate;
///
/// let template = PathTemplate::new("/api/user/{username}/usage");
/// assert_eq!(template.resolve(&[("username", "alice")]), "/api/user/alice/usage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names, in the order they appear.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let template = self.0;
        template
            .split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
    }

    /// Substitute each `(name, value)` pair into the template.
    ///
    /// Pairs are applied in order and each one replaces only the first
    /// occurrence of its `{name}` placeholder. Values are inserted verbatim:
    /// callers must hand in path-safe values.
    ///
    /// A name missing from the template, or a placeholder name without a
    /// value, is a bug in the caller and trips a debug assertion. A name that
    /// appears twice needs one pair per occurrence to be fully resolved.
    #[must_use]
    pub fn resolve(&self, params: &[(&str, &str)]) -> String {
        debug_assert_eq!(
            self.placeholders().collect::<BTreeSet<_>>(),
            params.iter().map(|(name, _)| *name).collect::<BTreeSet<_>>(),
            "parameter names do not match template {}",
            self.0
        );

        let mut path = self.0.to_string();
        for (name, value) in params {
            let placeholder = format!("{{{name}}}");
            debug_assert!(
                path.contains(&placeholder),
                "template {} has no placeholder {placeholder}",
                self.0
            );
            path = path.replacen(&placeholder, value, 1);
        }
        path
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}
