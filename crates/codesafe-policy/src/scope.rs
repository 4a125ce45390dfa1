//! Scope tokens identifying recovery policies

use std::fmt;

/// Opaque identity under which a recovery policy is registered and looked up.
///
/// A scope is a compile-time token, one per logical owner of a policy
/// (a service, a subsystem, a module). Two scopes compare equal iff they
/// were built from the same name.
///
/// # Example
///
/// ```
/// use codesafe_policy::Scope;
///
/// const PAYMENTS: Scope = Scope::new("payments");
/// assert_eq!(PAYMENTS, Scope::new("payments"));
/// assert_ne!(PAYMENTS, Scope::new("billing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope(&'static str);

impl Scope {
    /// Create a scope token from a static name
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The scope's name
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_equality_by_name() {
        assert_eq!(Scope::new("a"), Scope::new("a"));
        assert_ne!(Scope::new("a"), Scope::new("b"));
    }

    #[test]
    fn scope_display() {
        assert_eq!(Scope::new("payments").to_string(), "payments");
    }

    #[test]
    fn scope_usable_as_const() {
        const S: Scope = Scope::new("const-scope");
        assert_eq!(S.name(), "const-scope");
    }
}
