//! Process-wide scope → policy registry

use crate::handler::Handler;
use crate::policy::RecoveryPolicy;
use crate::scope::Scope;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL: Lazy<PolicyRegistry> = Lazy::new(PolicyRegistry::new);

/// Map from scope token to its recovery policy.
///
/// Policies are created lazily on first lookup and live for the registry's
/// lifetime; nothing ever deletes or resets one. Get-or-create is atomic:
/// concurrent first lookups of the same scope observe exactly one policy
/// instance, and handlers appended on either side of the race land in it.
///
/// Most callers use the process-wide [`PolicyRegistry::global`] instance,
/// configured once at startup. An owned registry (`new`) exists for tests
/// and for callers that prefer explicit injection.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    policies: DashMap<Scope, Arc<RecoveryPolicy>>,
}

impl PolicyRegistry {
    /// Create an empty, isolated registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            policies: DashMap::new(),
        }
    }

    /// The process-wide registry (init-once, no teardown)
    #[must_use]
    pub fn global() -> &'static PolicyRegistry {
        &GLOBAL
    }

    /// Return the policy for `scope`, creating an empty one on first access
    #[must_use]
    pub fn for_scope(&self, scope: Scope) -> Arc<RecoveryPolicy> {
        let entry = self.policies.entry(scope).or_insert_with(|| {
            tracing::trace!(%scope, "created recovery policy");
            Arc::new(RecoveryPolicy::new())
        });
        Arc::clone(entry.value())
    }

    /// Append handlers to the (possibly just-created) policy for `scope`,
    /// in call order, after any already present
    pub fn append_handlers(&self, scope: Scope, handlers: impl IntoIterator<Item = Handler>) {
        self.for_scope(scope).append_all(handlers);
    }

    /// Whether a policy has ever been looked up for `scope`
    #[must_use]
    pub fn configured(&self, scope: Scope) -> bool {
        self.policies.contains_key(&scope)
    }

    /// Number of scopes with a policy
    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether no scope has a policy yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
