//! Allow-list implementation of AccessChecker.
//!
//! Grants flight creation to a fixed set of actor ids read from
//! configuration. An empty list grants everyone.
//!
//! # Usage
//!
//! ```ignore
//! let checker = AllowListAccessChecker::new(["dispatch-lead", "ops-7"]);
//! let open = AllowListAccessChecker::allow_all();
//! ```

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::foundation::{ActorId, DomainError};
use crate::ports::{AccessChecker, AccessDeniedReason, AccessResult};

#[derive(Debug, Clone, Default)]
pub struct AllowListAccessChecker {
    allowed: HashSet<String>,
}

impl AllowListAccessChecker {
    pub fn new<I, S>(actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: actors.into_iter().map(Into::into).collect(),
        }
    }

    /// Checker that grants every actor.
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    }
}

#[async_trait]
impl AccessChecker for AllowListAccessChecker {
    async fn can_create_session(&self, actor: &ActorId) -> Result<AccessResult, DomainError> {
        if self.is_open() || self.allowed.contains(actor.as_str()) {
            Ok(AccessResult::Allowed)
        } else {
            Ok(AccessResult::Denied(AccessDeniedReason::NotPermitted))
        }
    }
}
