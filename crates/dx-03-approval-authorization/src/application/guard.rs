use crate::config::AuthorizationConfig;
use crate::domain::{AuthorizationError, IdentityResolver};
use crate::ports::ApprovalAuthorizer;
use shared_types::{AttributeStatus, InvocationContext};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Approval authorization guard.
///
/// Holds the resolver and the identity-to-org table, both fixed at
/// construction. Stateless across invocations.
#[derive(Debug, Clone)]
pub struct ApprovalGuard {
    resolver: IdentityResolver,
    org_table: BTreeMap<String, String>,
}

impl ApprovalGuard {
    /// Build from a validated config.
    pub fn new(config: AuthorizationConfig) -> Result<Self, AuthorizationError> {
        config.validate()?;
        Ok(Self {
            resolver: IdentityResolver::new(config.peers),
            org_table: config.org_table,
        })
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn org_table(&self) -> &BTreeMap<String, String> {
        &self.org_table
    }
}

impl ApprovalAuthorizer for ApprovalGuard {
    fn identity_of(&self, ctx: &InvocationContext) -> String {
        self.resolver.resolve(&ctx.creator).to_string()
    }

    fn caller_org(&self, ctx: &InvocationContext) -> Option<String> {
        self.org_table
            .get(self.resolver.resolve(&ctx.creator))
            .cloned()
    }

    fn authorize(
        &self,
        ctx: &InvocationContext,
        claims: &[AttributeStatus],
    ) -> Result<(), AuthorizationError> {
        let identity = self.resolver.resolve(&ctx.creator);
        let caller_org = self.org_table.get(identity).map(String::as_str);

        for claim in claims.iter().filter(|c| c.is_approval()) {
            if caller_org != Some(claim.org_id.as_str()) {
                warn!(
                    tx_id = %ctx.tx_id,
                    identity = %identity,
                    caller_org = caller_org.unwrap_or("-"),
                    claim_org = %claim.org_id,
                    attribute = %claim.name,
                    "Rejected approval claim"
                );
                return Err(AuthorizationError::Unauthorized {
                    identity: identity.to_string(),
                    org_id: claim.org_id.clone(),
                });
            }
        }

        debug!(
            tx_id = %ctx.tx_id,
            identity = %identity,
            claims = claims.len(),
            "Approval claims authorized"
        );
        Ok(())
    }
}
