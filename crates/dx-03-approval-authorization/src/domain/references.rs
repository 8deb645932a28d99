use crate::domain::AuthorizationError;
use shared_types::AttributeStatus;

/// Every claim must name one of the requested attribute codes.
pub fn check_attribute_references(
    attribute_codes: &[String],
    claims: &[AttributeStatus],
) -> Result<(), AuthorizationError> {
    match claims
        .iter()
        .find(|claim| !attribute_codes.iter().any(|code| *code == claim.name))
    {
        Some(claim) => Err(AuthorizationError::InvalidAttribute {
            name: claim.name.clone(),
        }),
        None => Ok(()),
    }
}
