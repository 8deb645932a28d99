use dx_02_entity_repository::{Entity, Namespace};
use serde::{Deserialize, Serialize};

pub const NOTIFICATION_NAMESPACE: Namespace = Namespace::new("notification_", "UserNotification");

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserNotification {
    /// Bare id; the ledger key is `notification_<id>`.
    pub id: String,
    pub request_id: String,
    pub campaign_id: String,
    pub count: i64,
    pub attribute_list: String,
    pub owner: String,
    /// Transaction timestamp (seconds) of the creating invocation.
    pub created_on: u64,
    pub message: String,
    pub status: String,
}

impl UserNotification {
    pub fn new(id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            ..Self::default()
        }
    }
}

impl Entity for UserNotification {
    const NAMESPACE: Namespace = NOTIFICATION_NAMESPACE;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
