/// Project and link primary keys are UUIDs minted at creation time.
pub type ProjectId = uuid::Uuid;

/// User identities are opaque subject strings issued by the auth provider.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
