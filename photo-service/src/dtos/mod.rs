pub mod diagnostics;
pub mod photos;
pub mod users;

pub use diagnostics::{CollectionCounts, SchemaInfoResponse};
pub use photos::{CommentResponse, PhotoResponse};
pub use users::{UserProfile, UserSummary};

use chrono::SecondsFormat;
use mongodb::bson::DateTime;

/// Renders a store timestamp as RFC 3339 UTC with millisecond precision.
pub fn format_timestamp(value: DateTime) -> String {
    value
        .to_chrono()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_millis_and_zulu() {
        let value = DateTime::from_millis(1_356_998_400_123);
        assert_eq!(format_timestamp(value), "2013-01-01T00:00:00.123Z");
    }

    #[test]
    fn formats_epoch() {
        assert_eq!(
            format_timestamp(DateTime::from_millis(0)),
            "1970-01-01T00:00:00.000Z"
        );
    }
}
