pub mod metrics;
pub mod tracing;

pub use self::metrics::metrics_middleware;
pub use self::tracing::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware, request_id_of, request_span,
};
