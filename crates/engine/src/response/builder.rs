use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, PoisonError,
};

use error::{GraphqlError, ResponsePath};

use super::{Response, ResponseValue};

/// Collects the errors of an execution while its fields are being resolved concurrently.
///
/// Errors are reported in response order, whatever the order the fields failed in.
#[derive(Default)]
pub(crate) struct ResponseBuilder {
    errors: Mutex<Vec<(ResponsePath, GraphqlError)>>,
    timed_out: AtomicBool,
}

impl ResponseBuilder {
    pub fn push_error(&self, path: &ResponsePath, error: GraphqlError) {
        tracing::debug!(code = %error.code, "Field error at {path}: {}", error.message);
        let error = error.with_path(path);
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.clone(), error));
    }

    /// Abandoned resolvers are reported by a single error, whatever their number.
    pub fn set_timed_out(&self) {
        self.timed_out.store(true, Ordering::Relaxed);
    }

    pub fn build(self, data: Option<ResponseValue>) -> Response {
        let mut errors = self.errors.into_inner().unwrap_or_else(PoisonError::into_inner);
        errors.sort_by(|(left, _), (right, _)| left.cmp_position(right));

        let mut errors = errors.into_iter().map(|(_, error)| error).collect::<Vec<_>>();
        if self.timed_out.into_inner() {
            tracing::debug!("Execution timed out");
            errors.push(GraphqlError::timeout());
        }
        Response { data, errors }
    }
}
