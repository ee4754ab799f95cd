//! The GraphQL execution capability the catalog code is written against.

use std::future::Future;

use graphql_client::{GraphQLQuery, QueryBody};

use super::AdminShopifyError;

/// A GraphQL document plus its variables, already lowered to JSON.
pub type GraphQLOperation = QueryBody<serde_json::Value>;

/// Executes GraphQL operations against the remote product catalog.
///
/// Implementations return the response's `data` object. Transport failures,
/// HTTP status errors, and top-level GraphQL `errors` must surface as
/// [`AdminShopifyError`]; an implementation never returns partial data
/// alongside errors.
pub trait GraphQLTransport: Send + Sync {
    /// Execute one operation and return its `data` payload.
    fn execute(
        &self,
        operation: GraphQLOperation,
    ) -> impl Future<Output = Result<serde_json::Value, AdminShopifyError>> + Send;
}

/// Execute a typed query over any transport.
///
/// # Errors
///
/// Returns `AdminShopifyError::Parse` if the variables cannot be encoded or
/// the `data` payload does not match `Q::ResponseData`, and propagates any
/// transport error unchanged.
pub async fn execute_query<Q, T>(
    transport: &T,
    variables: Q::Variables,
) -> Result<Q::ResponseData, AdminShopifyError>
where
    Q: GraphQLQuery,
    T: GraphQLTransport,
{
    let body = Q::build_query(variables);
    let operation = GraphQLOperation {
        variables: serde_json::to_value(body.variables)?,
        query: body.query,
        operation_name: body.operation_name,
    };

    let data = transport.execute(operation).await?;

    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
pub mod testing {
    //! Scripted transport for unit tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{AdminShopifyError, GraphQLOperation, GraphQLTransport};

    /// An operation as seen by [`ScriptedTransport`].
    #[derive(Debug, Clone)]
    pub struct RecordedOperation {
        pub operation_name: &'static str,
        pub variables: serde_json::Value,
    }

    /// Replays canned `data` payloads in order and records every request.
    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<serde_json::Value, AdminShopifyError>>>,
        recorded: Mutex<Vec<RecordedOperation>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn respond(self, data: serde_json::Value) -> Self {
            self.responses
                .lock()
                .expect("responses lock")
                .push_back(Ok(data));
            self
        }

        #[must_use]
        pub fn fail(self, error: AdminShopifyError) -> Self {
            self.responses
                .lock()
                .expect("responses lock")
                .push_back(Err(error));
            self
        }

        pub fn recorded(&self) -> Vec<RecordedOperation> {
            self.recorded.lock().expect("recorded lock").clone()
        }

        pub fn recorded_names(&self) -> Vec<&'static str> {
            self.recorded().iter().map(|op| op.operation_name).collect()
        }
    }

    impl GraphQLTransport for ScriptedTransport {
        async fn execute(
            &self,
            operation: GraphQLOperation,
        ) -> Result<serde_json::Value, AdminShopifyError> {
            self.recorded
                .lock()
                .expect("recorded lock")
                .push(RecordedOperation {
                    operation_name: operation.operation_name,
                    variables: operation.variables,
                });

            self.responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .unwrap_or_else(|| {
                    Err(AdminShopifyError::graphql(format!(
                        "no scripted response for {}",
                        operation.operation_name
                    )))
                })
        }
    }
}
