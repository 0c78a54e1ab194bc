//! # Mock Store
//!
//! The [`MockStore`] type answers the same requests as a real
//! [`EntityStore`](crate::actor::EntityStore) task, but from a queue of
//! scripted expectations instead of a map. It lets you unit-test the logic
//! *around* a [`StoreClient`] (typed client wrappers, error mapping) without
//! spawning any store tasks, fully deterministically, and with trivial error
//! injection.
//!
//! | Feature | MockStore | Real store task |
//! |---------|-----------|-----------------|
//! | **Speed** | Instant | Fast, but involves a tokio spawn |
//! | **Determinism** | 100% deterministic | Subject to the scheduler |
//! | **State** | None (expectations) | Real map |
//! | **Error injection** | `return_err` | Requires specific state |
//!
//! ```ignore
//! let mut mock = MockStore::<Message>::new();
//! mock.expect_get(1).return_ok(message.clone());
//! mock.expect_insert().return_err(StoreError::StoreClosed);
//!
//! let client = MessageClient::new(mock.client());
//! // drive `client` in the test...
//! mock.verify(); // all expectations consumed
//! ```

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted reply, consumed in FIFO order.
#[derive(Debug)]
enum Expectation<T: StoreEntity> {
    Get {
        response: Result<T, StoreError>,
    },
    Insert {
        response: Result<T, StoreError>,
    },
    Replace {
        response: Result<T, StoreError>,
    },
    PartialUpdate {
        response: Result<T, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
}

/// Expectation-based stand-in for a store task.
///
/// Requests arriving at the mock are matched against expectations in the
/// order they were queued; a request with no matching expectation panics the
/// background task, which surfaces in the test as a dropped response channel.
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Insert {
                            entity: _,
                            respond_to,
                        },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Replace {
                            entity: _,
                            respond_to,
                        },
                        Some(Expectation::Replace { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::PartialUpdate {
                            id: _,
                            patch: _,
                            respond_to,
                        },
                        Some(Expectation::PartialUpdate { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to the mock, for handing to the code under
    /// test.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Get { response }),
        }
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Insert { response }),
        }
    }

    /// Expects a `replace` operation.
    pub fn expect_replace(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Replace { response }),
        }
    }

    /// Expects a `partial_update` operation.
    pub fn expect_partial_update(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::PartialUpdate { response }),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::List { response }),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Delete { response }),
        }
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder binding a queued expectation to its scripted reply.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    /// Scripts a successful reply.
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Scripts a failure reply.
    pub fn return_err(self, error: StoreError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StoreEntity;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<i64>,
        body: String,
    }

    #[derive(Debug)]
    struct NotePatch {
        body: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    impl StoreEntity for Note {
        type Id = i64;
        type Patch = NotePatch;
        type Error = NoteError;

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }

        fn apply_patch(&mut self, patch: NotePatch) -> Result<(), NoteError> {
            if let Some(body) = patch.body {
                self.body = body;
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn scripted_replies_in_order() {
        let mut mock = MockStore::<Note>::new();
        let stored = Note {
            id: Some(1),
            body: "hello".to_string(),
        };
        mock.expect_insert().return_ok(stored.clone());
        mock.expect_get(1).return_ok(stored.clone());

        let client = mock.client();

        let inserted = client
            .insert(Note {
                id: None,
                body: "hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(inserted.id, Some(1));

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, stored);

        mock.verify();
    }

    #[tokio::test]
    async fn scripted_error_is_returned() {
        let mut mock = MockStore::<Note>::new();
        mock.expect_get(7)
            .return_err(StoreError::NotFound("7".to_string()));

        let client = mock.client();
        let result = client.get(7).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        mock.verify();
    }
}
