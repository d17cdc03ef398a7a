//! Web-storage command definitions.
//!
//! The shell owns `window.localStorage` / `window.sessionStorage`; the core
//! drives them through these operations. The only value kept there is the
//! bearer credential.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations the Shell performs against web storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Read {
        key: String,
    },
    /// `durable` selects local storage ("remember me"), otherwise the value
    /// lives in session-scoped storage and dies with the tab
    Write {
        key: String,
        value: String,
        durable: bool,
    },
    Delete {
        key: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOutput {
    /// Result of a read; `None` when the key is absent from both stores
    Value(Option<String>),
    /// Acknowledgement of a write or delete
    Done,
}

impl StorageOutput {
    pub fn into_value(self) -> Option<String> {
        match self {
            StorageOutput::Value(value) => value,
            StorageOutput::Done => None,
        }
    }
}

impl Operation for StorageOperation {
    type Output = StorageOutput;
}

/// Command-based storage API
pub struct Storage<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Storage<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn read(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Read { key: key.into() })
    }

    pub fn write(
        key: impl Into<String>,
        value: impl Into<String>,
        durable: bool,
    ) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Write {
            key: key.into(),
            value: value.into(),
            durable,
        })
    }

    pub fn delete(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(StorageOperation::Delete { key: key.into() })
    }
}

/// Request builder for storage operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: StorageOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: StorageOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = StorageOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
