//! Status socket command definitions.
//!
//! The device pushes live sprinkler status frames over a WebSocket. The
//! core only asks the shell to open or close the connection; the shell
//! parses pushed frames and forwards them as events directly.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocketOperation {
    Connect { path: String },
    Disconnect,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocketOutput {
    Connected,
    Disconnected,
    Error { message: String },
}

impl Operation for SocketOperation {
    type Output = SocketOutput;
}

/// Command-based socket API
pub struct Socket<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Socket<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SocketOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn connect(path: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(SocketOperation::Connect { path: path.into() })
    }

    pub fn disconnect() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(SocketOperation::Disconnect)
    }
}

/// Request builder for socket operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: SocketOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SocketOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: SocketOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = SocketOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
