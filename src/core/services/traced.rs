//! Tracing decorator
//!
//! [`Traced`] wraps a [`Message`] and reports a span around each traced
//! operation. The aggregate itself knows nothing about tracing.

use std::time::Instant;

use super::message::{Message, MessageError};
use super::render::RenderOptions;
use crate::core::models::{CheckResult, CheckState};
use crate::core::ports::{SPAN_ADD_NEW_APP, SPAN_ADD_TO_APP_MESSAGE, SPAN_BUILD_COMMENT, Tracer};

/// A [`Message`] whose operations are reported to a [`Tracer`]
#[derive(Debug)]
pub struct Traced<'a, T: ?Sized> {
    message: &'a Message,
    tracer: &'a T,
}

impl<'a, T: Tracer + ?Sized> Traced<'a, T> {
    /// Decorate `message` with `tracer`
    pub const fn new(message: &'a Message, tracer: &'a T) -> Self {
        Self { message, tracer }
    }

    /// The undecorated message
    #[must_use]
    pub const fn inner(&self) -> &'a Message {
        self.message
    }

    fn span<R>(&self, name: &'static str, op: impl FnOnce() -> R) -> R {
        if let Err(e) = self.tracer.start(name) {
            log::debug!("{e}");
        }
        let started = Instant::now();
        let out = op();
        if let Err(e) = self.tracer.end(name, started.elapsed()) {
            log::debug!("{e}");
        }
        out
    }

    /// [`Message::register_app`] inside an `AddNewApp` span
    pub fn register_app(&self, app: &str) {
        self.span(SPAN_ADD_NEW_APP, || self.message.register_app(app));
    }

    /// [`Message::add_result`] inside an `AddToAppMessage` span
    pub fn add_result(&self, app: &str, result: CheckResult) -> Result<(), MessageError> {
        self.span(SPAN_ADD_TO_APP_MESSAGE, || self.message.add_result(app, result))
    }

    /// [`Message::build_comment`] inside a `buildComment` span
    #[must_use]
    pub fn build_comment(&self, options: &RenderOptions) -> String {
        self.span(SPAN_BUILD_COMMENT, || self.message.build_comment(options))
    }

    /// [`Message::suppress`], untraced
    pub fn suppress(&self, app: &str) {
        self.message.suppress(app);
    }

    /// [`Message::worst_state`], untraced
    #[must_use]
    pub fn worst_state(&self) -> CheckState {
        self.message.worst_state()
    }
}
