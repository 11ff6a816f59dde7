//! Response body wrapper that reports completion.
//!
//! The observer fires at most once: when the inner body reports end of
//! stream, or on drop if the inner body was already exhausted. A body that is
//! dropped mid-stream (client went away) or errors never fires.

use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use bytes::Bytes;
use http_body::{Body as HttpBody, Frame, SizeHint};

/// Something to run once the response has been fully produced.
pub trait CompletionObserver: Send + 'static {
    fn completed(self: Box<Self>);
    fn aborted(self: Box<Self>) {}
}

pub struct CompletionBody {
    inner: Body,
    observer: Option<Box<dyn CompletionObserver>>,
}

impl CompletionBody {
    pub fn new(inner: Body, observer: Box<dyn CompletionObserver>) -> Self {
        Self {
            inner,
            observer: Some(observer),
        }
    }

    fn complete(&mut self) {
        if let Some(obs) = self.observer.take() {
            obs.completed();
        }
    }

    fn abort(&mut self) {
        if let Some(obs) = self.observer.take() {
            obs.aborted();
        }
    }
}

impl HttpBody for CompletionBody {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        let polled = Pin::new(&mut this.inner).poll_frame(cx);
        match &polled {
            Poll::Ready(None) => this.complete(),
            Poll::Ready(Some(Ok(_))) if this.inner.is_end_stream() => this.complete(),
            Poll::Ready(Some(Err(_))) => this.abort(),
            _ => {}
        }
        polled
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl Drop for CompletionBody {
    fn drop(&mut self) {
        if self.inner.is_end_stream() {
            self.complete();
        } else {
            self.abort();
        }
    }
}
