//! Typed, cancellable event streams over `text/event-stream` responses.
//!
//! An [`EventStream`] is lazy: nothing touches the network until it is first
//! polled. The first poll spawns a worker task that opens the request, checks
//! the status, splits the body into lines, folds them into payloads and
//! decodes each payload into `T`. Events are handed over through a channel
//! of capacity one, so the worker never reads further ahead than one event.
//!
//! Termination is reported exactly once as a [`StreamOutcome`]:
//!
//! - body exhausted: `Completed`, the stream ends with `None`;
//! - error status or I/O failure: `Failed`, the stream yields one `Err` then ends;
//! - [`EventStream::cancel`] or drop: `Cancelled`, the stream ends with `None`.
//!
//! A `Completed` or `Failed` outcome becomes visible only after the
//! connection is released. `Cancelled` is recorded at once by the canceller;
//! the worker closes the connection shortly after.
//! Undecodable payloads are logged and skipped.

mod decode;
mod status;
mod transport;

pub use decode::{EventDecoder, FnDecoder, JsonDecoder};
pub use status::{DefaultStatusClassifier, StatusClassifier};
pub use transport::{ByteStream, ReqwestTransport, StreamRequest, StreamResponse, StreamTransport};

use std::fmt;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};
use std::task::{Context, Poll, ready};

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::sse::{FrameAccumulator, LineDecoder};

/// Terminal state of one stream run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The body ended normally.
    Completed,
    /// The request or the body failed. Holds the error message; the error
    /// itself is delivered through the stream.
    Failed(String),
    /// The consumer cancelled or dropped the stream.
    Cancelled,
}

impl StreamOutcome {
    /// Whether the stream ran to the end of its body.
    pub fn is_completed(&self) -> bool {
        matches!(self, StreamOutcome::Completed)
    }
}

/// Cancels an [`EventStream`] from anywhere. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    token: CancellationToken,
    outcome: Arc<OnceLock<StreamOutcome>>,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            outcome: Arc::new(OnceLock::new()),
        }
    }

    /// Stop the stream and close its connection.
    ///
    /// Never blocks. A no-op once the stream has terminated.
    pub fn cancel(&self) {
        if self.record(StreamOutcome::Cancelled) {
            debug!("event stream cancelled");
        }
        self.token.cancel();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Terminal outcome, once reached.
    pub fn outcome(&self) -> Option<StreamOutcome> {
        self.outcome.get().cloned()
    }

    /// First writer wins.
    fn record(&self, outcome: StreamOutcome) -> bool {
        self.outcome.set(outcome).is_ok()
    }
}

/// Everything the worker needs to run one request.
struct Job<T> {
    transport: Arc<dyn StreamTransport>,
    request: StreamRequest,
    decoder: Arc<dyn EventDecoder<T>>,
    classifier: Arc<dyn StatusClassifier>,
}

enum State<T> {
    NotStarted(Job<T>),
    Running(mpsc::Receiver<Result<T>>),
    Done,
}

/// A lazily started stream of decoded events.
///
/// Yields `Ok(event)` per decoded payload and at most one `Err` as its last
/// item. Dropping the stream cancels it.
///
/// The first poll spawns onto the current Tokio runtime and panics outside one.
pub struct EventStream<T> {
    state: State<T>,
    handle: CancelHandle,
}

impl<T: Send + 'static> EventStream<T> {
    /// Create a stream. No I/O happens until the first poll.
    pub fn new(
        transport: Arc<dyn StreamTransport>,
        request: StreamRequest,
        decoder: Arc<dyn EventDecoder<T>>,
        classifier: Arc<dyn StatusClassifier>,
    ) -> Self {
        Self {
            state: State::NotStarted(Job {
                transport,
                request,
                decoder,
                classifier,
            }),
            handle: CancelHandle::new(),
        }
    }

    fn start(&mut self, job: Job<T>) {
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(drive(job, tx, self.handle.clone()));
        self.state = State::Running(rx);
    }
}

impl<T> EventStream<T> {
    /// Cancel the stream. See [`CancelHandle::cancel`].
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// A handle that can cancel this stream from another task or thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    /// Terminal outcome, once reached.
    pub fn outcome(&self) -> Option<StreamOutcome> {
        self.handle.outcome()
    }

    /// Whether the request has been issued.
    pub fn is_started(&self) -> bool {
        !matches!(self.state, State::NotStarted(_))
    }
}

impl<T: Send + 'static> Stream for EventStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if this.handle.is_cancelled() {
                this.state = State::Done;
                return Poll::Ready(None);
            }
            match std::mem::replace(&mut this.state, State::Done) {
                State::NotStarted(job) => this.start(job),
                State::Running(mut rx) => {
                    let item = rx.poll_recv(cx);
                    this.state = State::Running(rx);
                    return match ready!(item) {
                        Some(item) => Poll::Ready(Some(item)),
                        None => {
                            this.state = State::Done;
                            Poll::Ready(None)
                        }
                    };
                }
                State::Done => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Drop for EventStream<T> {
    fn drop(&mut self) {
        if !self.handle.is_cancelled() {
            self.handle.cancel();
        }
    }
}

impl<T> fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::NotStarted(_) => "not_started",
            State::Running(_) => "running",
            State::Done => "done",
        };
        f.debug_struct("EventStream")
            .field("state", &state)
            .field("outcome", &self.handle.outcome())
            .finish()
    }
}

/// How [`pump`] stopped.
enum Exit {
    Completed,
    Failed(Error),
    /// The receiving side went away.
    Closed,
}

/// Worker task: run the request to a terminal outcome.
async fn drive<T: Send + 'static>(
    job: Job<T>,
    tx: mpsc::Sender<Result<T>>,
    handle: CancelHandle,
) {
    let exit = tokio::select! {
        biased;
        _ = handle.token.cancelled() => Exit::Closed,
        exit = pump(&job, &tx) => exit,
    };
    // The pump future, and with it the response body, is gone at this point.

    match exit {
        Exit::Completed => {
            if handle.record(StreamOutcome::Completed) {
                debug!(url = %job.request.url, "event stream completed");
            }
        }
        Exit::Failed(e) => {
            if handle.record(StreamOutcome::Failed(e.to_string())) {
                error!(url = %job.request.url, error = %e, "event stream failed");
                tokio::select! {
                    biased;
                    _ = handle.token.cancelled() => {}
                    _ = tx.send(Err(e)) => {}
                }
            }
        }
        Exit::Closed => {
            handle.record(StreamOutcome::Cancelled);
        }
    }
}

/// Open the request and forward decoded events until the body ends.
async fn pump<T>(job: &Job<T>, tx: &mpsc::Sender<Result<T>>) -> Exit {
    debug!(method = %job.request.method, url = %job.request.url, "opening event stream");

    let response = match job.transport.open(job.request.clone()).await {
        Ok(response) => response,
        Err(e) => return Exit::Failed(e),
    };

    let status = response.status;
    if job.classifier.is_error(status) {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(status, error = %e, "failed to read error body");
                String::new()
            }
        };
        return Exit::Failed(Error::RequestFailed { status, body });
    }

    debug!(status, content_type = ?response.content_type(), "event stream open");

    let mut body = response.body;
    let mut lines = LineDecoder::new();
    let mut frames = FrameAccumulator::new();

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => return Exit::Failed(Error::from(e)),
        };
        for line in lines.feed(&chunk) {
            if let Some(payload) = frames.push_line(&line)
                && !publish(job, tx, &payload).await
            {
                return Exit::Closed;
            }
        }
    }
    drop(body);

    if let Some(line) = lines.finish()
        && let Some(payload) = frames.push_line(&line)
        && !publish(job, tx, &payload).await
    {
        return Exit::Closed;
    }
    if let Some(payload) = frames.finish()
        && !publish(job, tx, &payload).await
    {
        return Exit::Closed;
    }

    Exit::Completed
}

/// Decode one payload and hand it to the consumer. Returns `false` once the
/// consumer is gone.
async fn publish<T>(job: &Job<T>, tx: &mpsc::Sender<Result<T>>, payload: &str) -> bool {
    match job.decoder.decode(payload) {
        Ok(event) => tx.send(Ok(event)).await.is_ok(),
        Err(e) => {
            warn!(data = %payload, error = %e, "Skipping undecodable stream event");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use bytes::Bytes;
    use futures::stream;
    use reqwest::Method;
    use reqwest::header::HeaderMap;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Msg {
        id: u32,
        #[serde(default)]
        message: String,
    }

    fn msg(id: u32, message: &str) -> Msg {
        Msg {
            id,
            message: message.to_string(),
        }
    }

    /// Body wrapper that flags when it is dropped.
    struct Tracked {
        inner: ByteStream,
        released: Arc<AtomicBool>,
    }

    impl Stream for Tracked {
        type Item = std::io::Result<Bytes>;

        fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
            self.inner.as_mut().poll_next(cx)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    type BodyFactory = Box<dyn Fn() -> Result<(u16, ByteStream)> + Send + Sync>;

    struct MockTransport {
        body: BodyFactory,
        opened: AtomicUsize,
        released: Arc<AtomicBool>,
    }

    impl MockTransport {
        fn new(
            f: impl Fn() -> Result<(u16, ByteStream)> + Send + Sync + 'static,
        ) -> Arc<Self> {
            Arc::new(Self {
                body: Box::new(f),
                opened: AtomicUsize::new(0),
                released: Arc::new(AtomicBool::new(false)),
            })
        }

        fn chunks(status: u16, chunks: &'static [&'static str]) -> Arc<Self> {
            Self::new(move || Ok((status, chunk_stream(chunks).boxed())))
        }

        fn opened(&self) -> usize {
            self.opened.load(Ordering::SeqCst)
        }

        fn is_released(&self) -> bool {
            self.released.load(Ordering::SeqCst)
        }

        async fn wait_released(&self) {
            tokio::time::timeout(Duration::from_secs(2), async {
                while !self.is_released() {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            })
            .await
            .expect("connection was not released");
        }
    }

    #[async_trait]
    impl StreamTransport for MockTransport {
        async fn open(&self, _request: StreamRequest) -> Result<StreamResponse> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            let (status, body) = (self.body)()?;
            let body = Tracked {
                inner: body,
                released: self.released.clone(),
            };
            Ok(StreamResponse::new(status, HeaderMap::new(), Box::pin(body)))
        }
    }

    fn chunk_stream(
        chunks: &'static [&'static str],
    ) -> impl Stream<Item = std::io::Result<Bytes>> + Send + 'static {
        stream::iter(chunks.iter().map(|c| Ok(Bytes::from_static(c.as_bytes()))))
    }

    fn event_stream(transport: Arc<MockTransport>) -> EventStream<Msg> {
        let url = url::Url::parse("http://localhost/chat-messages").unwrap();
        EventStream::new(
            transport,
            StreamRequest::new(Method::POST, url),
            Arc::new(JsonDecoder),
            Arc::new(DefaultStatusClassifier),
        )
    }

    async fn collect(stream: &mut EventStream<Msg>) -> (Vec<Msg>, Vec<Error>) {
        let mut events = Vec::new();
        let mut errors = Vec::new();
        while let Some(item) = stream.next().await {
            match item {
                Ok(event) => events.push(event),
                Err(e) => errors.push(e),
            }
        }
        (events, errors)
    }

    #[tokio::test]
    async fn test_two_events_then_completed() {
        let transport = MockTransport::chunks(
            200,
            &["data: {\"id\":1,\"message\":\"first\"}\n\ndata: {\"id\":2,\"message\":\"second\"}\n\n"],
        );
        let mut stream = event_stream(transport.clone());

        let (events, errors) = collect(&mut stream).await;
        assert_eq!(events, vec![msg(1, "first"), msg(2, "second")]);
        assert!(errors.is_empty());
        assert_eq!(stream.outcome(), Some(StreamOutcome::Completed));
        assert!(transport.is_released());
    }

    #[tokio::test]
    async fn test_comments_and_metadata_skipped() {
        let transport =
            MockTransport::chunks(200, &[": comment\nevent: update\ndata: {\"id\":1}\n\n"]);
        let mut stream = event_stream(transport);

        let (events, errors) = collect(&mut stream).await;
        assert_eq!(events, vec![msg(1, "")]);
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_frames_split_across_chunks() {
        let transport = MockTransport::chunks(
            200,
            &[
                "data: {\"id\":1,",
                "\"message\":\"a\"}\r",
                "\n\r\ndata: {\"id\":2,\n",
                "data: \"message\":\"b\"}\n\n",
            ],
        );
        let mut stream = event_stream(transport);

        let (events, _) = collect(&mut stream).await;
        assert_eq!(events, vec![msg(1, "a"), msg(2, "b")]);
    }

    #[tokio::test]
    async fn test_trailing_event_flushed_at_end_of_body() {
        let transport = MockTransport::chunks(200, &["data: {\"id\":1}\n\ndata: {\"id\":2}"]);
        let mut stream = event_stream(transport);

        let (events, errors) = collect(&mut stream).await;
        assert_eq!(events, vec![msg(1, ""), msg(2, "")]);
        assert!(errors.is_empty());
        assert_eq!(stream.outcome(), Some(StreamOutcome::Completed));
    }

    #[tokio::test]
    async fn test_empty_body_completes_without_events() {
        let transport = MockTransport::chunks(200, &[]);
        let mut stream = event_stream(transport.clone());

        let (events, errors) = collect(&mut stream).await;
        assert!(events.is_empty());
        assert!(errors.is_empty());
        assert_eq!(stream.outcome(), Some(StreamOutcome::Completed));
        assert!(transport.is_released());
    }

    #[tokio::test]
    async fn test_error_status_fails_without_parsing() {
        let transport = MockTransport::chunks(404, &["data: {\"id\":1}\n\n"]);
        let mut stream = event_stream(transport.clone());

        let (events, errors) = collect(&mut stream).await;
        assert!(events.is_empty());
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            Error::RequestFailed { status, body } => {
                assert_eq!(*status, 404);
                assert_eq!(body, "data: {\"id\":1}\n\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(stream.outcome(), Some(StreamOutcome::Failed(_))));
        assert!(transport.is_released());
    }

    #[tokio::test]
    async fn test_malformed_frame_skipped() {
        let transport = MockTransport::chunks(
            200,
            &["data: {\"id\":1}\n\ndata: {oops\n\ndata: {\"id\":3}\n\n"],
        );
        let mut stream = event_stream(transport);

        let (events, errors) = collect(&mut stream).await;
        assert_eq!(events, vec![msg(1, ""), msg(3, "")]);
        assert!(errors.is_empty());
        assert_eq!(stream.outcome(), Some(StreamOutcome::Completed));
    }

    #[tokio::test]
    async fn test_io_error_mid_stream_is_transport_error() {
        let transport = MockTransport::new(|| {
            let body = chunk_stream(&["data: {\"id\":1}\n\n"]).chain(stream::once(async {
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset",
                ))
            }));
            Ok((200, body.boxed()))
        });
        let mut stream = event_stream(transport.clone());

        let (events, errors) = collect(&mut stream).await;
        assert_eq!(events, vec![msg(1, "")]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_transport());
        assert!(matches!(stream.outcome(), Some(StreamOutcome::Failed(_))));
        assert!(transport.is_released());
    }

    #[tokio::test]
    async fn test_open_failure_is_transport_error() {
        let transport = MockTransport::new(|| {
            Err(Error::from(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            )))
        });
        let mut stream = event_stream(transport);

        let (events, errors) = collect(&mut stream).await;
        assert!(events.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_transport());
    }

    #[tokio::test]
    async fn test_lazy_until_first_poll() {
        let transport = MockTransport::chunks(200, &["data: {\"id\":1}\n\n"]);
        let mut stream = event_stream(transport.clone());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(transport.opened(), 0);
        assert!(!stream.is_started());

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first, msg(1, ""));
        assert_eq!(transport.opened(), 1);
        assert!(stream.is_started());
    }

    #[tokio::test]
    async fn test_cancel_before_start_never_opens() {
        let transport = MockTransport::chunks(200, &["data: {\"id\":1}\n\n"]);
        let mut stream = event_stream(transport.clone());

        stream.cancel();
        assert!(stream.next().await.is_none());
        assert_eq!(transport.opened(), 0);
        assert_eq!(stream.outcome(), Some(StreamOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_after_first_event_stops_delivery() {
        let transport = MockTransport::new(|| {
            let body = chunk_stream(&[
                "data: {\"id\":1}\n\n",
                "data: {\"id\":2}\n\n",
                "data: {\"id\":3}\n\n",
            ])
            .chain(stream::pending());
            Ok((200, body.boxed()))
        });
        let mut stream = event_stream(transport.clone());

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first, msg(1, ""));

        stream.cancel();
        assert!(stream.next().await.is_none());
        assert!(stream.next().await.is_none());
        assert_eq!(stream.outcome(), Some(StreamOutcome::Cancelled));
        transport.wait_released().await;
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_first_byte() {
        let transport = MockTransport::new(|| {
            let body = stream::once(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(Bytes::from_static(b"data: {\"id\":1}\n\n"))
            });
            Ok((200, body.boxed()))
        });
        let mut stream = event_stream(transport.clone());
        let handle = stream.cancel_handle();

        let consumer = tokio::spawn(async move { stream.next().await.is_none() });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let started = tokio::time::Instant::now();
        handle.cancel();
        assert!(started.elapsed() < Duration::from_millis(100));

        let ended = tokio::time::timeout(Duration::from_secs(1), consumer)
            .await
            .expect("consumer should return promptly after cancel")
            .unwrap();
        assert!(ended);
        assert_eq!(handle.outcome(), Some(StreamOutcome::Cancelled));
        transport.wait_released().await;
    }

    #[tokio::test]
    async fn test_drop_releases_connection() {
        let transport = MockTransport::new(|| {
            let body = chunk_stream(&["data: {\"id\":1}\n\n"]).chain(stream::pending());
            Ok((200, body.boxed()))
        });
        let mut stream = event_stream(transport.clone());
        let handle = stream.cancel_handle();

        assert!(stream.next().await.unwrap().is_ok());
        drop(stream);

        assert_eq!(handle.outcome(), Some(StreamOutcome::Cancelled));
        transport.wait_released().await;
    }

    #[tokio::test]
    async fn test_cancel_after_completion_is_noop() {
        let transport = MockTransport::chunks(200, &["data: {\"id\":1}\n\n"]);
        let mut stream = event_stream(transport);

        let (events, _) = collect(&mut stream).await;
        assert_eq!(events.len(), 1);

        stream.cancel();
        stream.cancel();
        assert_eq!(stream.outcome(), Some(StreamOutcome::Completed));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_streams_are_independent() {
        let a = MockTransport::chunks(200, &["data: {\"id\":1}\n", "\ndata: {\"id\":2}\n\n"]);
        let b = MockTransport::chunks(200, &["data: {\"id\":10}\n\ndata: {\"id\":", "20}\n\n"]);
        let mut sa = event_stream(a);
        let mut sb = event_stream(b);

        let ((ea, _), (eb, _)) = tokio::join!(collect(&mut sa), collect(&mut sb));
        assert_eq!(ea, vec![msg(1, ""), msg(2, "")]);
        assert_eq!(eb, vec![msg(10, ""), msg(20, "")]);
    }

    #[tokio::test]
    async fn test_slow_consumer_bounds_read_ahead() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = pulled.clone();
        let transport = MockTransport::new(move || {
            let counter = counter.clone();
            let body = stream::iter(0..100u32).map(move |id| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Bytes::from(format!("data: {{\"id\":{}}}\n\n", id)))
            });
            Ok((200, body.boxed()))
        });
        let mut stream = event_stream(transport);

        assert_eq!(stream.next().await.unwrap().unwrap(), msg(0, ""));
        tokio::time::sleep(Duration::from_millis(200)).await;

        // One event consumed, one parked in the channel, one awaiting send.
        let read = pulled.load(Ordering::SeqCst);
        assert!(read <= 4, "reader pulled {read} chunks for one consumed event");

        assert_eq!(stream.next().await.unwrap().unwrap(), msg(1, ""));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(pulled.load(Ordering::SeqCst) <= 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cancel_racing_completion_settles_once() {
        for _ in 0..200 {
            let transport =
                MockTransport::chunks(200, &["data: {\"id\":1}\n\n", "data: {\"id\":2}\n\n"]);
            let mut stream = event_stream(transport.clone());
            let handle = stream.cancel_handle();
            let canceller = stream.cancel_handle();

            let consumer = tokio::spawn(async move {
                let mut seen = 0;
                while let Some(item) = stream.next().await {
                    assert!(item.is_ok());
                    seen += 1;
                }
                seen
            });
            let thread = std::thread::spawn(move || canceller.cancel());

            let seen = tokio::time::timeout(Duration::from_secs(2), consumer)
                .await
                .expect("consumer did not finish")
                .unwrap();
            thread.join().unwrap();

            let outcome = handle.outcome();
            assert!(
                matches!(
                    outcome,
                    Some(StreamOutcome::Completed) | Some(StreamOutcome::Cancelled)
                ),
                "unexpected outcome {outcome:?}"
            );
            assert!(seen <= 2);
            assert!(transport.opened() <= 1);
            if transport.opened() == 1 {
                transport.wait_released().await;
            }
        }
    }
}
