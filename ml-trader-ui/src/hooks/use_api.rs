//! Request Hook
//!
//! `use_api` gives a component its own request/response cycle: a reactive
//! `{data, error, loading}` state plus a `request` trigger. The state lives in
//! a signal owned by the calling component and goes away with it.
//!
//! Overlapping requests are not de-duplicated or cancelled. Each completion
//! overwrites the shared state, so whichever response arrives last wins.

use leptos::*;
use serde::de::DeserializeOwned;

use crate::api::{ApiClient, ApiError, RequestOptions};

/// Snapshot of a hook's request lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub loading: bool,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> RequestState<T> {
    /// Before the first request
    pub fn idle() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }

    /// Between request start and completion
    pub fn loading() -> Self {
        Self {
            data: None,
            error: None,
            loading: true,
        }
    }

    pub fn succeeded(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            loading: false,
        }
    }

    pub fn failed(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
            loading: false,
        }
    }

    /// A request has completed, one way or the other
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }
}

/// Handle returned by [`use_api`]
pub struct UseApi<T: 'static> {
    state: RwSignal<RequestState<T>>,
    client: ApiClient,
}

impl<T: 'static> Clone for UseApi<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            client: self.client.clone(),
        }
    }
}

/// Create a request hook using the `ApiClient` from context, or the
/// browser default when none was provided.
pub fn use_api<T>() -> UseApi<T>
where
    T: Clone + DeserializeOwned + 'static,
{
    let client = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    UseApi::with_client(client)
}

impl<T> UseApi<T>
where
    T: Clone + DeserializeOwned + 'static,
{
    pub fn with_client(client: ApiClient) -> Self {
        Self {
            state: create_rw_signal(RequestState::idle()),
            client,
        }
    }

    pub fn data(&self) -> Signal<Option<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone()))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    /// Current state without subscribing to it
    pub fn snapshot(&self) -> RequestState<T> {
        self.state.get_untracked()
    }

    /// Run one request.
    ///
    /// The outcome is written to the hook state and also returned, so the
    /// caller can react locally.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<T, ApiError> {
        self.write(RequestState::loading());

        match self.client.fetch::<T>(endpoint, options).await {
            Ok(data) => {
                self.write(RequestState::succeeded(data.clone()));
                Ok(data)
            }
            Err(err) => {
                log::warn!("request to {} failed: {}", endpoint, err);
                self.write(RequestState::failed(err.clone()));
                Err(err)
            }
        }
    }

    /// Forget any previous outcome
    pub fn reset(&self) {
        self.write(RequestState::idle());
    }

    // The owning component may be gone by the time a response lands.
    fn write(&self, next: RequestState<T>) {
        if self.state.try_set(next).is_some() {
            log::debug!("request state dropped: owner disposed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpRequest, HttpResponse, Transport};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use serde::Deserialize;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Quote {
        symbol: String,
        price: f64,
    }

    type Reply = Result<HttpResponse, ApiError>;

    /// Holds every request until the test answers it
    #[derive(Default)]
    struct GatedTransport {
        pending: RefCell<Vec<Option<oneshot::Sender<Reply>>>>,
        urls: RefCell<Vec<String>>,
    }

    impl GatedTransport {
        fn respond(&self, index: usize, reply: Reply) {
            let tx = self.pending.borrow_mut()[index]
                .take()
                .expect("request already answered");
            let _ = tx.send(reply);
        }
    }

    #[async_trait(?Send)]
    impl Transport for GatedTransport {
        async fn send(&self, request: HttpRequest) -> Reply {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push(Some(tx));
            self.urls.borrow_mut().push(request.url);
            rx.await.unwrap_or(Err(ApiError::Unknown))
        }
    }

    fn ok(body: &str) -> Reply {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn hook(transport: &Rc<GatedTransport>) -> UseApi<Quote> {
        UseApi::with_client(ApiClient::new("/api/v1", transport.clone()))
    }

    #[test]
    fn test_request_state_constructors() {
        let idle: RequestState<u32> = RequestState::default();
        assert_eq!(idle, RequestState::idle());
        assert!(!idle.is_settled());
        assert!(RequestState::<u32>::loading().loading);
        assert!(RequestState::succeeded(1u32).is_settled());
        assert!(RequestState::<u32>::failed(ApiError::Unknown).is_settled());
    }

    #[test]
    fn test_initial_state_is_idle() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        assert_eq!(api.snapshot(), RequestState::idle());

        runtime.dispose();
    }

    #[test]
    fn test_loading_then_success() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let mut pool = LocalPool::new();
        let result: Rc<RefCell<Option<Result<Quote, ApiError>>>> = Rc::default();
        {
            let api = api.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    let r = api.request("/quotes/AAPL", RequestOptions::get()).await;
                    *result.borrow_mut() = Some(r);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(api.snapshot(), RequestState::loading());
        assert_eq!(transport.urls.borrow()[0], "/api/v1/quotes/AAPL");

        transport.respond(0, ok(r#"{"symbol": "AAPL", "price": 189.5}"#));
        pool.run_until_stalled();

        let expected = Quote {
            symbol: "AAPL".into(),
            price: 189.5,
        };
        assert_eq!(api.snapshot(), RequestState::succeeded(expected.clone()));
        assert_eq!(result.borrow().clone(), Some(Ok(expected)));

        runtime.dispose();
    }

    #[test]
    fn test_failure_is_stored_and_returned() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let mut pool = LocalPool::new();
        let result: Rc<RefCell<Option<Result<Quote, ApiError>>>> = Rc::default();
        {
            let api = api.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    let r = api.request("/quotes/AAPL", RequestOptions::get()).await;
                    *result.borrow_mut() = Some(r);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        transport.respond(
            0,
            Ok(HttpResponse {
                status: 500,
                body: r#"{"detail": "Internal Server Error"}"#.into(),
            }),
        );
        pool.run_until_stalled();

        let state = api.snapshot();
        assert!(!state.loading);
        assert_eq!(state.data, None);
        let stored = state.error.expect("error stored");
        assert_eq!(stored.to_string(), "Internal Server Error");
        assert_eq!(result.borrow().clone(), Some(Err(stored)));

        runtime.dispose();
    }

    #[test]
    fn test_transport_failure_is_normalized() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let mut pool = LocalPool::new();
        {
            let api = api.clone();
            pool.spawner()
                .spawn_local(async move {
                    let _ = api.request("/quotes/AAPL", RequestOptions::get()).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();

        // Dropping the sender looks like an aborted fetch with no message
        transport.pending.borrow_mut()[0].take();
        pool.run_until_stalled();

        assert_eq!(api.snapshot(), RequestState::failed(ApiError::Unknown));

        runtime.dispose();
    }

    #[test]
    fn test_overlapping_requests_last_completion_wins() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let mut pool = LocalPool::new();
        for _ in 0..2 {
            let api = api.clone();
            pool.spawner()
                .spawn_local(async move {
                    let _ = api.request("/quotes/AAPL", RequestOptions::get()).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(transport.pending.borrow().len(), 2);

        // The second call resolves first...
        transport.respond(1, ok(r#"{"symbol": "AAPL", "price": 2.0}"#));
        pool.run_until_stalled();
        assert_eq!(api.snapshot().data.map(|q| q.price), Some(2.0));

        // ...and the first call, arriving later, overwrites it.
        transport.respond(0, ok(r#"{"symbol": "AAPL", "price": 1.0}"#));
        pool.run_until_stalled();

        let state = api.snapshot();
        assert_eq!(state.data.map(|q| q.price), Some(1.0));
        assert!(!state.loading);
        assert_eq!(state.error, None);

        runtime.dispose();
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let mut pool = LocalPool::new();
        {
            let api = api.clone();
            pool.spawner()
                .spawn_local(async move {
                    let _ = api.request("/quotes/AAPL", RequestOptions::get()).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        transport.respond(0, ok(r#"{"symbol": "AAPL", "price": 189.5}"#));
        pool.run_until_stalled();
        assert!(api.snapshot().data.is_some());

        api.reset();

        assert_eq!(api.snapshot(), RequestState::idle());

        runtime.dispose();
    }

    #[test]
    fn test_new_request_clears_previous_outcome() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let mut pool = LocalPool::new();
        {
            let api = api.clone();
            pool.spawner()
                .spawn_local(async move {
                    let _ = api.request("/quotes/AAPL", RequestOptions::get()).await;
                    let _ = api.request("/quotes/MSFT", RequestOptions::get()).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        transport.respond(0, Err(ApiError::Network("offline".into())));
        pool.run_until_stalled();

        // Second request started: previous error is gone while it runs
        assert_eq!(api.snapshot(), RequestState::loading());

        transport.respond(1, ok(r#"{"symbol": "MSFT", "price": 410.0}"#));
        pool.run_until_stalled();
        assert_eq!(api.snapshot().error, None);

        runtime.dispose();
    }

    #[test]
    fn test_response_after_dispose_is_dropped() {
        let runtime = create_runtime();
        let transport = Rc::new(GatedTransport::default());
        let api = hook(&transport);

        let fut = {
            let api = api.clone();
            async move { api.request("/quotes/AAPL", RequestOptions::get()).await }
        };
        let mut pool = LocalPool::new();
        let handle = pool.spawner().spawn_local_with_handle(fut).unwrap();
        pool.run_until_stalled();

        api.state.dispose();
        transport.respond(0, ok(r#"{"symbol": "AAPL", "price": 1.0}"#));

        // The caller still gets its answer even though the state is gone
        let result = pool.run_until(handle);
        assert_eq!(result.map(|q| q.price), Ok(1.0));

        runtime.dispose();
    }
}
