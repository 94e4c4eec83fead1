use bar_chart_shared::{ChartError, ChartResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response, Window};

const TIMEOUT_MESSAGE: &str = "Request timeout";

/// WASM-compatible HTTP client using browser's fetch API
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    timeout_ms: Option<u32>,
}

impl FetchClient {
    /// Client without a timeout; the request waits as long as the browser does
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            timeout_ms: Some(timeout_ms),
        }
    }

    pub fn timeout_ms(&self) -> Option<u32> {
        self.timeout_ms
    }

    /// Fetch JSON data from a URL
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ChartResult<T> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;
        opts.set_headers(&headers);

        let delay = self.timeout_ms.map(timer_delay).transpose()?;
        let abort_controller = match delay {
            Some(_) => {
                let controller = AbortController::new()?;
                opts.set_signal(Some(&controller.signal()));
                Some(controller)
            }
            None => None,
        };

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ChartError::dom("No window object available"))?;

        let fetch_promise = window.fetch_with_request(&request);
        let (promise, timer) = match (delay, abort_controller) {
            (Some(delay), Some(controller)) => {
                let timer = FetchTimer::start(&window, controller, delay);
                let race =
                    js_sys::Promise::race(&js_sys::Array::of2(&fetch_promise, &timer.promise));
                (race, Some(timer))
            }
            _ => (fetch_promise, None),
        };

        let settled = JsFuture::from(promise).await;
        // The body read below must not be aborted by a late timer
        if let Some(timer) = &timer {
            timer.clear(&window);
        }
        let resp_value = settled.map_err(|err| self.fetch_error(err))?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(ChartError::Network {
                status: resp.status(),
            });
        }

        let json_value = JsFuture::from(resp.json()?)
            .await
            .map_err(|err| ChartError::DataParse {
                message: js_message(&err),
                offset: None,
            })?;

        Ok(serde_wasm_bindgen::from_value(json_value)?)
    }

    fn fetch_error(&self, err: JsValue) -> ChartError {
        let message = js_message(&err);
        match self.timeout_ms {
            Some(duration_ms) if message == TIMEOUT_MESSAGE => ChartError::Timeout { duration_ms },
            _ => ChartError::DataFetch { message },
        }
    }
}

/// Delay argument for `setTimeout`, which takes a signed 32-bit value
fn timer_delay(timeout_ms: u32) -> ChartResult<i32> {
    i32::try_from(timeout_ms).map_err(|_| ChartError::InvalidConfig {
        message: format!("fetch timeout of {timeout_ms}ms is out of range"),
        field: Some("fetch_timeout_ms".to_string()),
    })
}

/// Pending timeout for one request. Its promise rejects and aborts the
/// request once the delay elapses.
struct FetchTimer {
    promise: js_sys::Promise,
    handle: Option<i32>,
}

impl FetchTimer {
    fn start(window: &Window, controller: AbortController, delay: i32) -> Self {
        let mut handle = None;

        let promise = js_sys::Promise::new(&mut |_resolve, reject| {
            let controller = controller.clone();
            let on_timeout = Closure::once_into_js(move || {
                // Reject first so the race settles with the timeout, not the abort
                let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(TIMEOUT_MESSAGE));
                controller.abort();
            });

            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.unchecked_ref(),
                delay,
            ) {
                Ok(id) => handle = Some(id),
                Err(err) => log::warn!("Could not schedule fetch timeout: {err:?}"),
            }
        });

        Self { promise, handle }
    }

    fn clear(&self, window: &Window) {
        if let Some(handle) = self.handle {
            window.clear_timeout_with_handle(handle);
        }
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Convenience function for quick JSON fetches
pub async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> ChartResult<T> {
    FetchClient::new().fetch_json(url).await
}


#[cfg(test)]
mod delay_tests {
    use super::*;

    #[test]
    fn test_timer_delay_range() {
        assert_eq!(timer_delay(1).unwrap(), 1);
        assert_eq!(timer_delay(i32::MAX as u32).unwrap(), i32::MAX);
        assert!(matches!(
            timer_delay(i32::MAX as u32 + 1),
            Err(ChartError::InvalidConfig { .. })
        ));
    }
}
