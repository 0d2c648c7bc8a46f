//! Browser and router implementations of the registration collaborators.

use async_trait::async_trait;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;
use leptos_router::NavigateOptions;

use crate::models::{AppPage, RegisterBody};
use crate::registration::{
    ApiError, Endpoint, KeyValueStore, Navigator, Notifier, RegistrationApi, RegistrationScreen,
    StorageError, Viewport,
};
use crate::server_fns::{register, register_oauth};

/// `window.localStorage`.
pub struct LocalStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[async_trait(?Send)]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Posts through the server functions, which relay to the account API.
pub struct ServerFnApi;

#[async_trait(?Send)]
impl RegistrationApi for ServerFnApi {
    async fn post(&self, endpoint: Endpoint, body: &RegisterBody) -> Result<(), ApiError> {
        let result = match endpoint {
            Endpoint::Register => register(body.clone()).await,
            Endpoint::RegisterOauth => register_oauth(body.clone()).await,
        };
        result.map_err(|e| match e {
            ServerFnError::Request(msg) => ApiError::Network(msg),
            ServerFnError::ServerError(msg) => ApiError::Rejected(msg),
            other => ApiError::Rejected(other.to_string()),
        })
    }
}

/// Wraps the navigate function returned by `use_navigate`.
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, page: AppPage) {
        (self.0)(page.path(), Default::default());
    }
}

/// Outlet signal rendered by [`crate::components::Toast`].
#[derive(Clone, Copy)]
pub struct ToastContext(pub RwSignal<Option<String>>);

impl Notifier for ToastContext {
    fn show_transient_message(&self, text: &str) {
        self.0.set(Some(text.to_string()));
    }
}

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_left(0.0);
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

/// Owns the browser-side collaborators of one registration screen.
pub struct BrowserPorts<F> {
    navigator: RouterNavigator<F>,
    toast: ToastContext,
}

impl<F> BrowserPorts<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F, toast: ToastContext) -> Self {
        Self {
            navigator: RouterNavigator(navigate),
            toast,
        }
    }

    pub fn screen(&self) -> RegistrationScreen<'_> {
        RegistrationScreen {
            storage: &LocalStore,
            api: &ServerFnApi,
            navigator: &self.navigator,
            notifier: &self.toast,
            viewport: &WindowViewport,
        }
    }
}
