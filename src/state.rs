use std::sync::Arc;

use crate::services::backend::Backend;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
}
