use std::sync::Arc;

use crate::external::projections_provider::ProjectionsProvider;

#[derive(Clone)]
pub struct AppState {
    pub projections_provider: Arc<dyn ProjectionsProvider>,
}
