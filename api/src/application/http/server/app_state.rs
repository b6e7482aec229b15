use std::sync::Arc;

use assetdesk_core::application::InventoryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: InventoryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: InventoryService) -> Self {
        Self { args, service }
    }
}
