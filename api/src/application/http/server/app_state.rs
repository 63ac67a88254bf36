use std::sync::Arc;

use medipredict_core::application::ClinicService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ClinicService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ClinicService) -> Self {
        Self { args, service }
    }
}
