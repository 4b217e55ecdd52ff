pub mod status_api;
pub mod tasks_api;

use std::sync::Arc;

use crate::domain::models::GeneratorBox;
use crate::domain::models::StatusProbeBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn generator() -> GeneratorBox {
        return Arc::<tasks_api::TasksApi>::default();
    }

    pub fn status_probe() -> StatusProbeBox {
        return Arc::<status_api::StatusApi>::default();
    }
}
