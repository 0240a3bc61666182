//! Visitor listing and mark recording

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::MarkRequest,
    repository::MapStore,
};

#[derive(Clone)]
pub struct VisitsService {
    store: Arc<dyn MapStore>,
}

impl VisitsService {
    pub fn new(store: Arc<dyn MapStore>) -> Self {
        Self { store }
    }

    /// Names of visitors who marked `area_id`, or of every visitor with a mark
    pub async fn list_visitor_names(&self, area_id: Option<&str>) -> AppResult<Vec<String>> {
        self.store.list_visitor_names(area_id).await
    }

    /// Validate a mark request, then create the visitor if needed and record the mark
    pub async fn mark(&self, request: &MarkRequest) -> AppResult<()> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let user_id = self.store.get_or_create_visitor(&request.user).await?;
        tracing::debug!("Visitor {} has id {}", request.user, user_id);

        self.store.record_mark(user_id, &request.area_id).await
    }
}
