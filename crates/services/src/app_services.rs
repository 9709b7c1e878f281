use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::assets::AssetCatalog;
use crate::error::AppServicesError;
use crate::sessions::{QuizFlowService, ResponseHistoryService};

/// Assembles app-facing services over a shared storage backend.
#[derive(Clone)]
pub struct AppServices {
    flow: Arc<QuizFlowService>,
    history: Arc<ResponseHistoryService>,
    assets: Arc<AssetCatalog>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        images_dir: impl Into<PathBuf>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, images_dir))
    }

    /// Build services over an existing storage backend.
    #[must_use]
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        images_dir: impl Into<PathBuf>,
    ) -> Self {
        let flow = Arc::new(QuizFlowService::new(
            clock,
            Arc::clone(&storage.responses),
        ));
        let history = Arc::new(ResponseHistoryService::new(Arc::clone(&storage.responses)));
        let assets = Arc::new(AssetCatalog::new(images_dir));

        Self {
            flow,
            history,
            assets,
        }
    }

    #[must_use]
    pub fn flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.flow)
    }

    #[must_use]
    pub fn history(&self) -> Arc<ResponseHistoryService> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn assets(&self) -> Arc<AssetCatalog> {
        Arc::clone(&self.assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionCatalog;
    use quiz_core::time::fixed_clock;

    #[tokio::test]
    async fn in_memory_services_run_the_flow() {
        let storage = Storage::in_memory();
        let services = AppServices::from_storage(&storage, fixed_clock(), "images");

        let mut session = services
            .flow()
            .start_session(QuestionCatalog::community())
            .unwrap();
        while let Some(question) = session.current_question() {
            let option = question.options()[0].clone();
            session.answer_current(&option).unwrap();
        }

        let outcome = services
            .flow()
            .submit_contact(&mut session, "Ada", "ada@example.com")
            .await
            .unwrap();

        let items = services.history().list_recent(5).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, outcome.response_row_id);
        assert_eq!(items[0].persona, outcome.persona);
    }
}
