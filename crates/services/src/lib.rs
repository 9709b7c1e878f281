#![forbid(unsafe_code)]

pub mod app_services;
pub mod assets;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use assets::AssetCatalog;
pub use error::{AppServicesError, SessionError};

pub use sessions::{
    QuizFlowService, QuizPhase, QuizProgress, QuizResult, QuizSession, RenderDirective,
    ResponseHistoryService, ResponseListItem, SubmitOutcome, render_directive,
};
