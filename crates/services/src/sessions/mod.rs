mod progress;
mod session;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use session::{QuizPhase, QuizResult, QuizSession};
pub use view::{
    INTRO_BLURB, INTRO_TITLE, RenderDirective, ResponseHistoryService, ResponseListItem,
    render_directive,
};
pub use workflow::{QuizFlowService, SubmitOutcome};
