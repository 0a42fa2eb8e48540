pub mod evaluation;
pub mod file;
pub mod loaders;
pub mod notification;
pub mod question;

pub use evaluation::{EvaluationRequest, EvaluationResponse, EvaluationResult, RawResponse};
pub use file::{FileSource, SelectedFile, PDF_MIME_TYPE};
pub use loaders::load_questionnaire;
pub use notification::{FileInfoView, Notification, NotificationKind};
pub use question::{default_questions, GenderWeights, Question, QuestionDefault, QuestionRow, Weight};
