pub mod consent_gate;
pub mod file_validator;
pub mod question_editor;
pub mod result_renderer;

pub use consent_gate::{ConsentGate, ConsentState, ConsentView};
pub use file_validator::{format_file_size, validate, ValidationStage, MAX_FILE_SIZE};
pub use question_editor::QuestionSetEditor;
pub use result_renderer::ResultView;
