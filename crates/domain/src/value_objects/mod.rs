//! Value objects - Immutable objects defined by their attributes

mod cultural_context;
mod difficulty;
mod emotion;
mod language;
mod question_type;
mod semantic_version;
mod wire_enum;

pub use cultural_context::CulturalContext;
pub use difficulty::DifficultyLevel;
pub use emotion::Emotion;
pub use language::Language;
pub use question_type::QuestionType;
pub use semantic_version::SemanticVersion;
pub use wire_enum::WireEnum;
