// Public modules
pub mod candidate;
pub mod content;
pub mod generate_content_request;
pub mod generate_content_response;
pub mod generation_config;
pub mod model;
pub mod part;
pub mod system_instruction;
pub mod turn;
pub mod usage_metadata;

// Re-exports
pub use candidate::Candidate;
pub use content::{Content, ContentRole};
pub use generate_content_request::GenerateContentRequest;
pub use generate_content_response::GenerateContentResponse;
pub use generation_config::GenerationConfig;
pub use model::{KnownModel, Model};
pub use part::Part;
pub use system_instruction::SystemInstruction;
pub use turn::{Turn, TurnRole};
pub use usage_metadata::UsageMetadata;
