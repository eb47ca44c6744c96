pub mod generator;
pub mod llm_client;

pub use generator::TextGenerator;
pub use llm_client::LlmClient;
