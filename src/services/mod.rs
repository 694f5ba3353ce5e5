pub mod openai;
pub mod prompt;

pub use openai::OpenAiClient;
