mod mock_completion_client;
mod openai_completion_client;

pub use mock_completion_client::MockCompletionClient;
pub use openai_completion_client::OpenAiCompletionClient;
