mod chat_completion;
mod completion_client;
mod pdf_engine;
mod schema_validator;

pub use chat_completion::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, JsonSchemaFormat, MessageContent,
    MessageRole, ResponseFormat,
};
pub use completion_client::{CompletionClient, CompletionError};
pub use pdf_engine::{PageSource, PdfEngine, PdfEngineError};
pub use schema_validator::{SchemaError, SchemaValidator};
