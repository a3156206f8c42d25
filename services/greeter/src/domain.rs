// Domain layer modules
pub mod greeting_message;
pub mod greeting_response;

// Re-exports
pub use greeting_message::{
    GreetingVariant, UnknownVariant, PLAIN_REPLY, SERVERLESS_TF_MESSAGE, V3_MESSAGE,
};
pub use greeting_response::{GreetingBody, GreetingResponse, STATUS_OK};
