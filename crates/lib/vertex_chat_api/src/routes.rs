//! Route paths.

pub const GET_API_HELLO: &str = "/api/hello";
pub const POST_CHAT: &str = "/chat";
pub const POST_CHAT_ACTIONS: &str = "/chat/actions";
