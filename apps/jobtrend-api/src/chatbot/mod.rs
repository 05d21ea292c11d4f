// Career assistant chatbot: keyword-routed canned replies.

pub mod handlers;
pub mod topics;
