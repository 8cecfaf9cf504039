// Scripted portfolio assistant.
// Classification is substring matching against an ordered keyword list; the
// first matching category wins. No state is kept between turns.

pub mod handlers;
pub mod responder;
pub mod script;

pub use responder::{ChatReply, Responder, ScriptedResponder};
