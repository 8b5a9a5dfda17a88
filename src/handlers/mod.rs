//! Telegram endpoints: command and free-text messages in `message`, inline
//! button presses in `callback`.

pub mod callback;
pub mod message;
