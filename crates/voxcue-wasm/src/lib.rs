//! WebAssembly entry point of the VoxCue Telegram login view.

mod client;
mod init;
mod telegram;

pub use client::LoginViewClient;
pub use init::{init_sdk, LogLevel};
pub use telegram::TelegramBridge;
