// アプリケーション層モジュール
pub mod hello_handler;
pub mod plain_handler;

// 再エクスポート
pub use hello_handler::{HelloHandler, HelloHandlerError};
pub use plain_handler::PlainHandler;
