/// helloハンドラー
///
/// 受信したイベントを記録し、設定されたメッセージと元のイベントを
/// 埋め込んだJSONをbodyに持つ200レスポンスを返す。
use serde_json::Value;
use thiserror::Error;

use crate::domain::{GreetingBody, GreetingResponse};
use crate::infrastructure::{EventRecorder, GreetingConfig};

/// helloハンドラーのエラー型
#[derive(Debug, Error)]
pub enum HelloHandlerError {
    /// イベントをJSONで表現できない
    #[error("Failed to serialize greeting body: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// イベントをエコーするハンドラー
///
/// 状態を持たず、同じイベントに対して常に同じレスポンスを返す。
pub struct HelloHandler<R>
where
    R: EventRecorder,
{
    /// 挨拶メッセージ設定
    config: GreetingConfig,
    /// イベント記録先
    recorder: R,
}

impl<R> HelloHandler<R>
where
    R: EventRecorder,
{
    pub fn new(config: GreetingConfig, recorder: R) -> Self {
        Self { config, recorder }
    }

    /// 設定されたメッセージを取得
    pub fn message(&self) -> &str {
        self.config.message()
    }

    /// イベントを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. イベントを記録
    /// 2. messageとinputを持つbodyを2スペースインデントでシリアライズ
    /// 3. ステータス200のレスポンスを返却
    ///
    /// # 戻り値
    /// * 成功時は`Ok(GreetingResponse)`
    /// * シリアライズ失敗時は`Err(HelloHandlerError::Serialization)`
    pub fn handle(&self, event: &Value) -> Result<GreetingResponse, HelloHandlerError> {
        self.recorder.record(event);

        let body = GreetingBody::new(self.config.message(), event.clone()).to_pretty_json()?;

        Ok(GreetingResponse::ok(body))
    }
}
