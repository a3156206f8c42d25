/// イベント記録
///
/// ハンドラーが受信したイベントを観測用のシンクに出力する。
/// 本番ではtracing経由でCloudWatchに構造化ログとして記録する。
use serde_json::Value;
use tracing::info;

/// helloハンドラーのログメッセージ
pub const EVENT_RECEIVED_LABEL: &str = "イベント受信";
/// 文字列応答ハンドラーのログメッセージ
pub const PROCESSING_INPUT_LABEL: &str = "Processing input";

/// イベント記録のトレイト
///
/// 1回の呼び出しにつき1回だけ`record`される。
pub trait EventRecorder {
    fn record(&self, event: &Value);
}

/// tracingにinfoレベルで1行出力するEventRecorder
#[derive(Debug, Clone, Copy)]
pub struct TracingEventRecorder {
    label: &'static str,
}

impl TracingEventRecorder {
    pub fn new() -> Self {
        Self::with_label(EVENT_RECEIVED_LABEL)
    }

    /// 文字列応答ハンドラー用（"Processing input"で出力）
    pub fn processing_input() -> Self {
        Self::with_label(PROCESSING_INPUT_LABEL)
    }

    pub fn with_label(label: &'static str) -> Self {
        Self { label }
    }
}

impl Default for TracingEventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecorder for TracingEventRecorder {
    fn record(&self, event: &Value) {
        info!(event = %event, "{}", self.label);
    }
}
