/// hello Lambdaエントリポイント
///
/// 受信したイベントをログ出力し、設定されたメッセージと元のイベントを
/// bodyに埋め込んだ `{"statusCode": 200, "body": ...}` を返却する。
///
/// 環境変数:
/// - GREETING_MESSAGE: messageを直接指定
/// - GREETING_VARIANT: v3 / tf（GREETING_MESSAGE未設定時）
use greeter::application::HelloHandler;
use greeter::domain::GreetingResponse;
use greeter::infrastructure::{init_logging, EventRecorder, GreetingConfig, TracingEventRecorder};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // コールドスタート時に一度だけ設定を読み込む
    let config = match GreetingConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "挨拶メッセージ設定読み込み失敗");
            return Err(err.into());
        }
    };

    let hello_handler = HelloHandler::new(config, TracingEventRecorder::new());
    info!(greeting = hello_handler.message(), "hello Lambda関数を初期化");

    let hello_handler = &hello_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(hello_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// シリアライズエラーはそのままランタイムのエラーチャネルに伝播する。
async fn handler<R>(
    hello_handler: &HelloHandler<R>,
    event: LambdaEvent<Value>,
) -> Result<GreetingResponse, Error>
where
    R: EventRecorder,
{
    let span = info_span!("invocation", request_id = %event.context.request_id);
    let response = span.in_scope(|| hello_handler.handle(&event.payload))?;

    Ok(response)
}
