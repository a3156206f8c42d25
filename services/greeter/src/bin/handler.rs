/// 文字列応答 Lambdaエントリポイント
///
/// 入力を"Processing input"としてinfoレベルで1行ログ出力し、固定の文字列を返却する。
use greeter::application::PlainHandler;
use greeter::infrastructure::{init_logging, EventRecorder, TracingEventRecorder};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("handler Lambda関数を初期化");

    let plain_handler = PlainHandler::new(TracingEventRecorder::processing_input());
    let plain_handler = &plain_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(plain_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// 返却した文字列はランタイムがJSON文字列としてエンコードする。
async fn handler<R>(
    plain_handler: &PlainHandler<R>,
    event: LambdaEvent<Value>,
) -> Result<String, Error>
where
    R: EventRecorder,
{
    let span = info_span!("invocation", request_id = %event.context.request_id);
    Ok(span.in_scope(|| plain_handler.handle(&event.payload)))
}
