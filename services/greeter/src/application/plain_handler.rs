/// 文字列応答ハンドラー
///
/// 入力を記録し、入力内容に関係なく固定の文字列を返す。
/// 本番では`TracingEventRecorder::processing_input()`で
/// "Processing input"としてinfoレベルで1行だけ出力する。
use serde_json::Value;

use crate::domain::PLAIN_REPLY;
use crate::infrastructure::EventRecorder;

pub struct PlainHandler<R>
where
    R: EventRecorder,
{
    recorder: R,
}

impl<R> PlainHandler<R>
where
    R: EventRecorder,
{
    pub fn new(recorder: R) -> Self {
        Self { recorder }
    }

    /// イベントを処理して固定の応答文字列を返す
    pub fn handle(&self, event: &Value) -> String {
        self.recorder.record(event);

        PLAIN_REPLY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::event_recorder::tests::MockEventRecorder;
    use crate::infrastructure::logging::tests::CapturedLogs;
    use crate::infrastructure::TracingEventRecorder;
    use serde_json::json;

    #[test]
    fn test_reply_is_fixed_regardless_of_input() {
        let handler = PlainHandler::new(MockEventRecorder::new());

        for event in [
            json!({}),
            json!({"key": "value"}),
            json!(null),
            json!([1, 2, 3]),
            json!("Hello from serverless.tf!!!"),
        ] {
            assert_eq!(handler.handle(&event), "Hello from serverless.tf!!!");
        }
    }

    #[test]
    fn test_input_is_recorded_once() {
        let recorder = MockEventRecorder::new();
        let handler = PlainHandler::new(recorder.clone());

        handler.handle(&json!({"key": "value"}));

        assert_eq!(recorder.recorded(), vec![json!({"key": "value"})]);
    }

    /// 1回の呼び出しで"Processing input"が1行だけ出力される
    #[test]
    fn test_handle_emits_single_processing_input_line() {
        let handler = PlainHandler::new(TracingEventRecorder::processing_input());
        let logs = CapturedLogs::new();

        logs.capture(|| {
            handler.handle(&json!({"a": 1}));
            handler.handle(&json!({"b": 2}));
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        for (line, expected) in lines.iter().zip([r#"{"a":1}"#, r#"{"b":2}"#]) {
            assert_eq!(line["level"], "INFO");
            assert_eq!(line["message"], "Processing input");
            assert_eq!(line["event"], expected);
        }
    }
}
