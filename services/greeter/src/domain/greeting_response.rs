/// helloハンドラーのレスポンス型
///
/// API Gatewayプロキシ統合と同じ形のレコード
/// `{"statusCode": 200, "body": "<JSON文字列>"}` を表す。
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 正常応答のステータスコード
pub const STATUS_OK: u16 = 200;

/// レスポンスbodyに埋め込むドキュメント
///
/// フィールドはmessage, inputの順でシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingBody {
    /// 設定された挨拶メッセージ
    pub message: String,
    /// 受信したイベント（そのまま）
    pub input: Value,
}

impl GreetingBody {
    pub fn new(message: impl Into<String>, input: Value) -> Self {
        Self {
            message: message.into(),
            input,
        }
    }

    /// 2スペースインデントのJSON文字列に変換
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// helloハンドラーのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    /// HTTPステータスコード（常に200）
    pub status_code: u16,
    /// GreetingBodyをシリアライズしたJSON文字列
    pub body: String,
}

impl GreetingResponse {
    /// 200 OKのレスポンスを作成
    pub fn ok(body: String) -> Self {
        Self {
            status_code: STATUS_OK,
            body,
        }
    }

    /// bodyをGreetingBodyとしてパース
    pub fn parse_body(&self) -> Result<GreetingBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
