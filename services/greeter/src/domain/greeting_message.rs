/// 挨拶メッセージの定義
///
/// helloハンドラーが返すmessageの定型文と、
/// どの定型文を使うかを表すバリアントを提供する。
use std::fmt;
use std::str::FromStr;

/// Serverless Framework v3 テンプレートのメッセージ
pub const V3_MESSAGE: &str = "Go Serverless v3.0! Your Nodejs function executed successfully!";

/// serverless.tf テンプレートのメッセージ
pub const SERVERLESS_TF_MESSAGE: &str =
    "Go Serverless.tf! Your Nodejs function executed successfully!";

/// 文字列を返すハンドラーの固定応答
pub const PLAIN_REPLY: &str = "Hello from serverless.tf!!!";

/// 挨拶メッセージのバリアント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingVariant {
    /// Serverless Framework v3
    #[default]
    V3,
    /// serverless.tf
    ServerlessTf,
}

impl GreetingVariant {
    /// バリアントに対応するメッセージ文字列を取得
    pub fn message(&self) -> &'static str {
        match self {
            GreetingVariant::V3 => V3_MESSAGE,
            GreetingVariant::ServerlessTf => SERVERLESS_TF_MESSAGE,
        }
    }
}

impl fmt::Display for GreetingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreetingVariant::V3 => write!(f, "v3"),
            GreetingVariant::ServerlessTf => write!(f, "tf"),
        }
    }
}

/// 未知のバリアント名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl FromStr for GreetingVariant {
    type Err = UnknownVariant;

    /// 前後の空白を除き、大文字小文字を区別せずにパースする
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v3" => Ok(GreetingVariant::V3),
            "tf" | "serverless.tf" => Ok(GreetingVariant::ServerlessTf),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_messages_are_exact_literals() {
        assert_eq!(
            GreetingVariant::V3.message(),
            "Go Serverless v3.0! Your Nodejs function executed successfully!"
        );
        assert_eq!(
            GreetingVariant::ServerlessTf.message(),
            "Go Serverless.tf! Your Nodejs function executed successfully!"
        );
    }

    #[test]
    fn test_default_variant_is_v3() {
        assert_eq!(GreetingVariant::default(), GreetingVariant::V3);
    }

    #[test]
    fn test_parse_variant_names() {
        assert_eq!("v3".parse(), Ok(GreetingVariant::V3));
        assert_eq!(" V3 ".parse(), Ok(GreetingVariant::V3));
        assert_eq!("tf".parse(), Ok(GreetingVariant::ServerlessTf));
        assert_eq!("Serverless.TF".parse(), Ok(GreetingVariant::ServerlessTf));
    }

    #[test]
    fn test_parse_unknown_variant_keeps_original_text() {
        let result: Result<GreetingVariant, _> = "v4".parse();
        assert_eq!(result, Err(UnknownVariant("v4".to_string())));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for variant in [GreetingVariant::V3, GreetingVariant::ServerlessTf] {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }

    #[test]
    fn test_plain_reply_literal() {
        assert_eq!(PLAIN_REPLY, "Hello from serverless.tf!!!");
    }
}
