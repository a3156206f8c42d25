// 挨拶メッセージ設定
//
// 環境変数からhelloハンドラーが返すmessageを読み込み、
// 型安全に提供するインフラストラクチャ層コンポーネント。
use thiserror::Error;

use crate::domain::GreetingVariant;

/// メッセージを直接指定する環境変数
pub const GREETING_MESSAGE_ENV: &str = "GREETING_MESSAGE";
/// バリアントを指定する環境変数
pub const GREETING_VARIANT_ENV: &str = "GREETING_VARIANT";

/// 挨拶メッセージ設定のエラー型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GreetingConfigError {
    #[error("不明なGREETING_VARIANTです: {0}")]
    UnknownVariant(String),
}

/// 挨拶メッセージ設定
///
/// 以下の優先順位でmessageを決定する:
/// 1. GREETING_MESSAGE: 空白以外が設定されていればそのまま使用
/// 2. GREETING_VARIANT: v3 / tf（serverless.tf）からバリアントを選択
/// 3. どちらも未設定ならv3のメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    message: String,
}

impl GreetingConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # エラー
    /// GREETING_VARIANTに不明な値が設定されている場合はエラーを返す
    pub fn from_env() -> Result<Self, GreetingConfigError> {
        // 空文字はNone扱い
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.trim().is_empty())
        };

        if let Some(message) = get_optional_string(GREETING_MESSAGE_ENV) {
            return Ok(Self::new(message));
        }

        let variant = match get_optional_string(GREETING_VARIANT_ENV) {
            Some(value) => value
                .parse::<GreetingVariant>()
                .map_err(|err| GreetingConfigError::UnknownVariant(err.0))?,
            None => GreetingVariant::default(),
        };

        Ok(Self::from_variant(variant))
    }

    /// 明示的なメッセージで作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// バリアントの定型メッセージで作成
    pub fn from_variant(variant: GreetingVariant) -> Self {
        Self::new(variant.message())
    }

    /// メッセージを取得
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self::from_variant(GreetingVariant::default())
    }
}
