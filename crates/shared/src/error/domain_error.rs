//! Domain Error - Unified error type for domain-rule violations
//!
//! Defines [`DomainError`] struct and [`DomainResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// ドメイン統一エラー型
///
/// 集約と値オブジェクトが報告する標準エラー型です。
/// 区別されるのはエラー種別ではなく、人間可読な理由のみ。
///
/// ## Fields
/// * `message` - 違反したドメインルールの説明
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::domain_error::DomainError;
///
/// let err = DomainError::new("An order must contain at least one item.");
/// assert_eq!(err.to_string(), "An order must contain at least one item.");
/// ```
pub struct DomainError {
    /// 違反理由
    message: Cow<'static, str>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// ドメイン結果型エイリアス
///
/// `Result<T, DomainError>` の省略形です。
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `message` - 違反したルールの説明
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("DomainError");
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = DomainError::new("Email format is invalid.");
        assert_eq!(err.message(), "Email format is invalid.");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_is_the_reason() {
        let err = DomainError::new("Customer name cannot be empty.");
        assert_eq!(err.to_string(), "Customer name cannot be empty.");
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DomainError::new("Lookup failed").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_owned_message() {
        let days = 12;
        let err = DomainError::new(format!("Last changed {days} days ago."));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_debug_contains_message() {
        let err = DomainError::new("Quantity must be greater than 0.");
        let debug = format!("{err:?}");
        assert!(debug.contains("DomainError"));
        assert!(debug.contains("Quantity"));
    }
}
