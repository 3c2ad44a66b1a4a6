//! Application Error - User-facing error type
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.
//! Crate-specific errors (HTTP, storage, auth, orders) convert into this
//! type before they reach a notification or the terminal.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// 通信などで失敗した時にユーザーへ表示する汎用メッセージ
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// アプリケーション統一エラー型
///
/// ビュー層（トースト通知・CLI 出力）に渡すための標準エラー型です。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードから判定）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Unauthorized, "Incorrect password")
///     .with_action("Please log in again");
/// assert_eq!(err.kind(), ErrorKind::Unauthorized);
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// ユーザーが取るべきアクション
    action: Option<Cow<'static, str>>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// サーバーが返したステータスとメッセージからエラーを作成
    ///
    /// メッセージが空の場合は [`FALLBACK_MESSAGE`] を使います。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::{app_error::AppError, kind::ErrorKind};
    /// let err = AppError::from_status(409, "User already exists");
    /// assert_eq!(err.kind(), ErrorKind::Conflict);
    /// ```
    pub fn from_status(status: u16, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            Cow::Borrowed(FALLBACK_MESSAGE)
        } else {
            message
        };
        Self::new(ErrorKind::from_status_code(status), message)
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 400 Bad Request エラー（入力値の検証失敗など）
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 401 Unauthorized エラー
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// レスポンスが届かなかった場合のエラー（メッセージは汎用文言）
    #[inline]
    pub fn unreachable() -> Self {
        Self::new(ErrorKind::Unreachable, FALLBACK_MESSAGE)
            .with_action("Check your connection and try again")
    }

    /// レスポンス本文が読めなかった場合のエラー
    #[inline]
    pub fn malformed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けアクションを設定
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
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

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// アクションを取得
    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// 通信エラーかどうか
    #[inline]
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
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
        let err = AppError::new(ErrorKind::NotFound, "Order not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Order not found");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_from_status_uses_fallback_for_blank_message() {
        let err = AppError::from_status(500, "  ");
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.message(), FALLBACK_MESSAGE);

        let err = AppError::from_status(401, "Incorrect password! Please try again");
        assert_eq!(err.message(), "Incorrect password! Please try again");
    }

    #[test]
    fn test_unreachable() {
        let err = AppError::unreachable();
        assert!(err.is_transport());
        assert_eq!(err.message(), FALLBACK_MESSAGE);
        assert!(err.action().is_some());
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::internal("Failed to read session").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::unauthorized("Session expired");
        assert_eq!(err.to_string(), "[Unauthorized] Session expired");

        let err_with_action = AppError::unauthorized("Session expired").with_action("Log in again");
        assert!(err_with_action.to_string().contains("Action:"));
    }
}
