//! Error Kind - Classification of remote failures
//!
//! Defines the [`ErrorKind`] enum that is derived from HTTP status codes
//! returned by the admin API (or synthesised when no response arrived).

use serde::Serialize;

/// エラー種別の列挙体
///
/// API が返した HTTP ステータスコードを分類します。
/// レスポンスが届かなかった場合（通信断・タイムアウト）は
/// [`ErrorKind::Unreachable`] を使います。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status_code(401);
/// assert_eq!(kind, ErrorKind::Unauthorized);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストが不正
    BadRequest,
    /// 401 - Unauthorized: 認証が必要
    Unauthorized,
    /// 403 - Forbidden: アクセス権限なし
    Forbidden,
    /// 404 - Not Found: リソースが見つからない
    NotFound,
    /// 408 - Request Timeout: リクエストタイムアウト
    RequestTimeout,
    /// 409 - Conflict: 現在の状態と競合
    Conflict,
    /// 422 - Unprocessable Entity: 処理不可能なエンティティ
    UnprocessableEntity,
    /// 429 - Too Many Requests: レート制限超過
    TooManyRequests,
    /// その他の 4xx
    OtherClientError,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 502 - Bad Gateway: 上流サーバーの応答が不正
    BadGateway,
    /// 503 - Service Unavailable: サービス利用不可
    ServiceUnavailable,
    /// 504 - Gateway Timeout: 上流サーバーのタイムアウト
    GatewayTimeout,
    /// その他の 5xx
    OtherServerError,
    /// レスポンスなし（ネットワーク障害・DNS・タイムアウト）
    Unreachable,
    /// レスポンスは届いたが形式が想定外
    MalformedResponse,
}

impl ErrorKind {
    /// HTTP ステータスコードから種別を判定
    ///
    /// 2xx/3xx など失敗ではないコードが渡された場合は
    /// [`ErrorKind::MalformedResponse`] を返します
    /// （成功ステータスで失敗扱いになるのは本文が読めない場合のみのため）。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status_code(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status_code(418), ErrorKind::OtherClientError);
    /// assert_eq!(ErrorKind::from_status_code(599), ErrorKind::OtherServerError);
    /// ```
    pub const fn from_status_code(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            500 => ErrorKind::InternalServerError,
            502 => ErrorKind::BadGateway,
            503 => ErrorKind::ServiceUnavailable,
            504 => ErrorKind::GatewayTimeout,
            400..=499 => ErrorKind::OtherClientError,
            500..=599 => ErrorKind::OtherServerError,
            _ => ErrorKind::MalformedResponse,
        }
    }

    /// 代表的な HTTP ステータスコードを取得
    ///
    /// ## Returns
    /// 対応するステータスコード。レスポンスが存在しない種別は `None`
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), Some(400));
    /// assert_eq!(ErrorKind::Unreachable.status_code(), None);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            ErrorKind::BadRequest | ErrorKind::OtherClientError => Some(400),
            ErrorKind::Unauthorized => Some(401),
            ErrorKind::Forbidden => Some(403),
            ErrorKind::NotFound => Some(404),
            ErrorKind::RequestTimeout => Some(408),
            ErrorKind::Conflict => Some(409),
            ErrorKind::UnprocessableEntity => Some(422),
            ErrorKind::TooManyRequests => Some(429),
            ErrorKind::InternalServerError | ErrorKind::OtherServerError => Some(500),
            ErrorKind::BadGateway => Some(502),
            ErrorKind::ServiceUnavailable => Some(503),
            ErrorKind::GatewayTimeout => Some(504),
            ErrorKind::Unreachable | ErrorKind::MalformedResponse => None,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.as_str(), "Bad Request");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::OtherClientError => "Client Error",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::GatewayTimeout => "Gateway Timeout",
            ErrorKind::OtherServerError => "Server Error",
            ErrorKind::Unreachable => "Unreachable",
            ErrorKind::MalformedResponse => "Malformed Response",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InternalServerError
                | ErrorKind::BadGateway
                | ErrorKind::ServiceUnavailable
                | ErrorKind::GatewayTimeout
                | ErrorKind::OtherServerError
        )
    }

    /// クライアント側のエラーかどうかを判定
    ///
    /// 4xx系のエラーは `true` を返します。
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        match self.status_code() {
            Some(code) => code >= 400 && code < 500,
            None => false,
        }
    }

    /// レスポンス自体が届かなかったかどうか
    #[inline]
    pub const fn is_transport(&self) -> bool {
        matches!(self, ErrorKind::Unreachable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_code() {
        assert_eq!(ErrorKind::from_status_code(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status_code(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status_code(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status_code(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status_code(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status_code(429), ErrorKind::TooManyRequests);
        assert_eq!(ErrorKind::from_status_code(451), ErrorKind::OtherClientError);
        assert_eq!(ErrorKind::from_status_code(500), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::from_status_code(503), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_status_code(507), ErrorKind::OtherServerError);
        assert_eq!(ErrorKind::from_status_code(200), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_is_server_error() {
        assert!(!ErrorKind::BadRequest.is_server_error());
        assert!(!ErrorKind::Unreachable.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::GatewayTimeout.is_server_error());
    }

    #[test]
    fn test_is_client_error() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(ErrorKind::OtherClientError.is_client_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
        assert!(!ErrorKind::Unreachable.is_client_error());
    }

    #[test]
    fn test_transport_has_no_status() {
        assert!(ErrorKind::Unreachable.is_transport());
        assert_eq!(ErrorKind::Unreachable.status_code(), None);
        assert_eq!(ErrorKind::MalformedResponse.status_code(), None);
    }
}
