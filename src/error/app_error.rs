use thiserror::Error;

/// 应用错误
#[derive(Error, Debug)]
pub enum AppError {
    /// 远程行存储不可达或请求失败，非致命，等下一次用户操作或定时刷新再试
    #[error("连接错误: {0}")]
    Connection(String),

    /// 业务错误
    #[error("业务错误: {0}")]
    BizError(String),

    /// 未知错误
    #[error("未知错误: {0}")]
    Unknown(String),
}

impl AppError {
    /// 是否为连接类错误（展示层据此渲染连接异常横幅）
    pub fn is_connection(&self) -> bool {
        matches!(self, AppError::Connection(_))
    }
}

/// 把任何错误转换为AppError类型
pub fn to_err<E: std::error::Error + Send + Sync + 'static>(err: E) -> AppError {
    AppError::Unknown(err.to_string())
}

/// 把reqwest的错误统一归为连接错误
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Connection(err.to_string())
    }
}
