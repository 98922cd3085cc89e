use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// rust-ff 的自定义错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 未提供匹配模式
    #[error("Pattern is missing")]
    MissingPattern,

    /// 无效的模式值
    #[error("Mode must be one of: \"files\", \"dirs\", \"all\" (got \"{0}\")")]
    InvalidMode(String),

    /// 源路径不存在或不是目录
    #[error("Source \"{}\" doesn't exist or is not a directory", .0.display())]
    InvalidSource(PathBuf),

    /// 模式编译错误
    #[error("Invalid pattern '{pattern}': {message}")]
    PatternError { pattern: String, message: String },

    /// 执行命令为空
    #[error("Command to execute is empty")]
    EmptyCommand,

    /// 命令字符串无法按 shell 规则拆分（如引号未闭合）
    #[error("Cannot parse command '{0}': unbalanced quotes or trailing escape")]
    InvalidCommand(String),

    /// 文件系统错误（其他IO错误）
    #[error("Filesystem error {}: {source}", .path.display())]
    FilesystemError {
        source: std::io::Error,
        path: PathBuf,
    },

    /// 遍历目录时的错误
    #[error("Directory walk error: {0}")]
    WalkDirError(String),

    /// 写入输出失败
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => FindError::FilesystemError {
                source: std::io::Error::new(io_err.kind(), io_err.to_string()),
                path,
            },
            None => FindError::WalkDirError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_filesystem_error_display() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let find_error = FindError::FilesystemError {
            source: io_error,
            path: PathBuf::from("/test/path"),
        };
        assert_eq!(
            find_error.to_string(),
            "Filesystem error /test/path: file not found"
        );
    }

    #[test]
    fn test_invalid_source_display() {
        let find_error = FindError::InvalidSource(PathBuf::from("/invalid/path"));
        assert_eq!(
            find_error.to_string(),
            "Source \"/invalid/path\" doesn't exist or is not a directory"
        );
    }

    #[test]
    fn test_pattern_error_display() {
        let find_error = FindError::PatternError {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(find_error.to_string(), "Invalid pattern '(': unclosed group");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let find_error: FindError = io_error.into();
        match find_error {
            FindError::Output(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            _ => panic!("Expected Output variant"),
        }
    }
}
