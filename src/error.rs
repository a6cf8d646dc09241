use thiserror::Error;

/// ライブラリ全体で使うエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// 添字が[0, size)の範囲外
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// 引数の組み合わせが不正
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
