//! # 错误类型模块
//!
//! 核心编解码器只返回结构化的错误，从不终止进程。
//! 是否退出、记录日志或换一组输入重试，由调用者决定。

use thiserror::Error;

/// 解析帧时可能出现的错误。
///
/// 对外它们都会被合并为 [`HideError::NoHiddenMessage`]：
/// "从未隐藏过消息" 与 "消息已损坏" 无法也不应该被区分。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// 缓冲区不足 8 字节，连帧头都读不出来。
    #[error("buffer is shorter than the 8-byte frame header")]
    TruncatedHeader,

    /// 帧头声明的长度超过了缓冲区中剩余的字节数。
    #[error("declared payload size {declared} exceeds the {available} bytes available")]
    InsufficientData { declared: usize, available: usize },

    /// 重新计算的校验和与帧头中存储的不一致。
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    IntegrityMismatch { stored: u32, computed: u32 },
}

/// 位游标中的所有位都已被读出。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("bit cursor exhausted")]
pub struct Exhausted;

/// 库对外暴露的错误类型。
#[derive(Debug, Error)]
pub enum HideError {
    /// 载体图像不是 "每通道 1 字节、每像素 3 个颜色通道" 的格式。
    #[error("unsupported pixel format {0}, expected 8-bit RGB or RGBA")]
    UnsupportedPixelFormat(String),

    /// 加帧后的负载所需的可用字节数超过了载体提供的数量。
    #[error("payload needs {required} eligible channel bytes but the carrier only has {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// 负载长度超出帧头 `size` 字段 (`u32`) 的表示范围。
    #[error("payload of {0} bytes does not fit the 32-bit frame length field")]
    PayloadTooLarge(usize),

    /// 载体中没有 (完整且校验通过的) 隐藏消息。
    #[error("image did not contain a hidden message")]
    NoHiddenMessage,

    /// 读取载体文件失败。
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 图像容器解码或编码失败。
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl From<FrameError> for HideError {
    fn from(_: FrameError) -> Self {
        HideError::NoHiddenMessage
    }
}
