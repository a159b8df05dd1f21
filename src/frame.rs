//! # 帧模块
//!
//! 真正被写入载体的不是原始负载，而是一个自描述的帧：
//!
//! ```text
//! +----------------+--------------------+-----------------+
//! | size: u32 (BE) | checksum: u32 (BE) | payload (size)  |
//! +----------------+--------------------+-----------------+
//! ```
//!
//! 校验和为 Adler-32，仅覆盖 `payload` 本身。

use crate::bits::BitCursor;
use crate::constants::{BITS_PER_BYTE, FRAME_HEADER_LEN};
use crate::error::{FrameError, HideError};

/// 计算负载的 Adler-32 校验和。
pub fn checksum(data: &[u8]) -> u32 {
    adler2::adler32_slice(data)
}

/// 把负载长度转换为帧头中的 `size` 字段。
///
/// # Errors
///
/// 长度无法用 `u32` 表示时返回 [`HideError::PayloadTooLarge`]。
pub fn frame_size(payload_len: usize) -> Result<u32, HideError> {
    u32::try_from(payload_len).map_err(|_| HideError::PayloadTooLarge(payload_len))
}

/// 一个待嵌入 (或刚解析出) 的帧。构造后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: u32,
    checksum: u32,
    payload: Vec<u8>,
}

impl Frame {
    /// 为负载构建帧。
    ///
    /// # Errors
    ///
    /// 负载长度超出 `u32` 时返回 [`HideError::PayloadTooLarge`]。
    pub fn build(payload: &[u8]) -> Result<Self, HideError> {
        Ok(Self {
            size: frame_size(payload.len())?,
            checksum: checksum(payload),
            payload: payload.to_vec(),
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// 帧展开成位流后的总位数：`8 * (8 + size)`。
    pub fn bit_len(&self) -> usize {
        Self::bit_len_for(self.payload.len())
    }

    /// 长度为 `payload_len` 的负载加帧后需要的位数。
    pub fn bit_len_for(payload_len: usize) -> usize {
        payload_len
            .saturating_add(FRAME_HEADER_LEN)
            .saturating_mul(BITS_PER_BYTE)
    }

    /// 按线格式输出帧：大端长度、大端校验和、原样负载。
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + self.payload.len());
        out.extend_from_slice(&self.size.to_be_bytes());
        out.extend_from_slice(&self.checksum.to_be_bytes());
        out.extend_from_slice(&self.payload);
        out
    }

    /// 消耗帧，得到驱动嵌入过程的位游标。
    pub fn into_bits(self) -> BitCursor {
        BitCursor::from_bytes(self.serialize())
    }
}

/// 从提取出的字节中解析帧并校验，成功时返回负载切片。
///
/// 缓冲区末尾超出 `size` 的字节会被忽略。
///
/// # Errors
///
/// * [`FrameError::TruncatedHeader`] - 缓冲区不足 8 字节。
/// * [`FrameError::InsufficientData`] - 剩余字节少于声明的 `size`。
/// * [`FrameError::IntegrityMismatch`] - 校验和不一致。
pub fn parse_and_verify(buffer: &[u8]) -> Result<&[u8], FrameError> {
    let (header, body) = buffer
        .split_first_chunk::<FRAME_HEADER_LEN>()
        .ok_or(FrameError::TruncatedHeader)?;

    let size = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
    let stored = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);

    let candidate = body.get(..size).ok_or(FrameError::InsufficientData {
        declared: size,
        available: body.len(),
    })?;

    let computed = checksum(candidate);
    if computed != stored {
        return Err(FrameError::IntegrityMismatch { stored, computed });
    }

    Ok(candidate)
}
