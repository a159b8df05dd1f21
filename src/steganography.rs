//! # 隐写核心模块
//!
//! 将帧的位流逐位写入通道字节的最低有效位，或从中读回。
//! 每 4 个通道字节中的第 4 个 (alpha) 被跳过，既不写入也不读取。
//!
//! 本模块只处理内存中的扁平通道缓冲区，不涉及文件或图像容器。

use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL, FRAME_HEADER_LEN};
use crate::error::HideError;
use crate::frame::{self, Frame};

/// 绝对下标为 `i` 的通道字节是否可以承载数据。
pub fn is_eligible(i: usize) -> bool {
    (i + 1) % CHANNELS_PER_PIXEL != 0
}

/// 长度为 `len` 的通道缓冲区中可用字节的数量 `E`。
pub fn eligible_count(len: usize) -> usize {
    len - len / CHANNELS_PER_PIXEL
}

/// 长度为 `len` 的通道缓冲区最多能隐藏的负载字节数。
pub fn capacity(len: usize) -> usize {
    (eligible_count(len) / BITS_PER_BYTE).saturating_sub(FRAME_HEADER_LEN)
}

/// 把位流写入通道缓冲区。
///
/// 在修改任何字节之前先检查容量；位流耗尽后，剩余字节原样保留。
///
/// # Errors
///
/// 位流长度超过可用字节数时返回 [`HideError::CapacityExceeded`]，
/// 此时 `pix` 完全不变。
pub fn embed<I>(pix: &mut [u8], bits: I) -> Result<(), HideError>
where
    I: ExactSizeIterator<Item = u8>,
{
    let required = bits.len();
    let available = eligible_count(pix.len());
    if required > available {
        return Err(HideError::CapacityExceeded {
            required,
            available,
        });
    }

    pix.iter_mut()
        .enumerate()
        .filter(|(i, _)| is_eligible(*i))
        .zip(bits)
        .for_each(|((_, byte), bit)| *byte = (*byte & 0xFE) | bit);

    Ok(())
}

/// 读出所有可用字节的最低有效位，每 8 位按 MSB 优先拼成一个字节。
///
/// 总是成功，输出长度为 `floor(E / 8)`；不足 8 位的尾部被丢弃。
pub fn extract(pix: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(eligible_count(pix.len()) / BITS_PER_BYTE);
    let mut acc = 0u8;
    let mut count = 0;

    for byte in pix
        .iter()
        .enumerate()
        .filter_map(|(i, &b)| is_eligible(i).then_some(b))
    {
        acc = (acc << 1) | (byte & 1);
        count += 1;
        if count == BITS_PER_BYTE {
            out.push(acc);
            acc = 0;
            count = 0;
        }
    }

    out
}

/// 为负载加帧并嵌入通道缓冲区。
///
/// # Errors
///
/// * [`HideError::PayloadTooLarge`] - 负载长度超出 `u32`。
/// * [`HideError::CapacityExceeded`] - 载体容量不足。
///
/// 两种情况下 `pix` 都保持不变。
pub fn hide(pix: &mut [u8], payload: &[u8]) -> Result<(), HideError> {
    embed(pix, Frame::build(payload)?.into_bits())
}

/// 从通道缓冲区中恢复负载。
///
/// # Errors
///
/// 载体中没有可通过长度与校验和验证的帧时返回 [`HideError::NoHiddenMessage`]。
pub fn reveal(pix: &[u8]) -> Result<Vec<u8>, HideError> {
    let extracted = extract(pix);
    let payload = frame::parse_and_verify(&extracted)?;
    Ok(payload.to_vec())
}
