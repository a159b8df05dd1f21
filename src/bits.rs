//! # 位游标模块
//!
//! 以 MSB 优先的顺序逐位读取一段字节。游标拥有自己的数据，
//! 只能顺序前进一遍，不能回退或重置。

use crate::constants::BITS_PER_BYTE;
use crate::error::Exhausted;

/// 单次、顺序的位生产者。第 0 位是第 0 个字节的最高位。
#[derive(Debug)]
pub struct BitCursor {
    data: Vec<u8>,
    ptr: usize,
}

impl BitCursor {
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, ptr: 0 }
    }

    /// 取出下一位 (0 或 1) 并前进一位。
    ///
    /// # Errors
    ///
    /// 全部 `8 * len` 位都已读出后返回 [`Exhausted`]。
    pub fn next_bit(&mut self) -> Result<u8, Exhausted> {
        let byte = *self.data.get(self.ptr / BITS_PER_BYTE).ok_or(Exhausted)?;
        let shift = 7 - (self.ptr % BITS_PER_BYTE);
        self.ptr += 1;
        Ok((byte >> shift) & 1)
    }

    /// 尚未读出的位数。
    pub fn remaining(&self) -> usize {
        (self.data.len() * BITS_PER_BYTE).saturating_sub(self.ptr)
    }
}

impl Iterator for BitCursor {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_bit().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitCursor {}
