//! # bmp_hide 库
//!
//! 本库包含 BMP 图像 LSB 隐写工具的核心逻辑。
//! 核心编解码 (`frame`、`bits`、`steganography`) 只操作内存中的字节，
//! 图像容器与文件 I/O 由 `carrier` 和 `handler` 负责。

// 声明库包含的所有模块。

pub mod bits;
pub mod carrier;
pub mod cli;
pub mod constants;
pub mod error;
pub mod frame;
pub mod handler;
pub mod steganography;

pub use error::{Exhausted, FrameError, HideError};
