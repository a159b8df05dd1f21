//! # 载体图像模块
//!
//! 负责 BMP 容器的解码与编码，并把像素整理成核心算法需要的
//! 扁平通道缓冲区：每像素 4 字节，依次为 R、G、B、A。
//!
//! 只接受 24 位与 32 位 BMP。调色板、16 位等格式虽然能被解码成 RGB，
//! 但写回时位深会改变，因此一律拒绝。

use crate::error::HideError;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};
use std::fs;
use std::path::Path;

/// BMP 文件头 (14 字节) 之后，DIB 头大小字段所在的偏移。
const DIB_HEADER_OFFSET: usize = 14;

/// OS/2 `BITMAPCOREHEADER` 的大小；其位深字段位于偏移 24，其余格式位于偏移 28。
const CORE_HEADER_SIZE: u32 = 12;

/// 从 BMP 文件头中读取每像素位数。数据不是 BMP 或头部不完整时返回 `None`。
pub fn bmp_bit_depth(bytes: &[u8]) -> Option<u16> {
    if !bytes.starts_with(b"BM") {
        return None;
    }
    let dib = bytes.get(DIB_HEADER_OFFSET..DIB_HEADER_OFFSET + 4)?;
    let dib_size = u32::from_le_bytes([dib[0], dib[1], dib[2], dib[3]]);
    let offset = if dib_size == CORE_HEADER_SIZE { 24 } else { 28 };
    let depth = bytes.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([depth[0], depth[1]]))
}

/// 一张已解码的载体图像。
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbaImage,
    /// 原图是 24 位 RGB；内存中的 alpha 字节只是占位，保存时会被丢弃。
    opaque: bool,
}

impl Carrier {
    /// 打开并解码载体图像。
    ///
    /// # Errors
    ///
    /// * 文件无法读取或解码。
    /// * 不是 24/32 位 BMP，或像素格式不是 8 位 RGB / RGBA ([`HideError::UnsupportedPixelFormat`])。
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HideError> {
        Self::from_bmp_bytes(&fs::read(path)?)
    }

    /// 从内存中的 BMP 文件内容构建载体，先检查位深再解码。
    pub fn from_bmp_bytes(bytes: &[u8]) -> Result<Self, HideError> {
        match bmp_bit_depth(bytes) {
            Some(24 | 32) => {}
            Some(depth) => {
                return Err(HideError::UnsupportedPixelFormat(format!("{depth} bpp bitmap")));
            }
            None => return Err(HideError::UnsupportedPixelFormat("not a bitmap".to_owned())),
        }

        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Bmp)?;
        Self::from_dynamic(decoded)
    }

    pub fn from_dynamic(decoded: DynamicImage) -> Result<Self, HideError> {
        match decoded {
            DynamicImage::ImageRgb8(rgb) => Ok(Self {
                image: DynamicImage::ImageRgb8(rgb).into_rgba8(),
                opaque: true,
            }),
            DynamicImage::ImageRgba8(image) => Ok(Self {
                image,
                opaque: false,
            }),
            other => Err(HideError::UnsupportedPixelFormat(format!(
                "{:?}",
                other.color()
            ))),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 扁平通道缓冲区。
    pub fn pixels(&self) -> &[u8] {
        &self.image
    }

    /// 可写的扁平通道缓冲区。长度与布局不可改变。
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    /// 以 BMP 格式写出。RGB 载体写回 24 位，RGBA 载体写回 32 位。
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HideError> {
        if self.opaque {
            let (width, height) = self.image.dimensions();
            let rgb = RgbImage::from_fn(width, height, |x, y| {
                let [r, g, b, _] = self.image.get_pixel(x, y).0;
                Rgb([r, g, b])
            });
            rgb.save_with_format(path, ImageFormat::Bmp)?;
        } else {
            self.image.save_with_format(path, ImageFormat::Bmp)?;
        }
        Ok(())
    }
}
