/// 每个像素占用的通道字节数：3 个颜色通道 + 1 个 alpha 通道。
/// 每组 4 字节中的第 4 个字节 (alpha) 永远不会被写入隐写数据。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 帧头长度 (字节)：4 字节大端长度 + 4 字节大端 Adler-32 校验和。
pub const FRAME_HEADER_LEN: usize = 8;

/// 每个可用通道字节承载的隐写位数。
pub const BITS_PER_BYTE: usize = 8;

/// 未指定输出路径时，隐写结果图像文件名的前缀。
pub const ENCODED_PREFIX: &str = "encoded_";

/// 未指定输出路径时，恢复数据文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";

/// 恢复数据默认使用的扩展名。负载是任意字节，因此不假设其为文本。
pub const RECOVERED_EXTENSION: &str = "bin";

/// 隐写结果图像始终以 BMP 格式写出。
pub const CARRIER_EXTENSION: &str = "bmp";
