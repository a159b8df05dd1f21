//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::carrier::Carrier;
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{
    CARRIER_EXTENSION, ENCODED_PREFIX, RECOVERED_EXTENSION, RECOVERED_PREFIX,
};
use crate::error::HideError;
use crate::frame::Frame;
use crate::steganography::{self, capacity, eligible_count};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 在 `image` 同目录下生成 `<prefix><stem>.<extension>` 形式的默认路径。
fn default_path(image: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    image.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 输出文件已存在且未指定 `--force` 时拒绝继续。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() {
        anyhow::ensure!(
            force,
            "Output file already exists: {}\nUse --force to overwrite it.",
            path.to_string_lossy().red().bold()
        );
        warn!("overwriting existing file {}", path.display());
    }
    Ok(())
}

fn open_carrier(path: &Path) -> Result<Carrier> {
    Carrier::open(path).with_context(|| {
        format!(
            "Unable to open carrier image: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和数据文件、检查隐写空间是否足够、调用隐写核心函数嵌入数据帧，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或数据文件，或图像不是 8 位 RGB/RGBA 格式。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像没有足够的空间来隐藏数据。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_path(&args.image, ENCODED_PREFIX, CARRIER_EXTENSION));
    ensure_writable(&dest, args.force)?;

    let mut carrier = open_carrier(&args.image)?;

    let data = fs::read(&args.data).with_context(|| {
        format!(
            "Unable to read data file: {}",
            args.data.to_string_lossy().red().bold()
        )
    })?;

    let (width, height) = carrier.dimensions();
    debug!(
        "carrier {}x{} with {} eligible channel bytes, payload {} bytes ({} bits framed)",
        width,
        height,
        eligible_count(carrier.pixels().len()),
        data.len(),
        Frame::bit_len_for(data.len())
    );

    match steganography::hide(carrier.pixels_mut(), &data) {
        Err(HideError::CapacityExceeded { .. }) => anyhow::bail!(
            "Not enough space in the image to hide the data. \nRequired: {} bytes, Available: {} bytes",
            data.len().to_string().red().bold(),
            capacity(carrier.pixels().len()).to_string().green().bold()
        ),
        other => other?,
    }

    carrier.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    info!("hid {} bytes in {}", data.len(), dest.display());
    println!(
        "The data has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、提取并校验数据帧，
/// 最后将恢复的数据写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件，或图像不是 8 位 RGB/RGBA 格式。
/// * 图像中没有隐藏数据，或数据的长度/校验和验证失败。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| default_path(&args.image, RECOVERED_PREFIX, RECOVERED_EXTENSION));
    ensure_writable(&output, args.force)?;

    let carrier = open_carrier(&args.image)?;

    let data = steganography::reveal(carrier.pixels()).with_context(|| {
        format!(
            "Failed to recover data from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    debug!("recovered {} bytes with a valid checksum", data.len());

    fs::write(&output, &data).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    info!("recovered {} bytes into {}", data.len(), output.display());
    println!(
        "The data has been successfully recovered and saved: {}",
        output.to_string_lossy().green().bold()
    );
    Ok(())
}

/// `capacity` 命令的统计结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// 可承载数据的通道字节数 `E`。
    pub eligible_bytes: usize,
    /// 最多能隐藏的负载字节数。
    pub max_payload: usize,
}

/// 处理 'Capacity' 命令：打印并返回图像的可用字节数与最大负载。
pub fn handle_capacity(args: CapacityArgs) -> Result<CapacityReport> {
    let carrier = open_carrier(&args.image)?;
    let (width, height) = carrier.dimensions();
    let len = carrier.pixels().len();
    let report = CapacityReport {
        width,
        height,
        eligible_bytes: eligible_count(len),
        max_payload: capacity(len),
    };

    println!(
        "{} ({}x{}): {} eligible channel bytes, up to {} bytes of hidden data",
        args.image.to_string_lossy().bold(),
        report.width,
        report.height,
        report.eligible_bytes.to_string().green(),
        report.max_payload.to_string().green().bold()
    );
    Ok(report)
}
