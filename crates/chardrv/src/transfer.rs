//! 基于偏移的数据传输
//!
//! 读取量为 `min(请求长度, 有效长度 - 偏移)`；复制失败时返回
//! [`FsError::Fault`] 且偏移不变。写入总是“成功”并原样返回长度。

use vfs::{FsError, UserBuffer};

use crate::MessageBuffer;

/// 从 `position` 处读取并推进偏移
pub fn read(
    buffer: &MessageBuffer,
    position: &mut usize,
    out: &mut dyn UserBuffer,
) -> Result<usize, FsError> {
    let count = read_at(buffer, *position, out)?;
    *position += count;
    Ok(count)
}

/// 从 `offset` 处读取，不涉及会话偏移
///
/// 偏移位于有效长度处或之后时返回 0（EOF），且不会调用复制原语。
pub fn read_at(
    buffer: &MessageBuffer,
    offset: usize,
    out: &mut dyn UserBuffer,
) -> Result<usize, FsError> {
    let valid = buffer.as_bytes();
    let count = out.len().min(valid.len().saturating_sub(offset));
    if count == 0 {
        return Ok(0);
    }

    out.copy_to_user(&valid[offset..offset + count])?;
    log::trace!("chardrv: read {} bytes at offset {}", count, offset);
    Ok(count)
}

/// 接受并丢弃写入的数据
pub fn write_discard(data: &[u8]) -> usize {
    log::info!("chardrv: write is not supported, this is a read only device");
    data.len()
}
