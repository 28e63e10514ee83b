//! 设备节点路径解析
//!
//! 只处理 `/dev` 下的平面命名空间：规范化路径后要求父目录恰好是 [`DEV_ROOT`]。

use alloc::string::String;
use alloc::vec::Vec;

use crate::FsError;

/// 设备节点所在目录
pub const DEV_ROOT: &str = "/dev";

/// 设备名最大长度
const NAME_MAX: usize = 255;

/// 规范化路径：折叠重复的 `/`，处理 `.` 与 `..`
///
/// 绝对路径不能越过根目录；相对路径中无法抵消的 `..` 被保留。
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            name => parts.push(name),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => String::from("/") + &joined,
        (false, true) => String::from("."),
        (false, false) => joined,
    }
}

/// 从设备路径中取出节点名，例如 `/dev/chardrv` -> `chardrv`
pub fn dev_node_name(path: &str) -> Result<String, FsError> {
    if !path.starts_with('/') {
        return Err(FsError::InvalidArgument);
    }
    let normalized = normalize_path(path);
    let name = normalized
        .strip_prefix(DEV_ROOT)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or(FsError::NotFound)?;

    if name.is_empty() || name.contains('/') {
        return Err(FsError::NotFound);
    }
    if name.len() > NAME_MAX {
        return Err(FsError::NameTooLong);
    }
    Ok(String::from(name))
}
