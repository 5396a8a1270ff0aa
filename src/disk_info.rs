use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Space on one mounted volume, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskInfo {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

impl DiskInfo {
    /// Usage of the volume that holds `path`, or `None` when it cannot be
    /// queried. The report simply leaves the usage bar out then.
    pub fn for_path(path: &Path) -> Option<Self> {
        match statvfs(path) {
            Ok(stat) => Some(Self::from_blocks(
                stat.f_frsize as u64,
                stat.f_blocks as u64,
                stat.f_bavail as u64,
            )),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "statvfs failed");
                None
            }
        }
    }

    /// Sizes from a block count. Blocks reserved for root count as used.
    fn from_blocks(block_size: u64, blocks: u64, available_blocks: u64) -> Self {
        let total = blocks.saturating_mul(block_size);
        let available = available_blocks.saturating_mul(block_size).min(total);
        Self {
            total,
            available,
            used: total - available,
        }
    }

    pub fn usage_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f32 / self.total as f32
    }

    /// Bytes that became free since `before`. Zero if the volume filled up.
    pub fn freed_since(&self, before: &DiskInfo) -> u64 {
        self.available.saturating_sub(before.available)
    }
}

fn statvfs(path: &Path) -> io::Result<libc::statvfs> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: c_path is NUL-terminated and stat is only read after success.
    if unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(unsafe { stat.assume_init() })
}
