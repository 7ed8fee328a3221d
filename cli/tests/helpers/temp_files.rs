use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct TempFileManager {
    base_dir: PathBuf,
}

impl TempFileManager {
    #[allow(dead_code)]
    pub fn new() -> Result<Self, String> {
        let pid = std::process::id();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut base = PathBuf::from("target");
        base.push(format!("lotto_{}_{}_{}", pid, ts, unique));
        fs::create_dir_all(&base).map_err(|e| format!("create_dir_all: {}", e))?;
        Ok(Self { base_dir: base })
    }

    /// Path inside the managed directory; the file need not exist yet.
    #[allow(dead_code)]
    pub fn path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.base_dir.join(name)
    }

    #[allow(dead_code)]
    pub fn create_file<P: AsRef<Path>>(&self, name: P, content: &str) -> Result<PathBuf, String> {
        let p = self.base_dir.join(name);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("parent dir: {}", e))?;
        }
        let mut f = File::create(&p).map_err(|e| format!("create: {}", e))?;
        f.write_all(content.as_bytes())
            .map_err(|e| format!("write: {}", e))?;
        Ok(p)
    }
}

impl Drop for TempFileManager {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.base_dir);
    }
}
