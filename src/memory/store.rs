use crate::error::{Result, StoreError};
use crate::llm::types::Message;
use crate::tasks::TaskRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

// ── MemoryDocument ───────────────────────────────────────────────────────────

/// 持久化文档：有序对话记录 + 有序任务列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default)]
    pub conversation: Vec<Message>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

// ── MemoryStore trait ────────────────────────────────────────────────────────

#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// 读取文档；不存在或内容损坏时返回空文档
    async fn load(&self) -> Result<MemoryDocument>;

    /// 整体覆盖写入
    async fn save(&self, doc: &MemoryDocument) -> Result<()>;
}

// ── InMemoryMemoryStore ──────────────────────────────────────────────────────

/// 进程内存实现，不落盘
#[derive(Default)]
pub struct InMemoryMemoryStore {
    doc: RwLock<MemoryDocument>,
    saves: AtomicUsize,
}

impl InMemoryMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有文档作为初始状态
    pub fn with_document(doc: MemoryDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
            saves: AtomicUsize::new(0),
        }
    }

    /// 已发生的写入次数
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MemoryStore for InMemoryMemoryStore {
    async fn load(&self) -> Result<MemoryDocument> {
        Ok(self.doc.read().await.clone())
    }

    async fn save(&self, doc: &MemoryDocument) -> Result<()> {
        *self.doc.write().await = doc.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ── FileMemoryStore ──────────────────────────────────────────────────────────

/// 基于单个 JSON 文件的存储
///
/// 写入没有原子替换，写到一半崩溃可能损坏文件；下次读取时会按空文档处理。
pub struct FileMemoryStore {
    path: PathBuf,
}

impl FileMemoryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl MemoryStore for FileMemoryStore {
    async fn load(&self) -> Result<MemoryDocument> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Memory file not found, starting empty");
                return Ok(MemoryDocument::default());
            }
            Err(e) => {
                return Err(StoreError::IoError(format!("读取记忆文件失败: {e}")).into());
            }
        };

        let doc = serde_json::from_slice::<MemoryDocument>(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "记忆文件解析失败，从空状态开始: {e}");
            MemoryDocument::default()
        });
        debug!(
            path = %self.path.display(),
            messages = doc.conversation.len(),
            tasks = doc.tasks.len(),
            "📂 Memory loaded"
        );
        Ok(doc)
    }

    async fn save(&self, doc: &MemoryDocument) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::IoError(format!("创建目录失败: {e}")))?;
        }
        let json = to_json_pretty(doc)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::IoError(format!("写入记忆文件失败: {e}")))?;
        debug!(path = %self.path.display(), "💾 Memory saved");
        Ok(())
    }
}

/// 4 空格缩进的 JSON
fn to_json_pretty(doc: &MemoryDocument) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)
        .map_err(|e| StoreError::SerializationError(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::NO_DEADLINE;

    fn sample_document() -> MemoryDocument {
        MemoryDocument {
            conversation: vec![
                Message::user("Hello, I'm Sam"),
                Message::assistant("Hi Sam! How can I help?"),
            ],
            tasks: vec![
                TaskRecord {
                    task: "Buy milk".to_string(),
                    deadline: NO_DEADLINE.to_string(),
                    added: "2025-01-01 09:00".to_string(),
                },
                TaskRecord {
                    task: "Write report".to_string(),
                    deadline: "2025-01-03 17:00".to_string(),
                    added: "2025-01-01 09:05".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMemoryStore::new(dir.path().join("manual_memory.json"));

        let doc = sample_document();
        store.save(&doc).await.unwrap();
        assert_eq!(store.load().await.unwrap(), doc);

        let empty = MemoryDocument::default();
        store.save(&empty).await.unwrap();
        assert_eq!(store.load().await.unwrap(), empty);
    }

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMemoryStore::new(dir.path().join("nope.json"));

        let doc = store.load().await.unwrap();
        assert!(doc.conversation.is_empty());
        assert!(doc.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual_memory.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let store = FileMemoryStore::new(&path);
        assert_eq!(store.load().await.unwrap(), MemoryDocument::default());
    }

    #[tokio::test]
    async fn test_invalid_utf8_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual_memory.json");
        std::fs::write(&path, [0xff, 0xfe, b'{', 0x80]).unwrap();

        let store = FileMemoryStore::new(&path);
        assert_eq!(store.load().await.unwrap(), MemoryDocument::default());
    }

    #[tokio::test]
    async fn test_missing_fields_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual_memory.json");
        std::fs::write(&path, r#"{"tasks": []}"#).unwrap();

        let doc = FileMemoryStore::new(&path).load().await.unwrap();
        assert_eq!(doc, MemoryDocument::default());
    }

    #[tokio::test]
    async fn test_saved_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("manual_memory.json");
        let store = FileMemoryStore::new(&path);
        store.save(&sample_document()).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n    \"conversation\": ["));
        let conv = raw.find("\"conversation\"").unwrap();
        let tasks = raw.find("\"tasks\"").unwrap();
        assert!(conv < tasks);
    }

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = InMemoryMemoryStore::new();
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load().await.unwrap(), MemoryDocument::default());

        store.save(&sample_document()).await.unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().await.unwrap(), sample_document());
    }
}
