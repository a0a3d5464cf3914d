use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway metadata directory laid out like the device's
pub struct MetadataDir {
    dir: TempDir,
}

impl MetadataDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_metadata(&self, id: &str, json: &str) {
        fs::write(self.path().join(format!("{}.metadata", id)), json).unwrap();
    }

    pub fn collection(&self, id: &str, name: &str, parent: &str) {
        self.write_metadata(
            id,
            &serde_json::json!({
                "parent": parent,
                "visibleName": name,
                "type": "CollectionType",
                "deleted": false,
            })
            .to_string(),
        );
    }

    /// Document whose content is `(extension, byte count)` files
    pub fn document(&self, id: &str, name: &str, parent: &str, content: &[(&str, usize)]) {
        self.write_metadata(
            id,
            &serde_json::json!({
                "parent": parent,
                "visibleName": name,
                "type": "DocumentType",
                "lastModified": "1600000000000",
            })
            .to_string(),
        );
        for (ext, len) in content {
            fs::write(self.path().join(format!("{}{}", id, ext)), vec![0u8; *len]).unwrap();
        }
    }
}
