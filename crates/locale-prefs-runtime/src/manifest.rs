use serde::{Deserialize, Serialize};

/// Versioned description of a dataset release: which CLDR drop it was
/// derived from and the integrity digests of its files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub schema: u32,
    pub cldr_version: String,
    pub generated_at: String,
    pub dataset: FileEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlays: Option<Vec<FileEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub hash: String,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::{DatasetManifest, FileEntry};

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = DatasetManifest {
            schema: 1,
            cldr_version: "45".to_string(),
            generated_at: "2026-03-01T00:00:00Z".to_string(),
            dataset: FileEntry {
                path: "dataset.json".to_string(),
                hash: "sha256:abc".to_string(),
                size: 1024,
            },
            overlays: None,
        };
        let json = serde_json::to_string(&manifest).expect("serialize");
        assert!(!json.contains("overlays"));
        let parsed: DatasetManifest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.cldr_version, "45");
        assert_eq!(parsed.dataset.hash, "sha256:abc");
    }
}
