use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use locale_prefs_core::ReferenceDataset;

use crate::dataset_file::DatasetFile;
use crate::error::{RuntimeError, RuntimeResult};
use crate::manifest::DatasetManifest;

pub fn load_manifest(path: &Path) -> RuntimeResult<DatasetManifest> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn parse_sha256(value: &str) -> RuntimeResult<[u8; 32]> {
    let trimmed = value.trim();
    let hex_digits = trimmed.strip_prefix("sha256:").unwrap_or(trimmed);
    let bytes = hex::decode(hex_digits).map_err(|_| RuntimeError::InvalidHash)?;
    if bytes.len() != 32 {
        return Err(RuntimeError::InvalidHash);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Reads the dataset file named by the manifest, verifies its digest, and
/// converts it into a core dataset.
pub fn load_dataset(manifest: &DatasetManifest, root: &Path) -> RuntimeResult<ReferenceDataset> {
    let path = root.join(&manifest.dataset.path);
    let bytes = fs::read(&path)?;
    let expected = parse_sha256(&manifest.dataset.hash)?;
    let actual: [u8; 32] = Sha256::digest(&bytes).into();
    if expected != actual {
        return Err(RuntimeError::HashMismatch(manifest.dataset.path.clone()));
    }
    let contents = String::from_utf8(bytes)
        .map_err(|_| RuntimeError::InvalidDataset(String::from("dataset is not utf-8")))?;
    DatasetFile::from_json(&contents)?.into_dataset()
}

/// Manifest-driven load rooted at the manifest's own directory.
pub fn load_verified(manifest_path: &Path) -> RuntimeResult<(DatasetManifest, ReferenceDataset)> {
    let manifest = load_manifest(manifest_path)?;
    let root = manifest_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let dataset = load_dataset(&manifest, &root)?;
    Ok((manifest, dataset))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use sha2::{Digest, Sha256};

    use super::{load_verified, parse_sha256};
    use crate::error::RuntimeError;

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("locale_prefs_dataset_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn write_release(dir: &PathBuf, dataset_json: &str) -> PathBuf {
        let dataset_path = dir.join("dataset.json");
        fs::write(&dataset_path, dataset_json).expect("write dataset");
        let digest = hex::encode(Sha256::digest(dataset_json.as_bytes()));
        let manifest = format!(
            r#"{{
                "schema": 1,
                "cldr_version": "45",
                "generated_at": "2026-03-01T00:00:00Z",
                "dataset": {{
                    "path": "dataset.json",
                    "hash": "sha256:{digest}",
                    "size": {size}
                }}
            }}"#,
            digest = digest,
            size = dataset_json.len()
        );
        let manifest_path = dir.join("manifest.json");
        fs::write(&manifest_path, manifest).expect("write manifest");
        manifest_path
    }

    const DATASET: &str = r#"{
        "version": "45",
        "languages": {
            "en": [{"territory": "US", "population": 254000000}]
        },
        "territories": {
            "US": {
                "currency": "USD",
                "timezones": ["America/New_York"],
                "measurement": "ussystem"
            }
        }
    }"#;

    #[test]
    fn parses_prefixed_hash() {
        let bytes =
            parse_sha256("sha256:000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
                .expect("hash");
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[31], 0x1f);
    }

    #[test]
    fn rejects_short_hash() {
        let err = parse_sha256("sha256:abcd").expect_err("short hash should fail");
        assert!(matches!(err, RuntimeError::InvalidHash));
    }

    #[test]
    fn loads_verified_release() {
        let dir = temp_dir();
        let manifest_path = write_release(&dir, DATASET);

        let (manifest, dataset) = load_verified(&manifest_path).expect("load");
        assert_eq!(manifest.cldr_version, "45");
        assert_eq!(dataset.version(), "45");
        assert!(dataset.default_territory("en").is_some());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn tampered_dataset_fails_hash_check() {
        let dir = temp_dir();
        let manifest_path = write_release(&dir, DATASET);
        let tampered = DATASET.replace("USD", "XXX");
        fs::write(dir.join("dataset.json"), tampered).expect("tamper");

        let err = load_verified(&manifest_path).expect_err("hash mismatch");
        assert!(matches!(err, RuntimeError::HashMismatch(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
