//! Finding input photos on disk.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;

/// Discovers photos under a file or directory.
pub struct PhotoDiscovery {
    config: ProcessingConfig,
    exclude: Option<PathBuf>,
}

/// A photo found on disk.
#[derive(Debug, Clone)]
pub struct DiscoveredPhoto {
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl PhotoDiscovery {
    pub fn new(config: ProcessingConfig) -> Self {
        Self {
            config,
            exclude: None,
        }
    }

    /// Skip everything below `dir` (typically the artifact output directory,
    /// so re-runs do not ingest their own garments).
    pub fn excluding(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exclude = Some(dir.into());
        self
    }

    /// Discover all supported photos at a path.
    ///
    /// A file is returned as-is if its extension is supported; a directory is
    /// walked recursively. Results are sorted by path.
    pub fn discover(&self, path: &Path) -> Vec<DiscoveredPhoto> {
        if path.is_file() {
            return match std::fs::metadata(path) {
                Ok(meta) if self.is_supported(path) => vec![DiscoveredPhoto {
                    path: path.to_path_buf(),
                    size: meta.len(),
                }],
                _ => vec![],
            };
        }

        let exclude = self.exclude.as_ref().and_then(|d| d.canonicalize().ok());
        let mut photos: Vec<DiscoveredPhoto> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| match &exclude {
                Some(ex) => e.path().canonicalize().map(|p| &p != ex).unwrap_or(true),
                None => true,
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && self.is_supported(e.path()))
            .filter_map(|e| {
                let size = e.metadata().ok()?.len();
                Some(DiscoveredPhoto {
                    path: e.into_path(),
                    size,
                })
            })
            .collect();

        photos.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!("Discovered {} photos under {:?}", photos.len(), path);
        photos
    }

    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// Total size of discovered photos in bytes.
    pub fn total_size(photos: &[DiscoveredPhoto]) -> u64 {
        photos.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported() {
        let discovery = PhotoDiscovery::new(ProcessingConfig::default());
        assert!(discovery.is_supported(Path::new("look.jpg")));
        assert!(discovery.is_supported(Path::new("look.JPG")));
        assert!(discovery.is_supported(Path::new("look.webp")));
        assert!(!discovery.is_supported(Path::new("look.json")));
        assert!(!discovery.is_supported(Path::new("look")));
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.png"), b"12").unwrap();
        std::fs::write(dir.path().join("sub/a.jpg"), b"1").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let photos = PhotoDiscovery::new(ProcessingConfig::default()).discover(dir.path());
        let names: Vec<_> = photos
            .iter()
            .map(|p| p.path.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("b.png"), PathBuf::from("sub/a.jpg")]);
        assert_eq!(PhotoDiscovery::total_size(&photos), 3);
    }

    #[test]
    fn test_excluded_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        std::fs::write(dir.path().join("photo.jpg"), b"1").unwrap();
        std::fs::write(out.join("clothing_1_x.jpg"), b"1").unwrap();

        let photos = PhotoDiscovery::new(ProcessingConfig::default())
            .excluding(&out)
            .discover(dir.path());
        assert_eq!(photos.len(), 1);
        assert!(photos[0].path.ends_with("photo.jpg"));
    }

    #[test]
    fn test_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.jpeg");
        std::fs::write(&file, b"abc").unwrap();
        let photos = PhotoDiscovery::new(ProcessingConfig::default()).discover(&file);
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].size, 3);
    }
}
