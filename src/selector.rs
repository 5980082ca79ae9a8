// SPDX-License-Identifier: MPL-2.0
//! Random selection of an image file from a directory.
//!
//! Every pick rescans the directory from scratch: there is no caching, no
//! ordering guarantee, and no exclusion of previously shown files.

use crate::error::Result;
use crate::media;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Chooses a random eligible file from a configured directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSelector {
    directory: PathBuf,
}

impl ImageSelector {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Lists the regular files in the directory with a recognized image
    /// extension. Subdirectories are not traversed.
    ///
    /// Returns an error if the directory does not exist or cannot be read.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    /// Picks one candidate uniformly at random using the provided RNG.
    ///
    /// `Ok(None)` means the directory was readable but contained no matching
    /// files. A fixed RNG seed over fixed directory contents yields a
    /// reproducible choice.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<PathBuf>> {
        let mut candidates = self.candidates()?;
        // read_dir order varies between platforms and runs; sort so the
        // uniform choice is a pure function of directory contents and seed.
        candidates.sort();
        Ok(candidates.choose(rng).cloned())
    }

    /// Picks one candidate uniformly at random with the thread-local RNG.
    pub fn pick(&self) -> Result<Option<PathBuf>> {
        self.pick_with(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn candidates_keeps_only_recognized_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.jpeg");
        create_test_file(temp_dir.path(), "c.png");
        create_test_file(temp_dir.path(), "d.gif");
        create_test_file(temp_dir.path(), "e.bmp");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "clip.mp4");

        let selector = ImageSelector::new(temp_dir.path());
        let candidates = selector.candidates().expect("failed to list candidates");

        assert_eq!(candidates.len(), 5);
        assert!(candidates.iter().all(|p| media::is_supported_image(p)));
    }

    #[test]
    fn candidates_matches_extensions_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "LOUD.JPG");
        create_test_file(temp_dir.path(), "Mixed.PnG");

        let selector = ImageSelector::new(temp_dir.path());
        let candidates = selector.candidates().expect("failed to list candidates");

        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn candidates_skips_directories_with_image_names() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("folder.jpg")).expect("failed to create subdir");
        create_test_file(temp_dir.path(), "real.jpg");

        let selector = ImageSelector::new(temp_dir.path());
        let candidates = selector.candidates().expect("failed to list candidates");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].file_name().unwrap(), "real.jpg");
    }

    #[test]
    fn pick_returns_none_when_nothing_matches() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "readme.txt");

        let selector = ImageSelector::new(temp_dir.path());
        let picked = selector.pick().expect("pick should not error");

        assert!(picked.is_none());
    }

    #[test]
    fn pick_returns_none_for_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let selector = ImageSelector::new(temp_dir.path());
        assert!(selector.pick().expect("pick should not error").is_none());
    }

    #[test]
    fn pick_errors_when_directory_is_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist");

        let selector = ImageSelector::new(&missing);
        match selector.pick() {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn pick_with_fixed_seed_is_reproducible() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.png", "c.gif", "d.bmp", "e.jpeg"] {
            create_test_file(temp_dir.path(), name);
        }

        let selector = ImageSelector::new(temp_dir.path());

        let first = selector
            .pick_with(&mut StdRng::seed_from_u64(7))
            .expect("pick should succeed")
            .expect("should pick a file");
        let second = selector
            .pick_with(&mut StdRng::seed_from_u64(7))
            .expect("pick should succeed")
            .expect("should pick a file");

        assert_eq!(first, second);
    }

    #[test]
    fn pick_only_returns_listed_candidates() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "skip.txt");

        let selector = ImageSelector::new(temp_dir.path());
        let candidates = selector.candidates().expect("failed to list candidates");

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let picked = selector
                .pick_with(&mut rng)
                .expect("pick should succeed")
                .expect("should pick a file");
            assert!(candidates.contains(&picked));
        }
    }

    #[test]
    fn different_seeds_cover_multiple_candidates() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg"] {
            create_test_file(temp_dir.path(), name);
        }

        let selector = ImageSelector::new(temp_dir.path());

        let mut seen = std::collections::HashSet::new();
        for seed in 0..32u64 {
            let picked = selector
                .pick_with(&mut StdRng::seed_from_u64(seed))
                .expect("pick should succeed")
                .expect("should pick a file");
            seen.insert(picked);
        }

        // 32 independent draws over 4 files hitting only one of them would
        // mean the choice is not uniform.
        assert!(seen.len() > 1);
    }
}
