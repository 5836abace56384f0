use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use rand::RngCore;

use crate::fs_op::error::{FixtureError, PathContext};

/// Size of the scratch buffer random content is generated into.
const CHUNK: usize = 64 * 1024;

/// Create a single directory. The parent must already exist and `path` must
/// not; nothing is created implicitly.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<(), FixtureError> {
    let p = path.as_ref();
    fs::create_dir(p).at(p)
}

/// Create a new file at `path` holding exactly `len` random bytes drawn from
/// `rng`. Fails with `AlreadyExists` rather than truncating an existing file.
///
/// Returns the number of bytes written.
pub fn create_random_file<P: AsRef<Path>>(
    path: P,
    len: u64,
    rng: &mut impl RngCore,
) -> Result<u64, FixtureError> {
    let p = path.as_ref();
    let mut f = OpenOptions::new().write(true).create_new(true).open(p).at(p)?;

    let mut buf = vec![0u8; len.min(CHUNK as u64) as usize];
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(buf.len() as u64) as usize;
        rng.fill_bytes(&mut buf[..n]);
        f.write_all(&buf[..n]).at(p)?;
        remaining -= n as u64;
    }
    f.sync_all().at(p)?;
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn create_dir_requires_parent() {
        let td = tempdir().unwrap();
        let err = create_dir(td.path().join("a/b")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
        create_dir(td.path().join("a")).unwrap();
        create_dir(td.path().join("a/b")).unwrap();
        assert!(td.path().join("a/b").is_dir());
    }

    #[test]
    fn create_dir_refuses_existing() {
        let td = tempdir().unwrap();
        let err = create_dir(td.path()).unwrap_err();
        assert!(matches!(err, FixtureError::AlreadyExists { .. }));
    }

    #[test]
    fn random_file_has_exact_length() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        // Spans several chunks and ends on a partial one.
        let len = (CHUNK * 3 + 17) as u64;
        let p = td.path().join("big");
        assert_eq!(create_random_file(&p, len, &mut rng).unwrap(), len);
        assert_eq!(fs::metadata(&p).unwrap().len(), len);

        let empty = td.path().join("empty");
        create_random_file(&empty, 0, &mut rng).unwrap();
        assert_eq!(fs::metadata(&empty).unwrap().len(), 0);
    }

    #[test]
    fn random_file_never_overwrites() {
        let td = tempdir().unwrap();
        let p = td.path().join("keep");
        fs::write(&p, b"original").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = create_random_file(&p, 4, &mut rng).unwrap_err();
        assert!(matches!(err, FixtureError::AlreadyExists { .. }));
        assert_eq!(fs::read(&p).unwrap(), b"original");
    }

    #[test]
    fn same_seed_same_bytes() {
        let td = tempdir().unwrap();
        let a = td.path().join("a");
        let b = td.path().join("b");
        create_random_file(&a, 100_000, &mut StdRng::seed_from_u64(42)).unwrap();
        create_random_file(&b, 100_000, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }
}
