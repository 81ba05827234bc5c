use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally zipped.
    /// Returns the final path, or `None` when the user declined to overwrite.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists() && !confirm_overwrite(dest)? {
            println!("❌ Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy database
        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if let Err(e) = fs::remove_file(dest) {
                eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
            } else {
                println!("🗑️ Removed uncompressed backup: {}", dest.display());
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Log in DB
        if let Ok(conn) = Connection::open(src) {
            ttlog_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        dest.display()
    );
    print!("> ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rplaytime.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::{RecordStore, SqliteStore};
    use std::env;

    fn tmp(name: &str) -> PathBuf {
        let p = env::temp_dir().join(name);
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn plain_backup_is_a_readable_copy() {
        let db = tmp("rplaytime_backup_src.sqlite");
        let dest = tmp("rplaytime_backup_dest.sqlite");
        {
            let mut store = SqliteStore::open(&db).unwrap();
            store.create("Chess", 0.0, 5.0, 5).unwrap();
        }

        let out = BackupLogic::backup(&db.to_string_lossy(), &dest.to_string_lossy(), false)
            .unwrap()
            .unwrap();

        let copy = SqliteStore::open(&out).unwrap();
        assert_eq!(copy.list_all().unwrap().len(), 1);
        fs::remove_file(&db).ok();
        fs::remove_file(&dest).ok();
    }

    #[test]
    fn compressed_backup_replaces_the_copy_with_a_zip() {
        let db = tmp("rplaytime_backup_zsrc.sqlite");
        let dest = tmp("rplaytime_backup_zdest.sqlite");
        let zipped = tmp("rplaytime_backup_zdest.zip");
        SqliteStore::open(&db).unwrap();

        let out = BackupLogic::backup(&db.to_string_lossy(), &dest.to_string_lossy(), true)
            .unwrap()
            .unwrap();

        assert_eq!(out, zipped);
        assert!(zipped.exists());
        assert!(!dest.exists());
        fs::remove_file(&db).ok();
        fs::remove_file(&zipped).ok();
    }

    #[test]
    fn missing_database_is_an_error() {
        let db = tmp("rplaytime_backup_missing.sqlite");
        let dest = tmp("rplaytime_backup_missing_dest.sqlite");

        assert!(BackupLogic::backup(&db.to_string_lossy(), &dest.to_string_lossy(), false).is_err());
    }
}
