use crate::db::store::{RecordStore, SqliteStore};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_duration;
use std::fs;

pub fn print_db_info(store: &SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORDS AND TOTAL TIME
    //
    let (count, total) = store.totals()?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!(
        "{}• Total tracked:{} {}",
        CYAN,
        RESET,
        format_duration(total)
    );

    //
    // 3) MOST PLAYED
    //
    let top = store
        .list_all()?
        .into_iter()
        .max_by_key(|r| r.total_time);

    match top {
        Some(r) => println!(
            "{}• Most played:{} {} ({})",
            CYAN,
            RESET,
            r.activity_name,
            r.total_readable()
        ),
        None => println!("{}• Most played:{} {}--{}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
