use crate::config::Config;
use crate::db::store::{RecordStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::record::RecordList;
use crate::utils::colors::{GREY, RESET, color_for_total};
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SqliteStore::open(&cfg.database)?;
    let list = RecordList::new(store.list_all()?);

    if list.is_empty() {
        println!("{}No records yet.{}", GREY, RESET);
        return Ok(());
    }

    print!("{}", render(&list, &cfg.time_format));
    Ok(())
}

/// Positions match the ones accepted by `select` in the tracking shell.
fn render(list: &RecordList, time_fmt: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("ID"),
        Column::new("Game"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Total Time"),
    ]);

    for (i, r) in list.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.id.to_string(),
            r.activity_name.clone(),
            r.start_str(time_fmt),
            r.end_str(time_fmt),
            format!(
                "{}{}{}",
                color_for_total(r.total_time),
                r.total_readable(),
                RESET
            ),
        ]);
    }

    table.render()
}
