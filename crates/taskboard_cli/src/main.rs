//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::db::open_db_in_memory;
use taskboard_core::{
    project_page, PageQuery, SqliteSnapshotRepository, TaskDraft, TaskStore,
};

fn main() {
    println!("taskboard_core version={}", taskboard_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("smoke failed: db open: {err}");
            std::process::exit(1);
        }
    };

    let mut store = match TaskStore::open(SqliteSnapshotRepository::new(conn)) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("smoke failed: store open: {err}");
            std::process::exit(1);
        }
    };

    let draft = TaskDraft {
        title: "Smoke-test the task store".to_string(),
        description: None,
        assignee: "u-1".to_string(),
        priority: "high".to_string(),
        due_date: "2099-01-01".to_string(),
        status: "todo".to_string(),
    };
    if let Err(err) = store.add_task(draft) {
        eprintln!("smoke failed: add: {err}");
        std::process::exit(1);
    }

    let page = project_page(store.tasks(), &PageQuery::first_page(5));
    println!(
        "smoke ok tasks={} page_items={} total_pages={}",
        store.len(),
        page.items.len(),
        page.total_pages
    );
}
