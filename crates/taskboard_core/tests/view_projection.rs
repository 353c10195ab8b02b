use taskboard_core::{project_page, PageCursor, PageQuery, Task};
use uuid::Uuid;

fn task(title: &str, status: &str) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        assignee: "u-1".to_string(),
        priority: "medium".to_string(),
        due_date: "2026-12-01".to_string(),
        status: status.to_string(),
    }
}

/// Twelve tasks where every fourth one is done.
fn twelve_tasks() -> Vec<Task> {
    (1..=12)
        .map(|n| {
            let status = if n % 4 == 0 { "done" } else { "todo" };
            task(&format!("Task {n:02}"), status)
        })
        .collect()
}

fn query(search: &str, status: &str, page: u32) -> PageQuery {
    PageQuery {
        search_title: search.to_string(),
        status: status.to_string(),
        page,
        page_size: 5,
    }
}

#[test]
fn first_page_of_unfiltered_collection() {
    let tasks = twelve_tasks();
    let page = project_page(&tasks, &query("", "", 1));

    assert_eq!(page.matched, 12);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].title, "Task 01");
    assert_eq!(page.items[4].title, "Task 05");
}

#[test]
fn last_partial_page_holds_the_remainder() {
    let tasks = twelve_tasks();
    let page = project_page(&tasks, &query("", "", 3));

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].title, "Task 11");
    assert_eq!(page.items[1].title, "Task 12");
}

#[test]
fn status_filter_reduces_page_count() {
    let tasks = twelve_tasks();
    let page = project_page(&tasks, &query("", "done", 1));

    assert_eq!(page.matched, 3);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.iter().all(|task| task.status == "done"));
}

#[test]
fn title_search_is_case_insensitive_substring_match() {
    let tasks = vec![task("Write Report", "todo"), task("Buy groceries", "todo")];
    let page = project_page(&tasks, &query("report", "", 1));

    assert_eq!(page.matched, 1);
    assert_eq!(page.items[0].title, "Write Report");
}

#[test]
fn search_and_status_filters_combine() {
    let tasks = twelve_tasks();
    let page = project_page(&tasks, &query("task 0", "done", 1));

    // Only "Task 04" and "Task 08" are done within "Task 01".."Task 09".
    assert_eq!(page.matched, 2);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn no_match_yields_zero_pages_and_no_results_state() {
    let tasks = twelve_tasks();
    let page = project_page(&tasks, &query("nothing here", "", 1));

    assert_eq!(page.matched, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert!(page.is_no_results());
}

#[test]
fn stale_out_of_range_page_yields_empty_slice() {
    let tasks = twelve_tasks();
    // Page 3 was valid before filtering; with the filter only one page
    // remains and the projection does not clamp.
    let page = project_page(&tasks, &query("", "done", 3));

    assert_eq!(page.matched, 3);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn degenerate_page_inputs_yield_empty_page() {
    let tasks = twelve_tasks();

    let zero_page = project_page(&tasks, &query("", "", 0));
    assert!(zero_page.items.is_empty());

    let zero_size = project_page(
        &tasks,
        &PageQuery {
            search_title: String::new(),
            status: String::new(),
            page: 1,
            page_size: 0,
        },
    );
    assert!(zero_size.items.is_empty());
    assert_eq!(zero_size.total_pages, 0);
}

#[test]
fn projection_preserves_collection_order() {
    let tasks = twelve_tasks();
    let page = project_page(&tasks, &query("", "todo", 1));

    let titles: Vec<&str> = page.items.iter().map(|task| task.title.as_str()).collect();
    let mut sorted = titles.clone();
    sorted.sort_unstable();
    assert_eq!(titles, sorted);
}

#[test]
fn cursor_resets_on_filter_change() {
    let mut cursor = PageCursor::new();
    cursor.select(3);
    assert_eq!(cursor.current(), 3);

    cursor.filter_changed();
    assert_eq!(cursor.current(), 1);
}

#[test]
fn cursor_resets_when_collection_fits_on_one_page() {
    let mut cursor = PageCursor::new();
    cursor.select(2);

    cursor.collection_resized(12, 5);
    assert_eq!(cursor.current(), 2);

    cursor.collection_resized(5, 5);
    assert_eq!(cursor.current(), 1);
}

#[test]
fn cursor_select_clamps_to_first_page() {
    let mut cursor = PageCursor::new();
    cursor.select(0);
    assert_eq!(cursor.current(), 1);
}
