use super::*;

fn user(id: i64, active: bool) -> UserRow {
    UserRow {
        id,
        name: format!("u{id}"),
        family: "-".to_owned(),
        mobile: "09120000000".to_owned(),
        father_name: None,
        national_id: None,
        active,
    }
}

#[test]
fn user_stats_counts_active_users() {
    let users = vec![user(1, true), user(2, false), user(3, true)];
    assert_eq!(user_stats(&users), UserStats { total: 3, active: 2 });
}

#[test]
fn user_stats_of_empty_list_is_zero() {
    assert_eq!(user_stats(&[]), UserStats::default());
}

#[test]
fn nav_items_stay_inside_dashboard() {
    assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with("/dashboard")));
}
