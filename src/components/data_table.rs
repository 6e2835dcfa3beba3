//! Generic list view over a [`datatable::Table`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own a `RwSignal<Table<T>>` and feed it data and loading flags; this
//! component renders a memoized [`TableSnapshot`] and routes header, row,
//! checkbox and pager clicks back into the table. The search box lives
//! outside the reactive body so typing never rebuilds (and unfocuses) it.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use datatable::{HeaderSnapshot, Record, RowSnapshot, SortDirection, Table, TableSnapshot};
use leptos::prelude::*;

pub const LOADING_TEXT: &str = "در حال بارگذاری...";
pub const ACTIONS_TITLE: &str = "عملیات";

/// Per-row button; `on_click` receives the row's record key.
#[derive(Clone)]
pub struct RowAction {
    pub label: &'static str,
    pub class: &'static str,
    pub on_click: Callback<String>,
}

impl RowAction {
    pub fn new(label: &'static str, class: &'static str, on_click: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self { label, class, on_click: Callback::new(on_click) }
    }
}

#[component]
pub fn DataTable<T>(table: RwSignal<Table<T>>, #[prop(optional)] actions: Vec<RowAction>) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let snapshot = Memo::new(move |_| table.with(Table::snapshot));
    let actions = StoredValue::new(actions);
    let (searchable, placeholder) =
        table.with_untracked(|t| (t.options().searchable, t.options().search_placeholder.clone()));

    let search = searchable.then(|| {
        view! {
            <div class="data-table__search">
                <input
                    class="data-table__search-input"
                    type="search"
                    placeholder=placeholder
                    prop:value=move || snapshot.with(|s| s.search_term.clone())
                    prop:disabled=move || snapshot.with(|s| s.loading)
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        table.update(|t| t.set_search(term));
                    }
                />
                <Show when=move || snapshot.with(|s| s.selectable && s.selected_count > 0)>
                    <span class="data-table__selected-count">
                        {move || format!("{} مورد انتخاب شده", snapshot.with(|s| s.selected_count))}
                    </span>
                </Show>
            </div>
        }
    });

    view! {
        <div class="data-table" dir="rtl">
            {search}
            {move || render_body(snapshot.get(), table, actions)}
        </div>
    }
}

fn render_body<T>(snap: TableSnapshot, table: RwSignal<Table<T>>, actions: StoredValue<Vec<RowAction>>) -> AnyView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let has_actions = actions.with_value(|a| !a.is_empty());
    let colspan = (snap.colspan() + usize::from(has_actions)).to_string();
    let aligns: Vec<&'static str> = snap.headers.iter().map(|h| h.align.as_str()).collect();
    let loading = snap.loading;
    let selectable = snap.selectable;
    let all_selected = snap.all_selected;

    let select_all = selectable.then(|| {
        view! {
            <th class="data-table__select">
                <input
                    type="checkbox"
                    aria-label="انتخاب همه"
                    prop:checked=all_selected
                    disabled=loading
                    on:change=move |_| table.update(Table::toggle_select_all)
                />
            </th>
        }
    });
    let headers = snap.headers.into_iter().map(|h| header_cell(h, table)).collect_view();
    let actions_header = has_actions.then(|| view! { <th class="data-table__th">{ACTIONS_TITLE}</th> });

    let body = if loading {
        view! {
            <tr>
                <td class="data-table__status" colspan=colspan>
                    {LOADING_TEXT}
                </td>
            </tr>
        }
        .into_any()
    } else if snap.rows.is_empty() {
        view! {
            <tr>
                <td class="data-table__status" colspan=colspan>
                    {snap.empty_message}
                </td>
            </tr>
        }
        .into_any()
    } else {
        snap.rows
            .into_iter()
            .map(|row| body_row(row, &aligns, selectable, table, actions))
            .collect_view()
            .into_any()
    };

    let pager = snap.show_pager.then(|| {
        let current = snap.current_page;
        let at_first = current <= 1;
        let at_last = current >= snap.total_pages;
        let buttons = snap
            .page_buttons
            .into_iter()
            .map(|page| {
                let class = if page == current {
                    "btn data-table__page data-table__page--active"
                } else {
                    "btn data-table__page"
                };
                view! {
                    <button class=class on:click=move |_| table.update(|t| t.set_page(page))>
                        {page.to_string()}
                    </button>
                }
            })
            .collect_view();
        view! {
            <div class="data-table__pager">
                <span class="data-table__range">{range_label(snap.range, snap.filtered_count)}</span>
                <div class="data-table__pages">
                    <button
                        class="btn data-table__page"
                        disabled=at_first
                        on:click=move |_| table.update(Table::prev_page)
                    >
                        "قبلی"
                    </button>
                    {buttons}
                    <button
                        class="btn data-table__page"
                        disabled=at_last
                        on:click=move |_| table.update(Table::next_page)
                    >
                        "بعدی"
                    </button>
                </div>
            </div>
        }
    });

    view! {
        <div class="data-table__scroll">
            <table class="data-table__table">
                <thead>
                    <tr>{select_all} {headers} {actions_header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
        {pager}
    }
    .into_any()
}

fn header_cell<T>(header: HeaderSnapshot, table: RwSignal<Table<T>>) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let HeaderSnapshot { key, title, align, width, sortable, sort } = header;
    let class = if sortable { "data-table__th data-table__th--sortable" } else { "data-table__th" };
    let style = width.map(|w| format!("width: {w};"));
    view! {
        <th
            class=class
            style=style
            data-align=align.as_str()
            aria-sort=aria_sort(sort)
            on:click=move |_| {
                if sortable {
                    table.update(|t| t.toggle_sort(&key));
                }
            }
        >
            {title}
            <span class="data-table__sort">{sort_indicator(sortable, sort)}</span>
        </th>
    }
}

fn body_row<T>(
    row: RowSnapshot,
    aligns: &[&'static str],
    selectable: bool,
    table: RwSignal<Table<T>>,
    actions: StoredValue<Vec<RowAction>>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let RowSnapshot { key, cells, selected } = row;
    let clickable = table.with_untracked(Table::has_row_click);
    let class = row_class(selected, clickable);

    let checkbox = selectable.then(|| {
        let key = key.clone();
        view! {
            <td class="data-table__select" on:click=|ev| ev.stop_propagation()>
                <input
                    type="checkbox"
                    prop:checked=selected
                    on:change=move |_| table.update(|t| t.toggle_row(&key))
                />
            </td>
        }
    });
    let cells = cells
        .into_iter()
        .zip(aligns.iter().copied())
        .map(|(text, align)| view! { <td data-align=align>{text}</td> })
        .collect_view();
    let buttons = actions.with_value(|list| {
        (!list.is_empty()).then(|| {
            let buttons = list
                .iter()
                .map(|action| {
                    let key = key.clone();
                    let on_click = action.on_click;
                    view! {
                        <button class=format!("btn {}", action.class) on:click=move |_| on_click.run(key.clone())>
                            {action.label}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <td class="data-table__actions" on:click=|ev| ev.stop_propagation()>
                    {buttons}
                </td>
            }
        })
    });

    view! {
        <tr
            class=class
            on:click=move |_| table.with_untracked(|t| t.click_row(&key))
        >
            {checkbox}
            {cells}
            {buttons}
        </tr>
    }
}

fn row_class(selected: bool, clickable: bool) -> String {
    let mut class = String::from("data-table__row");
    if selected {
        class.push_str(" data-table__row--selected");
    }
    if clickable {
        class.push_str(" data-table__row--clickable");
    }
    class
}

/// "showing X to Y of Z records", or nothing when no row is shown.
pub fn range_label(range: Option<(usize, usize)>, filtered: usize) -> String {
    range.map_or_else(String::new, |(start, end)| format!("نمایش {start} تا {end} از {filtered} رکورد"))
}

pub fn sort_indicator(sortable: bool, sort: Option<SortDirection>) -> &'static str {
    match sort {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None if sortable => "↕",
        None => "",
    }
}

fn aria_sort(sort: Option<SortDirection>) -> &'static str {
    match sort {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}
