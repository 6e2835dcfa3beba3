//! User management: searchable list with status toggle and delete, the
//! add-user form, and the user detail page that switches into edit mode.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use datatable::{Align, Column, Table, TableError, TableOptions};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::dashboard::{UserStats, user_stats};
use super::phone::validate_mobile;
use super::{PageContext, form_field, parse_id};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{DataTable, RowAction};
use crate::net::types::{ApiUser, UserForm, UserRow, UserUpdate, status_label};

pub const USERS_PATH: &str = "/dashboard/users";
pub const MSG_USER_REQUIRED: &str = "نام و شماره موبایل الزامی است";
pub const MSG_PASSWORD_MISMATCH: &str = "رمز عبور و تکرار آن یکسان نیست";
pub const MSG_USER_FIELDS_REQUIRED: &str = "نام، نام خانوادگی، کد ملی و نام پدر الزامی است";
pub const MSG_INVALID_NATIONAL_ID: &str = "کد ملی باید ۱۰ رقم باشد";
pub const MSG_PASSWORD_TOO_SHORT: &str = "رمز عبور باید حداقل ۴ کاراکتر باشد";
pub const MSG_INVALID_USER_ID: &str = "شناسه کاربر نامعتبر است";
pub const MIN_UPDATE_PASSWORD_CHARS: usize = 4;
const UNKNOWN_DATE: &str = "نامشخص";

pub fn user_path(id: i64) -> String {
    format!("{USERS_PATH}/{id}")
}

/// Column layout of the users list.
///
/// # Errors
///
/// Returns [`TableError::ZeroPageSize`] for a zero `page_size`.
pub fn build_user_table(page_size: usize) -> Result<Table<UserRow>, TableError> {
    let columns = vec![
        Column::new("id", "شناسه").sortable().width("80px"),
        Column::new("name", "نام").sortable(),
        Column::new("family", "فامیل").sortable(),
        Column::new("mobile", "شماره موبایل").align(Align::Left),
        Column::new("national_id", "کد ملی").render(|value, _| {
            if value.is_empty() { "-".to_owned() } else { value.to_string() }
        }),
        Column::new("status", "وضعیت").sortable().align(Align::Center),
    ];
    let options = TableOptions { page_size, selectable: true, ..TableOptions::default() };
    Ok(Table::new(columns, options)?
        .with_selection_change(|rows: &[UserRow]| log::debug!("{} users selected", rows.len())))
}

/// Trim and check the add-user form; the mobile comes back normalized.
///
/// # Errors
///
/// Returns the user-facing message for the first problem found.
pub fn validate_user_form(form: &UserForm) -> Result<UserForm, &'static str> {
    if form.name.trim().is_empty() || form.mobile.trim().is_empty() {
        return Err(MSG_USER_REQUIRED);
    }
    let mobile = validate_mobile(&form.mobile)?;
    if form.password != form.confirm_password {
        return Err(MSG_PASSWORD_MISMATCH);
    }
    Ok(UserForm {
        name: form.name.trim().to_owned(),
        family: form.family.trim().to_owned(),
        national_id: form.national_id.trim().to_owned(),
        father_name: form.father_name.trim().to_owned(),
        mobile,
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
    })
}

/// Check the edit form. Every profile field is required; the password pair
/// is optional but must match and meet the minimum length when given.
///
/// # Errors
///
/// Returns the user-facing message for the first problem found.
pub fn validate_user_update(form: &UserForm) -> Result<UserUpdate, &'static str> {
    let name = form.name.trim();
    let family = form.family.trim();
    let national_id = form.national_id.trim();
    let father_name = form.father_name.trim();
    if [name, family, national_id, father_name].iter().any(|v| v.is_empty()) {
        return Err(MSG_USER_FIELDS_REQUIRED);
    }
    if national_id.len() != 10 || !national_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MSG_INVALID_NATIONAL_ID);
    }
    let mobile = validate_mobile(&form.mobile)?;
    let password = if form.password.is_empty() && form.confirm_password.is_empty() {
        None
    } else if form.password.chars().count() < MIN_UPDATE_PASSWORD_CHARS {
        return Err(MSG_PASSWORD_TOO_SHORT);
    } else if form.password != form.confirm_password {
        return Err(MSG_PASSWORD_MISMATCH);
    } else {
        Some(form.password.clone())
    };
    Ok(UserUpdate {
        name: name.to_owned(),
        family: family.to_owned(),
        national_id: national_id.to_owned(),
        father_name: father_name.to_owned(),
        mobile,
        confirm_password: password.clone(),
        password,
    })
}

/// Membership date shown on the detail page: the date part of an ISO
/// timestamp, or a placeholder when the backend has none.
pub fn joined_label(created_at: Option<&str>) -> String {
    created_at
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| UNKNOWN_DATE.to_owned(), |v| v.split(['T', ' ']).next().unwrap_or(v).to_owned())
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let open_user = RwSignal::new(None::<i64>);
    let table = match build_user_table(ctx.page_size()) {
        Ok(t) => RwSignal::new(t.with_row_click(move |user: &UserRow| open_user.set(Some(user.id)))),
        Err(e) => {
            log::error!("users table misconfigured: {e}");
            return view! { <p class="form-error">{e.to_string()}</p> }.into_any();
        }
    };
    let stats = RwSignal::new(UserStats::default());
    let pending_delete = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(false);

    Effect::new(move || {
        if let Some(id) = open_user.get() {
            open_user.set(None);
            navigate(&user_path(id), NavigateOptions::default());
        }
    });

    let load = move || {
        table.update(|t| t.set_loading(true));
        leptos::task::spawn_local(async move {
            let result = ctx.client().list_users().await;
            table.update(|t| t.set_loading(false));
            match result {
                Ok(rows) => {
                    stats.set(user_stats(&rows));
                    table.update(|t| t.set_data(rows));
                }
                Err(e) => ctx.report(&e),
            }
        });
    };
    load();

    let toggle = move |key: String| {
        let Some(id) = parse_id(&key) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match ctx.client().toggle_user(id).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "وضعیت کاربر تغییر کرد".to_owned()));
                    load();
                }
                Err(e) => ctx.report(&e),
            }
        });
    };

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match ctx.client().delete_user(id).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "کاربر حذف شد".to_owned()));
                    load();
                }
                Err(e) => ctx.report(&e),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    let actions = vec![
        RowAction::new("مشاهده", "btn--secondary", move |key| open_user.set(parse_id(&key))),
        RowAction::new("تغییر وضعیت", "btn--secondary", toggle),
        RowAction::new("حذف", "btn--danger", move |key| pending_delete.set(parse_id(&key))),
    ];

    view! {
        <section class="list-page">
            <header class="list-page__header">
                <h2 class="page-title">"کاربران"</h2>
                <A href="/dashboard/users/add" attr:class="btn btn--primary">
                    "افزودن کاربر"
                </A>
            </header>
            <div class="stat-grid">
                <div class="stat-card">
                    <div class="stat-card__title">"کل کاربران"</div>
                    <div class="stat-card__value">{move || stats.get().total.to_string()}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__title">"کاربران فعال"</div>
                    <div class="stat-card__value">{move || stats.get().active.to_string()}</div>
                </div>
            </div>
            <DataTable table=table actions=actions />
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="حذف کاربر"
                    message="این کاربر برای همیشه حذف می‌شود."
                    busy=deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </section>
    }
    .into_any()
}

#[component]
pub fn AddUserPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let form = RwSignal::new(UserForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match form.with(validate_user_form) {
            Ok(p) => p,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match ctx.client().create_user(&payload).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "کاربر با موفقیت ایجاد شد".to_owned()));
                    navigate(USERS_PATH, NavigateOptions::default());
                }
                Err(e) if e.is_unauthorized() => ctx.report(&e),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="form-page">
            <h2 class="page-title">"افزودن کاربر"</h2>
            <form class="form-grid" on:submit=on_submit>
                {form_field("نام", "text", form, |f| &f.name, |f, v| f.name = v)}
                {form_field("فامیل", "text", form, |f| &f.family, |f, v| f.family = v)}
                {form_field("کد ملی", "text", form, |f| &f.national_id, |f, v| f.national_id = v)}
                {form_field("نام پدر", "text", form, |f| &f.father_name, |f, v| f.father_name = v)}
                {form_field("شماره موبایل", "tel", form, |f| &f.mobile, |f, v| f.mobile = v)}
                {form_field("رمز عبور", "password", form, |f| &f.password, |f, v| f.password = v)}
                {form_field("تکرار رمز عبور", "password", form, |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                <Show when=move || error.with(Option::is_some)>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="form-actions">
                    <A href=USERS_PATH attr:class="btn">
                        "انصراف"
                    </A>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "در حال ذخیره..." } else { "ذخیره" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[component]
pub fn EditUserPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("id")).as_deref().and_then(parse_id));
    let user = RwSignal::new(None::<ApiUser>);
    let form = RwSignal::new(UserForm::default());
    let editing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        let Some(id) = user_id.get() else {
            error.set(Some(MSG_INVALID_USER_ID.to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match ctx.client().get_user(id).await {
                Ok(fetched) => {
                    form.set(UserForm::from(&fetched));
                    user.set(Some(fetched));
                }
                Err(e) if e.is_unauthorized() => ctx.report(&e),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let start_edit = move |_| {
        error.set(None);
        editing.set(true);
    };

    let cancel_edit = move |_| {
        if let Some(current) = user.get_untracked() {
            form.set(UserForm::from(&current));
        }
        error.set(None);
        editing.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let payload = match form.with(validate_user_update) {
            Ok(p) => p,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        leptos::task::spawn_local(async move {
            match ctx.client().update_user(id, &payload).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "اطلاعات کاربر به‌روزرسانی شد".to_owned()));
                    editing.set(false);
                    reload.update(|n| *n += 1);
                }
                Err(e) if e.is_unauthorized() => ctx.report(&e),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    let detail = move |label: &'static str, value: fn(&UserForm) -> &str| {
        view! {
            <div class="detail-list__item">
                <dt>{label}</dt>
                <dd>{move || form.with(|f| value(f).to_owned())}</dd>
            </div>
        }
    };

    view! {
        <section class="form-page">
            <header class="list-page__header">
                <h2 class="page-title">
                    {move || if editing.get() { "ویرایش کاربر" } else { "مشاهده کاربر" }}
                </h2>
                <A href=USERS_PATH attr:class="btn">
                    "بازگشت"
                </A>
            </header>
            <Show
                when=move || user.with(Option::is_some)
                fallback=move || {
                    view! {
                        <p class="form-page__status">
                            {move || error.get().unwrap_or_else(|| "در حال بارگذاری...".to_owned())}
                        </p>
                    }
                }
            >
                <div class="user-card">
                    <h3 class="user-card__name">
                        {move || user.with(|u| u.as_ref().map(|u| format!("{} {}", u.name, u.family.as_deref().unwrap_or_default()).trim_end().to_owned()).unwrap_or_default())}
                    </h3>
                    <span class="user-card__status">
                        {move || user.with(|u| u.as_ref().map_or("", |u| status_label(u.status)))}
                    </span>
                    <div class="user-card__joined">
                        "تاریخ عضویت: "
                        {move || user.with(|u| joined_label(u.as_ref().and_then(|u| u.created_at.as_deref())))}
                    </div>
                </div>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <dl class="detail-list">
                                {detail("نام", |f| &f.name)}
                                {detail("نام خانوادگی", |f| &f.family)}
                                {detail("کد ملی", |f| &f.national_id)}
                                {detail("نام پدر", |f| &f.father_name)}
                                {detail("شماره موبایل", |f| &f.mobile)}
                            </dl>
                            <div class="form-actions">
                                <button class="btn btn--primary" on:click=start_edit>
                                    "ویرایش"
                                </button>
                            </div>
                        }
                    }
                >
                    <form class="form-grid" on:submit=on_submit>
                        {form_field("نام", "text", form, |f| &f.name, |f, v| f.name = v)}
                        {form_field("نام خانوادگی", "text", form, |f| &f.family, |f, v| f.family = v)}
                        {form_field("کد ملی", "text", form, |f| &f.national_id, |f, v| f.national_id = v)}
                        {form_field("نام پدر", "text", form, |f| &f.father_name, |f, v| f.father_name = v)}
                        {form_field("شماره موبایل", "tel", form, |f| &f.mobile, |f, v| f.mobile = v)}
                        {form_field("رمز عبور جدید (اختیاری)", "password", form, |f| &f.password, |f, v| f.password = v)}
                        {form_field("تکرار رمز عبور جدید", "password", form, |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                        <Show when=move || error.with(Option::is_some)>
                            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="form-actions">
                            <button class="btn" type="button" on:click=cancel_edit>
                                "انصراف"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "در حال ذخیره..." } else { "ذخیره تغییرات" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </section>
    }
}
