//! Car management: list (row click opens the editor), add and edit forms.

#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

use datatable::{Column, Table, TableError, TableOptions};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{PageContext, form_field, parse_id};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{DataTable, RowAction};
use crate::net::types::{CarForm, CarRow};

pub const CARS_PATH: &str = "/dashboard/cars";
pub const MSG_CAR_NAME_REQUIRED: &str = "نام خودرو الزامی است";
pub const MSG_INVALID_CAR_ID: &str = "شناسه خودرو نامعتبر است";

pub fn car_path(id: i64) -> String {
    format!("{CARS_PATH}/{id}")
}

/// # Errors
///
/// Returns [`TableError::ZeroPageSize`] for a zero `page_size`.
pub fn build_car_table(page_size: usize) -> Result<Table<CarRow>, TableError> {
    let columns = vec![Column::new("id", "شناسه").sortable().width("80px"), Column::new("name", "نام").sortable()];
    Table::new(columns, TableOptions { page_size, ..TableOptions::default() })
}

/// # Errors
///
/// Returns [`MSG_CAR_NAME_REQUIRED`] for a blank name.
pub fn validate_car_form(form: &CarForm) -> Result<CarForm, &'static str> {
    let name = form.name.trim();
    if name.is_empty() { Err(MSG_CAR_NAME_REQUIRED) } else { Ok(CarForm { name: name.to_owned() }) }
}

#[component]
pub fn CarsPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let open_car = RwSignal::new(None::<i64>);
    let table = match build_car_table(ctx.page_size()) {
        Ok(t) => RwSignal::new(t.with_row_click(move |car: &CarRow| open_car.set(Some(car.id)))),
        Err(e) => {
            log::error!("cars table misconfigured: {e}");
            return view! { <p class="form-error">{e.to_string()}</p> }.into_any();
        }
    };
    let pending_delete = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(false);

    Effect::new(move || {
        if let Some(id) = open_car.get() {
            open_car.set(None);
            navigate(&car_path(id), NavigateOptions::default());
        }
    });

    let load = move || {
        table.update(|t| t.set_loading(true));
        leptos::task::spawn_local(async move {
            let result = ctx.client().list_cars().await;
            table.update(|t| t.set_loading(false));
            match result {
                Ok(rows) => table.update(|t| t.set_data(rows)),
                Err(e) => ctx.report(&e),
            }
        });
    };
    load();

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match ctx.client().delete_car(id).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "خودرو حذف شد".to_owned()));
                    load();
                }
                Err(e) => ctx.report(&e),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    let actions = vec![
        RowAction::new("ویرایش", "btn--secondary", move |key| open_car.set(parse_id(&key))),
        RowAction::new("حذف", "btn--danger", move |key| pending_delete.set(parse_id(&key))),
    ];

    view! {
        <section class="list-page">
            <header class="list-page__header">
                <h2 class="page-title">"خودروها"</h2>
                <A href="/dashboard/cars/add" attr:class="btn btn--primary">
                    "افزودن خودرو"
                </A>
            </header>
            <DataTable table=table actions=actions />
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="حذف خودرو"
                    message="این خودرو برای همیشه حذف می‌شود."
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
pub fn AddCarPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let form = RwSignal::new(CarForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = return_to_list_on_save(navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match form.with(validate_car_form) {
            Ok(p) => p,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        leptos::task::spawn_local(async move {
            match ctx.client().create_car(&payload).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "خودرو با موفقیت ایجاد شد".to_owned()));
                    saved.set(true);
                }
                Err(e) if e.is_unauthorized() => ctx.report(&e),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="form-page">
            <h2 class="page-title">"افزودن خودرو"</h2>
            <CarFormView form=form error=error busy=busy on_submit=Callback::new(on_submit) />
        </section>
    }
}

#[component]
pub fn EditCarPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let params = use_params_map();
    let car_id = Memo::new(move |_| params.with(|p| p.get("id")).as_deref().and_then(parse_id));
    let form = RwSignal::new(CarForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = return_to_list_on_save(navigate);
    let loaded = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = car_id.get() else {
            error.set(Some(MSG_INVALID_CAR_ID.to_owned()));
            return;
        };
        loaded.set(false);
        leptos::task::spawn_local(async move {
            match ctx.client().get_car(id).await {
                Ok(car) => {
                    form.set(CarForm { name: car.name });
                    loaded.set(true);
                }
                Err(e) if e.is_unauthorized() => ctx.report(&e),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = car_id.get_untracked() else {
            return;
        };
        let payload = match form.with(validate_car_form) {
            Ok(p) => p,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        leptos::task::spawn_local(async move {
            match ctx.client().update_car(id, &payload).await {
                Ok(message) => {
                    ctx.toast_success(message.unwrap_or_else(|| "خودرو با موفقیت ویرایش شد".to_owned()));
                    saved.set(true);
                }
                Err(e) if e.is_unauthorized() => ctx.report(&e),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    let submit = Callback::new(on_submit);

    view! {
        <section class="form-page">
            <h2 class="page-title">
                "ویرایش خودرو "
                {move || car_id.get().map(|id| format!("#{id}")).unwrap_or_default()}
            </h2>
            <Show
                when=move || loaded.get()
                fallback=move || {
                    view! {
                        <p class="form-page__status">
                            {move || error.get().unwrap_or_else(|| "در حال بارگذاری...".to_owned())}
                        </p>
                    }
                }
            >
                <CarFormView form=form error=error busy=busy on_submit=submit />
            </Show>
        </section>
    }
}

/// Signal that, once set, sends the browser back to the car list.
fn return_to_list_on_save(navigate: impl Fn(&str, NavigateOptions) + 'static) -> RwSignal<bool> {
    let saved = RwSignal::new(false);
    Effect::new(move || {
        if saved.get() {
            navigate(CARS_PATH, NavigateOptions::default());
        }
    });
    saved
}

#[component]
fn CarFormView(
    form: RwSignal<CarForm>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_submit: Callback<leptos::ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="form-grid" on:submit=move |ev| on_submit.run(ev)>
            {form_field("نام خودرو", "text", form, |f| &f.name, |f, v| f.name = v)}
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="form-actions">
                <A href=CARS_PATH attr:class="btn">
                    "انصراف"
                </A>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "در حال ذخیره..." } else { "ذخیره" }}
                </button>
            </div>
        </form>
    }
}
