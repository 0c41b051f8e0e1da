//! Order List Component
//!
//! Orders with status badges. Only transitions allowed from the current
//! status get a button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StatusChange;
use crate::context::use_app_context;
use crate::models::{Order, OrderStatus};
use crate::store::{use_console_store, ConsoleStateStoreFields};

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();

    let change_status = move |order: Order, next: OrderStatus| {
        let change = match StatusChange::new(&order, next) {
            Ok(change) => change,
            Err(err) => {
                ctx.error("Ошибка", err.to_string());
                return;
            }
        };
        let client = ctx.client();
        spawn_local(async move {
            match client.update_order_status(&change).await {
                Ok(()) => {
                    tracing::info!(order_id = change.order_id(), status = %change.status(), "order status updated");
                    ctx.success(
                        "Статус обновлен",
                        format!("Заявка переведена в статус: {}", change.status().label()),
                    );
                }
                Err(err) => {
                    tracing::warn!(%err, order_id = change.order_id(), "order status update failed");
                    ctx.error("Ошибка", "Не удалось обновить статус");
                }
            }
        });
    };

    view! {
        <div class="card">
            <h2>"Заявки клиентов"</h2>
            <Show
                when=move || !store.orders().read().is_empty()
                fallback=|| view! { <p class="empty-state">"Заявок пока нет"</p> }
            >
                <div class="order-list">
                    {move || store.orders().get().into_iter().map(|order| {
                        let actions = order.status.next_statuses();
                        view! {
                            <div class="card order-card">
                                <div class="order-card-header">
                                    <div>
                                        <h3>{order.service_title.clone()}</h3>
                                        <p>"📞 " {order.phone.clone()}</p>
                                        <p>"🎮 UID: " {order.game_uid.clone()}</p>
                                        <p>"✈ " {order.telegram.clone()}</p>
                                    </div>
                                    <span class=order.status.badge_class()>{order.status.label().to_string()}</span>
                                </div>
                                {(!order.status.is_terminal()).then(|| view! {
                                    <div class="order-actions">
                                        {actions.iter().map(|next| {
                                            let order = order.clone();
                                            let next = next.clone();
                                            let class = match next {
                                                OrderStatus::Rejected | OrderStatus::Cancelled => "action-btn negative",
                                                _ => "action-btn positive",
                                            };
                                            let label = next.action_label().to_string();
                                            view! {
                                                <button
                                                    class=class
                                                    on:click=move |_| change_status(order.clone(), next.clone())
                                                >
                                                    {label}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                })}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
