//! Leptos application with routing over [`crate::routes::ROUTES`].

use std::sync::Arc;

use leptos::*;
use leptos_router::*;
use orderdesk_auth::{KeyValueStore, LocalStorage, Session};
use orderdesk_core::OrderFilter;

use crate::api;
use crate::navigation::BrowserNavigator;
use crate::routes::{self, ROUTES};
use crate::{ApiClient, AuthInterceptor, ClientConfig};

/// Client wired to the page: token from session state or `localStorage`,
/// hard navigation through `window.location`.
fn browser_client() -> ApiClient {
    let storage: Arc<dyn KeyValueStore> = Arc::new(LocalStorage);
    let session = Arc::new(Session::new(Arc::clone(&storage)));
    let interceptor = AuthInterceptor::new(session, storage, Arc::new(BrowserNavigator));
    ApiClient::new(ClientConfig::default(), interceptor)
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(browser_client());

    view! {
        <Router>
            <nav>
                {ROUTES
                    .iter()
                    .map(|route| view! { <A href=route.path>{route.view.title()}</A> })
                    .collect_view()}
            </nav>
            <main>
                <Routes>
                    <Route path=routes::HOME.path view=HomePage/>
                    <Route path=routes::USERS.path view=UsersPage/>
                    <Route path=routes::ORDERS.path view=OrdersPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <h1>"Service Orders"</h1>
        <p>"Pick a section above."</p>
    }
}

#[component]
fn UsersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let users = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { api::list_users(&client).await.map_err(|e| e.to_string()) }
        },
    );

    view! {
        <h2>"Users"</h2>
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || {
                users.get().map(|result| match result {
                    Ok(users) => view! {
                        <ul>
                            {users
                                .into_iter()
                                .map(|user| view! { <li>{user.username}" ("{user.role}")"</li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_view(),
                    Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn OrdersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let orders = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move {
                api::list_orders(&client, &OrderFilter::default())
                    .await
                    .map_err(|e| e.to_string())
            }
        },
    );

    view! {
        <h2>"Orders"</h2>
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || {
                orders.get().map(|result| match result {
                    Ok(orders) if orders.is_empty() => {
                        view! { <p>"No service orders yet."</p> }.into_view()
                    }
                    Ok(orders) => view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Title"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {orders
                                    .into_iter()
                                    .map(|order| view! {
                                        <tr>
                                            <td>{order.id.to_string()}</td>
                                            <td>{order.title}</td>
                                            <td>{order.status}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view(),
                    Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                })
            }}
        </Suspense>
    }
}
