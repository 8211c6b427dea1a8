//! Greeting card component

use beacon::api::HelloPayload;
use leptos::prelude::*;

/// Shows the `/api/hello` payload: message, user, status and tech stack
#[component]
pub fn HelloCard(hello: HelloPayload) -> impl IntoView {
    let HelloPayload { message, data, .. } = hello;

    view! {
        <section style="padding: 1rem; border: 1px solid #dee2e6; border-radius: 0.5rem;">
            <h3>"API Response:"</h3>
            <p><strong>"Message: "</strong>{message}</p>
            <p><strong>"User: "</strong>{data.user}</p>
            <p><strong>"Status: "</strong>{data.status}</p>
            <p><strong>"Tech Stack:"</strong></p>
            <ul>
                {data.features.into_iter().map(|feature| {
                    view! { <li>{feature}</li> }
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
