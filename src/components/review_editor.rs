/// Admin pages for product reviews.
/// The edit page hosts both sentiment metaboxes inside one form posting back to the save handler.
use leptos::*;
use crate::components::sentiment_metabox::{NonceField, SentimentMetabox, SentimentScoreMetabox};
use crate::models::review::{Review, PRODUCT_REVIEW};

#[component]
pub fn EditReviewPage(
    review: Review,
    sentiment: String,
    score: Option<String>,
    nonce: String,
) -> impl IntoView {
    let action = format!("/admin/reviews/{}", review.id);
    let heading = format!("Edit {}", PRODUCT_REVIEW.singular_label);

    view! {
        <form method="post" action=action>
            <h1>{ heading }</h1>
            <h2 class="review-title">{ review.title }</h2>
            <div class="review-body">{ review.body }</div>
            <NonceField nonce=nonce />
            <SentimentMetabox current=sentiment />
            <SentimentScoreMetabox current=score />
            <button type="submit">{ "Update" }</button>
        </form>
    }
}

#[component]
pub fn NewReviewPage(nonce: String) -> impl IntoView {
    let heading = format!("Add New {}", PRODUCT_REVIEW.singular_label);

    view! {
        <form method="post" action="/admin/reviews">
            <h1>{ heading }</h1>
            <input type="text" name="title" placeholder="Title" />
            <textarea name="body" placeholder="Review"></textarea>
            <NonceField nonce=nonce />
            <SentimentMetabox current=String::new() />
            <SentimentScoreMetabox current=None />
            <button type="submit">{ "Publish" }</button>
        </form>
    }
}
