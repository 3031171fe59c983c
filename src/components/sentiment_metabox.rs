use leptos::*;

/// Values offered by the score selector, with their visible labels.
pub const SCORE_OPTIONS: [(&str, &str); 9] = [
    ("0.1", "1"),
    ("0.2", "2"),
    ("0.3", "3"),
    ("0.4", "4"),
    ("0.5", "5"),
    ("0.6", "6"),
    ("0.7", "7"),
    ("0.8", "8"),
    ("0.9", "9"),
];

/// True when the stored raw score denotes the same number as `option`.
pub fn is_selected(current: Option<&str>, option: &str) -> bool {
    match (
        current.and_then(|c| c.trim().parse::<f64>().ok()),
        option.parse::<f64>().ok(),
    ) {
        (Some(current), Some(option)) => current == option,
        _ => false,
    }
}

/// Hidden authenticity token, rendered once per form. It is never checked on save.
#[component]
pub fn NonceField(nonce: String) -> impl IntoView {
    view! {
        <input type="hidden" name="sentiment_nonce" value=nonce />
    }
}

/// Free-text sentiment label, pre-filled with the stored value.
#[component]
pub fn SentimentMetabox(current: String) -> impl IntoView {
    view! {
        <div class="postbox" id="review_sentiment">
            <h2>{ "Review Sentiment" }</h2>
            <label>{ "Sentiment" }</label>
            <input type="text" name="sentiment" id="sentiment" value=current />
        </div>
    }
}

/// Nine-step score selector; the option matching the stored score is pre-selected.
#[component]
pub fn SentimentScoreMetabox(current: Option<String>) -> impl IntoView {
    view! {
        <div class="postbox" id="sentiment_analysis">
            <h2>{ "Sentiment Analysis" }</h2>
            <label>{ "Sentiment Score" }</label>
            <select name="sentiment_score" id="sentiment_score">
                {
                    SCORE_OPTIONS.iter().map(|&(value, label)| {
                        let selected = is_selected(current.as_deref(), value);
                        view! {
                            <option value=value selected=selected>{ label }</option>
                        }
                    }).collect::<Vec<_>>()
                }
            </select>
        </div>
    }
}
