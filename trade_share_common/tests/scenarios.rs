//! End-to-end scenarios: query string in, rendered card out.

use std::time::Instant;

use serde_json::json;
use trade_share_common::net::REVEAL_DELAY;
use trade_share_common::render::{render_html, render_text};
use trade_share_common::view::{NO_DURATION, NO_NOTES, share_link, token_from_url};
use trade_share_common::{ShareView, Tone, TradeDraft, encode};
use url::Url;

fn query_for(value: &serde_json::Value) -> String {
    let link = share_link("http://localhost/", &encode(value).expect("encode")).expect("link");
    let url = Url::parse(&link).expect("url");
    format!("?{}", url.query().unwrap_or_default())
}

#[test]
fn scenario_profitable_trade_without_image() {
    let now = Instant::now();
    let query = query_for(&json!({
        "date": "2024-01-01",
        "pnl": "125.5",
        "duration": "2h",
        "notes": "good trade"
    }));
    let view = ShareView::from_query(&query, now).tick(now + REVEAL_DELAY);
    assert!(view.is_loaded());

    let card = view.card().expect("card");
    assert_eq!(card.date, "2024-01-01");
    assert_eq!(card.pnl, "US$125.50");
    assert_eq!(card.tone, Tone::Positive);
    assert_eq!(card.duration, "2h");
    assert_eq!(card.notes, "good trade");
    assert_eq!(card.image, None);

    let html = render_html(&view);
    assert!(html.contains("value pos\">US$125.50<"));
    assert!(!html.contains("<img"));
}

#[test]
fn scenario_losing_trade_with_placeholders() {
    let now = Instant::now();
    let query = query_for(&json!({"date": "2024-02-02", "pnl": "-40"}));
    let view = ShareView::from_query(&query, now);

    let card = view.card().expect("card");
    assert_eq!(card.pnl, "-US$40.00");
    assert_eq!(card.tone, Tone::Negative);
    assert_eq!(card.duration, NO_DURATION);
    assert_eq!(card.notes, NO_NOTES);
    assert!(render_text(&card).contains("-US$40.00"));
}

#[test]
fn scenario_missing_parameter_is_invalid_immediately() {
    let view = ShareView::from_query("", Instant::now());
    assert!(view.is_invalid());
    assert!(view.reveal_at().is_none());
    assert!(render_html(&view).contains("Invalid or missing trade data"));
}

#[test]
fn scenario_garbage_token_is_invalid() {
    let view = ShareView::from_query("?t=!!!not-base64!!!", Instant::now());
    assert!(view.is_invalid());
}

#[test]
fn draft_link_round_trips_through_the_view() {
    let mut draft = TradeDraft::new("2024-05-05", "0");
    draft.image = Some(String::from("https://example.com/chart.png"));
    let token = encode(&draft).expect("encode");
    let link = share_link("https://journal.example/share", &token).expect("link");
    let extracted = token_from_url(&link).expect("url");
    assert_eq!(extracted.as_deref(), Some(token.as_str()));

    let view = ShareView::from_token(extracted.as_deref(), Instant::now());
    assert_eq!(view.record(), Some(&draft.to_record().expect("record")));
    let card = view.card().expect("card");
    assert_eq!(card.tone, Tone::Neutral);
    assert_eq!(card.pnl, "US$0.00");
    assert_eq!(card.image.as_deref(), Some("https://example.com/chart.png"));
}
