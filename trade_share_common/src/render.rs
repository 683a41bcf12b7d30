//! HTML and plain-text rendering of a share view.
use crate::net::REVEAL_DELAY;
use crate::view::{INVALID_MESSAGE, ShareView, TradeCard};

const STYLE: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:Inter,sans-serif;color:#0b1013;min-height:100vh;
  background:linear-gradient(135deg,#0f2a4a,#1d5fa8)}
.card{max-width:700px;margin:60px auto;padding:22px;border-radius:24px;
  background:rgba(255,255,255,0.14);border:1px solid rgba(255,255,255,0.62);
  box-shadow:0 24px 60px rgba(8,17,28,0.26);backdrop-filter:blur(18px)}
.reveal{opacity:0;animation:rise .35s ease-out forwards}
@keyframes rise{from{opacity:0;transform:translateY(16px) scale(.96)}to{opacity:1;transform:none}}
.header,.footer{display:flex;justify-content:center;margin:20px 0}
.pill{border-radius:18px;padding:10px 20px;background:rgba(255,255,255,0.2);font-weight:900}
.rows{display:flex;flex-direction:column;gap:10px}
.row{display:flex;justify-content:space-between;padding:10px 14px;border-radius:12px;
  background:rgba(255,255,255,0.12);border:1px solid rgba(255,255,255,0.5)}
.row.notes{flex-direction:column}
.label{font-size:13px;font-weight:800;color:#173244}
.value{font-size:16px;font-weight:700}
.value.pos{color:#16a34a}
.value.neg{color:#dc2626}
.image{margin-top:16px;text-align:center}
.image img{max-width:100%;border-radius:16px}
.back{padding:10px 20px;border-radius:16px;border:1px solid rgba(0,0,0,0.3);
  color:#0b1013;text-decoration:none;font-weight:800}
.invalid{text-align:center;padding-top:40vh;font-size:18px;font-weight:700;color:#fff}
"#;

/// Render a complete HTML document for the view.
///
/// A pending card is emitted with a CSS reveal delay so the browser performs
/// the Pending -> Loaded transition itself.
pub fn render_html(view: &ShareView) -> String {
    let body = match (view, view.card()) {
        (ShareView::Pending { .. }, Some(card)) => card_html(&card, true),
        (_, Some(card)) => card_html(&card, false),
        (_, None) => format!(
            "<div class=\"invalid\">{} &#10060;</div>",
            escape_html(INVALID_MESSAGE)
        ),
    };
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Trade Summary</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>
"##,
        STYLE, body
    )
}

fn card_html(card: &TradeCard, pending: bool) -> String {
    let reveal = if pending {
        format!(
            " reveal\" style=\"animation-delay:{}ms",
            REVEAL_DELAY.as_millis()
        )
    } else {
        String::new()
    };
    let image = card
        .image
        .as_deref()
        .map(|src| {
            format!(
                "\n<div class=\"image\"><img src=\"{}\" alt=\"Trade Screenshot\"></div>",
                escape_html(src)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<div class="card{reveal}">
<div class="header"><div class="pill">Trade Summary</div></div>
<div class="rows">
<div class="row"><div class="label">Date:</div><div class="value">{date}</div></div>
<div class="row"><div class="label">P&amp;L:</div><div class="value {tone}">{pnl}</div></div>
<div class="row"><div class="label">Duration:</div><div class="value">{duration}</div></div>
<div class="row notes"><div class="label">Notes:</div><div class="value">{notes}</div></div>{image}
</div>
<div class="footer"><a class="back" href="/">Back to Calendar</a></div>
</div>"##,
        reveal = reveal,
        date = escape_html(&card.date),
        tone = card.tone,
        pnl = escape_html(&card.pnl),
        duration = escape_html(&card.duration),
        notes = escape_html(&card.notes),
        image = image,
    )
}

/// Render the card as a plain-text block for terminals.
pub fn render_text(card: &TradeCard) -> String {
    let mut out = String::from("Trade Summary\n");
    out.push_str(&format!("  Date:     {}\n", card.date));
    out.push_str(&format!("  P&L:      {} ({})\n", card.pnl, card.tone));
    out.push_str(&format!("  Duration: {}\n", card.duration));
    out.push_str(&format!("  Notes:    {}\n", card.notes));
    if let Some(image) = &card.image {
        out.push_str(&format!("  Image:    {}\n", image));
    }
    out
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
