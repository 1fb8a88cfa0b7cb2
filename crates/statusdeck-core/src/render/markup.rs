//! HTML fragments for the dashboard sections.
//!
//! Every interpolated text field is escaped. The incident link is the only
//! value used as a raw attribute, and it has already been restricted to
//! http(s) URLs by the renderer.

use crate::format::escape_html;
use crate::render::types::{ComponentRow, HeroView, IncidentCard, IncidentsView};

pub fn hero_html(hero: &HeroView) -> String {
    let color = hero.theme.color();
    let glow = hero.theme.glow_color();
    format!(
        r#"<div class="status-card" style="border-left: 6px solid {color}; --glow-color: {glow}">
  <div id="indicator" class="indicator" style="background:{color}; box-shadow: 0 0 20px {glow}">{icon}</div>
  <div id="description">{text}</div>
  <div id="last-updated">{refreshed}</div>
</div>
"#,
        icon = escape_html(hero.theme.icon),
        text = escape_html(&hero.text),
        refreshed = escape_html(&hero.refreshed_label()),
    )
}

pub fn components_html(rows: &[ComponentRow]) -> String {
    rows.iter().map(component_html).collect()
}

fn component_html(row: &ComponentRow) -> String {
    let color = row.theme.color();
    format!(
        r#"<div class="component">
  <div class="comp-left">
    <div class="comp-indicator" style="background:{color}"></div>
    <div class="comp-name">{name}</div>
  </div>
  <div class="comp-status" style="color:{color}">{label}</div>
</div>
"#,
        name = escape_html(&row.name),
        label = escape_html(&row.theme.label),
    )
}

pub fn incidents_html(view: &IncidentsView) -> String {
    match view {
        IncidentsView::NoActiveIncidents => format!(
            r#"<div class="incident-item empty">
  <p class="muted">{}</p>
</div>
"#,
            escape_html(IncidentsView::PLACEHOLDER)
        ),
        IncidentsView::Cards(cards) => cards.iter().map(incident_card_html).collect(),
    }
}

fn incident_card_html(card: &IncidentCard) -> String {
    let name = escape_html(&card.name);
    let title = match &card.link {
        Some(link) => format!(r#"<a href="{link}" target="_blank" rel="noopener">{name}</a>"#),
        None => format!("<span>{name}</span>"),
    };

    let update = card
        .latest_update
        .as_ref()
        .map(|u| {
            format!(
                r#"
    <div class="update">
      <strong>{status}</strong>
      <p>{body}</p>
      <div class="muted">{age}</div>
    </div>"#,
                status = escape_html(&u.status_label),
                body = escape_html(&u.body),
                age = escape_html(&u.age),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="incident">
  <div class="incident-head">
    {title}
    <span class="badge">Active</span>
  </div>
  <div class="incident-body">{update}</div>
</div>
"#
    )
}
