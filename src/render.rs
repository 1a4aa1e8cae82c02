//! Terminal Rendering
//!
//! Draws a [`Page`] as plain text: brand header, nav bar, cards, footer.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::components::{Card, CardBody, LineChart, PieChart, Page, Tab};

const BRAND: &str = "InvestHub Mini";
const TAGLINE: &str = "Unified Telegram + Discord Investing Hub";
const BAR_WIDTH: usize = 30;

/// Render a page for the terminal
pub fn render_text(page: &Page, loaded_at: Option<DateTime<Utc>>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", BRAND);
    let _ = writeln!(out, "{}", TAGLINE);
    let _ = writeln!(out, "{}", nav_bar(page.tab));

    for card in &page.cards {
        out.push('\n');
        render_card(&mut out, card);
    }

    out.push('\n');
    let _ = writeln!(out, "{}", footer(loaded_at));
    out
}

/// Serialize a page as pretty JSON
pub fn render_json(page: &Page) -> serde_json::Result<String> {
    serde_json::to_string_pretty(page)
}

/// Nav bar with the active tab bracketed
pub fn nav_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn footer(loaded_at: Option<DateTime<Utc>>) -> String {
    loaded_at
        .map(|dt| format!("Last sync: {}", dt.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not synced".to_string())
}

fn render_card(out: &mut String, card: &Card) {
    let _ = writeln!(out, "== {} ==", card.title);
    if let Some(subtitle) = &card.subtitle {
        let _ = writeln!(out, "   {}", subtitle);
    }

    match &card.body {
        CardBody::List(rows) => {
            let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
            for row in rows {
                let pad = width - row.label.chars().count();
                let _ = writeln!(out, "   {}{}  {}", row.label, " ".repeat(pad), row.value);
            }
        }
        CardBody::Links(links) => {
            for link in links {
                let _ = writeln!(out, "   {} <{}>", link.title, link.url);
                if let Some(source) = &link.source {
                    let _ = writeln!(out, "     {}", source);
                }
            }
        }
        CardBody::Line(chart) => render_line(out, chart),
        CardBody::Pie(chart) => render_pie(out, chart),
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.clamp(1, BAR_WIDTH))
}

fn render_line(out: &mut String, chart: &LineChart) {
    if chart.placeholder {
        let _ = writeln!(out, "   (demo data)");
    }
    let max = chart.points.iter().map(|p| p.value).fold(0.0, f64::max);
    for point in &chart.points {
        let _ = writeln!(out, "   {:<4} {} {}", point.name, bar(point.value, max), point.value);
    }
}

fn render_pie(out: &mut String, chart: &PieChart) {
    let total = chart.total();
    let width = chart
        .segments
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    for segment in &chart.segments {
        let pct = if total > 0.0 {
            segment.value / total * 100.0
        } else {
            0.0
        };
        let pad = width - segment.name.chars().count();
        let _ = writeln!(
            out,
            "   {}{}  {:>5.1}%  {}",
            segment.name,
            " ".repeat(pad),
            pct,
            bar(segment.value, total)
        );
    }
}
