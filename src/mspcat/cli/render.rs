//! Terminal rendering for command results.
//!
//! Every `render_*` function returns the full text and has an `_internal`
//! twin taking an explicit color switch, so tests can assert on plain output.

use colored::{ColoredString, Colorize};
use mspcat::api::{CatalogStats, CmdMessage, MessageLevel};
use mspcat::model::{Category, Service};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 34;
const CATEGORY_WIDTH: usize = 26;
const FEATURED_MARKER: &str = "★";

fn paint(text: &str, use_color: bool, style: fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

fn color_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// One line per service: marker, id, name, category and price.
pub fn render_service_list(services: &[Service]) -> String {
    render_service_list_internal(services, color_enabled())
}

fn render_service_list_internal(services: &[Service], use_color: bool) -> String {
    if services.is_empty() {
        return "No services found.\n".to_string();
    }

    let id_width = services.iter().map(|s| s.id.width()).max().unwrap_or(0);
    let mut out = String::new();

    for service in services {
        let marker = if service.featured {
            paint(FEATURED_MARKER, use_color, |s| s.yellow())
        } else {
            " ".to_string()
        };
        let id = format!("{:<width$}", service.id, width = id_width);
        let name = pad_to_width(&truncate_to_width(&service.service_name, NAME_WIDTH), NAME_WIDTH);
        let category = pad_to_width(service.category.label(), CATEGORY_WIDTH);

        let mut line = format!(
            "{} {}  {}  {}  {}",
            marker,
            paint(&id, use_color, |s| s.dimmed()),
            name,
            category,
            service.pricing.display_text
        );
        if !service.is_active() {
            line.push_str("  ");
            line.push_str(&paint("(inactive)", use_color, |s| s.red()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Full detail view of services, separated by a rule.
pub fn render_service_details(services: &[Service]) -> String {
    render_service_details_internal(services, color_enabled())
}

fn render_service_details_internal(services: &[Service], use_color: bool) -> String {
    let mut out = String::new();
    for (i, s) in services.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}\n",
            paint(&s.id, use_color, |t| t.yellow()),
            paint(&s.service_name, use_color, |t| t.bold())
        ));
        out.push_str("--------------------------------\n");

        let level = &s.service_level;
        let fields = [
            ("Category", s.category.label().to_string()),
            ("Summary", s.short_description.clone()),
            ("Description", s.description.clone()),
            ("Pricing", s.pricing.display_text.clone()),
            ("Response", level.response_time.clone()),
            ("Resolution", level.resolution_time.clone()),
            ("Availability", level.availability.clone()),
            (
                "Emergency",
                if level.emergency_support { "yes" } else { "no" }.to_string(),
            ),
            ("Status", s.status.as_str().to_string()),
            (
                "Featured",
                if s.featured { "yes" } else { "no" }.to_string(),
            ),
            ("Tags", s.tags.join(", ")),
        ];
        for (label, value) in fields {
            if value.is_empty() {
                continue;
            }
            let label = format!("{:<13}", format!("{}:", label));
            out.push_str(&format!("{}{}\n", paint(&label, use_color, |t| t.dimmed()), value));
        }
    }
    out
}

pub fn render_stats(stats: &CatalogStats) -> String {
    let rows = [
        ("Total services", stats.total_services),
        ("Active services", stats.active_services),
        ("Featured services", stats.featured_services),
        ("Categories", stats.categories),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<18} {}\n", label, value))
        .collect()
}

/// Every category label with the number of services filed under it.
pub fn render_categories(services: &[Service]) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            let count = services.iter().filter(|s| s.category == *c).count();
            format!("{:<CATEGORY_WIDTH$} {}\n", c.label(), count)
        })
        .collect()
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, color_enabled())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|m| {
            let style: fn(&str) -> ColoredString = match m.level {
                MessageLevel::Info => |s| s.dimmed(),
                MessageLevel::Success => |s| s.green(),
                MessageLevel::Warning => |s| s.yellow(),
                MessageLevel::Error => |s| s.red(),
            };
            format!("{}\n", paint(&m.content, use_color, style))
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
