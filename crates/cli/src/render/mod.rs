//! Plain-text projection of a `ConsoleViewModel`.

use dns_console_domain::{ConsoleViewModel, SortDirection, SortField, SortState};
use std::fmt::Write;

const DOMAIN_HEADER: &str = "Domain";
const COUNT_HEADER: &str = "Count";
const UPDATED_HEADER: &str = "Last updated";

pub fn render_view(view: &ConsoleViewModel) -> String {
    let mut out = String::new();
    write_filter(&mut out, view);
    write_cache(&mut out, view);
    write_latencies(&mut out, view);
    write_allow_list(&mut out, view);
    write_overrides(&mut out, view);
    write_auto_update(&mut out, view);
    let _ = writeln!(out, "As of {}", view.as_of.format("%Y-%m-%d %H:%M:%S UTC"));
    out
}

fn sort_marker(sort: SortState, field: SortField) -> &'static str {
    if sort.field != field {
        return "";
    }
    match sort.direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

fn write_filter(out: &mut String, view: &ConsoleViewModel) {
    let _ = writeln!(
        out,
        "Filter: {} domains, built {}",
        view.filter_size, view.filter_created_at
    );

    let count_header = format!("{}{}", COUNT_HEADER, sort_marker(view.sort, SortField::Count));
    let updated_header = format!(
        "{}{}",
        UPDATED_HEADER,
        sort_marker(view.sort, SortField::UpdatedAt)
    );
    let width = column_width(DOMAIN_HEADER, view.hits.iter().map(|h| h.domain.as_str()));

    let _ = writeln!(
        out,
        "{:<width$}  {:>8}  {}",
        DOMAIN_HEADER, count_header, updated_header
    );
    for hit in &view.hits {
        let _ = writeln!(
            out,
            "{:<width$}  {:>8}  {}",
            hit.domain, hit.count, hit.last_updated
        );
    }
    out.push('\n');
}

fn write_cache(out: &mut String, view: &ConsoleViewModel) {
    let _ = writeln!(out, "Cache: {} entries", view.cache.len());
    let width = column_width("Name", view.cache.iter().map(|e| e.name.as_str()));
    for entry in &view.cache {
        let _ = writeln!(
            out,
            "{:<width$}  valid until {}",
            entry.name, entry.valid_until
        );
    }
    out.push('\n');
}

fn write_latencies(out: &mut String, view: &ConsoleViewModel) {
    let _ = writeln!(out, "Resolvers:");
    let width = column_width(
        "Resolver",
        view.resolver_latencies.keys().map(String::as_str),
    );
    let _ = writeln!(out, "{:<width$}  {:>12}  {:>8}", "Resolver", "Avg (ms)", "Samples");
    for (resolver, latency) in &view.resolver_latencies {
        let _ = writeln!(
            out,
            "{:<width$}  {:>12.3}  {:>8}",
            resolver, latency.average_latency_ms, latency.sample_count
        );
    }
    out.push('\n');
}

fn write_allow_list(out: &mut String, view: &ConsoleViewModel) {
    let _ = writeln!(out, "Allowed domains ({}):", view.allow_list.len());
    for domain in &view.allow_list {
        let _ = writeln!(out, "  {}", domain);
    }
    out.push('\n');
}

fn write_overrides(out: &mut String, view: &ConsoleViewModel) {
    let _ = writeln!(out, "Overrides ({}):", view.overrides.len());
    for (domain, address) in &view.overrides {
        let _ = writeln!(out, "  {} -> {}", domain, address);
    }
    out.push('\n');
}

fn write_auto_update(out: &mut String, view: &ConsoleViewModel) {
    if view.auto_update.is_enabled() {
        let _ = writeln!(out, "Auto update: {}", view.auto_update);
    } else {
        let _ = writeln!(
            out,
            "Auto update: disabled (enable with `auto-update set <seconds>`)"
        );
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
