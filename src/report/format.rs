//! Text layout for usage reports and summaries.

use crate::report::{SummaryData, UsageView};
use crate::tree::TreeNode;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size_of, Width};

/// Width used when no flag, config, terminal, or `COLUMNS` gives one
pub const FALLBACK_COLUMNS: usize = 120;

const SIZE_SUFFIXES: [&str; 4] = ["", "KB", "MB", "GB"];

/// Human-readable size: two decimals and a binary-scaled suffix, up to GB.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut power = 0;
    while value >= 1024.0 && power < SIZE_SUFFIXES.len() - 1 {
        value /= 1024.0;
        power += 1;
    }
    format!("{:.2}{}", value, SIZE_SUFFIXES[power])
}

/// Pick the report width: flag, then config, then the stdout terminal, then
/// `COLUMNS`, then fallback.
pub fn resolve_columns(flag: Option<usize>, configured: Option<usize>) -> usize {
    pick_columns(
        flag,
        configured,
        terminal_columns(),
        std::env::var("COLUMNS").ok().as_deref(),
    )
}

fn terminal_columns() -> Option<usize> {
    terminal_size_of(std::io::stdout()).map(|(Width(w), _)| usize::from(w))
}

fn pick_columns(
    flag: Option<usize>,
    configured: Option<usize>,
    terminal: Option<usize>,
    env: Option<&str>,
) -> usize {
    let usable = |cols: &usize| *cols > 0;
    flag.filter(usable)
        .or(configured.filter(usable))
        .or(terminal.filter(usable))
        .or_else(|| {
            env.and_then(|v| v.trim().parse::<usize>().ok())
                .filter(usable)
        })
        .unwrap_or(FALLBACK_COLUMNS)
}

/// Left text and right-aligned size so the line ends at `cols`.
/// Lines already wider than `cols` get no padding.
pub fn pad_line(left: &str, right: &str, cols: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let padding = cols.saturating_sub(used);
    format!("{}{}{}", left, " ".repeat(padding), right)
}

/// Section heading, bold and underlined when color is enabled.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Render one tree: per node, documents (`@name`) first, then directories,
/// each followed by its own contents one `"- "` deeper.
pub fn render_tree(node: &TreeNode, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_level(node, cols, 0, &mut lines);
    lines
}

fn render_level(node: &TreeNode, cols: usize, level: usize, lines: &mut Vec<String>) {
    let indent = "- ".repeat(level);
    for (name, record) in node.sorted_documents() {
        let left = format!("{}@{} ", indent, name);
        lines.push(pad_line(&left, &human_size(record.document_size()), cols));
    }
    for (name, child) in node.sorted_directories() {
        let left = format!("{}{}  ", indent, name);
        lines.push(pad_line(&left, &human_size(child.total_size), cols));
        render_level(child, cols, level + 1, lines);
    }
}

/// Full text report: visible tree, then the trash tree under a heading.
pub fn format_usage_text(view: &UsageView<'_>, cols: usize, color: bool) -> String {
    let mut lines = render_tree(view.visible, cols);
    if let Some(trash) = view.trash {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let heading = pad_line("Trash  ", &human_size(trash.total_size), cols);
        lines.push(format_section_heading(&heading, color));
        lines.extend(render_tree(trash, cols));
    }
    lines.join("\n")
}

/// Summary as tables.
pub fn format_summary_text(data: &SummaryData, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Usage summary", color)));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "Count", "Size"]);
    table.add_row(vec![
        "Collections".to_string(),
        data.collections.to_string(),
        "-".to_string(),
    ]);
    table.add_row(vec![
        "Documents (visible)".to_string(),
        data.visible_documents.to_string(),
        human_size(data.visible_bytes),
    ]);
    table.add_row(vec![
        "Documents (trash)".to_string(),
        data.trash_documents.to_string(),
        human_size(data.trash_bytes),
    ]);
    if data.replaced_documents > 0 {
        table.add_row(vec![
            "Hidden by name collision".to_string(),
            data.replaced_documents.to_string(),
            "-".to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));

    if !data.top_directories.is_empty() {
        out.push_str(&format!(
            "\n{}\n\n",
            format_section_heading("Largest top-level folders", color)
        ));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Folder", "Documents", "Size"]);
        for row in &data.top_directories {
            table.add_row(vec![
                row.name.clone(),
                row.documents.to_string(),
                human_size(row.total_size),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}
