use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bjcp_core::Suggestion;
use bjcp_ingest::DatasetIssue;
use bjcp_model::{Statistic, StyleTagDescription, Subcategory, tag_text};

pub fn print_tags(descriptions: &[StyleTagDescription]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Tag"),
        header_cell("Label"),
        header_cell("Meaning"),
    ]);
    apply_table_style(&mut table);
    for description in descriptions {
        for entry in &description.tags {
            table.add_row(vec![
                Cell::new(&description.category).add_attribute(Attribute::Bold),
                Cell::new(&entry.tag),
                Cell::new(tag_text(&description.category, &entry.tag)),
                Cell::new(&entry.meaning),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_styles(styles: &[&Subcategory], total: usize) {
    println!("Matching styles: {} of {total}", styles.len());
    if styles.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("ABV"),
        header_cell("IBU"),
        header_cell("SRM"),
        header_cell("Reference"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for style in styles {
        let (abv, ibu, srm) = match &style.stats {
            Some(stats) => (
                Cell::new(stats.abv.display(Statistic::Abv)),
                Cell::new(stats.ibu.display(Statistic::Ibu)),
                Cell::new(stats.srm.display(Statistic::Srm)),
            ),
            None => (dash_cell(), dash_cell(), dash_cell()),
        };
        table.add_row(vec![
            Cell::new(&style.source_id),
            Cell::new(&style.name).add_attribute(Attribute::Bold),
            abv,
            ibu,
            srm,
            Cell::new(&style.reference_link),
        ]);
    }
    println!("{table}");
}

pub fn print_suggestions(query: &str, suggestions: &[Suggestion]) {
    println!("Styles matching \"{query}\": {}", suggestions.len());
    if suggestions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Statistics"),
        header_cell("Reference"),
    ]);
    apply_table_style(&mut table);
    for suggestion in suggestions {
        let summary = match &suggestion.summary {
            Some(summary) => Cell::new(summary),
            None => dash_cell(),
        };
        table.add_row(vec![
            Cell::new(&suggestion.name).add_attribute(Attribute::Bold),
            summary,
            Cell::new(&suggestion.url),
        ]);
    }
    println!("{table}");
}

pub fn print_written(kind: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        println!("No {kind} written: no detailed style matches the filters");
        return;
    }
    for path in paths {
        println!("{kind}: {}", path.display());
    }
}

pub fn print_issues(issues: &[DatasetIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Dataset issue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, issue) in issues.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(issue.to_string()).fg(Color::Yellow),
        ]);
    }
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dash_cell() -> Cell {
    Cell::new("-").fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
