//! Terminal rendering for summaries and audit reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_model::{AuditReport, ColumnProfile, DatasetSummary, LeakageLevel, VerdictSafety};

pub fn print_summary(summary: &DatasetSummary) {
    println!("Rows: {}", summary.row_count);
    println!("Target: {}", summary.target_column);
    println!("Features: {}", summary.feature_columns.join(", "));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing %"),
        header_cell("Uniques"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
        header_cell("Top Values"),
        header_cell("Corr"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 8, CellAlignment::Right);
    for column in &summary.columns {
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.column_type.as_str()),
            missing_cell(column.missing_percentage),
            Cell::new(column.unique_count),
            stat_cell(column.min),
            stat_cell(column.max),
            stat_cell(column.mean),
            top_values_cell(column),
            correlation_cell(column.correlation_with_target),
        ]);
    }
    println!("{table}");

    print_distribution(summary);
}

fn print_distribution(summary: &DatasetSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Target Value"),
        header_cell("Count"),
        header_cell("Share %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &summary.target_distribution {
        let share = if summary.row_count == 0 {
            0.0
        } else {
            entry.count as f64 / summary.row_count as f64 * 100.0
        };
        let value_cell = if entry.value == "Missing" {
            dim_cell(&entry.value)
        } else {
            Cell::new(&entry.value)
        };
        table.add_row(vec![
            value_cell,
            Cell::new(entry.count),
            Cell::new(format!("{share:.1}")),
        ]);
    }
    println!("{table}");
}

pub fn print_report(report: &AuditReport) {
    println!();
    let score_color = match report.health_score {
        80.. => Color::Green,
        50..80 => Color::Yellow,
        _ => Color::Red,
    };
    let mut score = Table::new();
    score.set_header(vec![header_cell("Health Score"), header_cell("Leakage Risk")]);
    apply_table_style(&mut score);
    score.add_row(vec![
        Cell::new(format!("{}/100", report.health_score))
            .fg(score_color)
            .add_attribute(Attribute::Bold),
        Cell::new(report.leakage_risk.level.as_str()).fg(leakage_color(report.leakage_risk.level)),
    ]);
    println!("{score}");
    if !report.leakage_risk.explanation.is_empty() {
        println!("Leakage: {}", report.leakage_risk.explanation);
    }

    if !report.critical_issues.is_empty() || !report.moderate_issues.is_empty() {
        let mut issues = Table::new();
        issues.set_header(vec![header_cell("Severity"), header_cell("Issue")]);
        apply_table_style(&mut issues);
        for issue in &report.critical_issues {
            issues.add_row(vec![
                Cell::new("critical")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(issue),
            ]);
        }
        for issue in &report.moderate_issues {
            issues.add_row(vec![Cell::new("moderate").fg(Color::Yellow), Cell::new(issue)]);
        }
        println!("{issues}");
    }

    if !report.feature_warnings.is_empty() {
        let mut warnings = Table::new();
        warnings.set_header(vec![header_cell("Feature"), header_cell("Warning")]);
        apply_table_style(&mut warnings);
        for (feature, warning) in &report.feature_warnings {
            warnings.add_row(vec![Cell::new(feature), Cell::new(warning)]);
        }
        println!("{warnings}");
    }

    if !report.recommended_actions.is_empty() {
        println!("Recommended actions:");
        for (position, action) in report.recommended_actions.iter().enumerate() {
            println!("{}. {action}", position + 1);
        }
    }

    let verdict_color = match report.final_verdict.safe {
        VerdictSafety::Yes => Color::Green,
        VerdictSafety::WithConditions => Color::Yellow,
        VerdictSafety::No => Color::Red,
    };
    let mut verdict = Table::new();
    verdict.set_header(vec![header_cell("Safe To Train"), header_cell("Reason")]);
    apply_table_style(&mut verdict);
    verdict.add_row(vec![
        Cell::new(report.final_verdict.safe.as_str())
            .fg(verdict_color)
            .add_attribute(Attribute::Bold),
        Cell::new(&report.final_verdict.reason),
    ]);
    println!("{verdict}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn missing_cell(percentage: f64) -> Cell {
    let label = format!("{percentage:.2}");
    if percentage >= 50.0 {
        Cell::new(label).fg(Color::Red).add_attribute(Attribute::Bold)
    } else if percentage > 0.0 {
        Cell::new(label).fg(Color::Yellow)
    } else {
        dim_cell(label)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_stat(value)),
        None => dim_cell("-"),
    }
}

fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{value}")
    } else {
        format!("{value:.2}")
    }
}

fn correlation_cell(correlation: Option<f64>) -> Cell {
    match correlation {
        Some(value) if value.abs() > 0.95 => Cell::new(format!("{value:.3}"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(value) => Cell::new(format!("{value:.3}")),
        None => dim_cell("-"),
    }
}

fn top_values_cell(column: &ColumnProfile) -> Cell {
    match &column.top_categories {
        Some(top) if !top.is_empty() => {
            let rendered: Vec<String> = top
                .iter()
                .map(|entry| format!("{} ({})", entry.value, entry.count))
                .collect();
            Cell::new(rendered.join(", "))
        }
        _ => dim_cell("-"),
    }
}

fn leakage_color(level: LeakageLevel) -> Color {
    match level {
        LeakageLevel::Low => Color::Green,
        LeakageLevel::Medium => Color::Yellow,
        LeakageLevel::High => Color::Red,
    }
}
