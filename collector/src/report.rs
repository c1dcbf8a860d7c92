//! Console tables for collected statistics.

use common::LanguageStatistics;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Renders a single-line box table with `title` set into the top border.
///
/// A title too long for the border is dropped.
pub fn render_table(statistics: &LanguageStatistics, title: &str) -> String {
    let mut rows: Vec<[String; 4]> = vec![HEADER.map(str::to_string)];
    for (language, summary) in statistics {
        rows.push([
            language.clone(),
            summary.vacancies_found.to_string(),
            summary.vacancies_processed.to_string(),
            summary.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(titled(border(&widths, '┌', '┬', '┐'), title));
    for (i, row) in rows.iter().enumerate() {
        lines.push(row_line(&widths, row));
        if i == 0 {
            lines.push(border(&widths, '├', '┼', '┤'));
        }
    }
    lines.push(border(&widths, '└', '┴', '┘'));

    lines.join("\n")
}

pub fn print_table(statistics: &LanguageStatistics, title: &str) {
    println!("{}", render_table(statistics, title));
}

fn border(widths: &[usize], left: char, junction: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&junction.to_string()), right)
}

fn titled(line: String, title: &str) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    let title_len = title.chars().count();
    if title_len == 0 || title_len > chars.len() - 2 {
        return line;
    }
    for (slot, c) in chars[1..=title_len].iter_mut().zip(title.chars()) {
        *slot = c;
    }
    chars.into_iter().collect()
}

fn row_line(widths: &[usize], row: &[String; 4]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .zip(row)
        .map(|(width, cell)| format!(" {:<width$} ", cell, width = *width))
        .collect();
    format!("│{}│", cells.join("│"))
}
