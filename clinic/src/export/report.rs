// clinic/src/export/report.rs
use models::AppointmentRow;

const ROWS_PER_PAGE: usize = 40;

/// Collapses whitespace runs and truncates to `max` (ellipsis-free, the
/// width is the contract).
fn fit(s: &str, max: usize) -> String {
    let compact = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= max {
        compact
    } else {
        compact.chars().take(max).collect()
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", fit(cell, width)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paginated fixed-width text report. Pages are separated by a form
/// feed; the column header repeats on every page.
pub fn render(title: &str, headers: &[&str], widths: &[usize], rows: &[Vec<String>]) -> String {
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let header_line = format_line(&header_cells, widths);
    let divider = "-".repeat(header_line.len());

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    for (index, row) in rows.iter().enumerate() {
        if index % ROWS_PER_PAGE == 0 {
            if index > 0 {
                out.push('\x0c');
            }
            out.push_str(&header_line);
            out.push('\n');
            out.push_str(&divider);
            out.push('\n');
        }
        out.push_str(&format_line(row, widths));
        out.push('\n');
    }
    if rows.is_empty() {
        out.push_str(&header_line);
        out.push('\n');
        out.push_str(&divider);
        out.push('\n');
    }
    out
}

pub fn appointments_report(rows: &[AppointmentRow]) -> String {
    let widths = [8, 20, 20, 12, 10, 20];
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.patient_name.clone().unwrap_or_default(),
                a.doctor_name.clone().unwrap_or_default(),
                a.date.clone(),
                a.time.clone(),
                a.symptoms.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render(
        "Appointments Report",
        &["ID", "Patient", "Doctor", "Date", "Time", "Symptoms"],
        &widths,
        &data,
    )
}
