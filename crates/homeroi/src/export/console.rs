//! Plain-text tables for the terminal
//!
//! Tables are drawn with ratatui's `Table` widget into an off-screen
//! [`Buffer`] sized to fit the content, then flattened to a string, so output
//! can be piped or redirected like any other text.

use homeroi_core::{ColumnView, Granularity, MonthRow, Table, YearRow};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Row, Table as TableWidget, Widget};

const COLUMN_SPACING: u16 = 2;

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn text_width(text: &str) -> u16 {
    clamp_u16(text.chars().count())
}

/// Render a bordered table. The first column is left aligned, the rest right aligned.
pub fn render_table<H: AsRef<str>>(title: &str, headers: &[H], rows: &[Vec<String>]) -> String {
    let widths: Vec<u16> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| text_width(cell))
                .chain(std::iter::once(text_width(header.as_ref())))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let gaps = COLUMN_SPACING.saturating_mul(clamp_u16(widths.len()).saturating_sub(1));
    let content_width = widths
        .iter()
        .fold(gaps, |acc, w| acc.saturating_add(*w))
        .max(text_width(title));
    let width = content_width.saturating_add(2);
    // Borders plus the header row
    let height = clamp_u16(rows.len()).saturating_add(3);
    let area = Rect::new(0, 0, width, height);

    let align = |i: usize| {
        if i == 0 {
            Alignment::Left
        } else {
            Alignment::Right
        }
    };
    let header = Row::new(
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| Cell::from(Line::from(h.as_ref().to_string()).alignment(align(i)))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));
    let body = rows.iter().map(|row| {
        Row::new(
            row.iter()
                .enumerate()
                .map(|(i, value)| Cell::from(Line::from(value.clone()).alignment(align(i)))),
        )
    });

    let table = TableWidget::new(body, widths.iter().map(|w| Constraint::Length(*w)))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(Block::bordered().title(title.to_string()));

    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn table_strings(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

/// Render one view of the projection at the requested granularity
pub fn render_projection(
    scenario: &str,
    view: ColumnView,
    granularity: Granularity,
    months: &[MonthRow],
    years: &[YearRow],
) -> String {
    let table = match granularity {
        Granularity::Month => Table::new(view, granularity, months),
        Granularity::Year => Table::new(view, granularity, years),
    };
    let title = format!(" {scenario}: {view} by {} ", granularity.name());
    render_table(&title, table.headers.as_slice(), &table_strings(&table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_layout() {
        let rows = vec![
            vec!["price".to_string(), "$890,000.00".to_string()],
            vec!["down payment".to_string(), "$178,000.00".to_string()],
        ];
        let text = render_table(" Purchase ", &["item", "value"], &rows);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[0].contains("Purchase"));
        assert!(lines[1].contains("item"));
        assert!(lines[2].contains("price"));
        assert!(lines[2].ends_with("$890,000.00│"));
        assert!(lines[3].contains("down payment"));
        assert!(lines[4].starts_with('└'));
    }

    #[test]
    fn test_render_empty_table() {
        let text = render_table(" Empty ", &["a", "b"], &[]);
        assert_eq!(text.lines().count(), 3);
    }
}
