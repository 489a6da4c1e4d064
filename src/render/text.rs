//! Plain-text grid renderer.
//!
//! Unlike the HTML table, the text grid does not merge rows: every cell
//! lists every course covering it, one name per line, and carries an
//! overlap flag.

use std::fmt;

use super::RenderConfig;
use crate::axis::TimeAxis;
use crate::compositor::Composition;
use crate::models::Day;

/// One cell of a [`TextGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextCell {
    /// Occupant names joined by `\n`, in snapshot order.
    pub text: String,
    /// Whether two or more courses cover this cell.
    pub overlap: bool,
}

/// One slot row of a [`TextGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    /// Slot label.
    pub label: String,
    /// One cell per visible day.
    pub cells: Vec<TextCell>,
}

/// A slot × day table of occupant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    /// Visible day columns.
    pub days: Vec<Day>,
    /// One row per slot.
    pub rows: Vec<TextRow>,
}

impl TextGrid {
    /// Cell at (`slot`, `day`), if both are visible.
    pub fn cell(&self, slot: usize, day: Day) -> Option<&TextCell> {
        let column = self.days.iter().position(|&d| d == day)?;
        self.rows.get(slot).and_then(|r| r.cells.get(column))
    }
}

/// Builds the text grid for a composition.
pub fn render_grid(composition: &Composition, axis: &TimeAxis, config: &RenderConfig) -> TextGrid {
    let days = config.visible_days();
    let rows = axis
        .iter()
        .map(|slot| TextRow {
            label: slot.label.clone(),
            cells: days
                .iter()
                .map(|&day| {
                    let occupants = composition.occupancy(day, slot.index);
                    TextCell {
                        text: occupants
                            .iter()
                            .map(|e| e.name.as_str())
                            .collect::<Vec<_>>()
                            .join("\n"),
                        overlap: composition.is_conflict(day, slot.index),
                    }
                })
                .collect(),
        })
        .collect();
    TextGrid { days, rows }
}

impl fmt::Display for TextGrid {
    /// Aligned table. Overlapping cells are prefixed with `!`; multi-name
    /// cells take one line per name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_lines = |cell: &TextCell| -> Vec<String> {
            cell.text
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    if cell.overlap && i == 0 {
                        format!("! {line}")
                    } else if cell.overlap {
                        format!("  {line}")
                    } else {
                        line.to_string()
                    }
                })
                .collect()
        };

        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = (0..self.days.len())
            .map(|col| {
                self.rows
                    .iter()
                    .flat_map(|r| r.cells.get(col).into_iter().flat_map(cell_lines))
                    .map(|l| l.chars().count())
                    .chain(std::iter::once(self.days[col].label().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (day, &width) in self.days.iter().zip(&widths) {
            write!(f, " | {:width$}", day.label())?;
        }
        writeln!(f)?;

        for row in &self.rows {
            let lines: Vec<Vec<String>> = row.cells.iter().map(cell_lines).collect();
            let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for i in 0..height {
                let label = if i == 0 { row.label.as_str() } else { "" };
                write!(f, "{label:label_width$}")?;
                for (cell, &width) in lines.iter().zip(&widths) {
                    let text = cell.get(i).map(String::as_str).unwrap_or("");
                    write!(f, " | {text:width$}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HashColorAssigner;
    use crate::compositor::compose;
    use crate::models::CourseEntry;

    fn grid(entries: &[CourseEntry], config: &RenderConfig) -> TextGrid {
        let axis = TimeAxis::standard();
        render_grid(&compose(entries, &axis, &HashColorAssigner), &axis, config)
    }

    #[test]
    fn test_cells_list_every_occupant() {
        let a = CourseEntry::new("A", Day::Mon, 2, 4, &HashColorAssigner);
        let b = CourseEntry::new("B", Day::Mon, 3, 5, &HashColorAssigner);
        let g = grid(&[a, b], &RenderConfig::default());

        assert_eq!(g.rows.len(), 24);
        assert_eq!(g.cell(2, Day::Mon).unwrap().text, "A");
        assert!(!g.cell(2, Day::Mon).unwrap().overlap);
        assert_eq!(
            g.cell(3, Day::Mon).unwrap(),
            &TextCell {
                text: "A\nB".into(),
                overlap: true
            }
        );
        assert_eq!(g.cell(4, Day::Mon).unwrap().text, "B");
        assert_eq!(g.cell(5, Day::Mon).unwrap(), &TextCell::default());
    }

    #[test]
    fn test_hidden_weekend() {
        let g = grid(&[], &RenderConfig::default().with_weekend(false));
        assert_eq!(g.days.len(), 5);
        assert!(g.cell(0, Day::Sun).is_none());
        assert!(g.rows.iter().all(|r| r.cells.len() == 5));
    }

    #[test]
    fn test_display() {
        let a = CourseEntry::new("A", Day::Mon, 0, 2, &HashColorAssigner);
        let b = CourseEntry::new("B", Day::Mon, 1, 2, &HashColorAssigner);
        let text = grid(&[a, b], &RenderConfig::default().with_weekend(false)).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("| Mon"));
        assert!(lines[0].contains("| Fri"));
        assert!(lines[1].starts_with("0 (08:00)"));
        assert!(lines[1].contains("| A  "));
        // The conflict row takes two lines.
        assert!(lines[2].starts_with(".5 (08:30)"));
        assert!(lines[2].contains("| ! A"));
        assert!(lines[3].contains("|   B"));
        assert!(lines[4].starts_with("1 (09:00)"));
        assert_eq!(lines.len(), 1 + 24 + 1);
    }

    #[test]
    fn test_display_tolerates_short_rows() {
        let g = TextGrid {
            days: vec![Day::Mon, Day::Tue],
            rows: vec![
                TextRow {
                    label: "0 (08:00)".into(),
                    cells: vec![TextCell {
                        text: "Algorithms".into(),
                        overlap: false,
                    }],
                },
                TextRow {
                    label: ".5 (08:30)".into(),
                    cells: Vec::new(),
                },
            ],
        };
        let text = g.to_string();
        assert!(text.contains("| Algorithms"));
        assert!(text.contains("| Tue"));
        assert_eq!(text.lines().count(), 3);
    }
}
