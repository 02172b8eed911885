use crate::grid::{month_name, DayCell, MonthGrid, WEEKDAY_HEADER};
use anyhow::{Context, Result};
use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, HeightRule, LineSpacing, PageMargin,
    PageOrientationType, Paragraph, Run, Table, TableAlignmentType, TableBorders, TableCell,
    TableCellBorder, TableCellBorderPosition, TableRow, WidthType,
};
use std::fs::File;
use std::path::Path;

/// Visual knobs for the writable layout.
///
/// Font sizes are half-points; page and cell dimensions are twips (1/20 pt,
/// 1440 per inch). Defaults reproduce a US-letter landscape page with
/// 1.4in-wide day cells and an inch of writing space per week row.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_vertical: i32,
    pub margin_horizontal: i32,
    pub cell_width: usize,
    pub row_height: f32,
    pub title_size: usize,
    pub header_size: usize,
    pub day_size: usize,
    pub label_size: usize,
    pub weekend_color: String,
    pub header_color: String,
    pub border_color: String,
    pub border_width: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_width: 15_840,
            page_height: 12_240,
            margin_vertical: 144,
            margin_horizontal: 720,
            cell_width: 2_016,
            row_height: 1_440.0,
            title_size: 72,
            header_size: 24,
            day_size: 36,
            label_size: 20,
            weekend_color: "E68A00".to_string(),
            header_color: "505050".to_string(),
            border_color: "D3D3D3".to_string(),
            border_width: 4,
        }
    }
}

/// Lays month grids into a `.docx`, one page per month.
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer {
    opts: LayoutOptions,
}

impl DocxRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: LayoutOptions) -> Self {
        Self { opts }
    }

    /// Builds the full document: title + table per month, page break between
    /// months, none after the last.
    pub fn render(&self, grids: &[MonthGrid]) -> Docx {
        let mut docx = Docx::new()
            .page_size(self.opts.page_width, self.opts.page_height)
            .page_orient(PageOrientationType::Landscape)
            .page_margin(
                PageMargin::new()
                    .top(self.opts.margin_vertical)
                    .bottom(self.opts.margin_vertical)
                    .left(self.opts.margin_horizontal)
                    .right(self.opts.margin_horizontal),
            );

        for (index, grid) in grids.iter().enumerate() {
            docx = docx
                .add_paragraph(self.month_title(grid))
                .add_table(self.month_table(grid));
            if index + 1 < grids.len() {
                docx = docx
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
            }
        }
        docx
    }

    /// Renders and packs the document to `path`.
    pub fn write_to_path<P: AsRef<Path>>(&self, grids: &[MonthGrid], path: P) -> Result<()> {
        let path = path.as_ref();
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        self.render(grids)
            .build()
            .pack(file)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn month_title(&self, grid: &MonthGrid) -> Paragraph {
        Paragraph::new().align(AlignmentType::Center).add_run(
            Run::new()
                .add_text(format!("{} {}", month_name(grid.month), grid.year))
                .size(self.opts.title_size)
                .bold(),
        )
    }

    fn month_table(&self, grid: &MonthGrid) -> Table {
        let mut rows = Vec::with_capacity(grid.weeks.len() + 1);

        rows.push(TableRow::new(
            WEEKDAY_HEADER
                .iter()
                .map(|label| self.header_cell(label))
                .collect(),
        ));

        for (week_index, week) in grid.weeks.iter().enumerate() {
            let cells = week
                .iter()
                .map(|slot| match slot {
                    Some(cell) => self.day_cell(cell),
                    // First-week padding keeps its borders so the month block
                    // reads as a rectangle; later blanks stay open.
                    None => self.blank_cell(week_index == 0),
                })
                .collect();
            rows.push(
                TableRow::new(cells)
                    .row_height(self.opts.row_height)
                    .height_rule(HeightRule::AtLeast),
            );
        }

        Table::new(rows)
            .set_grid(vec![self.opts.cell_width; 7])
            .align(TableAlignmentType::Center)
            .set_borders(TableBorders::new().clear_all())
    }

    fn header_cell(&self, label: &str) -> TableCell {
        let paragraph = Paragraph::new().align(AlignmentType::Center).add_run(
            Run::new()
                .add_text(label)
                .size(self.opts.header_size)
                .bold()
                .color(self.opts.header_color.clone()),
        );
        self.bordered(self.sized(TableCell::new()).add_paragraph(paragraph))
    }

    fn day_cell(&self, cell: &DayCell) -> TableCell {
        let mut paragraph = Paragraph::new()
            .align(AlignmentType::Left)
            .line_spacing(LineSpacing::new().before(120).after(0));

        let mut number = Run::new()
            .add_text(cell.day.to_string())
            .size(self.opts.day_size)
            .bold();
        if cell.weekend {
            number = number.color(self.opts.weekend_color.clone());
        }
        paragraph = paragraph.add_run(number);

        if !cell.labels.is_empty() {
            let mut labels = Run::new().size(self.opts.label_size).italic();
            for name in &cell.labels {
                labels = labels.add_break(BreakType::TextWrapping).add_text(name);
            }
            paragraph = paragraph.add_run(labels);
        }

        self.bordered(self.sized(TableCell::new()).add_paragraph(paragraph))
    }

    fn blank_cell(&self, bordered: bool) -> TableCell {
        let cell = self.sized(TableCell::new()).add_paragraph(Paragraph::new());
        if bordered {
            self.bordered(cell)
        } else {
            cell
        }
    }

    fn sized(&self, cell: TableCell) -> TableCell {
        cell.width(self.opts.cell_width, WidthType::Dxa)
    }

    fn bordered(&self, mut cell: TableCell) -> TableCell {
        for position in [
            TableCellBorderPosition::Top,
            TableCellBorderPosition::Bottom,
            TableCellBorderPosition::Left,
            TableCellBorderPosition::Right,
        ] {
            cell = cell.set_border(
                TableCellBorder::new(position)
                    .border_type(BorderType::Single)
                    .size(self.opts.border_width)
                    .color(self.opts.border_color.clone()),
            );
        }
        cell
    }
}
