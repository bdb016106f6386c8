use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use facetview::locale::format_count;
use facetview::presenter::StatisticsView;

pub fn print_statistic(view: &StatisticsView) {
    let loaded = match view {
        StatisticsView::Pending { field } => {
            println!("\n[{}] ⏳ loading...", field);
            return;
        }
        StatisticsView::Loaded(loaded) => loaded,
    };

    println!("\n[{}] {}", loaded.field, loaded.total_label);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Link"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in loaded.visible_rows() {
        let text = match &row.label.icon {
            Some(icon) => format!("{} ({})", row.label.text, icon),
            None => row.label.text.clone(),
        };
        table.add_row(vec![
            Cell::new(text),
            Cell::new(format_count(row.count)).fg(Color::Cyan),
            Cell::new(&row.link),
        ]);
    }
    println!("{}", table);

    if loaded.has_more() {
        println!(
            "   {} ({} hidden, use --all)",
            loaded.show_more_label,
            loaded.hidden_count()
        );
    }
}
