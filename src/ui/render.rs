use itertools::Itertools;
use tabled::{Table, Tabled, settings::Style};

use super::view_state::{ResultsView, RowView, ViewState};

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Strategies")]
    strategies: String,
    #[tabled(rename = "Count")]
    count: u32,
}

impl From<&RowView> for DisplayRow {
    fn from(row: &RowView) -> Self {
        Self {
            stock: row.name.clone(),
            price: row.price_label.clone(),
            strategies: row.strategy_tags.iter().join(" "),
            count: row.strategy_count,
        }
    }
}

/// Paint the whole panel as text. Reads only the view-state; all decisions
/// were made by the projection.
pub fn render(view: &ViewState) -> String {
    let mut out = String::new();

    out.push_str("SYSTEM STATUS\n");
    out.push_str(&format!("  Cache size:        {}\n", view.cache_size));
    out.push_str(&format!(
        "  Cached strategies: {}\n",
        view.cached_strategy_count
    ));
    out.push_str(&format!("  Last update:       {}\n", view.last_updated_label));
    if let Some(prediction) = view.prediction {
        out.push_str(&format!(
            "  Cache status ({}+): {}\n",
            view.slider_value, prediction
        ));
    }
    if view.background_loading {
        out.push_str("  Pre-loading strategies in background...\n");
    }
    out.push('\n');

    match &view.results {
        ResultsView::Welcome => {
            out.push_str("Select minimum strategies and scan to view results.\n");
        }
        ResultsView::Message {
            total,
            from_cache,
            text,
        } => {
            out.push_str(&results_header(*total, *from_cache));
            out.push_str(&format!("{}\n", text));
        }
        ResultsView::Table {
            total,
            from_cache,
            rows,
        } => {
            out.push_str(&results_header(*total, *from_cache));
            let display_rows: Vec<DisplayRow> = rows.iter().map(DisplayRow::from).collect();
            let table = Table::new(display_rows).with(Style::rounded()).to_string();
            out.push_str(&table);
            out.push('\n');
        }
    }

    out
}

fn results_header(total: usize, from_cache: bool) -> String {
    if from_cache {
        format!("{} stocks found  [cached]\n", total)
    } else {
        format!("{} stocks found\n", total)
    }
}
