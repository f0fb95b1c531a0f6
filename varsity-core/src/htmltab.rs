//! HTML standings-table extraction.
//!
//! Scraping sources fetch a page, then hand the raw markup here. Extraction
//! is fully synchronous and returns owned cell text, so no parser state is
//! ever held across an await point.

use scraper::{Html, Selector};

use crate::classify::keyword_hit;

/// Header keywords that mark a candidate standings table.
pub const STANDINGS_HEADER_KEYWORDS: &[&str] = &["rank", "team", "w", "l", "pct", "gb"];

/// One table lifted out of a document, reduced to text.
#[derive(Debug, Clone)]
pub struct ScrapedTable {
    /// Header cell texts (`th`), in order.
    pub headers: Vec<String>,
    /// Body rows: `td` cell texts per row. Header-only rows are omitted.
    pub rows: Vec<Vec<String>>,
    /// Text of the table's parent element, for bucket classification.
    pub context: String,
    /// Full text of the table itself.
    pub body: String,
}

fn element_text(el: scraper::ElementRef<'_>) -> String {
    let mut out = String::new();
    for piece in el.text() {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// Extract every table matching `table_selector` from raw markup.
///
/// An unparsable selector yields no tables; a malformed document yields
/// whatever the lenient HTML parser can recover.
#[must_use]
pub fn extract_tables(html: &str, table_selector: &str) -> Vec<ScrapedTable> {
    let Ok(table_sel) = Selector::parse(table_selector) else {
        return Vec::new();
    };
    let th_sel = Selector::parse("th").expect("static selector");
    let tr_sel = Selector::parse("tr").expect("static selector");
    let td_sel = Selector::parse("td").expect("static selector");

    let doc = Html::parse_document(html);
    let mut out = Vec::new();
    for table in doc.select(&table_sel) {
        let headers: Vec<String> = table.select(&th_sel).map(element_text).collect();
        let rows: Vec<Vec<String>> = table
            .select(&tr_sel)
            .map(|tr| tr.select(&td_sel).map(element_text).collect::<Vec<_>>())
            .filter(|cells: &Vec<String>| !cells.is_empty())
            .collect();
        let context = table
            .parent()
            .and_then(scraper::ElementRef::wrap)
            .map(element_text)
            .unwrap_or_default();
        let body = element_text(table);
        out.push(ScrapedTable {
            headers,
            rows,
            context,
            body,
        });
    }
    out
}

/// Whether a table's headers look like a standings table. Short keywords
/// ("w", "l", "gb") must match a whole header word.
#[must_use]
pub fn is_standings_table(headers: &[String], keywords: &[&str]) -> bool {
    headers.iter().any(|h| {
        let h = h.to_lowercase();
        keywords.iter().any(|k| keyword_hit(&h, k))
    })
}
