//! Plain-text rendering of products and statistics.

use std::io::{self, Write};

use catalog_core::{CatalogStats, Product, StockLevel};

const EMPTY_MESSAGE: &str = "No products found. Start by adding your first product.";

/// Renders a product table.
///
/// ```text
/// ID             NAME                      CATEGORY       PRICE       QTY      STATUS
/// 1              Smartphone Samsung        Electronics    699.99 €    15       Available
/// 2              T-shirt Cotton            Clothing       24.99 €     3 (low)  Available
/// ```
pub fn product_table<W: Write>(out: &mut W, products: &[&Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "{EMPTY_MESSAGE}");
    }

    writeln!(
        out,
        "{:<14} {:<25} {:<14} {:<11} {:<8} {}",
        "ID", "NAME", "CATEGORY", "PRICE", "QTY", "STATUS"
    )?;

    for product in products {
        writeln!(
            out,
            "{:<14} {:<25} {:<14} {:<11} {:<8} {}",
            product.id,
            truncate(&product.name, 25),
            truncate(product.category.label(), 14),
            product.display_price(),
            quantity_cell(product),
            availability(product),
        )?;
    }

    Ok(())
}

/// Renders every field of one product.
pub fn product_detail<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(out, "ID:          {}", product.id)?;
    writeln!(out, "Name:        {}", product.name)?;
    writeln!(out, "Category:    {}", product.category.label())?;
    writeln!(out, "Price:       {}", product.display_price())?;
    writeln!(out, "Quantity:    {}", quantity_cell(product))?;
    writeln!(out, "Status:      {}", availability(product))?;
    writeln!(out, "Description: {}", product.description)?;
    match &product.image_data {
        Some(data) => writeln!(out, "Image:       {} chars", data.len()),
        None => writeln!(out, "Image:       none"),
    }
}

/// One-line statistics summary.
pub fn stats_line<W: Write>(out: &mut W, stats: &CatalogStats) -> io::Result<()> {
    writeln!(
        out,
        "Total: {}  Available: {}  Low stock: {}  Out of stock: {}",
        stats.total, stats.available, stats.low_stock, stats.out_of_stock
    )
}

fn quantity_cell(product: &Product) -> String {
    match product.stock_level() {
        StockLevel::OutOfStock => format!("{} (out)", product.quantity),
        StockLevel::Low => format!("{} (low)", product.quantity),
        StockLevel::InStock => product.quantity.to_string(),
    }
}

fn availability(product: &Product) -> &'static str {
    if product.available {
        "Available"
    } else {
        "Unavailable"
    }
}

/// Cuts `s` to `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::demo_products;

    fn render_table(products: &[Product]) -> String {
        let refs: Vec<&Product> = products.iter().collect();
        let mut out = Vec::new();
        product_table(&mut out, &refs).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_marks_stock_levels() {
        let text = render_table(&demo_products());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Smartphone Samsung"));
        assert!(lines[1].contains("699.99 €"));
        assert!(lines[2].contains("3 (low)"));
        assert!(lines[3].contains("0 (out)"));
        assert!(lines[3].ends_with("Unavailable"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_table(&[]).trim_end(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_custom_category_is_shown_raw() {
        let mut product = demo_products().remove(0);
        product.category = "garden".parse().unwrap();

        let mut out = Vec::new();
        product_detail(&mut out, &product).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Category:    garden"));
        assert!(text.contains("Image:       none"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Cafetière Programmable", 10), "Cafetière…");
    }
}
