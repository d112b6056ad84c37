use crate::factors::{for_category, FactorInfo};
use crate::risk::Category;
use anyhow::Result;
use colored::*;
use std::io::Write;

/// Print the rating rubric of every cataloged factor, optionally limited to
/// one category.
pub fn list_factors(category: Option<Category>) -> Result<()> {
    let stdout = std::io::stdout();
    write_factors(&mut stdout.lock(), category)
}

pub fn write_factors<W: Write>(out: &mut W, category: Option<Category>) -> Result<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        writeln!(out, "{}", format!("{} Risk Factors", category.label()).bold())?;
        for factor in for_category(category) {
            write_factor(out, factor)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_factor<W: Write>(out: &mut W, factor: &FactorInfo) -> Result<()> {
    writeln!(out, "  {} ({})", factor.label, factor.key.dimmed())?;
    for rating in (1..=5).rev() {
        if let Some(text) = factor.describe(rating) {
            writeln!(out, "    {rating}: {text}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_category_lists_only_its_factors() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_factors(&mut buf, Some(Category::Climate)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Climate Risk Factors"));
        assert!(text.contains("Extreme Weather Risk (extreme_weather)"));
        assert!(text.contains("    1: High hurricane/tornado/severe hail risk"));
        assert!(!text.contains("grid_connection"));
    }
}
