//! Profiles command - lists the industry registry

use color_eyre::eyre::Result;
use siteforge_core::PROFILES;
use siteforge_generator::Layout;

/// Run the profiles command.
pub fn run() -> Result<()> {
    println!();
    println!("  {:<12} {:<8} {:<16} Keywords", "Profile", "Palette", "Layout");
    for line in lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}

/// One line per profile, in tie-break order.
fn lines() -> Vec<String> {
    PROFILES
        .iter()
        .map(|p| {
            format!(
                "{:<12} {:<8} {:<16} {}",
                p.id,
                p.color_scheme,
                Layout::for_app_type(p.id).as_str(),
                p.keywords.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_registry_order() {
        let lines = lines();
        assert_eq!(lines.len(), PROFILES.len());
        assert!(lines[0].starts_with("saas"));
        assert!(lines.iter().any(|l| l.starts_with("restaurant") && l.contains("full-width-hero")));
    }
}
