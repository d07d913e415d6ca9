//! Classify command - explains which profile a prompt resolves to

use color_eyre::eyre::{Result, WrapErr};
use serde_json::json;
use siteforge_core::{ContentModel, score};
use siteforge_generator::Layout;

/// Run the classify command.
///
/// Prints the winning profile, every profile's keyword matches and the
/// derived content model, as text or as JSON.
pub fn run(prompt: &str, as_json: bool) -> Result<()> {
    tracing::info!(prompt, as_json, "Classifying prompt");

    if as_json {
        let out = serde_json::to_string_pretty(&report(prompt))
            .wrap_err("Failed to serialize classification")?;
        println!("{out}");
        return Ok(());
    }

    let model = ContentModel::from_prompt(prompt);
    let profile = model.profile();

    println!();
    println!("  Profile:  {}", profile.id);
    println!("  Palette:  {}", model.color_scheme);
    println!("  Layout:   {}", Layout::for_app_type(model.app_type));
    println!("  App name: {}", model.app_name);
    println!("  Features: {}", model.features.join(", "));
    println!("  Sections: {}", model.sections.join(", "));
    println!();
    println!("  Keyword matches:");
    for s in score(prompt).iter().filter(|s| s.count() > 0) {
        println!("    {:<12} {} ({})", s.profile, s.count(), s.matched.join(", "));
    }
    println!();

    Ok(())
}

/// Classification of `prompt` as a JSON value.
#[must_use]
pub fn report(prompt: &str) -> serde_json::Value {
    let model = ContentModel::from_prompt(prompt);
    json!({
        "profile": model.app_type,
        "palette": model.color_scheme,
        "layout": Layout::for_app_type(model.app_type).as_str(),
        "scores": score(prompt),
        "model": model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let value = report("Build a restaurant website with menu and reservations");

        assert_eq!(value["profile"], "restaurant");
        assert_eq!(value["palette"], "orange");
        assert_eq!(value["layout"], "full-width-hero");
        assert_eq!(value["model"]["app_type"], "restaurant");

        let scores = value["scores"].as_array().unwrap();
        let restaurant = scores
            .iter()
            .find(|s| s["profile"] == "restaurant")
            .unwrap();
        assert!(!restaurant["matched"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_report_empty_prompt() {
        let value = report("");
        assert_eq!(value["profile"], "saas");
        assert_eq!(value["layout"], "split-hero");
    }
}
