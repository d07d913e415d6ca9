//! SiteForge CLI
//!
//! Turns a one-line prompt into a landing page, a multi-page site, a
//! WordPress theme or a showcase page.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use siteforge::cmd::{gallery::GallerySource, wordpress::ThemeSource};
use siteforge_generator::{GalleryTemplate, Layout, ThemeCustomization};

/// Command-line interface for SiteForge.
#[derive(Parser)]
#[command(
    name = "siteforge",
    version,
    about = "Generate websites and WordPress themes from a prompt"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "siteforge.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Show which industry profile a prompt resolves to
    Classify {
        /// Free-text description of the site
        prompt: String,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List the industry profiles
    Profiles,
    /// Render one prompt to an HTML document
    Generate {
        /// Free-text description of the site
        prompt: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Layout override (split-hero, full-width-hero, minimalist)
        #[arg(long)]
        layout: Option<Layout>,
        /// Render the four-page bundle instead
        #[arg(long, conflicts_with = "layout")]
        multi_page: bool,
    },
    /// Render every prompt in a file, one per line
    Batch {
        /// File with one prompt per line
        file: PathBuf,
        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Render four-page bundles
        #[arg(long)]
        multi_page: bool,
    },
    /// Write a WordPress theme directory
    Wordpress {
        /// Derive the theme from a prompt
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        prompt: Option<String>,
        /// Theme name
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        custom: CustomizationArgs,
        /// Theme category (defaults to the configured one)
        #[arg(long)]
        category: Option<String>,
        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a showcase page from explicit text or a prompt
    Gallery {
        /// Derive the text from a prompt
        #[arg(long)]
        prompt: Option<String>,
        /// Showcase (ai-platform, luxury-fashion, fine-dining, real-estate);
        /// picked from the prompt's app type, or ai-platform, when omitted
        #[arg(long)]
        template: Option<GalleryTemplate>,
        #[command(flatten)]
        custom: CustomizationArgs,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Theme text given on the command line.
#[derive(clap::Args)]
struct CustomizationArgs {
    /// Headline
    #[arg(long, required_unless_present = "prompt", conflicts_with = "prompt")]
    title: Option<String>,
    /// Line under the headline
    #[arg(long, default_value = "")]
    subtitle: String,
    /// Company name
    #[arg(long, required_unless_present = "prompt", conflicts_with = "prompt")]
    company: Option<String>,
    /// Description
    #[arg(long, default_value = "")]
    description: String,
    /// Palette id
    #[arg(long, default_value = "blue")]
    color_scheme: String,
}

impl CustomizationArgs {
    fn into_customization(self) -> ThemeCustomization {
        ThemeCustomization {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            company_name: self.company.unwrap_or_default(),
            description: self.description,
            color_scheme: self.color_scheme,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    siteforge::init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify { prompt, json } => {
            siteforge::cmd::classify::run(&prompt, json)?;
        }
        Commands::Profiles => {
            siteforge::cmd::profiles::run()?;
        }
        Commands::Generate {
            prompt,
            output,
            layout,
            multi_page,
        } => {
            siteforge::cmd::generate::run(
                &cli.config,
                &prompt,
                output.as_deref(),
                layout,
                multi_page,
            )?;
        }
        Commands::Batch {
            file,
            output,
            multi_page,
        } => {
            siteforge::cmd::batch::run(&cli.config, &file, output.as_deref(), multi_page)?;
        }
        Commands::Wordpress {
            prompt,
            name,
            custom,
            category,
            output,
        } => {
            let source = match prompt {
                Some(prompt) => ThemeSource::Prompt(prompt),
                None => ThemeSource::Manual {
                    name: name.unwrap_or_default(),
                    customization: custom.into_customization(),
                    category,
                },
            };
            siteforge::cmd::wordpress::run(&cli.config, source, output.as_deref())?;
        }
        Commands::Gallery {
            prompt,
            template,
            custom,
            output,
        } => {
            let source = match prompt {
                Some(prompt) => GallerySource::Prompt(prompt),
                None => GallerySource::Manual(custom.into_customization()),
            };
            siteforge::cmd::gallery::run(&cli.config, source, template, output.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_classify_command_parsing() {
        let args = ["siteforge", "classify", "a bakery", "--json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, PathBuf::from("siteforge.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Classify { prompt, json } => {
                assert_eq!(prompt, "a bakery");
                assert!(json);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_cli_profiles_command_parsing() {
        let cli = Cli::parse_from(["siteforge", "profiles"]);
        assert!(matches!(cli.command, Commands::Profiles));
    }

    #[test]
    fn test_cli_generate_command_parsing() {
        let args = [
            "siteforge",
            "generate",
            "a saas tool",
            "-o",
            "index.html",
            "--layout",
            "minimalist",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Generate {
                prompt,
                output,
                layout,
                multi_page,
            } => {
                assert_eq!(prompt, "a saas tool");
                assert_eq!(output, Some(PathBuf::from("index.html")));
                assert_eq!(layout, Some(Layout::Minimalist));
                assert!(!multi_page);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_generate_rejects_unknown_layout() {
        let args = ["siteforge", "generate", "a saas tool", "--layout", "sidebar"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_generate_layout_conflicts_with_multi_page() {
        let args = [
            "siteforge",
            "generate",
            "a gym",
            "--layout",
            "minimalist",
            "--multi-page",
        ];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_batch_command_parsing() {
        let args = ["siteforge", "batch", "prompts.txt", "--multi-page"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Batch {
                file,
                output,
                multi_page,
            } => {
                assert_eq!(file, PathBuf::from("prompts.txt"));
                assert!(output.is_none());
                assert!(multi_page);
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_cli_wordpress_prompt_parsing() {
        let args = ["siteforge", "wordpress", "--prompt", "a law firm", "-o", "themes"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Wordpress { prompt, name, output, .. } => {
                assert_eq!(prompt.as_deref(), Some("a law firm"));
                assert!(name.is_none());
                assert_eq!(output, Some(PathBuf::from("themes")));
            }
            _ => panic!("Expected Wordpress command"),
        }
    }

    #[test]
    fn test_cli_wordpress_manual_parsing() {
        let args = [
            "siteforge",
            "wordpress",
            "--name",
            "Acme",
            "--title",
            "Welcome",
            "--company",
            "Acme Inc",
            "--color-scheme",
            "green",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Wordpress {
                name,
                custom,
                category,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("Acme"));
                assert!(category.is_none());
                let custom = custom.into_customization();
                assert_eq!(custom.title, "Welcome");
                assert_eq!(custom.company_name, "Acme Inc");
                assert_eq!(custom.color_scheme, "green");
                assert_eq!(custom.subtitle, "");
            }
            _ => panic!("Expected Wordpress command"),
        }
    }

    #[test]
    fn test_cli_wordpress_requires_a_source() {
        assert!(Cli::try_parse_from(["siteforge", "wordpress"]).is_err());
        assert!(Cli::try_parse_from(["siteforge", "wordpress", "--name", "Acme"]).is_err());
    }

    #[test]
    fn test_cli_wordpress_prompt_conflicts_with_text() {
        let args = ["siteforge", "wordpress", "--prompt", "a gym", "--title", "Lift"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_gallery_manual_parsing() {
        let args = [
            "siteforge",
            "gallery",
            "--template",
            "Fine Dining",
            "--title",
            "Tasting Menu",
            "--company",
            "Maison",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Gallery {
                prompt,
                template,
                custom,
                output,
            } => {
                assert!(prompt.is_none());
                assert_eq!(template, Some(GalleryTemplate::FineDining));
                assert!(output.is_none());
                assert_eq!(custom.into_customization().company_name, "Maison");
            }
            _ => panic!("Expected Gallery command"),
        }
    }

    #[test]
    fn test_cli_gallery_requires_text_or_prompt() {
        assert!(Cli::try_parse_from(["siteforge", "gallery", "--template", "real-estate"]).is_err());
        assert!(Cli::try_parse_from(["siteforge", "gallery", "--template", "castle"]).is_err());
        assert!(Cli::try_parse_from(["siteforge", "gallery", "--prompt", "a bistro"]).is_ok());
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["siteforge", "-vvv", "profiles"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["siteforge", "--config", "site.toml", "profiles"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
