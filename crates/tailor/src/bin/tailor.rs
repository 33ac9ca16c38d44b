//! Command-line front end: render buttons, merge class lists, explain merges.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::Style;
use tailor::{explain_merge, merge_classes, Button, ButtonProps, ButtonTheme, CounterPage, Renderer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tailor", version, about = "Styled buttons and utility-class merging")]
struct Cli {
    /// YAML theme file overriding the built-in class tables
    #[arg(long, global = true, value_name = "FILE")]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the HTML of a button
    Button {
        /// Button label
        #[arg(default_value = "Click me")]
        label: String,
        #[arg(long, value_enum, default_value_t = VariantArg::Primary)]
        variant: VariantArg,
        #[arg(long, value_enum, default_value_t = SizeArg::Medium)]
        size: SizeArg,
        /// Extra classes, applied last
        #[arg(long)]
        class: Option<String>,
        /// Native attribute as key=value (repeatable)
        #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
        #[arg(long)]
        disabled: bool,
    },
    /// Print the merged form of a class list
    Merge {
        #[arg(required = true)]
        classes: Vec<String>,
    },
    /// Show which classes survive a merge and what replaced the rest
    Explain {
        #[arg(required = true)]
        classes: Vec<String>,
    },
    /// Print the counter page after a number of clicks
    Page {
        #[arg(long, default_value_t = 0)]
        clicks: u64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl From<VariantArg> for tailor::Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Primary => tailor::Variant::Primary,
            VariantArg::Secondary => tailor::Variant::Secondary,
            VariantArg::Outline => tailor::Variant::Outline,
            VariantArg::Ghost => tailor::Variant::Ghost,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for tailor::Size {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Small => tailor::Size::Small,
            SizeArg::Medium => tailor::Size::Medium,
            SizeArg::Large => tailor::Size::Large,
        }
    }
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty attribute name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => ButtonTheme::from_path(path)
            .with_context(|| format!("loading theme {}", path.display()))?,
        None => ButtonTheme::new(),
    };
    let renderer = Renderer::with_theme(theme.clone()).context("building renderer")?;

    match cli.command {
        Command::Button {
            label,
            variant,
            size,
            class,
            attrs,
            disabled,
        } => {
            let mut props = ButtonProps::new(label)
                .variant(variant.into())
                .size(size.into())
                .class(class);
            for (key, value) in attrs {
                props = props.attr(key, value);
            }
            if disabled {
                props = props.disabled(true);
            }
            let button = Button::with_theme(props, &theme);
            println!("{}", renderer.render_button(&button)?);
        }
        Command::Merge { classes } => {
            println!("{}", merge_classes(&classes.join(" ")));
        }
        Command::Explain { classes } => {
            let report = explain_merge(&classes.join(" "));
            let kept = Style::new().green();
            let dropped = Style::new().red().strikethrough();
            let muted = Style::new().dim();

            for class in &report.kept {
                println!("  {} {}", kept.apply_to("+"), class);
            }
            for entry in &report.dropped {
                println!(
                    "  {} {} {}",
                    dropped.apply_to("-"),
                    dropped.apply_to(&entry.class),
                    muted.apply_to(format!("(overridden by {})", entry.overridden_by))
                );
            }
            println!("{}", report.class_name());
        }
        Command::Page { clicks } => {
            let page = CounterPage::new();
            for _ in 0..clicks {
                page.click();
            }
            println!("{}", renderer.render_page(&page)?);
        }
    }

    Ok(())
}
