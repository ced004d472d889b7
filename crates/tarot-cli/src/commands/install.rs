use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tarot_setup::{
    DailySchedule, HostLayout, InstallOptions, Persona, PersonaPreset, SKILL_NAME, install,
};

#[derive(Args)]
pub struct InstallArgs {
    /// Image generation API key (falls back to $FAL_KEY)
    #[arg(long)]
    key: Option<String>,

    /// Reader persona: mystica, luna, oracle, or custom
    #[arg(long, default_value = "mystica")]
    persona: String,

    /// Custom persona name
    #[arg(long)]
    name: Option<String>,

    /// Custom persona appearance
    #[arg(long)]
    description: Option<String>,

    /// Custom persona speaking style
    #[arg(long)]
    style: Option<String>,

    /// Custom persona image prompt
    #[arg(long)]
    prompt: Option<String>,

    /// Daily fortune time, HH:MM
    #[arg(long, default_value = "08:00")]
    daily: String,

    /// Channel for the daily fortune, e.g. #general
    #[arg(long)]
    channel: Option<String>,

    /// Do not schedule a daily fortune
    #[arg(long)]
    no_daily: bool,

    /// Home directory of the host (default: $HOME)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Replace an existing installation
    #[arg(long)]
    force: bool,
}

pub fn run(args: InstallArgs) -> Result<(), String> {
    let layout = match args.root {
        Some(root) => HostLayout::new(root),
        None => HostLayout::from_env().ok_or("HOME is not set; pass --root")?,
    };

    let persona = if args.persona.eq_ignore_ascii_case("custom") {
        Persona::custom(
            args.name.as_deref(),
            args.description.as_deref(),
            args.style.as_deref(),
            args.prompt.as_deref(),
        )
    } else {
        PersonaPreset::parse(&args.persona)
            .map_err(|e| e.to_string())?
            .persona()
    };

    let schedule = if args.no_daily {
        None
    } else {
        Some(DailySchedule::parse_time(&args.daily, args.channel).map_err(|e| e.to_string())?)
    };

    let options = InstallOptions {
        api_key: args
            .key
            .or_else(|| std::env::var("FAL_KEY").ok())
            .unwrap_or_default(),
        persona,
        schedule,
        force: args.force,
    };

    let report = install(&layout, &options).map_err(|e| match e {
        tarot_setup::SetupError::AlreadyInstalled(_) => format!("{e} (use --force to reinstall)"),
        other => other.to_string(),
    })?;

    for warning in &report.warnings {
        println!("  {} {warning}", "⚠".yellow());
    }
    println!(
        "  {} {SKILL_NAME} installed to {}",
        "✓".green(),
        report.skill_dir.display()
    );
    for file in &report.files {
        println!("    {}", file.display().to_string().dimmed());
    }
    println!();
    println!("  Persona: {}", options.persona.name.bold());
    match &options.schedule {
        Some(schedule) => println!(
            "  Daily fortune: {schedule}{}",
            schedule
                .channel
                .as_deref()
                .map(|c| format!(" → {c}"))
                .unwrap_or_default()
        ),
        None => println!("  Daily fortune: disabled"),
    }
    println!("  Restart the host agent to load the skill.");

    Ok(())
}
