use crate::infra::read_json;
use clap::Args;
use declutter::error::AppError;
use declutter::workflows::inventory::{recommend_inventory, InventoryImporter};
use declutter::workflows::recommendation::{
    generate_reasoning, ActionType, Answers, Factor, FileSettingsStore, MinimalistLevel,
    Multipliers, Profile, RecommendationEngine, RecommendationReport, RecommendationSettings,
    SettingsStore, StrategyConfig,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// JSON file holding the item answers. Individual flags override its fields.
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Item name used in the reasoning text
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// How often the item is used (yes, rarely, no)
    #[arg(long)]
    pub(crate) used: Option<String>,
    /// Sentimental attachment (high, some, none)
    #[arg(long)]
    pub(crate) sentimental: Option<String>,
    /// Physical condition (excellent, good, fair, poor)
    #[arg(long)]
    pub(crate) condition: Option<String>,
    /// Resale value (high, medium, low)
    #[arg(long)]
    pub(crate) value: Option<String>,
    /// Replacement difficulty (easy, moderate, difficult)
    #[arg(long)]
    pub(crate) replace: Option<String>,
    /// Whether there is room for it (yes, no)
    #[arg(long)]
    pub(crate) space: Option<String>,
    /// JSON file holding the household profile
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// JSON settings file overriding the built-in weights and thresholds
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Print the full scoring trail instead of the short recommendation
    #[arg(long)]
    pub(crate) details: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Inventory CSV export with name, used, sentimental, condition, value, replace, space columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// JSON file holding the household profile
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// JSON settings file overriding the built-in weights and thresholds
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Emit JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also print the full scoring trail for the first sample item
    #[arg(long)]
    pub(crate) details: bool,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let answers = answers_from_args(&args)?;
    let profile: Option<Profile> = args.profile.as_deref().map(read_json).transpose()?;
    let settings = load_settings(args.settings)?;
    let engine = RecommendationEngine::default();

    if args.details {
        let report = engine.classify_with_details(&answers, profile.as_ref(), settings.as_ref());
        render_report(&answers, &report);
        println!(
            "Reasoning: {}",
            generate_reasoning(report.recommendation, &answers, profile.as_ref())
        );
        return Ok(());
    }

    let recommendation = engine.classify(&answers, profile.as_ref(), settings.as_ref());
    println!("{}: {}", answers.display_name(), recommendation.label());
    println!(
        "{}",
        generate_reasoning(recommendation, &answers, profile.as_ref())
    );
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let items = InventoryImporter::from_path(&args.input)?;
    let profile: Option<Profile> = args.profile.as_deref().map(read_json).transpose()?;
    let settings = load_settings(args.settings)?;

    let results = recommend_inventory(
        &RecommendationEngine::default(),
        &items,
        profile.as_ref(),
        settings.as_ref(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Inventory recommendations ({} items)", results.len());
    for result in &results {
        println!(
            "  line {:>4}  {:<16} {}",
            result.line, result.label, result.name
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = RecommendationEngine::default();
    let samples = sample_items();
    let minimalist = Profile {
        minimalist_level: Some(MinimalistLevel::Extreme),
        ..Profile::default()
    };

    println!("=== Decluttering recommendations ===");
    for answers in &samples {
        let recommendation = engine.classify(answers, None, None);
        println!("- {}: {}", answers.display_name(), recommendation.label());
        println!("    {}", generate_reasoning(recommendation, answers, None));
    }

    println!();
    println!("=== Same items for an extreme minimalist ===");
    for answers in &samples {
        let recommendation = engine.classify(answers, Some(&minimalist), None);
        println!("- {}: {}", answers.display_name(), recommendation.label());
    }

    println!();
    println!("=== Same items with a usage-weighted strategy ===");
    let usage_first = RecommendationSettings {
        strategy_config: Some(StrategyConfig::new(
            "usage-first",
            Multipliers::new().with(Factor::Usage, 2.0),
        )),
        ..RecommendationSettings::default()
    };
    for answers in &samples {
        let recommendation = engine.classify(answers, None, Some(&usage_first));
        println!("- {}: {}", answers.display_name(), recommendation.label());
    }

    if args.details {
        if let Some(first) = samples.first() {
            println!();
            let report = engine.classify_with_details(first, None, None);
            render_report(first, &report);
        }
    }

    Ok(())
}

fn answers_from_args(args: &ClassifyArgs) -> Result<Answers, AppError> {
    let mut answers: Answers = match args.answers.as_deref() {
        Some(path) => read_json(path)?,
        None => Answers::default(),
    };

    if let Some(name) = &args.name {
        answers.name = name.clone();
    }

    let overrides = [
        (Factor::Usage, &args.used),
        (Factor::Sentimental, &args.sentimental),
        (Factor::Condition, &args.condition),
        (Factor::Value, &args.value),
        (Factor::Replaceability, &args.replace),
        (Factor::Space, &args.space),
    ];
    for (factor, raw) in overrides {
        if let Some(raw) = raw {
            answers.set_option(factor, raw);
        }
    }

    Ok(answers)
}

fn load_settings(path: Option<PathBuf>) -> Result<Option<RecommendationSettings>, AppError> {
    match path {
        Some(path) => Ok(Some(FileSettingsStore::new(path).fetch()?)),
        None => Ok(None),
    }
}

fn render_report(answers: &Answers, report: &RecommendationReport) {
    println!("Scoring trail for {}", answers.display_name());
    println!("  Strategy: {}", report.strategy_used);
    for (action, score) in report.scores.iter() {
        let marker = if action == report.recommendation {
            "*"
        } else {
            " "
        };
        println!("  {marker} {:<16} {score:>6.1}", action.label());
    }

    for (factor, deltas) in &report.breakdown.factors {
        if deltas.is_empty() {
            continue;
        }
        let summary = deltas
            .iter()
            .map(|(action, delta)| format!("{} {delta:+.1}", action.key()))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<16} {summary}", factor.label());
    }
    for (rule, deltas) in &report.breakdown.profile {
        let summary = deltas
            .iter()
            .map(|(action, delta)| format!("{} {delta:+.1}", action.key()))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<16} {summary}", format!("{rule:?}"));
    }

    if let Some(tied) = &report.tied_recommendations {
        let names = tied
            .iter()
            .map(|action| action.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Tied: {names}");
    }
    println!(
        "  Runner-up: {} (margin {:.1}{})",
        report.runner_up.label(),
        report.margin,
        if report.close_call { ", close call" } else { "" }
    );
}

fn sample_items() -> Vec<Answers> {
    let raw = [
        ("Reading lamp", ["yes", "high", "good", "medium", "moderate", "yes"]),
        ("Camping stove", ["rarely", "none", "good", "medium", "moderate", "no"]),
        ("Broken kettle", ["no", "none", "poor", "low", "easy", "no"]),
        ("Designer coat", ["no", "some", "excellent", "high", "difficult", "no"]),
    ];

    raw.iter()
        .map(|(name, options)| {
            let mut answers = Answers::named(*name);
            for (factor, option) in Factor::ordered().into_iter().zip(options) {
                answers.set_option(factor, option);
            }
            answers
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_cover_several_actions() {
        let engine = RecommendationEngine::default();
        let actions: Vec<ActionType> = sample_items()
            .iter()
            .map(|answers| engine.classify(answers, None, None))
            .collect();

        assert_eq!(actions[0], ActionType::Keep);
        assert_eq!(actions[2], ActionType::Discard);
        assert!(actions.iter().any(|action| *action == ActionType::Sell));
    }

    #[test]
    fn flags_override_answers() {
        let args = ClassifyArgs {
            name: Some("Stand mixer".to_string()),
            used: Some("Rarely".to_string()),
            space: Some("no".to_string()),
            condition: Some("sparkling".to_string()),
            ..ClassifyArgs::default()
        };

        let answers = answers_from_args(&args).expect("answers build");

        assert_eq!(answers.name, "Stand mixer");
        assert_eq!(answers.option_key(Factor::Usage), Some("rarely"));
        assert_eq!(answers.option_key(Factor::Space), Some("no"));
        assert_eq!(answers.option_key(Factor::Condition), None);
    }
}
