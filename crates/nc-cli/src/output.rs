//! Terminal output formatting.

use colored::{ColoredString, Colorize};

use nc_core::article::AnalysisResult;
use nc_core::bias::BiasResult;
use nc_core::factcheck::Fact;
use nc_core::media::MediaResult;
use nc_core::render::{self, ScoreTier, SentimentIndicator};

/// Print a full article analysis.
pub fn print_analysis(result: &AnalysisResult) {
    println!("{} {}", "Article".cyan().bold(), result.url);
    if let Some(title) = &result.title {
        println!("{}: {}", "Title".bold(), title);
    }

    if let Some(bias) = &result.bias {
        println!();
        println!("{}", "Political Bias".bold());
        println!(
            "  {} {}",
            bias_colored(&bias.label),
            format!("{}% confidence", render::confidence_percent(bias.confidence)).dimmed()
        );
        if let Some(explanation) = &bias.explanation {
            println!("  {}", explanation.dimmed());
        }
    }

    if let Some(credibility) = &result.credibility {
        println!();
        println!("{}", "Credibility".bold());
        let icon = if render::credibility_icon_ok(credibility.score) {
            "✓".green()
        } else {
            "⚠".red()
        };
        println!("  {} {}%", icon, score_colored(credibility.score));
        for factor in &credibility.factors {
            println!("  • {}", factor.dimmed());
        }
    }

    if let Some(sentiment) = &result.sentiment {
        let indicator = SentimentIndicator::for_label(&sentiment.label);
        println!();
        println!("{}", "Sentiment".bold());
        println!(
            "  {} {} {}",
            indicator.symbol(),
            sentiment.label,
            format!("({})", render::sentiment_value(sentiment.score)).dimmed()
        );
    }

    if let Some(factuality) = &result.factuality {
        println!();
        println!("{}", "Factuality".bold());
        println!(
            "  {}% {}",
            score_colored(factuality.score),
            format!("({} claims verified)", factuality.claims_verified).dimmed()
        );
        if !factuality.issues_found.is_empty() {
            println!("  {}", "Issues Found:".red());
            for issue in &factuality.issues_found {
                println!("  • {}", issue.dimmed());
            }
        }
    }

    if let Some(summary) = &result.summary {
        println!();
        println!("{}", "Summary".bold());
        println!("  {}", summary);
    }

    footer();
}

/// Print a bias check result.
pub fn print_bias(result: &BiasResult) {
    println!(
        "{}: {}",
        "Detected Bias".bold(),
        bias_colored(&result.label)
    );
    println!(
        "{}: {}%",
        "Confidence".bold(),
        render::confidence_percent(result.confidence)
    );
    if let Some(explanation) = &result.explanation {
        println!("{}: {}", "Explanation".bold(), explanation.dimmed());
    }

    footer();
}

/// Print fact-check results, one block per match.
pub fn print_facts(facts: &[Fact]) {
    if facts.is_empty() {
        println!(
            "{}",
            "No matching fact-checks found for this query.".dimmed()
        );
        return;
    }

    for fact in facts {
        println!("{}", fact.title.bold());
        println!("  {} {}", "Source:".dimmed(), fact.source);
        println!("  {} {}", "Verdict:".dimmed(), fact.verdict.yellow().bold());
        if !fact.summary.is_empty() {
            println!("  {}", fact.summary.dimmed());
        }
        if !fact.url.is_empty() {
            println!("  {}", fact.url.underline().dimmed());
        }
        println!();
    }

    println!("{} fact-check(s) found", facts.len());
    footer();
}

/// Print a media verification result.
pub fn print_media(result: &MediaResult) {
    println!(
        "{}: {}",
        "Result".bold(),
        verdict_colored(result.verdict.display())
    );
    if let Some(details) = &result.details {
        println!("{}: {}", "Details".bold(), details.dimmed());
    }
    if let Some(metadata) = &result.metadata {
        if let Ok(pretty) = serde_json::to_string_pretty(metadata) {
            println!("{}:", "Metadata".bold());
            for line in pretty.lines() {
                println!("  {}", line.dimmed());
            }
        }
    }
    if !result.evidence_urls.is_empty() {
        println!("{}:", "Evidence".bold());
        for url in &result.evidence_urls {
            println!("  • {}", url.underline());
        }
    }

    footer();
}

/// Color a bias label the way the web badges do.
fn bias_colored(label: &str) -> ColoredString {
    match render::bias_badge_class(label) {
        "badge-left" => label.blue().bold(),
        "badge-right" => label.red().bold(),
        "badge-center" => label.green().bold(),
        "badge-neutral" => label.normal().bold(),
        _ => label.yellow().bold(),
    }
}

/// Color a score percentage by tier.
fn score_colored(score: f64) -> ColoredString {
    let percent = render::score_percent(score);
    match ScoreTier::for_score(score) {
        ScoreTier::High => percent.green().bold(),
        ScoreTier::Mid => percent.yellow().bold(),
        ScoreTier::Low => percent.red().bold(),
    }
}

fn verdict_colored(display: &str) -> ColoredString {
    match display {
        "Genuine" => display.green().bold(),
        "Unknown" => display.normal().bold(),
        _ => display.red().bold(),
    }
}

fn footer() {
    println!();
    println!(
        "{}",
        format!("Checked at {}", chrono::Local::now().format("%Y-%m-%d %H:%M")).dimmed()
    );
}
