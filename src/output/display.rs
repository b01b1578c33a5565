//! Display functions for command results

use super::formatters::{
    create_progress_bar, format_letters, letter_char, masked_word, revealed_letters,
};
use crate::commands::{
    GroupSummary, LetterSort, LetterStats, SimulationConfig, SimulationReport, TraceResult,
};
use crate::solver::FailurePolicy;
use colored::Colorize;

/// Number of hardest groups listed in a simulation report
const HARDEST_GROUPS: usize = 10;

/// Failed words listed before the report truncates
const FAILED_WORDS_SHOWN: usize = 20;

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport, config: &SimulationConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n⚙️  {}", "Settings:".bright_cyan().bold());
    println!("   Guess policy:     {}", config.elimination_policy.name());
    println!("   Failure rule:     {}", describe_failure(config));
    println!(
        "   Letter ranking:   {}",
        if config.use_constraint_grouping {
            "per constraint group"
        } else {
            "whole corpus"
        }
    );

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Trials played:    {}", report.played());
    if report.skipped > 0 {
        println!(
            "   Trials skipped:   {}",
            report.skipped.to_string().yellow()
        );
    }
    println!(
        "   Mean wrong:       {}",
        format!("{:.2}", report.mean_wrong_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst case:       {}",
        report.max_wrong_attempts().to_string().yellow()
    );
    println!(
        "   Above {} wrong:    {} ({:.1}%)",
        report.threshold, report.above_threshold, report.above_threshold_percentage
    );
    let failed = report.failed_words.len();
    let failed_text = format!("{failed}");
    println!(
        "   Failed:           {}",
        if failed == 0 {
            failed_text.green()
        } else {
            failed_text.red()
        }
    );
    println!("   Rankings scored:  {}", report.rankings_computed);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.played() > 0 {
        println!("\n📈 {}", "Wrong attempts:".bright_cyan().bold());
        for (&wrong, &count) in &report.distribution {
            let pct = count as f64 / report.played() as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            let bar = if wrong > report.threshold {
                bar.red()
            } else {
                bar.green()
            };
            println!("   {wrong:2}: {bar} {count:5} ({pct:5.1}%)");
        }
    }

    print_hardest_groups(&report.groups);

    if !report.failed_words.is_empty() {
        println!("\n❌ {}", "Failed words:".bright_red().bold());
        for word in report.failed_words.iter().take(FAILED_WORDS_SHOWN) {
            println!("   {word}");
        }
        if failed > FAILED_WORDS_SHOWN {
            println!("   ... and {} more", failed - FAILED_WORDS_SHOWN);
        }
    }
}

fn describe_failure(config: &SimulationConfig) -> String {
    match config.failure_policy {
        FailurePolicy::Unresolved => "more than one candidate left".to_string(),
        FailurePolicy::ExceedsWrongAttempts(limit) => {
            format!("more than {limit} wrong attempts")
        }
    }
}

fn print_hardest_groups(groups: &[GroupSummary]) {
    let mut hardest: Vec<&GroupSummary> = groups.iter().filter(|g| g.total_wrong > 0).collect();
    if hardest.is_empty() {
        return;
    }
    hardest.sort_by(|a, b| b.weighted_wrong.total_cmp(&a.weighted_wrong));

    let max = hardest[0].weighted_wrong;
    println!("\n🔥 {}", "Hardest constraint groups:".bright_cyan().bold());
    for group in hardest.iter().take(HARDEST_GROUPS) {
        println!(
            "   {:<12} {} {:6.2}  ({} words, {} played, mean {:.2})",
            group.key.to_string().bright_white(),
            create_progress_bar(group.weighted_wrong, max, 20).yellow(),
            group.weighted_wrong,
            group.group_size,
            group.trials,
            group.mean_wrong()
        );
    }
}

/// Print the guesses made for a single word
pub fn print_trace_result(result: &TraceResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tracing: {}  {}",
        result.target.to_uppercase().bright_yellow().bold(),
        format!("[{}]", result.key).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Candidate group: {} words",
        result.group_size.to_string().bright_white()
    );

    if verbose && !result.ranking.is_empty() {
        println!(
            "Letter ranking:  {}",
            format_letters(result.ranking.iter().map(|entry| entry.letter))
        );
        for entry in &result.ranking {
            println!(
                "  {}  score {:.3}  ({} words / {} patterns)",
                letter_char(entry.letter),
                entry.score,
                entry.occurrences,
                entry.patterns
            );
        }
    }

    for (i, step) in result.steps.iter().enumerate() {
        let revealed = revealed_letters(&result.steps[..=i]);
        let outcome = if step.hit {
            "hit".green()
        } else {
            "miss".red()
        };
        println!(
            "\nGuess {}: {} {}  {}",
            i + 1,
            letter_char(step.letter).to_string().bold(),
            outcome,
            masked_word(&result.target, &revealed)
        );
        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    if result.exhausted {
        println!("\n{}", "No eligible letter left to guess".yellow());
    }
    if result.remaining.len() > 1 {
        println!("Still possible: {}", result.remaining.join(", "));
    }

    println!();
    let wrong = result.result.wrong_attempts;
    if result.result.is_failure() {
        println!(
            "{}",
            format!("❌ Failed with {wrong} wrong attempts").red().bold()
        );
    } else {
        println!(
            "{}",
            format!("✅ Resolved with {wrong} wrong attempts")
                .green()
                .bold()
        );
    }
}

/// Print per-letter statistics, already sorted by `sort`
pub fn print_letter_statistics(stats: &[LetterStats], sort: LetterSort, word_count: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER STATISTICS".bright_cyan().bold(),
        format!("(sorted by {})", sort.name()).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n{word_count} words\n");
    println!(
        "   {}  {:>7} {:>7} {:>8} {:>8} {:>10}",
        " ", "total", "unique", "average", "interior", "usefulness"
    );

    let max = stats.iter().map(|s| s.total).max().unwrap_or(0) as f64;
    for entry in stats {
        let usefulness = entry
            .usefulness
            .map_or_else(|| "-".to_string(), |score| format!("{score:.3}"));
        println!(
            "   {}  {:>7} {:>7} {:>8.1} {:>8} {:>10}  {}",
            letter_char(entry.letter).to_string().bright_yellow(),
            entry.total,
            entry.unique,
            entry.average,
            entry.interior,
            usefulness,
            create_progress_bar(entry.total as f64, max, 20).green()
        );
    }
}
