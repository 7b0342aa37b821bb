//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, SimulationResult};
use crate::game::GameStatus;
use colored::Colorize;

/// Print the result of a position analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POSITION ANALYSIS:".bright_cyan().bold(),
        result.pattern.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let guessed: String = result.guessed.iter().collect();
    println!("\n📊 Word length:   {}", result.length);
    println!(
        "   Guessed:       {}",
        if guessed.is_empty() { "-" } else { guessed.as_str() }
    );
    println!("   Candidates:    {}", result.total_candidates);

    println!("\n🔎 {}", "Adversary's answer per letter:".bright_cyan().bold());
    for analysis in &result.letters {
        let bar = create_progress_bar(
            analysis.remaining as f64,
            result.total_candidates as f64,
            20,
        );
        let outcome = if analysis.occurrences == 0 {
            "miss".red()
        } else {
            format!("+{}", analysis.occurrences).green()
        };
        println!(
            "   {}  [{}] {:5} left  {:3} families  {:>4}  {}",
            analysis.letter.to_string().bright_white().bold(),
            bar.green(),
            analysis.remaining,
            analysis.families,
            outcome,
            analysis.pattern
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, max_wrong: i32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Per length:".bright_cyan().bold());
    for record in &result.records {
        let outcome = match record.status {
            GameStatus::Won => "WIN ".green().bold(),
            GameStatus::Lost => "LOSS".red().bold(),
            GameStatus::Active => "----".bright_black(),
        };
        let guesses: String = record.guesses.iter().collect();
        println!(
            "   {:2} letters  {}  {}/{} wrong  {:5} left  {}",
            record.length,
            outcome,
            record.wrong_guesses,
            max_wrong,
            record.remaining,
            guesses.bright_black()
        );
    }

    println!("\n📈 {}", "Overall:".bright_cyan().bold());
    println!("   Games played:  {}", result.wins + result.losses);
    println!("   Wins:          {}", format!("{}", result.wins).green());
    println!("   Losses:        {}", format!("{}", result.losses).red());
    println!(
        "   Win rate:      {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:    {:.2}s", result.duration.as_secs_f64());
}
