use std::io::{self, BufRead, Write};

use colored::Colorize;
use tarot_core::Tarot;

use crate::present::PresentConfig;

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Spread(&'static str),
    Daily,
    Deck,
    Guide,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().to_lowercase().as_str() {
            "1" => Self::Spread("single"),
            "2" => Self::Spread("three"),
            "3" => Self::Spread("love"),
            "4" => Self::Spread("career"),
            "5" => Self::Spread("celtic"),
            "6" => Self::Daily,
            "7" => Self::Deck,
            "8" => Self::Guide,
            "0" | "q" | "quit" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const ENTRIES: [(&str, &str, &str, &str); 8] = [
    ("1", "🔮", "Single Card Draw ", "Quick daily guidance"),
    ("2", "🃏", "Three Card Spread", "Past / Present / Future"),
    ("3", "💕", "Love Spread      ", "Matters of the heart"),
    ("4", "💼", "Career Spread    ", "Professional path"),
    ("5", "✨", "Celtic Cross     ", "The Grand Reading"),
    ("6", "🌅", "Daily Fortune    ", "Today's card"),
    ("7", "📚", "View Full Deck   ", "Browse 78 cards"),
    ("8", "❓", "How to Play      ", "Learn about tarot"),
];

fn print_menu() {
    let rule = "═".repeat(58);
    println!();
    println!("{}", format!("╔{rule}╗").magenta());
    println!("        {}", "🔮  C L A V T A R O T  🔮".bold());
    println!("        {}", "Tarot readings in your terminal".dimmed());
    println!("{}", format!("╠{rule}╣").magenta());
    for (key, icon, title, hint) in ENTRIES {
        println!(
            "   {} {icon}  {title} {}",
            format!("{key}.").bold(),
            format!("— {hint}").dimmed()
        );
    }
    println!("   {} 👋  Exit", "0.".bold());
    println!("{}", format!("╚{rule}╝").magenta());
}

pub fn run(tarot: &Tarot, config: &PresentConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print_menu();
        print!("\n  {} ", "Choose your path (0-8):".cyan());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let Some(choice) = Choice::parse(&line) else {
            println!(
                "\n  {}",
                "The spirits don't recognize that symbol. Try 1-8 or 0 to exit.".yellow()
            );
            continue;
        };

        let result = match choice {
            Choice::Spread(id) => super::reading::run(tarot, id, config, false),
            Choice::Daily => super::daily::run(tarot, None, config, false),
            Choice::Deck => super::deck::run(tarot),
            Choice::Guide => super::guide::run(),
            Choice::Exit => break,
        };
        if let Err(e) = result {
            println!("\n  {}", e.yellow());
        }

        print!("\n  {}", "Press Enter to return to the menu...".dimmed());
        io::stdout().flush().map_err(|e| e.to_string())?;
        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break;
        }
    }

    println!(
        "\n  {}\n",
        "✧ The cards will be here when you return. Farewell, seeker. ✧".magenta()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_exits() {
        assert_eq!(Choice::parse("1\n"), Some(Choice::Spread("single")));
        assert_eq!(Choice::parse(" 5 "), Some(Choice::Spread("celtic")));
        assert_eq!(Choice::parse("8"), Some(Choice::Guide));
        for exit in ["0", "q", "QUIT", "exit"] {
            assert_eq!(Choice::parse(exit), Some(Choice::Exit));
        }
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(Choice::parse("9"), None);
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("celtic"), None);
    }

    #[test]
    fn menu_spreads_exist() {
        for input in ["1", "2", "3", "4", "5"] {
            let Some(Choice::Spread(id)) = Choice::parse(input) else {
                panic!("{input} is not a spread");
            };
            assert!(tarot_core::spread::spread(id).is_ok());
        }
    }
}
