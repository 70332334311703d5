//! Omni-Genesis CLI
//!
//! Usage:
//!   omni-genesis --text "your text here"      # Single detection
//!   omni-genesis --interactive                # Detect line by line
//!   omni-genesis --chat                       # Chat with NaMo
//!   omni-genesis --batch texts.txt            # One text per line
//!   omni-genesis --balance 0.8 0.5            # Raw Golden Ratio balancing
//!   omni-genesis --analyze "text" --history   # Emotion/logic strategy
//!   omni-genesis --serve                      # HTTP API server
//!   omni-genesis --text "text" --json         # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use omni_genesis::config::Settings;
use omni_genesis::core::api::BalanceResponse;
use omni_genesis::core::{
    run_server, EmotionDetector, GoldenRatioAnalyzer, Lexicon, PersonalityConfig,
    PersonalityEngine,
};
use omni_genesis::types::{AnalysisContext, DetectionResult, EmotionProfiles, Idiom, Strategy};
use omni_genesis::{logging, OmniError, Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "omni-genesis",
    version = VERSION,
    about = "Omni-Genesis - Golden Ratio emotion/logic balancing engine",
    long_about = "Omni-Genesis detects the emotion in a text, turns it into an\n\
                  emotion score and a logic score, and balances them against\n\
                  the Golden Ratio (emotion ≈ 0.618, logic ≈ 0.382).\n\n\
                  Modes:\n  \
                  --text         Single detection\n  \
                  --interactive  Detect each line from stdin\n  \
                  --chat         Chat with the NaMo personality\n  \
                  --batch        Detect every line of a file\n  \
                  --balance      Balance two raw scores\n  \
                  --analyze      Emotion/logic scores and reply strategy\n  \
                  --serve        HTTP API server mode\n\n\
                  Balance:\n  \
                  balanced         - |balance_index| within the threshold\n  \
                  emotion-heavy    - suggest increasing logic\n  \
                  logic-heavy      - suggest increasing emotion"
)]
struct Args {
    /// Text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Chat with the NaMo personality
    #[arg(short, long)]
    chat: bool,

    /// Analyze every non-blank line of FILE
    #[arg(short, long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Balance raw emotion and logic scores
    #[arg(long, num_args = 2, value_names = ["EMOTION", "LOGIC"], allow_negative_numbers = true)]
    balance: Option<Vec<f64>>,

    /// Score TEXT for emotion and logic and pick a reply strategy
    #[arg(long, value_name = "TEXT")]
    analyze: Option<String>,

    /// Treat the analyzed text as part of an ongoing conversation
    #[arg(long, requires = "analyze")]
    history: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides OMNI_ADDR)
    #[arg(long)]
    addr: Option<String>,

    /// Golden Ratio constant (overrides OMNI_PHI)
    #[arg(long)]
    phi: Option<f64>,

    /// Balance threshold (overrides OMNI_BALANCE_THRESHOLD)
    #[arg(long)]
    threshold: Option<f64>,

    /// Chat sessions kept in server mode (overrides OMNI_MAX_SESSIONS)
    #[arg(long)]
    max_sessions: Option<usize>,

    /// Lexicon JSON file (overrides OMNI_LEXICON)
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show score breakdown and debug logs
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;
    logging::init(settings.log_json, if args.verbose { "debug" } else { "info" });
    let detector = build_detector(&settings)?;

    if args.serve {
        run_server(&settings, detector).await
    } else if let Some(scores) = &args.balance {
        run_balance(detector.analyzer(), scores[0], scores[1], &args)
    } else if let Some(text) = &args.analyze {
        run_analyze(&detector, text, &args)
    } else if let Some(path) = &args.batch {
        run_batch(&detector, path, &args)
    } else if args.chat {
        run_chat(&detector, &args)
    } else if let Some(text) = &args.text {
        run_single(&detector, text, &args)
    } else {
        // Default to interactive if no mode specified
        run_interactive(&detector, &args)
    }
}

/// Environment first, then command-line overrides
fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::from_env()?;
    if let Some(phi) = args.phi {
        settings.phi = phi;
    }
    if let Some(threshold) = args.threshold {
        settings.balance_threshold = threshold;
    }
    if let Some(addr) = &args.addr {
        settings.addr = addr.clone();
    }
    if let Some(path) = &args.lexicon {
        settings.lexicon_path = Some(path.clone());
    }
    if let Some(max_sessions) = args.max_sessions {
        if max_sessions == 0 {
            return Err(OmniError::Config("--max-sessions must be at least 1".to_string()));
        }
        settings.max_sessions = max_sessions;
    }
    Ok(settings)
}

fn build_detector(settings: &Settings) -> Result<EmotionDetector> {
    let analyzer = GoldenRatioAnalyzer::with_config(settings.phi, settings.balance_threshold)?;
    let lexicon = match &settings.lexicon_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading lexicon");
            Lexicon::load(path)?
        }
        None => Lexicon::thai(),
    };
    Ok(EmotionDetector::with_parts(&lexicon, analyzer, EmotionProfiles::standard()))
}

/// Run single text detection
fn run_single(detector: &EmotionDetector, text: &str, args: &Args) -> Result<()> {
    let result = detector.detect(text);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_detection(&result, &detector.detect_idioms(text), args);
    }
    Ok(())
}

/// Run detection over a file, one text per line
fn run_batch(detector: &EmotionDetector, path: &Path, args: &Args) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let texts: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let results = detector.detect_batch(&texts);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, (text, result)) in texts.iter().zip(&results).enumerate() {
        println!("{} {}", format!("[{}]", i + 1).dimmed(), text);
        print_detection(result, &detector.detect_idioms(text), args);
    }
    let balanced = results.iter().filter(|r| r.is_balanced()).count();
    println!();
    println!("{} texts, {} balanced", results.len(), balanced);
    Ok(())
}

/// Balance two raw scores
fn run_balance(analyzer: &GoldenRatioAnalyzer, emotion: f64, logic: f64, args: &Args) -> Result<()> {
    let response = BalanceResponse {
        result: analyzer.analyze(emotion, logic),
        adjustment: analyzer.suggest_adjustment(emotion, logic),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let r = &response.result;
    let status = if r.is_balanced {
        "balanced".green()
    } else {
        "unbalanced".yellow()
    };
    println!(
        "harmonic={:.6} | emotion={:.6} | logic={:.6} | balance={:+.6} {}",
        r.harmonic_score, r.emotion_component, r.logic_component, r.balance_index, status
    );
    println!(
        "adjust: {} ({:.4})",
        response.adjustment.direction, response.adjustment.magnitude
    );
    Ok(())
}

/// Emotion/logic analysis of one text
fn run_analyze(detector: &EmotionDetector, text: &str, args: &Args) -> Result<()> {
    let context = AnalysisContext {
        has_history: args.history,
    };
    let analysis = detector.analyze_text(text, context);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let strategy = match analysis.strategy {
        Strategy::EmotionDriven => analysis.strategy.to_string().magenta(),
        Strategy::LogicDriven => analysis.strategy.to_string().cyan(),
        Strategy::Balanced => analysis.strategy.to_string().green(),
    };
    println!(
        "emotion={:.4} | logic={:.4} | combined={:.4} | confidence={:.4} | {}",
        analysis.emotion, analysis.logic, analysis.combined, analysis.confidence, strategy
    );
    Ok(())
}

/// Interactive detection, one line at a time
fn run_interactive(detector: &EmotionDetector, args: &Args) -> Result<()> {
    print_header("Detect Mode");
    println!("Type text and press Enter to analyze. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut count = 0u64;

    loop {
        print!("{} ", ">".bold());
        stdout.flush()?;

        let Some(line) = read_line(&stdin)? else { break };
        let line = line.trim();
        if is_quit(line) {
            println!("\nSession ended. Texts analyzed: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        count += 1;
        let result = detector.detect(line);
        if args.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            print_detection(&result, &detector.detect_idioms(line), args);
        }
    }
    Ok(())
}

/// Chat with the personality engine
fn run_chat(detector: &EmotionDetector, args: &Args) -> Result<()> {
    let mut personality = PersonalityEngine::new(PersonalityConfig::default());

    print_header("Chat Mode");
    println!("{}", personality.greeting());
    println!("Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", "you >".bold());
        stdout.flush()?;

        let Some(line) = read_line(&stdin)? else { break };
        let line = line.trim();
        if is_quit(line) {
            println!("\nSession ended. Interactions: {}", personality.interaction_count());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let detection = detector.detect(line);
        let reply = personality.respond_to(line, &detection);

        if args.json {
            println!("{}", serde_json::to_string(&reply)?);
            continue;
        }

        println!("{} {}", format!("NaMo {}:", reply.emoji).magenta().bold(), reply.message);
        if args.verbose {
            println!("  {}", detection.to_terminal_string());
            println!("  {}", format!("mood={}", reply.mood).dimmed());
        }
    }
    Ok(())
}

/// `None` at end of input
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut line = String::new();
    match stdin.lock().read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

fn print_header(mode: &str) {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Omni-Genesis v{} - {}", VERSION, mode).bold());
    println!("{}", "========================================".bold());
    println!();
}

fn print_detection(result: &DetectionResult, idioms: &[Idiom], args: &Args) {
    if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }

    if !args.verbose {
        return;
    }

    println!("  {} {:?}", "keywords:".dimmed(), result.keywords_found);
    println!(
        "  {} emotion={:.4} logic={:.4}",
        "scores:".dimmed(),
        result.emotion_score,
        result.logic_score
    );
    println!(
        "  {} {} ({:.4})",
        "adjust:".dimmed(),
        result.adjustment.direction,
        result.adjustment.magnitude
    );
    println!(
        "  {} {} score={:.4} markers={:?}",
        "formality:".dimmed(),
        result.formality.level,
        result.formality.score,
        result.formality.markers_found
    );
    for idiom in idioms {
        println!("  {} {} ({})", "idiom:".dimmed(), idiom.idiom, idiom.meaning);
    }
}
