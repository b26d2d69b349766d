use clap::Parser;
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(about = "Credit-card default risk scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Client's gross annual salary, e.g. 50000
    #[arg(long)]
    annual_income: f64,

    /// Average credit-card interest rate, in percent
    #[arg(long)]
    interest_rate: f64,

    /// Days the client's invoice is overdue
    #[arg(long)]
    delay_from_due_date: f64,

    /// How many times the client's credit limit was changed
    #[arg(long)]
    changed_credit_limit: f64,

    /// Credit inquiries over the last months
    #[arg(long)]
    num_credit_inquiries: f64,

    /// Credit mix quality: 1 = good, 0 = bad
    #[arg(long)]
    credit_mix: f64,

    /// Total debt (principal plus interest) not yet paid
    #[arg(long)]
    outstanding_debt: f64,

    /// Pays only the minimum invoice amount: 1 = yes, 0 = no
    #[arg(long)]
    payment_of_min_amount: f64,

    /// Show the per-attribute breakdown
    #[arg(short, long)]
    verbose: bool,

    /// Path to a scorecard file (defaults to ~/.config/scorecard/scorecard.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Output one tab-separated line for scripting
    #[arg(long, conflicts_with = "json")]
    tsv: bool,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    // Input range checks live here, not in the core: the scoring tables are
    // total over the real line, so the core would happily bin nonsense.
    let amounts = [
        ("--annual-income", cli.annual_income),
        ("--interest-rate", cli.interest_rate),
        ("--delay-from-due-date", cli.delay_from_due_date),
        ("--changed-credit-limit", cli.changed_credit_limit),
        ("--num-credit-inquiries", cli.num_credit_inquiries),
        ("--outstanding-debt", cli.outstanding_debt),
    ];
    for (flag, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            eprintln!("{} must be a non-negative number, got {}", flag, value);
            std::process::exit(EXIT_USAGE);
        }
    }
    let flags = [
        ("--credit-mix", cli.credit_mix),
        ("--payment-of-min-amount", cli.payment_of_min_amount),
    ];
    for (flag, value) in flags {
        if value != 0.0 && value != 1.0 {
            eprintln!("{} must be 0 or 1, got {}", flag, value);
            std::process::exit(EXIT_USAGE);
        }
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match scorecard::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the effective scorecard at startup
    let effective_scorecard = config.scorecard.unwrap_or_default();
    if let Err(errors) = scorecard::scoring::validate_scoring(&effective_scorecard) {
        eprintln!("Scorecard errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Scorecard: {} bands, intercept {:+}",
            effective_scorecard.bands.bands.len(),
            effective_scorecard.intercept
        );
    }

    let applicant = scorecard::applicant::Applicant {
        annual_income: cli.annual_income,
        interest_rate: cli.interest_rate,
        delay_from_due_date: cli.delay_from_due_date,
        changed_credit_limit: cli.changed_credit_limit,
        num_credit_inquiries: cli.num_credit_inquiries,
        credit_mix: cli.credit_mix,
        outstanding_debt: cli.outstanding_debt,
        payment_of_min_amount: cli.payment_of_min_amount,
    };

    let result = scorecard::scoring::calculate_score(&applicant, &effective_scorecard);

    if cli.json {
        println!("{}", scorecard::output::format_json(&result));
    } else if cli.tsv {
        println!("{}", scorecard::output::format_tsv(&result));
    } else {
        let use_colors = scorecard::output::should_use_colors();
        if cli.verbose {
            println!("{}", scorecard::output::format_breakdown(&result, use_colors));
        }
        println!("{}", scorecard::output::format_verdict(&result, use_colors));
    }

    std::process::exit(EXIT_SUCCESS);
}
