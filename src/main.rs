mod ui;

use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;

use passmint::{generate_password, Alphabets, PasswordPolicy};

#[derive(Parser)]
#[command(
    name = "passmint",
    version,
    about = "Policy-constrained random password generator"
)]
struct Cli {
    /// Target password length (minimums win when they sum past it)
    #[arg(short, long, default_value_t = 10)]
    length: usize,

    /// Minimum number of lowercase characters
    #[arg(long, default_value_t = 1)]
    min_lower: usize,

    /// Minimum number of uppercase characters
    #[arg(long, default_value_t = 1)]
    min_upper: usize,

    /// Minimum number of digit characters
    #[arg(long, default_value_t = 1)]
    min_digits: usize,

    /// Minimum number of special characters
    #[arg(long, default_value_t = 1)]
    min_special: usize,

    /// Minimum number of distinct characters (0 disables the floor)
    #[arg(long, default_value_t = 1)]
    min_unique: usize,

    /// Characters excluded from every class
    #[arg(short = 'x', long, default_value = "")]
    exclude: String,

    /// Keep lowercase characters out of the padding pool
    #[arg(long)]
    no_lower: bool,

    /// Keep uppercase characters out of the padding pool
    #[arg(long)]
    no_upper: bool,

    /// Keep digits out of the padding pool
    #[arg(long)]
    no_digits: bool,

    /// Keep special characters out of the padding pool
    #[arg(long)]
    no_special: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print passwords only, one per line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let policy = PasswordPolicy {
        length: cli.length,
        allow_lowercase: !cli.no_lower,
        allow_uppercase: !cli.no_upper,
        allow_digits: !cli.no_digits,
        allow_special: !cli.no_special,
        min_lowercase: cli.min_lower,
        min_uppercase: cli.min_upper,
        min_digits: cli.min_digits,
        min_special: cli.min_special,
        min_unique_characters: cli.min_unique,
        excluded_characters: cli.exclude,
    };

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet || cli.count > 1,
    };

    let pool_size = Alphabets::build(&policy.excluded_characters)
        .pool(&policy)
        .len();

    let mut rng = OsRng;

    for _ in 0..cli.count {
        let password = generate_password(&policy, &mut rng)?;
        ui::display_output(&password, &policy, pool_size, &options);
    }

    Ok(())
}
