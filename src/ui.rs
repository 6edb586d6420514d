use console::Style;
use zeroize::Zeroizing;

use passmint::PasswordPolicy;

pub const MIN_SAFE_ENTROPY: f64 = 60.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub const MIN_SAFE_PASSWORD_LENGTH: usize = 12;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

/// Estimated brute-force entropy in bits: every position treated as a
/// uniform draw from the padding pool. Ignores the positional structure of
/// the leading seed characters, so it is an upper bound.
pub fn estimate_entropy(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn strength_verdict(entropy: f64) -> &'static str {
    if entropy >= PARANOID_ENTROPY {
        "Paranoid"
    } else if entropy >= MIN_SAFE_ENTROPY {
        "Strong"
    } else {
        "Weak"
    }
}

pub fn display_output(
    password: &Zeroizing<String>,
    policy: &PasswordPolicy,
    pool_size: usize,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", &**password);
        return;
    }

    println!("Out[0]:\n{}\n", &**password);

    display_settings(policy, pool_size, options);
    display_stats(password.chars().count(), pool_size, options);
}

fn display_settings(policy: &PasswordPolicy, pool_size: usize, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let all_minimums_set = policy.min_lowercase > 0
        && policy.min_uppercase > 0
        && policy.min_digits > 0
        && policy.min_special > 0;

    let minimums_style = styled(options, all_minimums_set);
    let minimums_status = if all_minimums_set { check_ok } else { check_warn };

    println!("Settings:");

    println!(
        "  ├─ Minimums   {} {} lower / {} upper / {} digit / {} special",
        minimums_style.apply_to(format!("[{}]", minimums_status)),
        minimums_style.apply_to(policy.min_lowercase),
        minimums_style.apply_to(policy.min_uppercase),
        minimums_style.apply_to(policy.min_digits),
        minimums_style.apply_to(policy.min_special)
    );

    if policy.min_unique_characters > 0 {
        println!(
            "  ├─ Unique     {} distinct {}",
            policy.min_unique_characters,
            if policy.min_unique_characters == 1 {
                "char"
            } else {
                "chars"
            }
        );
    }

    if !policy.excluded_characters.is_empty() {
        println!(
            "  ├─ Excluded   {} {}",
            policy.excluded_characters.chars().count(),
            if policy.excluded_characters.chars().count() == 1 {
                "char"
            } else {
                "chars"
            }
        );
    }

    println!("  ├─ Pool       {} chars", pool_size);
    println!("  └─ Sampling   Uniform over remaining candidates");

    println!();
}

fn display_stats(length: usize, pool_size: usize, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let entropy = estimate_entropy(length, pool_size);
    let verdict = strength_verdict(entropy);

    let entropy_secure = entropy >= MIN_SAFE_ENTROPY;
    let entropy_style = styled(options, entropy_secure);
    let entropy_status = if entropy_secure { check_ok } else { check_warn };

    let length_secure = length >= MIN_SAFE_PASSWORD_LENGTH;
    let length_style = styled(options, length_secure);
    let length_status = if length_secure { check_ok } else { check_warn };

    println!("Stats:");

    println!(
        "  ├─ Entropy    {} {} bits ({})",
        entropy_style.apply_to(format!("[{}]", entropy_status)),
        entropy_style.apply_to(format!("{:.1}", entropy)),
        entropy_style.apply_to(verdict)
    );

    println!(
        "  └─ Length     {} {} {}",
        length_style.apply_to(format!("[{}]", length_status)),
        length_style.apply_to(length),
        if length == 1 { "char" } else { "chars" }
    );

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", entropy_status)),
        entropy_style.apply_to(verdict)
    );
}

fn styled(options: &DisplayOptions, secure: bool) -> Style {
    if options.color_support {
        if secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    }
}
