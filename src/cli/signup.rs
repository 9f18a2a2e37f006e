//! Sign-up CLI command
//!
//! Drives a [`StepFormEngine`] from line-based terminal input. Each step is
//! one prompt, the date-of-birth step asks for month, day and year in turn.
//! Typing `back` moves to the previous step (or leaves from the first one).

use std::io::{self, BufRead, Write};

use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use zeroize::Zeroizing;

use crate::audit::AuditLogger;
use crate::backend::Backend;
use crate::config::Settings;
use crate::display::{
    format_choices, format_input_label, format_profile_details, format_step_error,
    format_step_footer, format_step_header,
};
use crate::error::{ShopError, ShopResult};
use crate::services::SignupService;
use crate::signup::{
    AdvanceOutcome, DobPolicy, Field, RetreatOutcome, SignupSeed, StepFormEngine, GENDERS,
};
use crate::validation::{
    get_password_strength, picker_years, validate_password, MONTHS, PICKER_DAYS,
};

/// Arguments for `shopfront signup`
#[derive(Args)]
pub struct SignupArgs {
    /// Email to pre-fill on the email step
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password for the new account (prompted for when absent)
    #[arg(long, env = "SHOPFRONT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Require the date of birth to be a real, past calendar date
    #[arg(long)]
    pub strict_dob: bool,
}

/// How an interactive run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEnd {
    /// The last step passed
    Complete,
    /// The user backed out of the first step or input ended
    Left,
}

/// Handle `shopfront signup`
pub fn handle_signup_command<B: Backend + ?Sized>(
    backend: &B,
    settings: &Settings,
    audit: Option<&AuditLogger>,
    args: SignupArgs,
) -> ShopResult<()> {
    let password = match args.password {
        Some(password) => {
            let password = Zeroizing::new(password);
            if !validate_password(&password) {
                return Err(ShopError::Validation(PASSWORD_RULES.into()));
            }
            password
        }
        None => prompt_new_password()?,
    };

    let seed = SignupSeed {
        email: args.email,
        password: Some(password),
    };
    let policy = if args.strict_dob || settings.strict_date_of_birth {
        DobPolicy::Calendar
    } else {
        DobPolicy::PresenceOnly
    };
    let mut engine = StepFormEngine::signup(seed).with_dob_policy(policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = run_steps(
        &mut engine,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &settings.country_code,
    )?;

    if end == FlowEnd::Left {
        println!("Sign-up cancelled.");
        return Ok(());
    }

    let mut service = SignupService::new(backend);
    if let Some(logger) = audit {
        service = service.with_audit(logger);
    }
    let profile = service.complete(&engine)?;

    println!();
    println!("Account created.");
    print!("{}", format_profile_details(&profile));
    println!();
    println!(
        "Continue to Login: shopfront signin --email {}",
        profile.email
    );

    Ok(())
}

const PASSWORD_RULES: &str = "Password must be at least 8 characters, include a symbol \
                              and use only letters, digits and symbols";

/// Prompt for a new password with confirmation
fn prompt_new_password() -> ShopResult<Zeroizing<String>> {
    loop {
        let first = prompt_password("Password: ")?;
        println!("Strength: {}", get_password_strength(&first));

        if !validate_password(&first) {
            println!("{}. Please try again.", PASSWORD_RULES);
            continue;
        }

        let second = prompt_password("Confirm password: ")?;
        if *first != *second {
            println!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

/// Prompt for a password (hidden input)
pub(crate) fn prompt_password(prompt: &str) -> ShopResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| ShopError::Io(format!("Failed to read password: {}", e)))
}

/// Run the steps of `engine` against `input` until completion or exit
pub fn run_steps<R: BufRead, W: Write>(
    engine: &mut StepFormEngine,
    input: &mut R,
    output: &mut W,
    country_code: &str,
) -> ShopResult<FlowEnd> {
    loop {
        let snapshot = engine.snapshot();
        writeln!(output)?;
        writeln!(output, "{}", format_step_header(&snapshot))?;
        writeln!(output, "{}", format_step_footer(&snapshot))?;
        if let Some(error) = format_step_error(&snapshot) {
            writeln!(output, "{}", error)?;
        }

        let fields: &[Field] = if snapshot.step.field == Field::DateOfBirth {
            &[Field::Month, Field::Day, Field::Year]
        } else {
            std::slice::from_ref(&snapshot.step.field)
        };

        let mut back = false;
        for &field in fields {
            match read_field(engine, field, input, output, country_code)? {
                Entry::Value => {}
                Entry::Back => {
                    back = true;
                    break;
                }
                Entry::Eof => return Ok(FlowEnd::Left),
            }
        }

        if back {
            if engine.retreat() == RetreatOutcome::ExitRequested {
                return Ok(FlowEnd::Left);
            }
            continue;
        }

        if engine.advance() == AdvanceOutcome::Complete {
            return Ok(FlowEnd::Complete);
        }
    }
}

enum Entry {
    Value,
    Back,
    Eof,
}

/// Prompt for one field until a usable answer arrives
///
/// An empty answer keeps the current value; on picker fields with no value
/// yet it lists the choices instead.
fn read_field<R: BufRead, W: Write>(
    engine: &mut StepFormEngine,
    field: Field,
    input: &mut R,
    output: &mut W,
    country_code: &str,
) -> ShopResult<Entry> {
    loop {
        let snapshot = engine.snapshot();
        write!(output, "{}", format_input_label(&snapshot, field, country_code))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Entry::Eof);
        }
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("back") {
            return Ok(Entry::Back);
        }

        if answer.is_empty() {
            if snapshot.values.get(field).is_empty() {
                if let Some(choices) = format_choices(field) {
                    writeln!(output, "{}", choices)?;
                    continue;
                }
            }
            return Ok(Entry::Value);
        }

        match pick(field, answer, Local::now().year()) {
            Some(value) => {
                engine.update_field(field, value);
                return Ok(Entry::Value);
            }
            None => {
                if let Some(choices) = format_choices(field) {
                    writeln!(output, "{}", choices)?;
                }
            }
        }
    }
}

/// Map typed text onto a picker option; free-text fields pass through
///
/// Day and year must fall inside the picker's ranges and are stored in
/// canonical form, so "07" becomes "7".
fn pick(field: Field, answer: &str, current_year: i32) -> Option<String> {
    let from = |options: &[&str]| {
        options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(answer))
            .map(|o| o.to_string())
    };

    match field {
        Field::Gender => from(&GENDERS[..]),
        Field::Month => from(&MONTHS[..]),
        Field::Day => answer
            .parse::<u32>()
            .ok()
            .filter(|day| PICKER_DAYS.contains(day))
            .map(|day| day.to_string()),
        Field::Year => {
            let years = picker_years(NaiveDate::from_ymd_opt(current_year, 1, 1)?);
            answer
                .parse::<i32>()
                .ok()
                .filter(|year| years.contains(year))
                .map(|year| year.to_string())
        }
        _ => Some(answer.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(engine: &mut StepFormEngine, script: &str) -> (FlowEnd, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let end = run_steps(engine, &mut input, &mut output, "+92").unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    fn seeded() -> StepFormEngine {
        StepFormEngine::signup(SignupSeed::new("ada@example.com", "Abc123!@"))
    }

    #[test]
    fn test_full_run_completes() {
        let mut engine = seeded();
        let script = "Ada\n\n5551234567\nLahore\nfemale\ndec\n10\n1985\n";
        let (end, output) = run(&mut engine, script);

        assert_eq!(end, FlowEnd::Complete);
        assert!(output.contains("Step 6 of 6: Date Of Birth"));
        assert!(output.contains("(+92) Phone: "));
        let form = engine.form_state();
        assert_eq!(form.get(Field::Gender), "Female");
        assert_eq!(form.get(Field::Month), "Dec");
        assert_eq!(form.get(Field::Email), "ada@example.com");
    }

    #[test]
    fn test_blocked_step_shows_error_and_reprompts() {
        let mut engine = seeded();
        let (end, output) = run(&mut engine, "\nAda\n");

        assert_eq!(end, FlowEnd::Left);
        assert!(output.contains("! Name is required"));
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn test_back_on_first_step_leaves() {
        let mut engine = seeded();
        let (end, _) = run(&mut engine, "back\n");
        assert_eq!(end, FlowEnd::Left);
    }

    #[test]
    fn test_back_moves_to_previous_step() {
        let mut engine = seeded();
        let (end, _) = run(&mut engine, "Ada\nback\nAda Lovelace\n");

        assert_eq!(end, FlowEnd::Left);
        assert_eq!(engine.form_state().get(Field::Name), "Ada Lovelace");
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn test_empty_gender_lists_choices() {
        let mut engine = seeded();
        let (_, output) = run(&mut engine, "Ada\n\n5551234567\nLahore\n\nother\nMale\n");

        assert!(output.contains("Choices: Male, Female"));
        assert_eq!(engine.form_state().get(Field::Gender), "Male");
        assert_eq!(engine.cursor(), 5);
    }

    #[test]
    fn test_strict_policy_rejects_impossible_date() {
        let mut engine = seeded().with_dob_policy(DobPolicy::Calendar);
        let script = "Ada\n\n5551234567\nLahore\nMale\nFeb\n30\n1990\n";
        let (end, output) = run(&mut engine, script);

        assert_eq!(end, FlowEnd::Left);
        assert!(output.contains("! Please enter a valid date of birth"));
    }

    #[test]
    fn test_out_of_range_day_and_year_reprompt() {
        let mut engine = seeded();
        let script = "Ada\n\n5551234567\nLahore\nMale\nFeb\n0\n10\n1800\n0000099\n1990\n";
        let (end, output) = run(&mut engine, script);

        assert_eq!(end, FlowEnd::Complete);
        assert!(output.contains("Choices: 1-31"));
        let this_year = Local::now().year();
        assert!(output.contains(&format!("Choices: {}-{}", this_year - 99, this_year)));
        let form = engine.form_state();
        assert_eq!(form.get(Field::Day), "10");
        assert_eq!(form.get(Field::Year), "1990");
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick(Field::Month, "sept", 2024).as_deref(), Some("Sept"));
        assert_eq!(pick(Field::Month, "September", 2024), None);
        assert_eq!(pick(Field::Day, "1x", 2024), None);
        assert_eq!(pick(Field::Day, "07", 2024).as_deref(), Some("7"));
        assert_eq!(pick(Field::Day, "32", 2024), None);
        assert_eq!(pick(Field::Year, "1925", 2024).as_deref(), Some("1925"));
        assert_eq!(pick(Field::Year, "1924", 2024), None);
        assert_eq!(pick(Field::Year, "2025", 2024), None);
        assert_eq!(pick(Field::City, "Karachi", 2024).as_deref(), Some("Karachi"));
    }
}
