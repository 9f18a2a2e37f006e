//! Sign-up display formatting
//!
//! Renders [`FormSnapshot`]s as terminal prompts and stored profiles as
//! detail views.

use chrono::Local;

use crate::models::UserProfile;
use crate::signup::{Field, FormSnapshot, GENDERS};
use crate::validation::{picker_years, MONTHS, PICKER_DAYS};

/// Heading line for the current step, e.g. "Step 2 of 6: Enter Your Email"
pub fn format_step_header(snapshot: &FormSnapshot) -> String {
    format!(
        "Step {} of {}: {}",
        snapshot.cursor + 1,
        snapshot.step_count,
        snapshot.step.title
    )
}

/// Input label for one field of the current step
///
/// The phone field carries the country code in front, as the mobile form
/// does. A value already entered is shown in brackets.
pub fn format_input_label(snapshot: &FormSnapshot, field: Field, country_code: &str) -> String {
    let label = match field {
        Field::Month => "Month",
        Field::Day => "Day",
        Field::Year => "Year",
        _ => snapshot.step.placeholder,
    };

    let mut output = if field == Field::PhoneNumber {
        format!("({}) {}", country_code, label)
    } else {
        label.to_string()
    };

    let current = snapshot.values.get(field);
    if !current.is_empty() {
        output.push_str(&format!(" [{}]", current));
    }
    output.push_str(": ");
    output
}

/// The message recorded for the current step, if any
pub fn format_step_error(snapshot: &FormSnapshot) -> Option<String> {
    snapshot
        .errors
        .get(snapshot.step.field)
        .map(|message| format!("  ! {}", message))
}

/// Allowed values for picker fields
pub fn format_choices(field: Field) -> Option<String> {
    match field {
        Field::Gender => Some(format!("Choices: {}", GENDERS.join(", "))),
        Field::Month => Some(format!("Choices: {}", MONTHS.join(", "))),
        Field::Day => Some(format!(
            "Choices: {}-{}",
            PICKER_DAYS.start(),
            PICKER_DAYS.end()
        )),
        Field::Year => {
            let years = picker_years(Local::now().date_naive());
            Some(format!("Choices: {}-{}", years.start(), years.end()))
        }
        _ => None,
    }
}

/// Footer showing what "next" and "back" do on this step
pub fn format_step_footer(snapshot: &FormSnapshot) -> String {
    let back = if snapshot.is_first {
        "'back' to leave"
    } else {
        "'back' for the previous step"
    };
    format!("[Enter] {}  |  {}", snapshot.continue_label, back)
}

/// Format a profile for detailed display
pub fn format_profile_details(profile: &UserProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name:          {}\n", profile.name));
    output.push_str(&format!("Email:         {}\n", profile.email));
    output.push_str(&format!("Phone:         {}\n", profile.phone_number));
    output.push_str(&format!("City:          {}\n", profile.city));
    output.push_str(&format!("Gender:        {}\n", profile.gender));
    output.push_str(&format!("Date of birth: {}\n", profile.date_of_birth));
    output.push_str(&format!("ID:            {}\n", profile.id));
    output.push_str(&format!(
        "Member since:  {}\n",
        profile.created_at.format("%Y-%m-%d")
    ));

    output
}
