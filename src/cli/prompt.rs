//! Interactive profile and college prompts.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - these prompts provide the "run `admit` and answer questions" UX
//!
//! Every prompt re-asks on invalid input rather than failing the run; the only
//! hard errors are I/O failures and a closed stdin.

use std::io::{self, Write};

use crate::domain::{StudentProfile, TestChoice};
use crate::error::AppError;

/// Preset colleges offered by the picker menu.
const PRESET_COLLEGES: [&str; 4] = [
    "Stanford University",
    "University of Minnesota Twin Cities",
    "University of Southern California",
    "University of Wisconsin Madison",
];

/// Collect the full student profile from stdin.
///
/// Prompt order:
/// - GPA
/// - test choice (SAT / ACT / both), then the claimed score(s)
/// - extracurricular counts (activities, leadership, awards)
///
/// The derived extracurricular score is echoed back before returning.
pub fn collect_profile() -> Result<StudentProfile, AppError> {
    let gpa = prompt_f64("Enter your GPA: ")?;

    let test_choice = choose_test_type()?;

    let sat_score = if test_choice.includes_sat() {
        Some(prompt_u32("Enter your SAT score: ")?)
    } else {
        None
    };
    let act_score = if test_choice.includes_act() {
        Some(prompt_u32("Enter your ACT score: ")?)
    } else {
        None
    };

    let activities = prompt_u32("Number of extracurricular activities: ")?;
    let leadership = prompt_u32("Leadership positions held: ")?;
    let awards = prompt_u32("Awards received: ")?;

    let profile = StudentProfile {
        gpa,
        test_choice,
        sat_score,
        act_score,
        activities,
        leadership,
        awards,
    };
    println!("Extracurricular score: {}", profile.extracurricular_score());

    Ok(profile)
}

fn choose_test_type() -> Result<TestChoice, AppError> {
    println!("\nWhich test score(s) do you have?");
    println!("1) SAT only");
    println!("2) ACT only");
    println!("3) Both SAT and ACT");

    loop {
        let input = read_trimmed("Enter choice: ")?;
        match input.as_str() {
            "1" => return Ok(TestChoice::SatOnly),
            "2" => return Ok(TestChoice::ActOnly),
            "3" => return Ok(TestChoice::Both),
            other => println!("Invalid choice: {other}. Enter 1, 2, or 3."),
        }
    }
}

/// Prompt the user to pick a college.
///
/// Behavior:
/// - list the preset colleges plus an "enter a different college" slot
/// - accept either a number (from the list) or a school name typed directly
/// - any number outside the preset list falls through to the free-form prompt
pub fn choose_college() -> Result<String, AppError> {
    println!("\nChoose a college:");
    for (idx, school) in PRESET_COLLEGES.iter().enumerate() {
        println!("{}) {school}", idx + 1);
    }
    println!("{}) Enter a different college", PRESET_COLLEGES.len() + 1);

    loop {
        let input = read_trimmed("\nEnter choice: ")?;
        if input.is_empty() {
            continue;
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=PRESET_COLLEGES.len()).contains(&choice) {
                return Ok(PRESET_COLLEGES[choice - 1].to_string());
            }
            let name = read_trimmed("Enter the college name: ")?;
            if name.is_empty() {
                continue;
            }
            return Ok(name);
        }

        // Not a number: treat the input itself as the school name.
        return Ok(input);
    }
}

fn prompt_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let input = read_trimmed(prompt)?;
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("Please enter a number (got: {input})."),
        }
    }
}

fn prompt_u32(prompt: &str) -> Result<u32, AppError> {
    loop {
        let input = read_trimmed(prompt)?;
        match input.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a whole number (got: {input})."),
        }
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn read_trimmed(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Err(AppError::new(2, "No input received (stdin closed)."));
    }

    Ok(input.trim().to_string())
}
