//! Obesity-level prediction from survey answers.
//!
//! One flag per survey question, defaulting to the reference form's answers;
//! the artifact directory must hold `scaler.json` and `classifier.json`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use habitus_core::{Frequency, Gender, Profile, Transport, YesNo};

mod display;

#[derive(Parser)]
#[command(name = "habitus", version, about = "Predict an obesity level from lifestyle survey answers")]
struct Args {
    /// Directory containing scaler.json and classifier.json.
    #[arg(long, default_value = "models", env = "HABITUS_MODEL_DIR")]
    model_dir: PathBuf,

    /// Age in years (0–100).
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=100))]
    age: u32,

    /// Gender: Male or Female.
    #[arg(long, default_value = "Male")]
    gender: Gender,

    /// Height in metres (1.0–2.5).
    #[arg(long, default_value_t = 1.70)]
    height: f64,

    /// Weight in kilograms (1–200).
    #[arg(long, default_value_t = 60.0)]
    weight: f64,

    /// Alcohol consumption: no, Sometimes, Frequently, Always.
    #[arg(long, default_value = "no")]
    alcohol: Frequency,

    /// Frequent high-calorie food: yes or no.
    #[arg(long, default_value = "no")]
    high_calorie_food: YesNo,

    /// Vegetable frequency per meal (1–3).
    #[arg(long, default_value_t = 2.0)]
    vegetables: f64,

    /// Main meals per day (1–4).
    #[arg(long, default_value_t = 3.0)]
    meals: f64,

    /// Monitors calorie intake: yes or no.
    #[arg(long, default_value = "no")]
    monitors_calories: YesNo,

    /// Smokes: yes or no.
    #[arg(long, default_value = "no")]
    smokes: YesNo,

    /// Water intake in litres per day (1–3).
    #[arg(long, default_value_t = 2.0)]
    water: f64,

    /// Family history of overweight: yes or no.
    #[arg(long, default_value = "no")]
    family_history: YesNo,

    /// Physical activity in hours per week (0–3).
    #[arg(long, default_value_t = 1.0)]
    activity: f64,

    /// Screen time in hours per day (0–2).
    #[arg(long, default_value_t = 1.0)]
    screen_time: f64,

    /// Snacking between meals: no, Sometimes, Frequently, Always.
    #[arg(long, default_value = "Sometimes")]
    snacking: Frequency,

    /// Usual transport: Public_Transportation, Walking, Automobile, Motorbike, Bike.
    #[arg(long, default_value = "Public_Transportation")]
    transport: Transport,
}

impl Args {
    fn profile(&self) -> Profile {
        Profile {
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
            alcohol: self.alcohol,
            high_calorie_food: self.high_calorie_food,
            vegetable_freq: self.vegetables,
            meals_per_day: self.meals,
            monitors_calories: self.monitors_calories,
            smokes: self.smokes,
            water_intake: self.water,
            family_history: self.family_history,
            physical_activity: self.activity,
            screen_time: self.screen_time,
            snacking: self.snacking,
            transport: self.transport,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("habitus v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let profile = args.profile();
    profile.validate()?;

    let artifacts =
        habitus_model::load_cached(&args.model_dir).context("prediction unavailable")?;
    let prediction = habitus_model::predict(&profile, &artifacts)?;

    display::render(&profile, &prediction);
    Ok(())
}
