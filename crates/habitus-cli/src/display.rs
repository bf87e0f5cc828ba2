//! Card-style rendering of a prediction result.

use habitus_core::Profile;
use habitus_model::Prediction;

pub fn render(profile: &Profile, prediction: &Prediction) {
    println!();
    println!("── Obesity level prediction ──");
    println!(
        "  {:<12}{} y, {}, {:.2} m, {:.1} kg",
        "Profile", profile.age, profile.gender, profile.height, profile.weight
    );
    println!("  {:<12}{}", "Level", prediction.level);
    println!("  {:<12}{}", "Assessment", prediction.level.description());
    println!(
        "  {:<12}{:.0}% of trees",
        "Agreement",
        prediction.agreement * 100.0
    );
}
